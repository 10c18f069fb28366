use adw::Application;
use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("roomchat.toml"))
    }

    /// Read the config file if there is one; anything unreadable or
    /// malformed falls back to the defaults.
    pub fn load() -> Self {
        if let Some(path) = Self::path() {
            if let Ok(text) = fs::read_to_string(&path) {
                match toml::from_str::<Config>(&text) {
                    Ok(config) => return config,
                    Err(err) => log::warn!("Ignoring malformed {}: {err}", path.display()),
                }
            }
        }
        Self::default()
    }
}

pub fn build_ui(app: &Application) {
    let config = Config::load();
    crate::ui::main_window::show_main_window(app, &config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_base_url() {
        let config: Config = toml::from_str("").expect("empty toml");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_is_read_from_toml() {
        let config: Config =
            toml::from_str(r#"base_url = "http://chat.example:8080""#).expect("toml");
        assert_eq!(config.base_url, "http://chat.example:8080");
    }
}

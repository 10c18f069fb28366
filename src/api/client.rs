use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::models::{Message, Room, User};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<T>().await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("GET /users");
        let resp = Self::json_headers(self.http.get(self.url("/users")))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_user_rooms(&self, user_id: &str) -> Result<Vec<Room>, ApiError> {
        debug!("GET /users/{user_id}/rooms");
        let resp = Self::json_headers(self.http.get(self.url(&format!("/users/{user_id}/rooms"))))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_room_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError> {
        debug!("GET /rooms/{room_id}/messages");
        let resp =
            Self::json_headers(self.http.get(self.url(&format!("/rooms/{room_id}/messages"))))
                .send()
                .await?;
        Self::decode(resp).await
    }

    /// Post a message and return the server's copy of it, including the
    /// server-assigned timestamp.
    pub async fn post_message(
        &self,
        room_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<Message, ApiError> {
        debug!("POST /rooms/{room_id}/messages");
        let body = serde_json::json!({
            "sender": sender_id,
            "text": text,
        });
        let resp =
            Self::json_headers(self.http.post(self.url(&format!("/rooms/{room_id}/messages"))))
                .json(&body)
                .send()
                .await?;
        Self::decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_on_base_url_is_dropped() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/users"), "http://localhost:3000/users");
    }

    #[test]
    fn endpoint_paths_embed_ids() {
        let client = ApiClient::new("http://localhost:3000");
        assert_eq!(
            client.url(&format!("/users/{}/rooms", "u1")),
            "http://localhost:3000/users/u1/rooms"
        );
        assert_eq!(
            client.url(&format!("/rooms/{}/messages", "r1")),
            "http://localhost:3000/rooms/r1/messages"
        );
    }
}

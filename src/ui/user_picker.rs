use gtk4 as gtk;
use gtk4::prelude::*;
use std::rc::Rc;

use crate::api::models::User;
use crate::session::SessionActions;

pub const PLACEHOLDER: &str = "Select a User";

pub struct UserPicker {
    dropdown: gtk::DropDown,
}

impl UserPicker {
    pub fn new() -> Self {
        let dropdown = gtk::DropDown::from_strings(&[PLACEHOLDER]);
        Self { dropdown }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.dropdown.clone().upcast()
    }

    /// Populate the dropdown and hook up selection. Called once, with the
    /// user list fetched at startup.
    pub fn set_users(&self, users: Vec<User>, actions: Rc<dyn SessionActions>) {
        let mut entries = vec![PLACEHOLDER.to_string()];
        entries.extend(users.iter().map(|u| u.full_name.clone()));
        let strings: Vec<&str> = entries.iter().map(|s| s.as_str()).collect();
        self.dropdown.set_model(Some(&gtk::StringList::new(&strings)));
        self.dropdown.set_selected(0);

        self.dropdown.connect_selected_notify(move |dropdown| {
            let selected = dropdown.selected();
            // position 0 is the placeholder
            let user = if selected == gtk::INVALID_LIST_POSITION || selected == 0 {
                None
            } else {
                users.get(selected as usize - 1).cloned()
            };
            actions.user_selected(user);
        });
    }

    pub fn reset(&self) {
        self.dropdown.set_selected(0);
    }
}

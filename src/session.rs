use crate::api::models::User;

/// What the UI shell should do after a transition. The session itself never
/// touches widgets or the network; the controller executes these.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowBanner(User),
    ClearBanner,
    ClearRooms,
    ClearMessages,
    HideComposer,
    ResetPicker,
    FetchRooms { user_id: String },
    FetchMessages { room_id: String },
    PostMessage {
        room_id: String,
        sender_id: String,
        text: String,
    },
}

/// Interaction callbacks the renderers are wired to.
pub trait SessionActions {
    fn user_selected(&self, user: Option<User>);
    fn room_selected(&self, room_id: &str);
    fn send_requested(&self, text: &str);
}

/// The logged-in user and their currently open room, if any.
///
/// `current_room_id` is only ever `Some` while `current_user` is; logging
/// out clears both.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
    current_room_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_room_id(&self) -> Option<&str> {
        self.current_room_id.as_deref()
    }

    /// Handle a picker change. A prior login is torn down first, so picking
    /// the same user again is a full logout/login cycle. `None` is the
    /// placeholder entry: stay logged out, fetch nothing.
    pub fn select_user(&mut self, user: Option<User>) -> Vec<Effect> {
        let mut effects = if self.current_user.is_some() {
            self.clear_session()
        } else {
            Vec::new()
        };
        let Some(user) = user else {
            return effects;
        };
        effects.push(Effect::ShowBanner(user.clone()));
        effects.push(Effect::FetchRooms {
            user_id: user.id.clone(),
        });
        self.current_user = Some(user);
        effects
    }

    /// Valid from any state; from logged-out it just re-clears empty views.
    pub fn log_out(&mut self) -> Vec<Effect> {
        let mut effects = self.clear_session();
        effects.push(Effect::ResetPicker);
        effects
    }

    pub fn select_room(&mut self, room_id: &str) -> Vec<Effect> {
        // Not reachable through the UI while logged out.
        if self.current_user.is_none() {
            return Vec::new();
        }
        self.current_room_id = Some(room_id.to_string());
        vec![
            Effect::ClearMessages,
            Effect::FetchMessages {
                room_id: room_id.to_string(),
            },
        ]
    }

    /// Empty text posts nothing. Otherwise exactly one POST; the reply gets
    /// appended by the shell, never re-fetched.
    pub fn send(&self, text: &str) -> Vec<Effect> {
        if text.is_empty() {
            return Vec::new();
        }
        match (&self.current_user, &self.current_room_id) {
            (Some(user), Some(room_id)) => vec![Effect::PostMessage {
                room_id: room_id.clone(),
                sender_id: user.id.clone(),
                text: text.to_string(),
            }],
            _ => Vec::new(),
        }
    }

    fn clear_session(&mut self) -> Vec<Effect> {
        self.current_user = None;
        self.current_room_id = None;
        vec![
            Effect::ClearBanner,
            Effect::ClearRooms,
            Effect::ClearMessages,
            Effect::HideComposer,
        ]
    }
}

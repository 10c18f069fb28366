pub mod chat_view;
pub mod main_window;
pub mod room_list;
pub mod user_picker;

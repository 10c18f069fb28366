use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::client::ApiClient;
use crate::api::models::User;
use crate::app::Config;
use crate::session::{Effect, Session, SessionActions};
use crate::ui::chat_view::ChatView;
use crate::ui::room_list::RoomList;
use crate::ui::user_picker::UserPicker;
use crate::utils::run_async_to_main;

struct Views {
    picker: UserPicker,
    banner: gtk::Label,
    logout_btn: gtk::Button,
    rooms: Rc<RoomList>,
    chat: Rc<ChatView>,
}

/// Owns the session state and the mounted view handles, executes the
/// effects the session transitions hand back.
pub struct SessionController {
    session: RefCell<Session>,
    client: ApiClient,
    views: Views,
}

impl SessionController {
    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowBanner(user) => {
                    self.views.banner.set_text(&user.full_name);
                    self.views.logout_btn.set_visible(true);
                }
                Effect::ClearBanner => {
                    self.views.banner.set_text("");
                    self.views.logout_btn.set_visible(false);
                }
                Effect::ClearRooms => self.views.rooms.clear(),
                Effect::ClearMessages => self.views.chat.clear_messages(),
                Effect::HideComposer => self.views.chat.set_composer_visible(false),
                Effect::ResetPicker => self.views.picker.reset(),
                Effect::FetchRooms { user_id } => self.fetch_rooms(user_id),
                Effect::FetchMessages { room_id } => self.fetch_messages(room_id),
                Effect::PostMessage {
                    room_id,
                    sender_id,
                    text,
                } => self.post_message(room_id, sender_id, text),
            }
        }
    }

    fn log_out(&self) {
        {
            let session = self.session.borrow();
            if let Some(user) = session.current_user() {
                info!("Logging {} out", user.full_name);
            }
        }
        let effects = self.session.borrow_mut().log_out();
        self.apply(effects);
    }

    fn fetch_rooms(&self, user_id: String) {
        info!("GET rooms for user {user_id}");
        let client = self.client.clone();
        let rooms = Rc::clone(&self.views.rooms);
        let rx = run_async_to_main(async move { client.list_user_rooms(&user_id).await });
        rx.attach(None, move |res| {
            match res {
                Ok(items) => rooms.set_items(items),
                Err(err) => error!("Error fetching rooms: {err}"),
            }
            glib::ControlFlow::Continue
        });
    }

    fn fetch_messages(&self, room_id: String) {
        info!("GET messages for room {room_id}");
        let client = self.client.clone();
        let chat = Rc::clone(&self.views.chat);
        let rx = run_async_to_main(async move { client.list_room_messages(&room_id).await });
        rx.attach(None, move |res| {
            match res {
                Ok(items) => {
                    chat.set_messages(&items);
                    // the composer is revealed once a room's feed is up
                    chat.set_composer_visible(true);
                }
                Err(err) => error!("Error fetching messages: {err}"),
            }
            glib::ControlFlow::Continue
        });
    }

    fn post_message(&self, room_id: String, sender_id: String, text: String) {
        info!("POST message from {sender_id} to room {room_id}");
        let client = self.client.clone();
        let chat = Rc::clone(&self.views.chat);
        let rx =
            run_async_to_main(async move { client.post_message(&room_id, &sender_id, &text).await });
        rx.attach(None, move |res| {
            match res {
                Ok(message) => chat.append_message(&message),
                Err(err) => error!("Error posting message: {err}"),
            }
            glib::ControlFlow::Continue
        });
    }
}

impl SessionActions for SessionController {
    fn user_selected(&self, user: Option<User>) {
        match &user {
            Some(user) => info!("Logging {} in", user.full_name),
            None => info!("User selection cleared"),
        }
        let effects = self.session.borrow_mut().select_user(user);
        self.apply(effects);
    }

    fn room_selected(&self, room_id: &str) {
        info!("Room {room_id} selected");
        let effects = self.session.borrow_mut().select_room(room_id);
        self.apply(effects);
    }

    fn send_requested(&self, text: &str) {
        let effects = self.session.borrow().send(text);
        self.apply(effects);
    }
}

pub fn show_main_window(app: &Application, config: &Config) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Roomchat")
        .default_width(960)
        .default_height(640)
        .build();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let picker = UserPicker::new();
    let rooms = RoomList::new();
    let chat = ChatView::new();
    split.set_flap(Some(&rooms.widget()));
    split.set_content(Some(&chat.widget()));

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Roomchat"));
    header.set_title_widget(Some(&title));
    header.pack_start(&picker.widget());

    let logout_btn = gtk::Button::with_label("Log Out");
    logout_btn.set_visible(false);
    let banner = gtk::Label::new(None);
    header.pack_end(&logout_btn);
    header.pack_end(&banner);

    container.append(&header);
    container.append(&split);
    window.set_content(Some(&container));
    window.present();

    let controller = Rc::new(SessionController {
        session: RefCell::new(Session::new()),
        client: ApiClient::new(&config.base_url),
        views: Views {
            picker,
            banner,
            logout_btn: logout_btn.clone(),
            rooms: Rc::clone(&rooms),
            chat: Rc::clone(&chat),
        },
    });

    let actions: Rc<dyn SessionActions> = controller.clone();
    rooms.wire(Rc::clone(&actions));
    chat.wire_composer(Rc::clone(&actions));
    {
        let controller = controller.clone();
        logout_btn.connect_clicked(move |_| controller.log_out());
    }

    // the user list is fetched once, at startup
    info!("GET users");
    let client = controller.client.clone();
    let rx = run_async_to_main(async move { client.list_users().await });
    rx.attach(None, move |res| {
        match res {
            Ok(users) => {
                let actions: Rc<dyn SessionActions> = controller.clone();
                controller.views.picker.set_users(users, actions);
            }
            Err(err) => error!("Error fetching users: {err}"),
        }
        glib::ControlFlow::Continue
    });
}

use chrono::Local;
use gtk4 as gtk;
use gtk4::prelude::*;
use std::rc::Rc;

use crate::api::models::Message;
use crate::session::SessionActions;

pub struct ChatView {
    root: gtk::Box,
    scroller: gtk::ScrolledWindow,
    messages: gtk::Box,
    composer: gtk::Box,
    entry: gtk::Entry,
    send_btn: gtk::Button,
}

impl ChatView {
    pub fn new() -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        let messages = gtk::Box::new(gtk::Orientation::Vertical, 6);
        scroller.set_child(Some(&messages));
        root.append(&scroller);

        let composer = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message…"));
        let send_btn = gtk::Button::with_label("Send");
        composer.append(&entry);
        composer.append(&send_btn);
        // hidden until a room is open
        composer.set_visible(false);
        root.append(&composer);

        Rc::new(Self {
            root,
            scroller,
            messages,
            composer,
            entry,
            send_btn,
        })
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Both the Send button and Enter in the entry submit the composer.
    pub fn wire_composer(&self, actions: Rc<dyn SessionActions>) {
        let send: Rc<dyn Fn()> = {
            let entry = self.entry.clone();
            Rc::new(move || {
                let text = entry.text().to_string();
                actions.send_requested(&text);
                if !text.is_empty() {
                    entry.set_text("");
                }
            })
        };
        {
            let send = send.clone();
            self.send_btn.connect_clicked(move |_| (send)());
        }
        {
            let send = send.clone();
            self.entry.connect_activate(move |_| (send)());
        }
    }

    pub fn set_messages(&self, items: &[Message]) {
        self.clear_messages();
        for message in items {
            self.messages.append(&build_row(message));
        }
    }

    pub fn append_message(&self, message: &Message) {
        self.messages.append(&build_row(message));
        let adj = self.scroller.vadjustment();
        adj.set_value(adj.upper());
    }

    pub fn clear_messages(&self) {
        while let Some(child) = self.messages.first_child() {
            self.messages.remove(&child);
        }
    }

    pub fn set_composer_visible(&self, visible: bool) {
        self.composer.set_visible(visible);
    }
}

fn build_row(message: &Message) -> gtk::Widget {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    for part in row_parts(message) {
        let label = gtk::Label::new(Some(&part));
        label.set_halign(gtk::Align::Start);
        row.append(&label);
    }
    row.upcast()
}

/// Display parts of a message row, in fixed order: local time, sender, text.
fn row_parts(message: &Message) -> [String; 3] {
    [
        message
            .sent_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        message.sender.clone(),
        message.text.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_parts_come_out_as_time_sender_text() {
        let message: Message = serde_json::from_str(
            r#"{"sender":"u1","text":"hi","sentAt":"2024-05-04T12:30:00Z"}"#,
        )
        .expect("message json");
        let [time, sender, text] = row_parts(&message);
        assert_eq!(sender, "u1");
        assert_eq!(text, "hi");
        // local time renders as "YYYY-MM-DD HH:MM" whatever the zone
        assert_eq!(time.len(), 16);
        assert_eq!(&time[..3], "202");
    }

    #[test]
    fn row_parts_ignore_wire_field_order() {
        let a: Message = serde_json::from_str(
            r#"{"sender":"u1","text":"hi","sentAt":"2024-05-04T12:30:00Z"}"#,
        )
        .expect("message json");
        let b: Message = serde_json::from_str(
            r#"{"sentAt":"2024-05-04T12:30:00Z","text":"hi","sender":"u1"}"#,
        )
        .expect("message json");
        assert_eq!(row_parts(&a), row_parts(&b));
    }
}

use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::models::Room;
use crate::session::SessionActions;

pub struct RoomList {
    root: gtk::Box,
    list: gtk::ListBox,
    rooms: RefCell<Vec<Room>>,
}

impl RoomList {
    pub fn new() -> Rc<Self> {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some("Rooms"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        root.append(&list);

        Rc::new(Self {
            root,
            list,
            rooms: RefCell::new(Vec::new()),
        })
    }

    /// Row activation reports the activated room's id.
    pub fn wire(self: &Rc<Self>, actions: Rc<dyn SessionActions>) {
        let rooms = Rc::clone(self);
        self.list.connect_row_activated(move |_, row| {
            let index = row.index();
            if index < 0 {
                return;
            }
            if let Some(room) = rooms.rooms.borrow().get(index as usize) {
                actions.room_selected(&room.id);
            }
        });
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, items: Vec<Room>) {
        self.clear();
        for room in &items {
            let row = gtk::ListBoxRow::new();
            let label = gtk::Label::new(Some(&room.id));
            label.set_margin_top(8);
            label.set_margin_bottom(8);
            label.set_margin_start(8);
            label.set_margin_end(8);
            label.set_halign(gtk::Align::Start);
            row.set_child(Some(&label));
            self.list.append(&row);
        }
        *self.rooms.borrow_mut() = items;
    }

    pub fn clear(&self) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        self.rooms.borrow_mut().clear();
    }
}

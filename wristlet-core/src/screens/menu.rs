//! Vertical list of items with a cursor
//!
//! Used by the launcher, the settings menu and the setting pickers. The
//! cursor and the checked item live in change cells, so the rows are only
//! rewritten in the refresh after one of them moved.

use heapless::Vec;
use wristlet_hal::{Input, Surface, WidgetId};

use super::{LabelText, Widgets};
use crate::change::ChangeCell;

/// Maximum number of items (rows 1-7 under a title)
pub const MAX_MENU_ITEMS: usize = 7;

/// How items are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuStyle {
    /// `> name`
    Plain,
    /// `>(*) name`, one item checked
    Radio,
}

#[derive(Debug)]
struct Item {
    label: WidgetId,
    name: &'static str,
}

/// Cursor-driven list
#[derive(Debug)]
pub struct Menu {
    style: MenuStyle,
    first_row: u8,
    items: Vec<Item, MAX_MENU_ITEMS>,
    /// Cursor position requested by input
    target: usize,
    /// Checked item requested by the owner
    checked_target: Option<usize>,
    cursor: ChangeCell<usize>,
    checked: ChangeCell<Option<usize>>,
}

impl Menu {
    pub fn new(style: MenuStyle, first_row: u8) -> Self {
        Self {
            style,
            first_row,
            items: Vec::new(),
            target: 0,
            checked_target: None,
            cursor: ChangeCell::new(),
            checked: ChangeCell::new(),
        }
    }

    /// Append an item
    ///
    /// Items past [`MAX_MENU_ITEMS`] are dropped.
    pub fn push(&mut self, widgets: &mut Widgets, surface: &mut dyn Surface, name: &'static str) {
        if self.items.is_full() {
            return;
        }
        let row = self.first_row + self.items.len() as u8;
        let label = widgets.label(surface, row, 0);
        let _ = self.items.push(Item { label, name });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index under the cursor
    pub fn selected(&self) -> usize {
        self.target
    }

    /// Move the cursor
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.target = index;
        }
    }

    /// Set the checked item of a radio list
    pub fn set_checked(&mut self, index: Option<usize>) {
        self.checked_target = index.filter(|index| *index < self.items.len());
    }

    /// Checked item of a radio list
    pub fn checked(&self) -> Option<usize> {
        self.checked_target
    }

    /// Apply a button press
    ///
    /// Next and Previous wrap around. Returns the selected index on Select.
    pub fn on_input(&mut self, input: Input) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        match input {
            Input::Next => self.target = (self.target + 1) % len,
            Input::Previous => self.target = (self.target + len - 1) % len,
            Input::Select => return Some(self.target),
            Input::Back => {}
        }
        None
    }

    /// Redraw rows if the cursor or the checked item moved
    pub fn refresh(&mut self, surface: &mut dyn Surface) {
        self.cursor.set(self.target);
        self.checked.set(self.checked_target);
        if !self.cursor.is_updated() && !self.checked.is_updated() {
            return;
        }

        for (index, item) in self.items.iter().enumerate() {
            let mut text = LabelText::new();
            let cursor = if index == self.cursor.get() { '>' } else { ' ' };
            let _ = text.push(cursor);
            if self.style == MenuStyle::Radio {
                let mark = if self.checked.get() == Some(index) {
                    "(*)"
                } else {
                    "( )"
                };
                let _ = text.push_str(mark);
            } else {
                let _ = text.push(' ');
            }
            let _ = text.push_str(item.name);
            surface.set_text(item.label, &text);
        }
    }
}

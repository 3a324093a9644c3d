//! Rendering surface abstractions
//!
//! The surface is the retained-mode UI the screens draw into. Screens create
//! labels when they are constructed, update their text from the refresh
//! routine, and destroy them when they are torn down.

/// Handle to a widget owned by a surface
///
/// Handles are plain slot indices. A surface that has run out of slots hands
/// out [`WidgetId::DETACHED`]; every operation on a detached handle is a
/// no-op, so screens never need to check for exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(u8);

impl WidgetId {
    /// Handle that refers to no widget
    pub const DETACHED: WidgetId = WidgetId(u8::MAX);

    /// Create a handle for a slot index
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Slot index of this handle
    pub const fn slot(self) -> u8 {
        self.0
    }

    /// Check if this handle refers to no widget
    pub const fn is_detached(self) -> bool {
        self.0 == u8::MAX
    }
}

/// Retained-mode rendering surface
///
/// Positions are in character cells. Implementations clip text that runs
/// past the right edge and ignore labels placed outside the visible area.
pub trait Surface {
    /// Create an empty label at a cell position
    fn create_label(&mut self, row: u8, col: u8) -> WidgetId;

    /// Replace the text of a label
    fn set_text(&mut self, widget: WidgetId, text: &str);

    /// Destroy a label and free its slot
    fn destroy(&mut self, widget: WidgetId);

    /// Number of labels currently alive
    fn live_widgets(&self) -> usize;

    /// Create a label with fixed text
    fn create_static_label(&mut self, row: u8, col: u8, text: &str) -> WidgetId {
        let widget = self.create_label(row, col);
        self.set_text(widget, text);
        widget
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn create_label(&mut self, row: u8, col: u8) -> WidgetId {
        (**self).create_label(row, col)
    }

    fn set_text(&mut self, widget: WidgetId, text: &str) {
        (**self).set_text(widget, text)
    }

    fn destroy(&mut self, widget: WidgetId) {
        (**self).destroy(widget)
    }

    fn live_widgets(&self) -> usize {
        (**self).live_widgets()
    }
}

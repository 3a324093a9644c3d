//! Character-grid surface
//!
//! Provides a label table laid out on a fixed character grid. Labels are
//! kept in slots so that a screen's handles stay valid until the screen
//! destroys them, and the grid is only recomposed when something changed.

use heapless::String;
use wristlet_hal::{Surface, WidgetId};

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on standard display
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns on standard display
pub const SCREEN_COLS: usize = 21;

/// Maximum number of labels alive at once
pub const MAX_LABELS: usize = 24;

/// Byte capacity of a label or composed line
///
/// Generous enough for a full row of multi-byte characters.
pub const LINE_CAPACITY: usize = SCREEN_COLS * 4;

/// A positioned piece of text
#[derive(Debug, Clone)]
struct Label {
    row: u8,
    col: u8,
    text: String<LINE_CAPACITY>,
}

/// Retained label surface on a character grid
#[derive(Debug, Clone)]
pub struct TextSurface {
    /// Label slots, indexed by `WidgetId::slot`
    slots: [Option<Label>; MAX_LABELS],
    /// Whether the grid needs to be presented again
    dirty: bool,
    /// Labels created since power-on
    created: u32,
    /// Labels destroyed since power-on
    destroyed: u32,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface {
    /// Create a new empty surface
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            dirty: true,
            created: 0,
            destroyed: 0,
        }
    }

    /// Destroy every label
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.take().is_some() {
                self.destroyed = self.destroyed.wrapping_add(1);
            }
        }
        self.dirty = true;
    }

    /// Get the text of a label
    pub fn text(&self, widget: WidgetId) -> Option<&str> {
        self.label(widget).map(|label| label.text.as_str())
    }

    /// Get the position (row, col) of a label
    pub fn position(&self, widget: WidgetId) -> Option<(u8, u8)> {
        self.label(widget).map(|label| (label.row, label.col))
    }

    /// Compose one row of the grid
    ///
    /// Labels are drawn in slot order, so a later slot overwrites an earlier
    /// one where they overlap. Trailing blanks are trimmed.
    pub fn line(&self, row: u8) -> String<LINE_CAPACITY> {
        let mut cells = [' '; SCREEN_COLS];

        for label in self.slots.iter().flatten() {
            if label.row != row {
                continue;
            }
            let cols = cells.iter_mut().skip(label.col as usize);
            for (cell, ch) in cols.zip(label.text.chars()) {
                *cell = ch;
            }
        }

        let used = cells
            .iter()
            .rposition(|c| *c != ' ')
            .map_or(0, |last| last + 1);

        let mut line = String::new();
        for ch in &cells[..used] {
            // Capacity covers a full row of 4-byte chars
            let _ = line.push(*ch);
        }
        line
    }

    /// Check if any row contains a piece of text
    pub fn contains(&self, needle: &str) -> bool {
        (0..SCREEN_ROWS as u8).any(|row| self.line(row).contains(needle))
    }

    /// Check if the surface needs presenting
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark surface as clean (after presenting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark surface as dirty (needs presenting)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Labels created since power-on
    pub fn created_count(&self) -> u32 {
        self.created
    }

    /// Labels destroyed since power-on
    pub fn destroyed_count(&self) -> u32 {
        self.destroyed
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }

    /// Present the grid on a display backend
    ///
    /// Does nothing when the surface is clean. Returns whether a frame was
    /// sent.
    pub fn present<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;

        let (_, backend_rows) = backend.dimensions();
        let rows = (SCREEN_ROWS as u8).min(backend_rows);
        for row in 0..rows {
            let line = self.line(row);
            if !line.is_empty() {
                backend.draw_text(row, 0, &line)?;
            }
        }

        backend.flush()?;
        self.dirty = false;
        Ok(true)
    }

    fn label(&self, widget: WidgetId) -> Option<&Label> {
        self.slots.get(widget.slot() as usize)?.as_ref()
    }
}

impl Surface for TextSurface {
    fn create_label(&mut self, row: u8, col: u8) -> WidgetId {
        if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
            return WidgetId::DETACHED;
        }

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return WidgetId::DETACHED;
        };

        self.slots[index] = Some(Label {
            row,
            col,
            text: String::new(),
        });
        self.created = self.created.wrapping_add(1);
        self.dirty = true;
        WidgetId::new(index as u8)
    }

    fn set_text(&mut self, widget: WidgetId, text: &str) {
        let Some(Some(label)) = self.slots.get_mut(widget.slot() as usize) else {
            return;
        };

        // Clip to the visible part of the row
        let visible = SCREEN_COLS - label.col as usize;
        let mut clipped: String<LINE_CAPACITY> = String::new();
        for ch in text.chars().take(visible) {
            if clipped.push(ch).is_err() {
                break;
            }
        }

        if label.text != clipped {
            label.text = clipped;
            self.dirty = true;
        }
    }

    fn destroy(&mut self, widget: WidgetId) {
        if let Some(slot) = self.slots.get_mut(widget.slot() as usize) {
            if slot.take().is_some() {
                self.destroyed = self.destroyed.wrapping_add(1);
                self.dirty = true;
            }
        }
    }

    fn live_widgets(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextSurface {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextSurface[");
        for row in 0..SCREEN_ROWS as u8 {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.line(row).as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Backend that records the rows it was asked to draw
    struct RecordingBackend {
        ready: bool,
        frames: u32,
        rows: Vec<(u8, String<LINE_CAPACITY>), SCREEN_ROWS>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                ready: true,
                frames: 0,
                rows: Vec::new(),
            }
        }
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.rows.clear();
            Ok(())
        }

        fn draw_text(&mut self, row: u8, _col: u8, text: &str) -> Result<(), DisplayError> {
            let mut line = String::new();
            line.push_str(text)
                .map_err(|_| DisplayError::InvalidCoordinates)?;
            self.rows
                .push((row, line))
                .map_err(|_| DisplayError::InvalidCoordinates)
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.frames += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_labels_compose_into_rows() {
        let mut surface = TextSurface::new();
        surface.create_static_label(0, 0, "[BATT]");
        surface.create_static_label(0, 7, "87%");
        surface.create_static_label(2, 3, "hello");

        assert_eq!(surface.line(0).as_str(), "[BATT] 87%");
        assert_eq!(surface.line(1).as_str(), "");
        assert_eq!(surface.line(2).as_str(), "   hello");
        assert!(surface.contains("87%"));
    }

    #[test]
    fn test_text_is_clipped_to_row() {
        let mut surface = TextSurface::new();
        let label = surface.create_label(1, 18);
        surface.set_text(label, "abcdef");
        assert_eq!(surface.text(label), Some("abc"));
    }

    #[test]
    fn test_out_of_bounds_label_is_detached() {
        let mut surface = TextSurface::new();
        let label = surface.create_label(SCREEN_ROWS as u8, 0);
        assert!(label.is_detached());
        surface.set_text(label, "ignored");
        assert_eq!(surface.live_widgets(), 0);
    }

    #[test]
    fn test_full_surface_hands_out_detached() {
        let mut surface = TextSurface::new();
        for _ in 0..MAX_LABELS {
            assert!(!surface.create_label(0, 0).is_detached());
        }
        assert!(surface.create_label(0, 0).is_detached());
        assert_eq!(surface.live_widgets(), MAX_LABELS);
    }

    #[test]
    fn test_destroy_frees_slot() {
        let mut surface = TextSurface::new();
        let first = surface.create_static_label(0, 0, "one");
        surface.destroy(first);
        assert_eq!(surface.live_widgets(), 0);
        assert_eq!(surface.text(first), None);
        assert_eq!(surface.destroyed_count(), 1);

        // Double destroy is harmless
        surface.destroy(first);
        assert_eq!(surface.destroyed_count(), 1);

        let second = surface.create_label(0, 0);
        assert_eq!(second.slot(), first.slot());
    }

    #[test]
    fn test_unchanged_text_keeps_surface_clean() {
        let mut surface = TextSurface::new();
        let label = surface.create_static_label(0, 0, "12:00");
        surface.mark_clean();

        surface.set_text(label, "12:00");
        assert!(!surface.is_dirty());

        surface.set_text(label, "12:01");
        assert!(surface.is_dirty());
    }

    #[test]
    fn test_present_only_when_dirty() {
        let mut surface = TextSurface::new();
        let mut backend = RecordingBackend::new();
        surface.create_static_label(3, 0, "user@watch:~ $");

        assert_eq!(surface.present(&mut backend), Ok(true));
        assert_eq!(backend.frames, 1);
        assert_eq!(backend.rows.len(), 1);
        assert_eq!(backend.rows[0].0, 3);
        assert_eq!(backend.rows[0].1.as_str(), "user@watch:~ $");

        assert_eq!(surface.present(&mut backend), Ok(false));
        assert_eq!(backend.frames, 1);
    }

    #[test]
    fn test_present_requires_ready_backend() {
        let mut surface = TextSurface::new();
        let mut backend = RecordingBackend::new();
        backend.ready = false;

        assert_eq!(
            surface.present(&mut backend),
            Err(DisplayError::NotInitialized)
        );
        assert!(surface.is_dirty());
    }

    #[test]
    fn test_clear_destroys_all() {
        let mut surface = TextSurface::new();
        surface.create_static_label(0, 0, "a");
        surface.create_static_label(1, 0, "b");
        surface.clear();
        assert_eq!(surface.live_widgets(), 0);
        assert_eq!(surface.created_count(), 2);
        assert_eq!(surface.destroyed_count(), 2);
    }
}

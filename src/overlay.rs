//! The overlay singleton
//!
//! One node, created hidden at startup and never destroyed; it is only ever
//! shown, hidden and repositioned for the lifetime of the page.

use crate::dom::{Position, Size};

/// Measures the overlay box for a given text content
///
/// The overlay's size is a function of its content, so measurement happens
/// after the text is set and the node is visible. A measurement of zero in
/// either dimension makes placement use its fixed fallback size.
pub trait OverlayMetrics {
    fn measure(&self, text: &str) -> Size;
}

/// Character-cell estimate used when no host measurement is available
#[derive(Debug, Clone, Copy)]
pub struct CharCellMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
}

impl Default for CharCellMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding: 8.0,
        }
    }
}

impl OverlayMetrics for CharCellMetrics {
    fn measure(&self, text: &str) -> Size {
        let lines = text.lines().count().max(1) as f64;
        let widest = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f64;
        Size {
            width: widest * self.char_width + 2.0 * self.padding,
            height: lines * self.line_height + 2.0 * self.padding,
        }
    }
}

/// Fixed-box measurement, for hosts that report one size (and for tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics(pub Size);

impl OverlayMetrics for FixedMetrics {
    fn measure(&self, _text: &str) -> Size {
        self.0
    }
}

/// The overlay node
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    visible: bool,
    text: String,
    position: Position,
}

impl Overlay {
    /// Create the node hidden and empty
    pub fn new() -> Self {
        Self {
            visible: false,
            text: String::new(),
            position: Position { x: 0.0, y: 0.0 },
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Set content and make the node visible
    ///
    /// Visibility must precede measurement: a hidden node has no usable box.
    pub fn show_text(&mut self, text: String) {
        self.text = text;
        self.visible = true;
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

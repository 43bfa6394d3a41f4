//! Host document model
//!
//! The inspector never touches a real DOM. The host feeds it elements as an
//! ordered list of (name, value) attribute pairs plus an opaque node handle,
//! and geometry as viewport-relative rectangles with scroll offsets.

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a node for the lifetime of a page
pub type NodeId = u64;

/// Snapshot of one element under the cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub node: NodeId,
    pub tag: String,
    /// Attributes in document order
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(node: NodeId, tag: impl Into<String>) -> Self {
        Self {
            node,
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Append an attribute, preserving insertion order
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// First attribute with the given name, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn class_attr(&self) -> Option<&str> {
        self.attr("class")
    }
}

/// Viewport-relative bounding box of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Visible viewport dimensions and document scroll offsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Unscrolled viewport of the given dimensions
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

/// Measured overlay box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Document-space overlay position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

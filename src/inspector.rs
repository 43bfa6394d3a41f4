//! Hover-inspection engine
//!
//! Owns the overlay singleton, the current hovered element and the in-memory
//! preference mirror. One instance exists per page; all state transitions go
//! through the pointer and control handlers below.

use tracing::{debug, info};

use crate::config::{DisplayOptions, Preferences};
use crate::constants::overlay::{ELEMENT_ID, HIGHLIGHT_CLASS};
use crate::dom::{Element, NodeId, Rect, Viewport};
use crate::ipc::ControlMessage;
use crate::overlay::{CharCellMetrics, Overlay, OverlayMetrics};
use crate::placement::place_overlay;
use crate::tooltip::build_text;

/// The element currently under the cursor, with the geometry captured when
/// it was entered (reused when an options update re-renders it in place)
#[derive(Debug, Clone)]
struct Hovered {
    element: Element,
    rect: Rect,
    viewport: Viewport,
}

pub struct Inspector {
    enabled: bool,
    options: DisplayOptions,
    current: Option<Hovered>,
    /// Node carrying the highlight marker; always the current element
    highlighted: Option<NodeId>,
    overlay: Overlay,
    metrics: Box<dyn OverlayMetrics>,
}

impl Inspector {
    /// Create the engine with the overlay node in place but hidden
    pub fn new(prefs: Preferences) -> Self {
        Self::with_metrics(prefs, Box::new(CharCellMetrics::default()))
    }

    pub fn with_metrics(prefs: Preferences, metrics: Box<dyn OverlayMetrics>) -> Self {
        Self {
            enabled: prefs.enabled,
            options: prefs.options,
            current: None,
            highlighted: None,
            overlay: Overlay::new(),
            metrics,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Node currently carrying the highlight marker, if any
    pub fn highlighted(&self) -> Option<NodeId> {
        self.highlighted
    }

    pub fn current(&self) -> Option<&Element> {
        self.current.as_ref().map(|hovered| &hovered.element)
    }

    /// The cursor entered an element
    pub fn pointer_enter(&mut self, element: Element, rect: Rect, viewport: Viewport) {
        if !self.enabled {
            return;
        }
        // The overlay never inspects itself
        if element.id() == Some(ELEMENT_ID) {
            return;
        }
        // Re-entering the current element changes nothing
        if self
            .current
            .as_ref()
            .is_some_and(|hovered| hovered.element.node == element.node)
        {
            return;
        }

        if self.current.is_some() {
            self.hide();
        }
        self.show(Hovered {
            element,
            rect,
            viewport,
        });
    }

    /// The cursor left the element with the given node handle
    pub fn pointer_leave(&mut self, node: NodeId) {
        if self
            .current
            .as_ref()
            .is_some_and(|hovered| hovered.element.node == node)
        {
            self.hide();
        }
    }

    /// Best-effort cleanup when the page goes away
    pub fn teardown(&mut self) {
        if self.current.is_some() {
            self.hide();
        }
    }

    /// Apply a control message from the panel
    pub fn apply(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::ToggleExtension { enabled } => {
                info!(enabled, "Inspection toggled");
                self.enabled = enabled;
                if !enabled && self.current.is_some() {
                    self.hide();
                }
            }
            ControlMessage::UpdateDisplayOptions { options } => {
                debug!(?options, "Display options replaced");
                self.options = options;
                // Re-render in place with the new options
                if let Some(hovered) = self.current.clone() {
                    self.show(hovered);
                }
            }
        }
    }

    fn show(&mut self, hovered: Hovered) {
        let text = build_text(&hovered.element, &self.options);
        // Content and visibility first: a hidden overlay measures as empty
        self.overlay.show_text(text);
        let size = self.metrics.measure(self.overlay.text());
        let position = place_overlay(hovered.rect, size, hovered.viewport);
        self.overlay.set_position(position);
        debug!(node = hovered.element.node, marker = HIGHLIGHT_CLASS, "Highlight applied");
        self.highlighted = Some(hovered.element.node);
        self.current = Some(hovered);
    }

    fn hide(&mut self) {
        self.overlay.hide();
        self.highlighted = None;
        self.current = None;
    }
}

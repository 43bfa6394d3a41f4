//! Wire messages accepted by the inspector process

use serde::{Deserialize, Serialize};

use crate::config::DisplayOptions;
use crate::dom::{Element, NodeId, Rect, Viewport};

/// One-shot notifications from the control panel
///
/// Tagged by `action` on the wire, e.g.
/// `{"action":"toggleExtension","enabled":true}` and
/// `{"action":"updateDisplayOptions","options":{...}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ControlMessage {
    /// Turn hover inspection on or off
    ToggleExtension { enabled: bool },

    /// Replace the display options wholesale
    UpdateDisplayOptions { options: DisplayOptions },
}

/// Everything the inspector socket accepts: control messages from the
/// panel plus the pointer events fed by the host document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum InspectorRequest {
    Control(ControlMessage),

    /// The cursor entered an element; carries the element snapshot and the
    /// geometry measured by the host
    PointerEnter {
        element: Element,
        rect: Rect,
        viewport: Viewport,
    },

    /// The cursor left the element with the given node handle
    PointerLeave { node: NodeId },

    /// Request graceful shutdown (page teardown)
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_message_wire_format() {
        let json =
            serde_json::to_string(&ControlMessage::ToggleExtension { enabled: true }).unwrap();
        assert_eq!(json, r#"{"action":"toggleExtension","enabled":true}"#);
    }

    #[test]
    fn test_update_options_wire_format() {
        let message = ControlMessage::UpdateDisplayOptions {
            options: DisplayOptions::default(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.starts_with(r#"{"action":"updateDisplayOptions","options":"#));

        let parsed: ControlMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_foreign_toggle_json_parses() {
        // What a hand-written sender would produce
        let parsed: ControlMessage =
            serde_json::from_str(r#"{"action":"toggleExtension","enabled":false}"#).unwrap();
        assert_eq!(parsed, ControlMessage::ToggleExtension { enabled: false });
    }
}

//! Overlay text assembly
//!
//! Builds the line-per-segment text shown in the overlay. Segment order is
//! fixed (tag, id, classes, data attributes, remaining attributes); lines
//! derived from attributes follow the element's attribute order.

use crate::config::DisplayOptions;
use crate::constants::overlay::EMPTY_TEXT;
use crate::dom::Element;

/// Build the overlay text for `element` under `options`
///
/// Each enabled, non-empty segment contributes one line. With nothing to
/// show the literal `No data` is returned. Under the all-attributes flag,
/// attributes already covered by an active id/class/data flag are skipped
/// so no line ever appears twice.
pub fn build_text(element: &Element, options: &DisplayOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    if options.show_tag {
        parts.push(format!("<{}>", element.tag.to_lowercase()));
    }

    if options.show_id
        && let Some(id) = element.id()
        && !id.is_empty()
    {
        parts.push(format!("ID: {id}"));
    }

    if options.show_class
        && let Some(class) = element.class_attr()
    {
        let tokens: Vec<&str> = class.split_whitespace().collect();
        if !tokens.is_empty() {
            parts.push(format!("Classes: {}", tokens.join(", ")));
        }
    }

    if options.show_data {
        for (name, value) in &element.attrs {
            if name.starts_with("data-") {
                parts.push(format!("{name}: {value}"));
            }
        }
    }

    if options.show_all_attrs {
        for (name, value) in &element.attrs {
            if (options.show_id && name == "id")
                || (options.show_class && name == "class")
                || (options.show_data && name.starts_with("data-"))
            {
                continue;
            }
            parts.push(format!("{name}: {value}"));
        }
    }

    if parts.is_empty() {
        EMPTY_TEXT.to_string()
    } else {
        parts.join("\n")
    }
}

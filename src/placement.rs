//! Overlay placement relative to the hovered element
//!
//! Element rects arrive viewport-relative; the returned position is in
//! document space (viewport coordinate plus scroll offset). Zero-sized
//! measurements fall back to fixed dimensions so placement always works.

use crate::constants::overlay::{FALLBACK_HEIGHT, FALLBACK_WIDTH, SPACING};
use crate::dom::{Position, Rect, Size, Viewport};

/// Compute the document-space position for an overlay of the measured size
///
/// Vertically the overlay prefers the space below the element, then above,
/// then below regardless. Horizontally it aligns with the element's left
/// edge when that fits, then its right edge, then centers in the viewport.
/// Both coordinates are clamped to keep the overlay a spacing's distance
/// from every viewport edge.
pub fn place_overlay(target: Rect, overlay: Size, viewport: Viewport) -> Position {
    let height = if overlay.height > 0.0 {
        overlay.height
    } else {
        FALLBACK_HEIGHT
    };
    let width = if overlay.width > 0.0 {
        overlay.width
    } else {
        FALLBACK_WIDTH
    };

    let space_above = target.top();
    let space_below = viewport.height - target.bottom();

    let top = if space_below >= height + SPACING {
        target.bottom() + viewport.scroll_y + SPACING
    } else if space_above >= height + SPACING {
        target.top() + viewport.scroll_y - height - SPACING
    } else {
        // Neither side fits; go below and let the clamp pull it back in
        target.bottom() + viewport.scroll_y + SPACING
    };

    let left = if target.left() + width <= viewport.width {
        target.left() + viewport.scroll_x
    } else if target.right() - width >= 0.0 {
        target.right() + viewport.scroll_x - width
    } else {
        (viewport.width - width) / 2.0 + viewport.scroll_x
    };

    let min_left = viewport.scroll_x + SPACING;
    let max_left = viewport.scroll_x + viewport.width - width - SPACING;
    let min_top = viewport.scroll_y + SPACING;
    let max_top = viewport.scroll_y + viewport.height - height - SPACING;

    Position {
        x: left.min(max_left).max(min_left),
        y: top.min(max_top).max(min_top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: Size = Size {
        width: 200.0,
        height: 50.0,
    };

    #[test]
    fn test_prefers_below_the_element() {
        let target = Rect::new(100.0, 100.0, 80.0, 20.0);
        let viewport = Viewport::sized(800.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.x, 100.0);
        assert_eq!(pos.y, 130.0); // bottom + spacing
    }

    #[test]
    fn test_goes_above_when_no_room_below() {
        let target = Rect::new(100.0, 520.0, 80.0, 40.0);
        let viewport = Viewport::sized(800.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.y, 520.0 - 50.0 - 10.0);
    }

    #[test]
    fn test_below_anyway_when_neither_side_fits() {
        // Element spans nearly the whole viewport; clamp pulls the overlay
        // back inside
        let target = Rect::new(5.0, 5.0, 790.0, 590.0);
        let viewport = Viewport::sized(800.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.y, 600.0 - 50.0 - 10.0);
        assert_eq!(pos.x, 10.0);
    }

    #[test]
    fn test_right_aligns_when_left_alignment_overflows() {
        let target = Rect::new(700.0, 100.0, 90.0, 20.0);
        let viewport = Viewport::sized(800.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.x, 790.0 - 200.0);
    }

    #[test]
    fn test_centers_when_neither_edge_works() {
        // Narrow viewport: left alignment overflows, right alignment would
        // push past zero
        let target = Rect::new(50.0, 100.0, 60.0, 20.0);
        let viewport = Viewport::sized(240.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.x, (240.0 - 200.0) / 2.0);
    }

    #[test]
    fn test_clamps_near_bottom_right_corner() {
        let target = Rect::new(700.0, 560.0, 90.0, 35.0);
        let viewport = Viewport::sized(800.0, 600.0);

        let pos = place_overlay(target, OVERLAY, viewport);
        // At least a spacing's distance from every edge
        assert!(pos.x >= 10.0);
        assert!(pos.x + 200.0 <= 800.0 - 10.0);
        assert!(pos.y >= 10.0);
        assert!(pos.y + 50.0 <= 600.0 - 10.0);
    }

    #[test]
    fn test_scroll_offsets_shift_into_document_space() {
        let target = Rect::new(100.0, 100.0, 80.0, 20.0);
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
            scroll_x: 500.0,
            scroll_y: 1200.0,
        };

        let pos = place_overlay(target, OVERLAY, viewport);
        assert_eq!(pos.x, 600.0);
        assert_eq!(pos.y, 1200.0 + 120.0 + 10.0);
    }

    #[test]
    fn test_zero_measurement_uses_fallback_size() {
        let target = Rect::new(100.0, 100.0, 80.0, 20.0);
        let viewport = Viewport::sized(800.0, 600.0);
        let zero = Size {
            width: 0.0,
            height: 0.0,
        };

        // Same result as an explicit 200x50 overlay
        assert_eq!(
            place_overlay(target, zero, viewport),
            place_overlay(target, OVERLAY, viewport)
        );
    }

    #[test]
    fn test_deterministic_for_same_geometry() {
        let target = Rect::new(320.0, 240.0, 64.0, 48.0);
        let viewport = Viewport::sized(1024.0, 768.0);

        assert_eq!(
            place_overlay(target, OVERLAY, viewport),
            place_overlay(target, OVERLAY, viewport)
        );
    }
}

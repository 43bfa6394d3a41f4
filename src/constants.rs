//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Overlay geometry and content constants
pub mod overlay {
    /// Gap in pixels kept between the hovered element and the overlay,
    /// and between the overlay and the viewport edges
    pub const SPACING: f64 = 10.0;

    /// Overlay width assumed when measurement yields zero
    pub const FALLBACK_WIDTH: f64 = 200.0;

    /// Overlay height assumed when measurement yields zero
    pub const FALLBACK_HEIGHT: f64 = 50.0;

    /// Text shown when no display option produced any output
    pub const EMPTY_TEXT: &str = "No data";

    /// Id carried by the overlay node itself (hovering it is ignored)
    pub const ELEMENT_ID: &str = "dom-lens-tooltip";

    /// Class marking the currently highlighted element
    pub const HIGHLIGHT_CLASS: &str = "dom-lens-highlight";
}

/// Preference file location
pub mod config {
    /// Directory under the user config dir
    pub const APP_DIR: &str = "dom-lens";

    /// Preference file name
    pub const FILENAME: &str = "preferences.json";
}

/// Pages where inspection cannot run
pub mod denylist {
    /// Address prefixes for which the control panel shows the
    /// "unsupported page" notice instead of the settings
    pub const UNSUPPORTED_PREFIXES: &[&str] = &[
        "chrome://",
        "chrome-extension://",
        "edge://",
        "about:",
        "view-source:",
        "https://chrome.google.com/webstore",
        "https://chromewebstore.google.com",
    ];
}

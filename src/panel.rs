//! Control panel
//!
//! Mirrors the stored preferences, checks whether the active page supports
//! inspection, persists changes and sends one-shot notifications to the
//! inspector. Notification delivery is fire-and-forget: a page with no
//! inspector loaded simply misses the update.

use anyhow::Result;
use clap::ValueEnum;

use crate::config::{DisplayOptions, PreferenceStore, Preferences};
use crate::constants::denylist::UNSUPPORTED_PREFIXES;
use crate::ipc::{self, ControlMessage, InspectorRequest};

/// Whether hover inspection can run on the given page address
pub fn page_supported(url: &str) -> bool {
    !UNSUPPORTED_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// The two mutually exclusive status presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Enabled,
    Disabled,
}

impl Status {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Status::Enabled
        } else {
            Status::Disabled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Enabled => "Inspection is enabled",
            Status::Disabled => "Inspection is disabled",
        }
    }

    /// Style class for the status indicator
    pub fn style(&self) -> &'static str {
        match self {
            Status::Enabled => "status",
            Status::Disabled => "status disabled",
        }
    }
}

/// Selector for a single display-option checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionFlag {
    Id,
    Class,
    Tag,
    Data,
    AllAttrs,
}

/// Panel state: one instance per popup invocation
pub struct Panel {
    store: PreferenceStore,
    prefs: Preferences,
    supported: bool,
}

impl Panel {
    /// Load stored preferences and run the supported-page check
    ///
    /// Preferences load regardless of the support outcome; without a tab
    /// address the page is assumed supported.
    pub fn open(store: PreferenceStore, tab_url: Option<&str>) -> Self {
        let supported = tab_url.is_none_or(page_supported);
        let prefs = store.load();
        Self {
            store,
            prefs,
            supported,
        }
    }

    pub fn supported(&self) -> bool {
        self.supported
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn status(&self) -> Status {
        Status::from_enabled(self.prefs.enabled)
    }

    /// Persist the enabled flag and notify the inspector
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.prefs = self.store.set_enabled(enabled)?;
        ipc::notify(&InspectorRequest::Control(ControlMessage::ToggleExtension {
            enabled,
        }));
        Ok(())
    }

    /// Flip one checkbox, persist the whole option set and notify the
    /// inspector with the gathered five flags
    pub fn set_option(&mut self, flag: OptionFlag, value: bool) -> Result<()> {
        let mut options = self.prefs.options;
        match flag {
            OptionFlag::Id => options.show_id = value,
            OptionFlag::Class => options.show_class = value,
            OptionFlag::Tag => options.show_tag = value,
            OptionFlag::Data => options.show_data = value,
            OptionFlag::AllAttrs => options.show_all_attrs = value,
        }
        self.prefs = self.store.set_options(options)?;
        ipc::notify(&InspectorRequest::Control(
            ControlMessage::UpdateDisplayOptions { options },
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn panel_in(dir: &TempDir, tab_url: Option<&str>) -> Panel {
        Panel::open(PreferenceStore::at(dir.path().join("prefs.json")), tab_url)
    }

    #[test]
    fn test_denylist_prefixes_unsupported() {
        for url in [
            "chrome://settings",
            "chrome-extension://abcdef/popup.html",
            "edge://flags",
            "about:blank",
            "view-source:https://example.com",
            "https://chrome.google.com/webstore/category/extensions",
            "https://chromewebstore.google.com/detail/foo",
        ] {
            assert!(!page_supported(url), "{url} should be unsupported");
        }
    }

    #[test]
    fn test_regular_pages_supported() {
        assert!(page_supported("https://example.com"));
        assert!(page_supported("http://localhost:8080/index.html"));
        assert!(page_supported("file:///tmp/test.html"));
        // Prefix match only: the store origin must lead the address
        assert!(page_supported("https://example.com/?ref=chrome://"));
    }

    #[test]
    fn test_status_states_are_mutually_exclusive() {
        assert_eq!(Status::from_enabled(true).label(), "Inspection is enabled");
        assert_eq!(Status::from_enabled(false).label(), "Inspection is disabled");
        assert_ne!(Status::Enabled.style(), Status::Disabled.style());
    }

    #[test]
    fn test_unsupported_page_still_loads_preferences() {
        let dir = TempDir::new().unwrap();
        PreferenceStore::at(dir.path().join("prefs.json"))
            .set_enabled(true)
            .unwrap();

        let panel = panel_in(&dir, Some("chrome://extensions"));
        assert!(!panel.supported());
        assert!(panel.preferences().enabled);
        assert_eq!(panel.status(), Status::Enabled);
    }

    #[test]
    fn test_missing_tab_url_assumed_supported() {
        let dir = TempDir::new().unwrap();
        assert!(panel_in(&dir, None).supported());
    }

    #[test]
    fn test_set_enabled_persists() {
        let dir = TempDir::new().unwrap();
        let mut panel = panel_in(&dir, Some("https://example.com"));

        panel.set_enabled(true).unwrap();
        assert_eq!(panel.status(), Status::Enabled);

        // A fresh panel sees the stored value
        let reopened = panel_in(&dir, None);
        assert!(reopened.preferences().enabled);
    }

    #[test]
    fn test_set_option_writes_whole_set() {
        let dir = TempDir::new().unwrap();
        let mut panel = panel_in(&dir, None);

        panel.set_option(OptionFlag::AllAttrs, true).unwrap();
        panel.set_option(OptionFlag::Data, false).unwrap();

        let options = panel_in(&dir, None).preferences().options;
        assert!(options.show_all_attrs);
        assert!(!options.show_data);
        // Untouched flags keep their values
        assert!(options.show_id);
        assert!(options.show_class);
        assert!(options.show_tag);
    }
}

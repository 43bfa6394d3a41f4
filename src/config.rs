use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Which metadata categories the overlay renders
///
/// Serialized with the camelCase key names shared with the control panel,
/// so the preference file carries exactly the keys `showId`, `showClass`,
/// `showTag`, `showData` and `showAllAttrs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    pub show_id: bool,
    pub show_class: bool,
    pub show_tag: bool,
    pub show_data: bool,
    pub show_all_attrs: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_id: true,
            show_class: true,
            show_tag: true,
            show_data: true,
            show_all_attrs: false,
        }
    }
}

/// The full persisted preference set
///
/// Inspection starts disabled; every category except the all-attributes
/// dump defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub enabled: bool,
    #[serde(flatten)]
    pub options: DisplayOptions,
}

/// File-backed preference store
///
/// One JSON object holding the six preference keys. Both the inspector and
/// the control panel read it at startup; only the panel writes. Writes are
/// read-modify-write so each key behaves independently (last write wins).
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at the default location under the user config directory
    pub fn open_default() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        Self { path }
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load preferences. A missing or unreadable file is not an error:
    /// the documented defaults apply.
    pub fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Failed to parse preference file, using defaults");
                    Preferences::default()
                }
            },
            Err(_) => Preferences::default(),
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }
        let contents =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        fs::write(&self.path, contents).context(format!(
            "Failed to write preference file to {}",
            self.path.display()
        ))?;
        Ok(())
    }

    /// Write only the enabled flag, preserving the stored display options
    pub fn set_enabled(&self, enabled: bool) -> Result<Preferences> {
        let mut prefs = self.load();
        prefs.enabled = enabled;
        self.save(&prefs)?;
        info!(enabled, "Saved enabled state");
        Ok(prefs)
    }

    /// Write the whole display-option set as one multi-key update
    pub fn set_options(&self, options: DisplayOptions) -> Result<Preferences> {
        let mut prefs = self.load();
        prefs.options = options;
        self.save(&prefs)?;
        info!(?options, "Saved display options");
        Ok(prefs)
    }
}

//! User preferences persisted as a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_core::{PreferenceStore, UserPreferences};
use tracing::{debug, warn};

pub const DEFAULT_PREFS_FILE: &str = ".folio-prefs.json";

/// Preferences file path used when none is given: next to the site config.
pub fn default_prefs_path(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) => dir.join(DEFAULT_PREFS_FILE),
        None => PathBuf::from(DEFAULT_PREFS_FILE),
    }
}

/// [`PreferenceStore`] that writes every change through to disk.
///
/// A missing or unreadable file starts from defaults; failed writes are
/// logged and the in-memory value is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    prefs: UserPreferences,
}

impl JsonPreferenceStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring malformed preferences file");
                    UserPreferences::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => UserPreferences::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable preferences file");
                UserPreferences::default()
            }
        };
        Self { path, prefs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.prefs)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to save preferences");
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn preferences(&self) -> UserPreferences {
        self.prefs.clone()
    }

    fn set_announcement_bar_closed(&mut self, closed: bool) {
        self.prefs.announcement_bar_closed = closed;
        self.persist();
    }

    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.prefs.sidebar_collapsed = collapsed;
        self.persist();
    }
}

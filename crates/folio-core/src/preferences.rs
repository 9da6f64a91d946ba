//! User preferences the sidebar reads but does not own.

use serde::{Deserialize, Serialize};

/// Persisted per-user UI preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub announcement_bar_closed: bool,
    pub sidebar_collapsed: bool,
}

/// Storage for [`UserPreferences`].
pub trait PreferenceStore {
    fn preferences(&self) -> UserPreferences;
    fn set_announcement_bar_closed(&mut self, closed: bool);
    fn set_sidebar_collapsed(&mut self, collapsed: bool);
}

/// Preferences that live only as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: UserPreferences,
}

impl MemoryPreferenceStore {
    pub fn new(prefs: UserPreferences) -> Self {
        Self { prefs }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn preferences(&self) -> UserPreferences {
        self.prefs.clone()
    }

    fn set_announcement_bar_closed(&mut self, closed: bool) {
        self.prefs.announcement_bar_closed = closed;
    }

    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.prefs.sidebar_collapsed = collapsed;
    }
}

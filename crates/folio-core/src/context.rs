//! Read-only site context handed to the sidebar.

use crate::preferences::UserPreferences;
use crate::theme::{ResolvedLogo, ThemeConfig};
use crate::viewport::ViewportClassifier;

/// Everything the sidebar reads from its surroundings, passed explicitly
/// instead of looked up globally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteContext {
    pub theme: ThemeConfig,
    pub logo: ResolvedLogo,
    pub preferences: UserPreferences,
    pub viewport: ViewportClassifier,
}

impl SiteContext {
    pub fn navbar_title(&self) -> Option<&str> {
        self.theme.navbar.title.as_deref()
    }

    /// The logo is rendered inside the sidebar only when the navbar can
    /// scroll out of view.
    pub fn shows_sidebar_logo(&self) -> bool {
        self.theme.navbar.hide_on_scroll
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }
}

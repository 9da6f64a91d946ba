//! Site configuration (`folio.toml`) and sidebar tree loading.
//!
//! The loader is the content pipeline's last stop before rendering: trees
//! that leave [`SidebarsFile::load`] are well formed, so the sidebar
//! components never validate their input.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::SiteContext;
use crate::error::ConfigError;
use crate::preferences::UserPreferences;
use crate::sidebar::{walk_tree, SidebarItem};
use crate::theme::{ColorMode, ResolvedLogo, ThemeConfig};
use crate::viewport::{ViewportClassifier, DESKTOP_MIN_WIDTH};

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, also the fallback logo alt text
    pub title: String,

    /// Prefix for every absolute site path
    pub base_url: String,

    /// Sidebar shown when none is requested explicitly
    pub default_sidebar: String,

    /// Sidebar trees (JSON), relative to the config file
    pub sidebars: PathBuf,

    /// Showcase entries (JSON), relative to the config file
    pub showcase: Option<PathBuf>,

    pub color_mode: ColorMode,

    pub viewport: ViewportSettings,

    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            base_url: "/".to_string(),
            default_sidebar: "docs".to_string(),
            sidebars: PathBuf::from("sidebars.json"),
            showcase: None,
            color_mode: ColorMode::default(),
            viewport: ViewportSettings::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Viewport breakpoint configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Widths above this value use the desktop sidebar
    pub desktop_min_width: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            desktop_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

impl SiteConfig {
    /// Load `folio.toml`, resolving referenced files against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&raw, path)?;

        if let Some(dir) = path.parent() {
            config.sidebars = dir.join(&config.sidebars);
            config.showcase = config.showcase.map(|showcase| dir.join(showcase));
        }

        info!(path = %path.display(), title = %config.title, "loaded site config");
        Ok(config)
    }

    /// Parse config text; `origin` is only used in error messages.
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport.desktop_min_width > 0.0) {
            return Err(ConfigError::InvalidBreakpoint);
        }
        Ok(())
    }

    pub fn viewport_classifier(&self) -> ViewportClassifier {
        ViewportClassifier::new(self.viewport.desktop_min_width)
    }

    /// Build the read-only context the sidebar renders against.
    pub fn site_context(&self, preferences: UserPreferences) -> SiteContext {
        let mut navbar = self.theme.navbar.clone();
        if navbar.title.is_none() {
            navbar.title = Some(self.title.clone());
        }
        let logo = ResolvedLogo::resolve(&navbar, &self.base_url, self.color_mode);
        let mut theme = self.theme.clone();
        theme.navbar = navbar;

        SiteContext {
            theme,
            logo,
            preferences,
            viewport: self.viewport_classifier(),
        }
    }
}

/// All sidebar trees of a site, keyed by sidebar id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarsFile {
    sidebars: BTreeMap<String, Vec<SidebarItem>>,
}

impl SidebarsFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sidebars = Self::from_json_str(&raw, path)?;
        info!(
            path = %path.display(),
            count = sidebars.sidebars.len(),
            "loaded sidebars"
        );
        Ok(sidebars)
    }

    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let sidebars: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        sidebars.validate()?;
        Ok(sidebars)
    }

    pub fn insert(&mut self, id: impl Into<String>, items: Vec<SidebarItem>) {
        self.sidebars.insert(id.into(), items);
    }

    /// Reject blank labels and blank link targets. Empty categories are
    /// valid; the renderer suppresses them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, items) in &self.sidebars {
            let mut failure = None;
            walk_tree(items, |key, item| {
                if failure.is_some() {
                    return;
                }
                if item.label().trim().is_empty() {
                    failure = Some(ConfigError::EmptyLabel {
                        sidebar: id.clone(),
                        key: key.clone(),
                    });
                } else if let SidebarItem::Link { label, href } = item {
                    if href.trim().is_empty() {
                        failure = Some(ConfigError::EmptyHref {
                            sidebar: id.clone(),
                            key: key.clone(),
                            label: label.clone(),
                        });
                    }
                }
            });
            if let Some(err) = failure {
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&[SidebarItem], ConfigError> {
        self.sidebars
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::UnknownSidebar {
                id: id.to_string(),
                available: self.ids().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

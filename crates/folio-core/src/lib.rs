//! # Folio Core
//!
//! Data model and behavior behind the Folio documentation sidebar.
//!
//! Everything here is free of UI concerns so the same rules drive the
//! Dioxus components in `folio-ui` and any headless host.
//!
//! ## Key Types
//!
//! - [`SidebarItem`]: A node in the navigation tree (link or category)
//! - [`ExpansionState`]: Per-category open/closed map seeded from the active path
//! - [`SidebarVisibility`]: Responsive open/closed state machine owning the scroll lock
//! - [`ViewportClassifier`]: Maps a viewport width onto a [`ViewportTier`]
//! - [`ThemeConfig`] / [`ResolvedLogo`]: Theme settings consumed by the sidebar
//! - [`SiteConfig`]: `folio.toml` plus the sidebar trees it points at
//!
//! ## Content Models
//!
//! - [`blog`]: Blog post metadata, pagination, and blog sidebars
//! - [`showcase`]: Showcase site entries and the local-preview guard

pub mod blog;
pub mod config;
pub mod context;
pub mod error;
pub mod expansion;
pub mod paths;
pub mod preferences;
pub mod showcase;
pub mod sidebar;
pub mod theme;
pub mod viewport;
pub mod visibility;

pub use config::{SidebarsFile, SiteConfig, ViewportSettings};
pub use context::SiteContext;
pub use error::*;
pub use expansion::ExpansionState;
pub use paths::{has_protocol, is_internal_url, paths_equal, with_base_url};
pub use preferences::{MemoryPreferenceStore, PreferenceStore, UserPreferences};
pub use sidebar::{is_active, walk_tree, ItemKey, SidebarItem};
pub use theme::{ColorMode, LogoConfig, NavbarConfig, ResolvedLogo, ThemeConfig};
pub use viewport::{ScrollPosition, ViewportClassifier, ViewportTier, DESKTOP_MIN_WIDTH};
pub use visibility::{
    CountingScrollLock, LockStats, ScrollLock, SidebarVisibility, Transition, Visibility, VisibilityEvent,
};

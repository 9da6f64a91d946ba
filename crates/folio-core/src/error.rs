//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

use crate::sidebar::ItemKey;

/// Top-level error type for Folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Showcase error: {0}")]
    Showcase(#[from] ShowcaseError),

    #[error("Blog error: {0}")]
    Blog(#[from] BlogError),
}

/// Errors raised while loading site configuration and sidebar trees
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown sidebar '{id}' (available: {available})")]
    UnknownSidebar { id: String, available: String },

    #[error("Sidebar '{sidebar}' item {key} has an empty label")]
    EmptyLabel { sidebar: String, key: ItemKey },

    #[error("Sidebar '{sidebar}' link {key} ('{label}') has an empty href")]
    EmptyHref {
        sidebar: String,
        key: ItemKey,
        label: String,
    },

    #[error("Viewport desktop_min_width must be positive")]
    InvalidBreakpoint,
}

/// Build-time validation errors for showcase data
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error(
        "Showcase site '{title}' uses a remote preview image ({preview}); previews must be local assets"
    )]
    RemotePreview { title: String, preview: String },

    #[error("Showcase site at {website} has an empty title")]
    EmptyTitle { website: String },
}

/// Errors related to blog pagination
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("posts_per_page must be at least 1")]
    InvalidPostsPerPage,
}

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

//! Folio docs viewer
//!
//! A Dioxus desktop host for the Folio sidebar: loads a site from its
//! `folio.toml`, renders the chosen sidebar next to a page pane, and
//! persists user preferences between runs. `folio-docs check` validates a
//! site without opening a window.

pub mod app;
pub mod cli;
pub mod prefs;
pub mod site;

pub use app::{launch, LaunchData};
pub use cli::{Cli, Command};
pub use prefs::{default_prefs_path, JsonPreferenceStore};
pub use site::{check, first_doc_path, page_title, CheckReport, DocsSite};

//! Desktop docs viewer.

use std::path::PathBuf;
use std::sync::OnceLock;

use dioxus::prelude::*;
use folio_core::{PreferenceStore, SidebarItem, SiteConfig};
use folio_logging::PageContextGuard;
use folio_ui::{DocSidebar, SIDEBAR_CSS};
use tracing::{debug, info};
use uuid::Uuid;

use crate::prefs::JsonPreferenceStore;
use crate::site::page_title;

const APP_CSS: &str = include_str!("../assets/app.css");

/// Site data handed from the CLI to the window.
static LAUNCH: OnceLock<LaunchData> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchData {
    pub config: SiteConfig,
    pub sidebar_id: String,
    pub sidebar: Vec<SidebarItem>,
    pub initial_path: String,
    pub prefs_path: PathBuf,
    pub session_id: Uuid,
}

/// Open the viewer window; returns when it closes.
pub fn launch(data: LaunchData) -> anyhow::Result<()> {
    let title = format!("{} - Folio", data.config.title);
    info!(
        sidebar = %data.sidebar_id,
        path = %data.initial_path,
        session = %data.session_id,
        "opening docs viewer"
    );
    LAUNCH
        .set(data)
        .map_err(|_| anyhow::anyhow!("docs viewer is already running"))?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 860))
                        .with_resizable(true),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    SIDEBAR_CSS, APP_CSS
                )),
        )
        .launch(RootApp);
    Ok(())
}

#[component]
fn RootApp() -> Element {
    match LAUNCH.get() {
        Some(data) => rsx! {
            DocsShell { data: data.clone() }
        },
        None => rsx! {
            div { class: "docs-error", "No site loaded." }
        },
    }
}

/// Sidebar plus page pane. The current path is the whole router: sidebar
/// links and the logo set it, the page pane reads it.
#[component]
pub fn DocsShell(data: LaunchData) -> Element {
    let mut current_path = use_signal(|| data.initial_path.clone());
    let mut prefs = use_signal(|| JsonPreferenceStore::load(data.prefs_path.clone()));

    let preferences = prefs.read().preferences();
    let site = data.config.site_context(preferences.clone());
    let session_id = data.session_id;
    let path = current_path();
    let title = page_title(&data.sidebar, &path).unwrap_or_else(|| path.clone());
    let collapsed = site.theme.hideable_sidebar && preferences.sidebar_collapsed;

    let on_navigate = move |target: String| {
        let _page = PageContextGuard::new(target.clone(), session_id);
        let _span = PageContextGuard::span().entered();
        debug!(path = %target, "navigating");
        current_path.set(target);
    };

    rsx! {
        div { class: "docs-root",
            if !preferences.announcement_bar_closed {
                div { class: "announcement-bar", role: "banner",
                    span { class: "announcement-bar__content", "Welcome to {data.config.title}" }
                    button {
                        r#type: "button",
                        class: "announcement-bar__close",
                        aria_label: "Close",
                        onclick: move |_| prefs.write().set_announcement_bar_closed(true),
                        "×"
                    }
                }
            }
            div { class: "docs-wrapper",
                aside { class: if collapsed { "docs-sidebar-container docs-sidebar-container--hidden" } else { "docs-sidebar-container" },
                    DocSidebar {
                        key: "{data.sidebar_id}",
                        path: path.clone(),
                        sidebar: data.sidebar.clone(),
                        site: site.clone(),
                        on_navigate,
                        collapsible: site.theme.sidebar_collapsible,
                        on_collapse: move |_| prefs.write().set_sidebar_collapsed(true),
                        is_hidden: collapsed,
                    }
                    if collapsed {
                        button {
                            r#type: "button",
                            class: "expand-sidebar-button",
                            title: "Expand sidebar",
                            aria_label: "Expand sidebar",
                            onclick: move |_| prefs.write().set_sidebar_collapsed(false),
                            "›"
                        }
                    }
                }
                main { class: "docs-main",
                    article { class: "docs-page",
                        h1 { "{title}" }
                        p { class: "docs-page__path",
                            code { "{path}" }
                        }
                    }
                }
            }
        }
    }
}

//! The documentation sidebar.

use dioxus::prelude::*;
use folio_core::{
    ExpansionState, ItemKey, SidebarItem, SidebarVisibility, SiteContext, VisibilityEvent,
};
use tracing::debug;

use crate::classes::{menu_class, sidebar_class};
use crate::collapse_button::CollapseSidebarButton;
use crate::hooks::{use_scroll_position, use_viewport_tier};
use crate::icons::MenuIcon;
use crate::logo::SidebarLogo;
use crate::scroll_lock::DocumentScrollLock;
use crate::sidebar_item::DocSidebarItem;

const BLUR_ACTIVE_ELEMENT_JS: &str =
    "if (document.activeElement) { document.activeElement.blur(); }";

/// Nested, collapsible docs menu highlighting the page at `path`.
///
/// On narrow viewports the menu is an overlay opened with a toggle button;
/// the body scroll lock is held exactly while it is open. Category
/// expansion is seeded from `path` when the sidebar mounts, so hosts
/// switching to a different tree should give it a new `key`.
#[component]
pub fn DocSidebar(
    path: String,
    sidebar: Vec<SidebarItem>,
    site: SiteContext,
    on_navigate: EventHandler<String>,
    #[props(default = true)]
    collapsible: bool,
    #[props(default)]
    on_collapse: Option<EventHandler<()>>,
    #[props(default)]
    is_hidden: bool,
) -> Element {
    let mut visibility = use_signal(|| SidebarVisibility::new(DocumentScrollLock::new()));
    let expansion = use_signal(|| ExpansionState::seed(&sidebar, &path));
    let tier = use_viewport_tier(site.viewport);
    let scroll = use_scroll_position();

    use_effect(move || {
        let current = tier();
        visibility
            .write()
            .apply(VisibilityEvent::ViewportChanged(current));
    });

    use_drop(move || {
        if let Ok(mut visibility) = visibility.try_write() {
            visibility.release();
        }
    });

    let is_open = visibility.read().is_open();
    let with_announcement_bar =
        !site.preferences.announcement_bar_closed && scroll.read().is_at_top();

    let on_item_click = use_callback(move |_: ()| {
        document::eval(BLUR_ACTIVE_ELEMENT_JS);
        let transition = visibility
            .write()
            .apply(VisibilityEvent::InternalLinkClicked);
        debug!(?transition, "sidebar link clicked");
    });

    rsx! {
        div { class: "{sidebar_class(is_hidden)}",
            if site.shows_sidebar_logo() {
                SidebarLogo { logo: site.logo.clone(), on_navigate }
            }
            nav {
                class: "{menu_class(is_open, with_announcement_bar)}",
                aria_label: "Docs sidebar",
                button {
                    r#type: "button",
                    class: "button button--secondary button--sm menu__button",
                    aria_label: if is_open { "Close Menu" } else { "Open Menu" },
                    aria_haspopup: "true",
                    onclick: move |_| {
                        visibility.write().apply(VisibilityEvent::Toggle);
                    },
                    if is_open {
                        span { class: "sidebar__menu-icon sidebar__menu-close-icon", "×" }
                    } else {
                        MenuIcon {}
                    }
                }
                ul { class: "menu__list",
                    for (idx, item) in sidebar.iter().enumerate() {
                        DocSidebarItem {
                            key: "{idx}",
                            item: item.clone(),
                            item_key: ItemKey::root(idx),
                            active_path: path.clone(),
                            collapsible,
                            expansion,
                            on_item_click,
                            on_navigate,
                        }
                    }
                }
            }
            if site.theme.hideable_sidebar {
                if let Some(on_collapse) = on_collapse {
                    CollapseSidebarButton { on_collapse }
                }
            }
        }
    }
}

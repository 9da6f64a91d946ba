//! Sidebar entries: categories render as disclosures, links as anchors.

use dioxus::prelude::*;
use folio_core::{is_active, is_internal_url, paths_equal, ExpansionState, ItemKey, SidebarItem};

use crate::classes::{category_item_class, category_label_class, link_class};
use crate::icons::ExternalLinkIcon;

/// Dispatch on the item kind. Categories without children render nothing.
#[component]
pub fn DocSidebarItem(
    item: SidebarItem,
    item_key: ItemKey,
    active_path: String,
    collapsible: bool,
    expansion: Signal<ExpansionState>,
    on_item_click: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    if item.is_empty_category() {
        return rsx! {};
    }

    match item {
        SidebarItem::Category { label, items } => rsx! {
            SidebarCategory {
                label,
                items,
                item_key,
                active_path,
                collapsible,
                expansion,
                on_item_click,
                on_navigate,
            }
        },
        SidebarItem::Link { label, href } => rsx! {
            SidebarLink {
                label,
                href,
                active_path,
                on_item_click,
                on_navigate,
            }
        },
    }
}

#[component]
fn SidebarCategory(
    label: String,
    items: Vec<SidebarItem>,
    item_key: ItemKey,
    active_path: String,
    collapsible: bool,
    expansion: Signal<ExpansionState>,
    on_item_click: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    let mut expansion = expansion;
    let active = items.iter().any(|child| is_active(child, &active_path));
    let is_open = expansion.read().is_expanded(&item_key);
    let toggle_key = item_key.clone();

    let children = rsx! {
        ul { class: "menu__list",
            for (idx, child) in items.iter().enumerate() {
                DocSidebarItem {
                    key: "{idx}",
                    item: child.clone(),
                    item_key: item_key.child(idx),
                    active_path: active_path.clone(),
                    collapsible,
                    expansion,
                    on_item_click,
                    on_navigate,
                }
            }
        }
    };

    if !collapsible {
        return rsx! {
            li { class: "{category_item_class(active)}",
                div { class: "{category_label_class(active)}", "{label}" }
                {children}
            }
        };
    }

    rsx! {
        li { class: "{category_item_class(active)}",
            details {
                class: "menu__details",
                open: is_open,
                summary {
                    class: "{category_label_class(active)}",
                    // The native widget flips itself; keep the map in step
                    onclick: move |_| {
                        expansion.write().toggle(&toggle_key);
                    },
                    "{label}"
                }
                {children}
            }
        }
    }
}

/// Internal links navigate in-app and close the responsive menu; external
/// links open in a new browsing context.
#[component]
fn SidebarLink(
    label: String,
    href: String,
    active_path: String,
    on_item_click: EventHandler<()>,
    on_navigate: EventHandler<String>,
) -> Element {
    if !is_internal_url(&href) {
        return rsx! {
            li { class: "menu__list-item",
                a {
                    class: "menu__link",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{label}"
                    ExternalLinkIcon {}
                }
            }
        };
    }

    let active = paths_equal(&href, &active_path);
    let target = href.clone();

    rsx! {
        li { class: "menu__list-item",
            a {
                class: "{link_class(active)}",
                href: "{href}",
                aria_current: if active { Some("page") } else { None },
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(target.clone());
                    on_item_click.call(());
                },
                "{label}"
            }
        }
    }
}

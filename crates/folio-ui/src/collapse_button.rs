//! Button that asks the host to hide the whole sidebar.

use dioxus::prelude::*;

use crate::icons::CollapseArrowIcon;

/// The sidebar keeps no collapsed state; `on_collapse` reports the request
/// to whoever owns that preference.
#[component]
pub fn CollapseSidebarButton(on_collapse: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            title: "Collapse sidebar",
            aria_label: "Collapse sidebar",
            class: "button button--secondary button--outline collapse-sidebar-button",
            onclick: move |_| on_collapse.call(()),
            CollapseArrowIcon {}
        }
    }
}

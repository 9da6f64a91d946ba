//! Site logo shown at the top of the sidebar when the navbar hides on scroll.

use dioxus::prelude::*;
use folio_core::{is_internal_url, ResolvedLogo};

#[component]
pub fn SidebarLogo(logo: ResolvedLogo, on_navigate: EventHandler<String>) -> Element {
    let internal = logo.link_target.is_none() && is_internal_url(&logo.link);
    let link = logo.link.clone();

    rsx! {
        a {
            class: "navbar__brand sidebar__logo",
            href: "{logo.link}",
            tabindex: "-1",
            target: logo.link_target.clone(),
            rel: logo.link_rel.clone(),
            onclick: move |evt: MouseEvent| {
                if internal {
                    evt.prevent_default();
                    on_navigate.call(link.clone());
                }
            },
            if let Some(src) = &logo.image_url {
                img { class: "navbar__logo", src: "{src}", alt: "{logo.alt}" }
            }
            if let Some(title) = &logo.title {
                strong { class: "navbar__title", "{title}" }
            }
        }
    }
}

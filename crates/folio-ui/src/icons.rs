//! Inline SVG icons used by the sidebar.

use dioxus::prelude::*;

/// Hamburger glyph for the closed responsive menu.
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 30 30",
            role: "img",
            "focusable": "false",
            path {
                stroke: "currentColor",
                stroke_linecap: "round",
                stroke_miterlimit: "10",
                stroke_width: "2",
                d: "M4 7h22M4 15h22M4 23h22",
            }
        }
    }
}

#[component]
pub fn CollapseArrowIcon() -> Element {
    rsx! {
        svg {
            class: "collapse-sidebar-button__icon",
            width: "20",
            height: "20",
            view_box: "0 0 256 512",
            role: "img",
            "focusable": "false",
            path {
                fill: "currentColor",
                d: "M31.7 239l136-136c9.4-9.4 24.6-9.4 33.9 0l22.6 22.6c9.4 9.4 9.4 24.6 0 33.9L127.9 256l96.4 96.4c9.4 9.4 9.4 24.6 0 33.9L201.7 409c-9.4 9.4-24.6 9.4-33.9 0l-136-136c-9.5-9.4-9.5-24.6-.1-34z",
            }
        }
    }
}

/// Marks links that leave the site.
#[component]
pub fn ExternalLinkIcon() -> Element {
    rsx! {
        svg {
            class: "external-link-icon",
            width: "13.5",
            height: "13.5",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                fill: "currentColor",
                d: "M21 13v10h-21v-19h12v2h-10v15h17v-8h2zm3-12h-10.988l4.035 4-6.977 7.07 2.828 2.828 6.977-7.07 4.125 4.172v-11z",
            }
        }
    }
}

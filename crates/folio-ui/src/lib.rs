//! Documentation sidebar components for Folio sites.
//!
//! Renders a sidebar tree as a nested, collapsible menu that highlights the
//! active page, turns into a toggled overlay on narrow viewports, and holds
//! a body scroll lock while that overlay is open.

pub mod classes;
pub mod collapse_button;
pub mod doc_sidebar;
pub mod hooks;
pub mod icons;
pub mod logo;
pub mod scroll_lock;
pub mod sidebar_item;

pub use collapse_button::CollapseSidebarButton;
pub use doc_sidebar::DocSidebar;
pub use hooks::{use_scroll_position, use_viewport_tier};
pub use logo::SidebarLogo;
pub use scroll_lock::DocumentScrollLock;
pub use sidebar_item::DocSidebarItem;

/// Sidebar styles: menu layout, responsive overlay, active states.
pub const SIDEBAR_CSS: &str = include_str!("../assets/sidebar.css");

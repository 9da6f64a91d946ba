//! Sidebar navigation tree and the active-path matcher.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::paths::paths_equal;

/// A node in the sidebar navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// A navigable entry.
    Link { label: String, href: String },
    /// An expandable group of child items.
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        SidebarItem::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        SidebarItem::Category {
            label: label.into(),
            items,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SidebarItem::Link { label, .. } | SidebarItem::Category { label, .. } => label,
        }
    }

    /// Categories without children are never rendered.
    pub fn is_empty_category(&self) -> bool {
        matches!(self, SidebarItem::Category { items, .. } if items.is_empty())
    }

    /// Visit every node depth-first in sequence order, parents before children.
    pub fn walk<'a>(&'a self, key: ItemKey, visit: &mut impl FnMut(&ItemKey, &'a SidebarItem)) {
        visit(&key, self);
        if let SidebarItem::Category { items, .. } = self {
            for (idx, child) in items.iter().enumerate() {
                child.walk(key.child(idx), visit);
            }
        }
    }
}

/// Whether `item`, or for a category any of its descendants, is the page at
/// `active_path`.
pub fn is_active(item: &SidebarItem, active_path: &str) -> bool {
    match item {
        SidebarItem::Link { href, .. } => paths_equal(href, active_path),
        SidebarItem::Category { items, .. } => {
            items.iter().any(|child| is_active(child, active_path))
        }
    }
}

/// Visit every node of a whole tree, keyed from its root index.
pub fn walk_tree<'a>(items: &'a [SidebarItem], mut visit: impl FnMut(&ItemKey, &'a SidebarItem)) {
    for (idx, item) in items.iter().enumerate() {
        item.walk(ItemKey::root(idx), &mut visit);
    }
}

/// Identity of a node: the child index at every level from the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(Vec<usize>);

impl ItemKey {
    pub fn root(index: usize) -> Self {
        ItemKey(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        ItemKey(path)
    }

    /// Nesting depth; root items are at depth 0.
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for ItemKey {
    fn from(path: Vec<usize>) -> Self {
        ItemKey(path)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<SidebarItem> {
        vec![
            SidebarItem::link("Intro", "/docs/intro"),
            SidebarItem::category(
                "Guides",
                vec![
                    SidebarItem::link("A", "/docs/guides/a"),
                    SidebarItem::category(
                        "Advanced",
                        vec![SidebarItem::link("Deep", "/docs/guides/advanced/deep")],
                    ),
                ],
            ),
            SidebarItem::category("Empty", vec![]),
        ]
    }

    #[test]
    fn test_link_matches_exact_path() {
        let tree = sample_tree();
        assert!(is_active(&tree[0], "/docs/intro"));
        assert!(is_active(&tree[0], "/docs/intro/"));
        assert!(!is_active(&tree[0], "/docs/intro/more"));
    }

    #[test]
    fn test_category_matches_any_descendant() {
        let tree = sample_tree();
        assert!(is_active(&tree[1], "/docs/guides/a"));
        assert!(is_active(&tree[1], "/docs/guides/advanced/deep"));
        assert!(!is_active(&tree[1], "/docs/intro"));
    }

    #[test]
    fn test_empty_category_never_matches() {
        let tree = sample_tree();
        assert!(tree[2].is_empty_category());
        assert!(!is_active(&tree[2], "/docs/intro"));
        assert!(!tree[1].is_empty_category());
        assert!(!tree[0].is_empty_category());
    }

    #[test]
    fn test_walk_keys_in_order() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        walk_tree(&tree, |key, item| seen.push((key.to_string(), item.label().to_string())));
        assert_eq!(
            seen,
            vec![
                ("0".to_string(), "Intro".to_string()),
                ("1".to_string(), "Guides".to_string()),
                ("1.0".to_string(), "A".to_string()),
                ("1.1".to_string(), "Advanced".to_string()),
                ("1.1.0".to_string(), "Deep".to_string()),
                ("2".to_string(), "Empty".to_string()),
            ]
        );
    }

    #[test]
    fn test_item_key_depth() {
        assert_eq!(ItemKey::root(3).depth(), 0);
        assert_eq!(ItemKey::root(0).child(2).child(1).depth(), 2);
        assert_eq!(ItemKey::root(0).child(2).indices(), &[0, 2]);
    }

    #[test]
    fn test_deserialize_tagged_items() {
        let json = r#"[
            {"type": "link", "label": "Intro", "href": "/docs/intro"},
            {"type": "category", "label": "Guides", "items": [
                {"type": "link", "label": "A", "href": "/docs/guides/a"}
            ]},
            {"type": "category", "label": "Later"}
        ]"#;
        let items: Vec<SidebarItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], SidebarItem::link("Intro", "/docs/intro"));
        assert!(items[2].is_empty_category());
    }
}

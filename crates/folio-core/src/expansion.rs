//! Per-category expanded/collapsed state keyed by item identity.

use std::collections::HashMap;

use crate::sidebar::{is_active, walk_tree, ItemKey, SidebarItem};

/// Which categories are open.
///
/// Seeded once per mount: a category starts expanded exactly when it
/// contains the active page. After that only user toggles change it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpansionState {
    expanded: HashMap<ItemKey, bool>,
}

impl ExpansionState {
    pub fn seed(items: &[SidebarItem], active_path: &str) -> Self {
        let mut expanded = HashMap::new();
        walk_tree(items, |key, item| {
            if let SidebarItem::Category { .. } = item {
                expanded.insert(key.clone(), is_active(item, active_path));
            }
        });
        Self { expanded }
    }

    /// Unknown keys read as collapsed.
    pub fn is_expanded(&self, key: &ItemKey) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: ItemKey, open: bool) {
        self.expanded.insert(key, open);
    }

    /// Flip a category and return its new state.
    pub fn toggle(&mut self, key: &ItemKey) -> bool {
        let next = !self.is_expanded(key);
        self.expanded.insert(key.clone(), next);
        next
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|open| **open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<SidebarItem> {
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
            SidebarItem::category("API", vec![SidebarItem::link("Ref", "/docs/api")]),
        ]
    }

    #[test]
    fn test_seed_opens_active_ancestors_only() {
        let state = ExpansionState::seed(&tree(), "/docs/guides/advanced/deep");
        assert!(state.is_expanded(&ItemKey::root(1)));
        assert!(state.is_expanded(&ItemKey::root(1).child(1)));
        assert!(!state.is_expanded(&ItemKey::root(2)));
        assert_eq!(state.expanded_count(), 2);
    }

    #[test]
    fn test_seed_with_no_match_is_all_collapsed() {
        let state = ExpansionState::seed(&tree(), "/blog");
        assert_eq!(state.expanded_count(), 0);
    }

    #[test]
    fn test_toggle_and_set() {
        let mut state = ExpansionState::seed(&tree(), "/docs/intro");
        let key = ItemKey::root(2);
        assert!(state.toggle(&key));
        assert!(state.is_expanded(&key));
        assert!(!state.toggle(&key));
        state.set(key.clone(), true);
        assert!(state.is_expanded(&key));
    }

    #[test]
    fn test_unknown_key_is_collapsed() {
        let state = ExpansionState::seed(&tree(), "/docs/intro");
        assert!(!state.is_expanded(&ItemKey::root(42)));
    }
}

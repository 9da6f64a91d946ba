//! CSS class composition for sidebar elements.

/// Join `base` with every class whose flag is set.
pub fn class_list(base: &str, optional: &[(&str, bool)]) -> String {
    let mut classes = base.to_string();
    for (class, enabled) in optional {
        if *enabled {
            classes.push(' ');
            classes.push_str(class);
        }
    }
    classes
}

pub fn sidebar_class(is_hidden: bool) -> String {
    class_list("sidebar", &[("sidebar--hidden", is_hidden)])
}

/// The announcement bar offset only applies while the page is scrolled to
/// the very top.
pub fn menu_class(is_open: bool, with_announcement_bar: bool) -> String {
    class_list(
        "menu menu--responsive thin-scrollbar",
        &[
            ("menu--show", is_open),
            ("menu--with-announcement-bar", with_announcement_bar),
        ],
    )
}

pub fn link_class(is_active: bool) -> String {
    class_list("menu__link", &[("menu__link--active", is_active)])
}

pub fn category_label_class(is_active: bool) -> String {
    class_list(
        "menu__link menu__link--sublist",
        &[("menu__link--active", is_active)],
    )
}

pub fn category_item_class(is_active: bool) -> String {
    class_list(
        "menu__list-item menu__list-item--category",
        &[("menu__list-item--active", is_active)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        assert_eq!(class_list("a", &[]), "a");
        assert_eq!(class_list("a", &[("b", true), ("c", false), ("d", true)]), "a b d");
    }

    #[test]
    fn test_sidebar_class() {
        assert_eq!(sidebar_class(false), "sidebar");
        assert_eq!(sidebar_class(true), "sidebar sidebar--hidden");
    }

    #[test]
    fn test_menu_class() {
        assert_eq!(menu_class(false, false), "menu menu--responsive thin-scrollbar");
        assert_eq!(
            menu_class(true, true),
            "menu menu--responsive thin-scrollbar menu--show menu--with-announcement-bar"
        );
    }

    #[test]
    fn test_active_link_classes() {
        assert_eq!(link_class(false), "menu__link");
        assert_eq!(link_class(true), "menu__link menu__link--active");
        assert_eq!(
            category_label_class(true),
            "menu__link menu__link--sublist menu__link--active"
        );
        assert_eq!(
            category_item_class(false),
            "menu__list-item menu__list-item--category"
        );
    }
}

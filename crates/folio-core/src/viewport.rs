//! Viewport size tiers and scroll position as seen by the sidebar.

/// Widths above this many CSS pixels render the desktop sidebar.
pub const DESKTOP_MIN_WIDTH: f64 = 996.0;

/// Discrete viewport size class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportTier {
    /// Narrow viewport: the sidebar is a toggled overlay menu.
    Mobile,
    /// Wide viewport: the sidebar is always visible.
    #[default]
    Desktop,
}

impl ViewportTier {
    pub fn is_desktop(&self) -> bool {
        matches!(self, ViewportTier::Desktop)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportTier::Mobile => "mobile",
            ViewportTier::Desktop => "desktop",
        }
    }
}

/// Maps a viewport width onto a [`ViewportTier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportClassifier {
    pub desktop_min_width: f64,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self {
            desktop_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

impl ViewportClassifier {
    pub fn new(desktop_min_width: f64) -> Self {
        Self { desktop_min_width }
    }

    pub fn classify(&self, width: f64) -> ViewportTier {
        if width > self.desktop_min_width {
            ViewportTier::Desktop
        } else {
            ViewportTier::Mobile
        }
    }
}

/// Vertical scroll offset of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub y: f64,
}

impl ScrollPosition {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    pub fn is_at_top(&self) -> bool {
        self.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_breakpoint() {
        let classifier = ViewportClassifier::default();
        assert_eq!(classifier.classify(320.0), ViewportTier::Mobile);
        assert_eq!(classifier.classify(996.0), ViewportTier::Mobile);
        assert_eq!(classifier.classify(997.0), ViewportTier::Desktop);
        assert_eq!(classifier.classify(1920.0), ViewportTier::Desktop);
    }

    #[test]
    fn test_classify_custom_breakpoint() {
        let classifier = ViewportClassifier::new(600.0);
        assert_eq!(classifier.classify(601.0), ViewportTier::Desktop);
        assert_eq!(classifier.classify(600.0), ViewportTier::Mobile);
    }

    #[test]
    fn test_scroll_position_top() {
        assert!(ScrollPosition::default().is_at_top());
        assert!(!ScrollPosition::new(12.0).is_at_top());
    }
}

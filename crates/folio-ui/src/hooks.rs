//! Hooks bridging browser viewport and scroll events into signals.

use dioxus::prelude::*;
use folio_core::{ScrollPosition, ViewportClassifier, ViewportTier};
use tracing::{debug, warn};

const VIEWPORT_WATCH_JS: &str = r#"
    const report = () => dioxus.send(window.innerWidth);
    window.addEventListener('resize', report);
    report();
"#;

const SCROLL_WATCH_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

/// Current viewport tier, updated on every resize that changes it.
pub fn use_viewport_tier(classifier: ViewportClassifier) -> Signal<ViewportTier> {
    let tier = use_signal(ViewportTier::default);

    use_future(move || async move {
        let mut tier = tier;
        let mut watcher = document::eval(VIEWPORT_WATCH_JS);
        loop {
            match watcher.recv::<f64>().await {
                Ok(width) => {
                    let next = classifier.classify(width);
                    if *tier.peek() != next {
                        debug!(width, tier = next.as_str(), "viewport tier changed");
                        tier.set(next);
                    }
                }
                Err(err) => {
                    warn!(?err, "viewport watcher stopped");
                    break;
                }
            }
        }
    });

    tier
}

/// Page scroll offset, refreshed whenever it reaches or leaves the top.
pub fn use_scroll_position() -> Signal<ScrollPosition> {
    let position = use_signal(ScrollPosition::default);

    use_future(move || async move {
        let mut position = position;
        let mut watcher = document::eval(SCROLL_WATCH_JS);
        while let Ok(y) = watcher.recv::<f64>().await {
            if position.peek().is_at_top() != ScrollPosition::new(y).is_at_top() {
                position.set(ScrollPosition::new(y));
            }
        }
    });

    position
}

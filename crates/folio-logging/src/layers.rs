//! Custom tracing layers for Folio

use tracing::{span, Subscriber};
use tracing_subscriber::{
    layer::{Context, Layer},
    registry::LookupSpan,
};

use crate::context::{PageContextData, PageContextGuard};

/// Layer that attaches the active page context to new spans
///
/// Spans opened while a [`PageContextGuard`] is alive get a
/// [`PageContextExtension`] that downstream layers can read.
pub struct PageContextLayer;

impl PageContextLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PageContextLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension data stored on spans
#[derive(Debug, Clone)]
pub struct PageContextExtension {
    pub data: PageContextData,
}

impl<S> Layer<S> for PageContextLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, _attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            if let Some(page) = PageContextGuard::current() {
                span.extensions_mut()
                    .insert(PageContextExtension { data: page });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry::Registry;
    use uuid::Uuid;

    /// Reads back the extension the page layer stored.
    struct Probe(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl<S> Layer<S> for Probe
    where
        S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    {
        fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                if let Some(ext) = span.extensions().get::<PageContextExtension>() {
                    self.0.lock().unwrap().push(ext.data.path.clone());
                }
            }
        }
    }

    #[test]
    fn test_span_gets_page_extension() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let subscriber = Registry::default()
            .with(PageContextLayer::new())
            .with(Probe(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let _guard = PageContextGuard::new("/docs/guides/a", Uuid::new_v4());
            let span = tracing::info_span!("render");
            let _entered = span.enter();
        });

        assert_eq!(*seen.lock().unwrap(), vec!["/docs/guides/a".to_string()]);
    }
}

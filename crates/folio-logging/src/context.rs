//! Page context injection
//!
//! Thread-local record of the page currently on screen, so spans opened
//! while handling a page carry its path.

use std::cell::RefCell;

use uuid::Uuid;

/// Page context data stored in thread-local storage
#[derive(Debug, Clone, PartialEq)]
pub struct PageContextData {
    /// Path of the page being shown
    pub path: String,
    /// Identifier of this viewer session
    pub session_id: Uuid,
}

thread_local! {
    static PAGE_CONTEXT: RefCell<Option<PageContextData>> = const { RefCell::new(None) };
}

/// RAII guard for page context
///
/// Sets the page for the current thread and restores the previous one
/// when dropped.
///
/// ```ignore
/// use folio_logging::PageContextGuard;
///
/// let _guard = PageContextGuard::new("/docs/intro", session_id);
/// let _span = PageContextGuard::span().entered();
/// tracing::info!("rendering sidebar");
/// ```
pub struct PageContextGuard {
    previous: Option<PageContextData>,
}

impl PageContextGuard {
    pub fn new(path: impl Into<String>, session_id: Uuid) -> Self {
        let previous = PAGE_CONTEXT.with(|ctx| ctx.borrow().clone());
        let next = PageContextData {
            path: path.into(),
            session_id,
        };
        PAGE_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(next));
        Self { previous }
    }

    /// Get the current page context (if any)
    pub fn current() -> Option<PageContextData> {
        PAGE_CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    pub fn current_path() -> Option<String> {
        Self::current().map(|ctx| ctx.path)
    }

    /// A span recording the current page, or a disabled span when unset.
    pub fn span() -> tracing::Span {
        match Self::current() {
            Some(ctx) => tracing::info_span!(
                "page",
                path = %ctx.path,
                session = %ctx.session_id
            ),
            None => tracing::Span::none(),
        }
    }
}

impl Drop for PageContextGuard {
    fn drop(&mut self) {
        PAGE_CONTEXT.with(|ctx| *ctx.borrow_mut() = self.previous.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_context_guard() {
        assert!(PageContextGuard::current().is_none());
        let session = Uuid::new_v4();
        {
            let _guard = PageContextGuard::new("/docs/intro", session);
            let ctx = PageContextGuard::current().unwrap();
            assert_eq!(ctx.path, "/docs/intro");
            assert_eq!(ctx.session_id, session);
        }
        assert!(PageContextGuard::current().is_none());
    }

    #[test]
    fn test_nested_contexts_restore() {
        let session = Uuid::new_v4();
        {
            let _outer = PageContextGuard::new("/docs/a", session);
            {
                let _inner = PageContextGuard::new("/docs/b", session);
                assert_eq!(PageContextGuard::current_path().as_deref(), Some("/docs/b"));
            }
            assert_eq!(PageContextGuard::current_path().as_deref(), Some("/docs/a"));
        }
        assert!(PageContextGuard::current_path().is_none());
    }

    #[test]
    fn test_span_without_context_is_disabled() {
        assert!(PageContextGuard::span().is_none());
    }
}

//! Page contexts are per thread and unwind in guard order.

use std::sync::{Arc, Barrier};
use std::thread;

use folio_logging::PageContextGuard;
use uuid::Uuid;

#[test]
fn test_contexts_are_thread_local() {
    const NUM_THREADS: usize = 8;

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|idx| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let path = format!("/docs/page-{idx}");
                let _guard = PageContextGuard::new(path.clone(), Uuid::new_v4());

                // Every thread holds its guard at the same time
                barrier.wait();
                assert_eq!(PageContextGuard::current_path(), Some(path));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(PageContextGuard::current().is_none());
}

#[test]
fn test_navigation_sequence_restores_previous_page() {
    let session = Uuid::new_v4();
    let _root = PageContextGuard::new("/", session);

    for path in ["/docs/intro", "/docs/guides/a", "/docs/cli"] {
        let _page = PageContextGuard::new(path, session);
        assert_eq!(PageContextGuard::current_path().as_deref(), Some(path));
    }

    let ctx = PageContextGuard::current().unwrap();
    assert_eq!(ctx.path, "/");
    assert_eq!(ctx.session_id, session);
}

#[test]
fn test_testing_subscriber_installs_once() {
    folio_logging::init_testing();
    // Already installed; must not panic or replace it
    folio_logging::init_testing();

    let _guard = PageContextGuard::new("/docs/logging", Uuid::new_v4());
    let _span = PageContextGuard::span().entered();
    tracing::warn!("page context attached");
    assert_eq!(
        PageContextGuard::current_path().as_deref(),
        Some("/docs/logging")
    );
}

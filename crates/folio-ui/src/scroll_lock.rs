//! Body scroll lock backed by the host document.

use dioxus::prelude::*;
use folio_core::ScrollLock;

/// Suppresses page scrolling by toggling `overflow` on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScrollLock;

impl DocumentScrollLock {
    pub fn new() -> Self {
        Self
    }
}

impl ScrollLock for DocumentScrollLock {
    fn lock(&mut self) {
        document::eval("document.body.style.overflow = 'hidden';");
    }

    fn unlock(&mut self) {
        document::eval("document.body.style.overflow = 'visible';");
    }
}

//! Responsive sidebar visibility and the body scroll lock it holds.
//!
//! On narrow viewports the sidebar is an overlay menu with an explicit
//! open/close control. While the overlay is open the page underneath must
//! not scroll, so [`SidebarVisibility`] owns a [`ScrollLock`] and keeps
//! acquisition and release strictly paired with the `Open` interval.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::viewport::ViewportTier;

/// Page-level scroll suppression.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Responsive menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(&self) -> bool {
        matches!(self, Visibility::Open)
    }
}

/// Inputs that can change [`Visibility`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The menu open/close control was activated.
    Toggle,
    /// An internal navigation link inside the menu was clicked.
    InternalLinkClicked,
    /// The viewport was (re)classified.
    ViewportChanged(ViewportTier),
}

/// What an event did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

/// Open/closed state machine for the responsive sidebar.
pub struct SidebarVisibility<L: ScrollLock> {
    state: Visibility,
    last_tier: Option<ViewportTier>,
    lock: L,
    lock_held: bool,
}

impl<L: ScrollLock> SidebarVisibility<L> {
    /// Starts closed with the lock released.
    pub fn new(lock: L) -> Self {
        Self {
            state: Visibility::Closed,
            last_tier: None,
            lock,
            lock_held: false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_lock_held(&self) -> bool {
        self.lock_held
    }

    pub fn scroll_lock(&self) -> &L {
        &self.lock
    }

    pub fn apply(&mut self, event: VisibilityEvent) -> Transition {
        let transition = match (event, self.state) {
            (VisibilityEvent::Toggle, Visibility::Closed) => self.open(),
            (VisibilityEvent::Toggle, Visibility::Open) => self.close(),
            (VisibilityEvent::InternalLinkClicked, Visibility::Open) => self.close(),
            (VisibilityEvent::InternalLinkClicked, Visibility::Closed) => Transition::Unchanged,
            (VisibilityEvent::ViewportChanged(tier), _) => {
                let previous = self.last_tier.replace(tier);
                if tier.is_desktop() && previous != Some(ViewportTier::Desktop) {
                    self.close()
                } else {
                    Transition::Unchanged
                }
            }
        };
        if transition != Transition::Unchanged {
            debug!(?event, ?transition, "sidebar visibility changed");
        }
        transition
    }

    /// Close and drop the lock; used when the owning component unmounts.
    pub fn release(&mut self) {
        self.close();
    }

    fn open(&mut self) -> Transition {
        if self.state.is_open() {
            return Transition::Unchanged;
        }
        self.state = Visibility::Open;
        if !self.lock_held {
            self.lock.lock();
            self.lock_held = true;
        }
        Transition::Opened
    }

    fn close(&mut self) -> Transition {
        if self.lock_held {
            self.lock.unlock();
            self.lock_held = false;
        }
        if !self.state.is_open() {
            return Transition::Unchanged;
        }
        self.state = Visibility::Closed;
        Transition::Closed
    }
}

impl<L: ScrollLock> Drop for SidebarVisibility<L> {
    fn drop(&mut self) {
        if self.lock_held {
            self.lock.unlock();
            self.lock_held = false;
        }
    }
}

/// Lock/unlock counters shared between a [`CountingScrollLock`] and its clones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockStats {
    pub locks: usize,
    pub unlocks: usize,
}

impl LockStats {
    pub fn is_locked(&self) -> bool {
        self.locks > self.unlocks
    }
}

/// A scroll lock that only records calls; for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct CountingScrollLock {
    stats: Rc<RefCell<LockStats>>,
}

impl CountingScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> LockStats {
        *self.stats.borrow()
    }
}

impl ScrollLock for CountingScrollLock {
    fn lock(&mut self) {
        self.stats.borrow_mut().locks += 1;
    }

    fn unlock(&mut self) {
        self.stats.borrow_mut().unlocks += 1;
    }
}

//! Shared theme store with an explicit subscriber list.
//!
//! One store is created per page tree and injected into it at mount time;
//! it lives exactly as long as the tree and is never persisted. All
//! subscribers are notified synchronously inside [`ThemeStore::set`], so
//! by the time `set` returns no renderer can observe a stale value.
//!
//! The model is single-threaded and cooperative (`Rc` + interior
//! mutability, no locks): the only writer is the toggle control, and
//! everything else holds a read-only view by convention.

use crate::theme::Theme;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(Theme)>;

/// Single owner of the current [`Theme`] value.
pub struct ThemeStore {
    current: Cell<Theme>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    /// Create a store holding `initial`.
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// The current theme. No side effects; repeated calls without an
    /// intervening [`set`](Self::set) return the identical value.
    pub fn get(&self) -> Theme {
        self.current.get()
    }

    /// Replace the current value and synchronously notify every
    /// subscriber before returning.
    ///
    /// Notification order among subscribers is unspecified; subscribers
    /// must not depend on it. Callbacks may subscribe or unsubscribe
    /// while a notification cycle is in flight; such changes take effect
    /// from the next cycle.
    pub fn set(&self, next: Theme) {
        let previous = self.current.replace(next);
        if previous != next {
            debug!(from = %previous, to = %next, "theme changed");
        }

        // Snapshot the list so callbacks can touch subscriptions without
        // re-entering the borrow.
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in snapshot {
            callback(next);
        }
    }

    /// Invert the current value. This is the toggle control's entire
    /// contract: read, flip, set.
    pub fn toggle(&self) {
        self.set(self.get().flip());
    }

    /// Register a callback invoked on every [`set`](Self::set).
    pub fn subscribe(&self, callback: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

//! Position-changed notification.
//!
//! Listeners carry no payload: they are told that the position changed and
//! query the carousel for the current state. Delivery is synchronous and in
//! subscription order. The registry is snapshotted before delivery, so a
//! listener may subscribe, unsubscribe or focus another item while being
//! notified.

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
pub struct PositionListeners {
    next_id: Cell<u64>,
    entries: RefCell<IndexMap<ListenerId, Listener>>,
}

impl PositionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().insert(id, Rc::new(listener));
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        self.entries.borrow_mut().shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn notify(&self) {
        let snapshot: SmallVec<[Listener; 4]> =
            self.entries.borrow().values().cloned().collect();
        for listener in snapshot {
            listener();
        }
    }
}

impl std::fmt::Debug for PositionListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct PositionSubscription {
    registry: Weak<PositionListeners>,
    id: Option<ListenerId>,
}

impl PositionSubscription {
    pub(crate) fn new(registry: &Rc<PositionListeners>, id: ListenerId) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn cancel(mut self) {
        self.unsubscribe();
    }

    fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(id);
            }
        }
    }
}

impl Drop for PositionSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for PositionSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionSubscription")
            .field("id", &self.id)
            .finish()
    }
}

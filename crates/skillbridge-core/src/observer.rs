//! Subscriber list shared by the stores.
//!
//! Listeners are plain callbacks. They are invoked synchronously, in
//! subscription order, after the internal lock has been released, so a
//! listener may read the store it observes or (un)subscribe from inside the
//! callback.
//!
//! Stores take a [`NotifyTurn`] while still holding their state write lock.
//! Turns are handed out one at a time, so listeners see snapshots in the
//! order the mutations were applied even when several threads mutate at
//! once. A listener must not mutate the store that is notifying it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifier handed out by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered list of state listeners.
pub struct Subscribers<T> {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener<T>)>>,
    turn: Mutex<()>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
            turn: Mutex::new(()),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener that fires on every notification.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, Arc::new(listener)));
        id
    }

    /// Registers a listener that only fires when the selected slice changes.
    ///
    /// `initial` is the slice as it is right now; the first notification that
    /// selects an equal value stays silent.
    pub fn subscribe_slice<S, Sel, F>(
        &self,
        initial: S,
        selector: Sel,
        listener: F,
    ) -> SubscriptionId
    where
        T: 'static,
        S: PartialEq + Send + 'static,
        Sel: Fn(&T) -> S + Send + Sync + 'static,
        F: Fn(&S) + Send + Sync + 'static,
    {
        let last = Mutex::new(initial);
        self.subscribe(move |state: &T| {
            let next = selector(state);
            let mut last = last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if *last != next {
                listener(&next);
                *last = next;
            }
        })
    }

    /// Removes a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every listener with `state`.
    pub fn notify(&self, state: &T) {
        let snapshot: Vec<Listener<T>> = self
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(state);
        }
    }

    /// Waits until no other notification is running and reserves the next
    /// one.
    pub fn turn(&self) -> NotifyTurn<'_, T> {
        let guard = self
            .turn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        NotifyTurn {
            subscribers: self,
            _guard: guard,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener<T>)>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Exclusive right to deliver the next snapshot.
pub struct NotifyTurn<'a, T> {
    subscribers: &'a Subscribers<T>,
    _guard: MutexGuard<'a, ()>,
}

impl<T> NotifyTurn<'_, T> {
    pub fn notify(self, state: &T) {
        self.subscribers.notify(state);
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

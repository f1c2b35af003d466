//! Shared selection state.
//!
//! Single process-wide holder of the selected hunter and the fetched
//! collection. Every screen shares one store; the remote client is the only
//! writer. There is one in-memory copy behind a lock and subscriber
//! notification is synchronous, so any read after a write observes the new
//! value immediately.
//!
//! Overlapping async operations are not sequenced by the store. When two
//! collection fetches race, whichever response completes last determines the
//! final collection.

use std::sync::{Arc, RwLock};

use parking_lot::Mutex;

use crate::hunter::Hunter;

/// Change notification passed to subscribers after each write.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The selected hunter was replaced (possibly cleared).
    SelectedChanged(Option<Hunter>),
    /// The collection was replaced wholesale.
    CollectionReplaced(Vec<Hunter>),
}

/// Handle returned by [`SelectionStore::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Callback = Box<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Default)]
struct State {
    selected: Option<Hunter>,
    collection: Vec<Hunter>,
}

#[derive(Default)]
struct Subscribers {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Callback)>,
}

/// Thread-safe selection state with synchronous change notification.
///
/// Cheap to clone; all clones share the same underlying state. Created once
/// at application start and kept for the process lifetime.
#[derive(Clone, Default)]
pub struct SelectionStore {
    state: Arc<RwLock<State>>,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected hunter, if any.
    pub fn selected(&self) -> Option<Hunter> {
        self.state
            .read()
            .expect("selection lock poisoned")
            .selected
            .clone()
    }

    /// Replace the selected hunter and notify subscribers synchronously.
    pub fn set_selected(&self, hunter: Option<Hunter>) {
        {
            let mut state = self.state.write().expect("selection lock poisoned");
            state.selected = hunter.clone();
        }
        self.notify(&StoreEvent::SelectedChanged(hunter));
    }

    /// The fetched collection, in server response order.
    pub fn collection(&self) -> Vec<Hunter> {
        self.state
            .read()
            .expect("selection lock poisoned")
            .collection
            .clone()
    }

    /// Replace the collection wholesale and notify subscribers.
    ///
    /// No merge, no dedup, no sort: the server's response order is kept.
    pub fn set_collection(&self, items: Vec<Hunter>) {
        {
            let mut state = self.state.write().expect("selection lock poisoned");
            state.collection = items.clone();
        }
        self.notify(&StoreEvent::CollectionReplaced(items));
    }

    /// Case-insensitive substring match on hunter names, preserving the
    /// collection's order. An empty query matches everything.
    pub fn filter_collection(&self, query: &str) -> Vec<Hunter> {
        let needle = query.to_lowercase();
        self.state
            .read()
            .expect("selection lock poisoned")
            .collection
            .iter()
            .filter(|hunter| hunter.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Register a callback invoked synchronously after every write.
    ///
    /// Callbacks run on the writer's thread and must not subscribe or
    /// unsubscribe from within the callback.
    pub fn subscribe(
        &self,
        callback: impl Fn(&StoreEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut subs = self.subscribers.lock();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().entries.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, event: &StoreEvent) {
        let subs = self.subscribers.lock();
        for (_, callback) in &subs.entries {
            callback(event);
        }
    }
}

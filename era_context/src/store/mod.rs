//! Mindset store - holds the one mindset context the narrative is currently in.
//!
//! The store is owned by the narrative session and passed to collaborators
//! explicitly, usually as `Rc<RefCell<MindsetStore>>`. It holds at most one
//! context; setting a new one is a full swap, never a merge.

mod source;

pub use source::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mindset::{MindsetContext, MindsetId, MindsetSnapshot};

/// Unique identifier for change subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification sent to subscribers when the stored context changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MindsetChange {
    /// A context was swapped in, possibly over an existing one.
    Replaced {
        previous: Option<MindsetId>,
        current: MindsetId,
    },
    /// The stored context was removed.
    Cleared { previous: MindsetId },
}

type Listener = Box<dyn FnMut(&MindsetChange)>;

/// Single-slot store for the current mindset context.
///
/// Every operation is total: reading an empty store yields `None`, clearing
/// an empty store is a no-op.
#[derive(Default)]
pub struct MindsetStore {
    current: Option<MindsetContext>,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl MindsetStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a context.
    pub fn with_mindset(context: MindsetContext) -> Self {
        Self {
            current: Some(context),
            listeners: Vec::new(),
        }
    }

    /// Replace the stored context wholesale.
    pub fn set_mindset(&mut self, context: MindsetContext) {
        let change = MindsetChange::Replaced {
            previous: self.current.as_ref().map(|m| m.id),
            current: context.id,
        };

        tracing::info!(
            mindset = %context.id,
            year = context.year,
            era = context.era.as_deref().unwrap_or("-"),
            "Mindset replaced"
        );

        self.current = Some(context);
        self.notify(&change);
    }

    /// Get the stored context, or `None` if no era has been entered.
    pub fn current_mindset(&self) -> Option<&MindsetContext> {
        self.current.as_ref()
    }

    /// Get the year of the stored context.
    pub fn current_year(&self) -> Option<i32> {
        self.current.as_ref().map(|m| m.year)
    }

    /// Check if a context is stored.
    pub fn has_mindset(&self) -> bool {
        self.current.is_some()
    }

    /// Empty the store.
    pub fn clear_mindset(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::info!(mindset = %previous.id, "Mindset cleared");
            self.notify(&MindsetChange::Cleared {
                previous: previous.id,
            });
        }
    }

    /// Empty the store and drop every subscription without notifying.
    pub fn reset(&mut self) {
        self.current = None;
        self.listeners.clear();
    }

    /// Snapshot the stored context's year and unknown technology.
    pub fn snapshot(&self) -> Option<MindsetSnapshot> {
        self.current.as_ref().map(MindsetContext::snapshot)
    }

    /// Register a listener for context changes.
    ///
    /// Listeners run synchronously inside `set_mindset`/`clear_mindset` and
    /// must not reach back into the store.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&MindsetChange) + 'static,
    {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the subscription was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Get the number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, change: &MindsetChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl std::fmt::Debug for MindsetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MindsetStore")
            .field("current", &self.current)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_store() {
        let store = MindsetStore::new();
        assert!(store.current_mindset().is_none());
        assert!(store.current_year().is_none());
        assert!(store.snapshot().is_none());
        assert!(!store.has_mindset());
    }

    #[test]
    fn test_set_mindset_swaps_wholesale() {
        let mut store = MindsetStore::new();

        store.set_mindset(MindsetContext::new(1946).with_unknown("transistor"));
        store.set_mindset(MindsetContext::new(1971).with_unknown("internet"));

        let current = store.current_mindset().unwrap();
        assert_eq!(current.year, 1971);
        assert_eq!(current.unknown_technology, vec!["internet".to_string()]);
    }

    #[test]
    fn test_clear_mindset() {
        let mut store = MindsetStore::with_mindset(MindsetContext::new(1971));
        assert!(store.has_mindset());

        store.clear_mindset();
        assert!(store.current_mindset().is_none());

        // Clearing twice is harmless
        store.clear_mindset();
        assert!(store.current_mindset().is_none());
    }

    #[test]
    fn test_subscribers_receive_changes() {
        let mut store = MindsetStore::new();
        let seen: Rc<RefCell<Vec<MindsetChange>>> = Rc::default();

        let sink = seen.clone();
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        let first = MindsetContext::new(1946);
        let first_id = first.id;
        let second = MindsetContext::new(1971);
        let second_id = second.id;

        store.set_mindset(first);
        store.set_mindset(second);
        store.clear_mindset();
        store.clear_mindset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            MindsetChange::Replaced {
                previous: None,
                current: first_id
            }
        );
        assert_eq!(
            seen[1],
            MindsetChange::Replaced {
                previous: Some(first_id),
                current: second_id
            }
        );
        assert_eq!(
            seen[2],
            MindsetChange::Cleared {
                previous: second_id
            }
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = MindsetStore::new();
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_mindset(MindsetContext::new(1971));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_mindset(MindsetContext::new(1981));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut store = MindsetStore::with_mindset(MindsetContext::new(1971));
        let count = Rc::new(RefCell::new(0));

        let counter = count.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.reset();

        assert!(store.current_mindset().is_none());
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(*count.borrow(), 0);
    }
}

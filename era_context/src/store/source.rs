//! Mindset sources - where a consumer gets its evaluation year from.

use std::cell::RefCell;
use std::rc::Rc;

use super::MindsetStore;
use crate::mindset::{MindsetContext, MindsetSnapshot};

/// Supplies the current mindset to consumers that need a year.
///
/// Implementations return a detached snapshot so callers never hold a borrow
/// of the underlying store while they work.
pub trait MindsetSource {
    /// Snapshot the current mindset, or `None` if no era is active.
    fn snapshot(&self) -> Option<MindsetSnapshot>;
}

impl MindsetSource for MindsetStore {
    fn snapshot(&self) -> Option<MindsetSnapshot> {
        MindsetStore::snapshot(self)
    }
}

impl MindsetSource for Rc<RefCell<MindsetStore>> {
    fn snapshot(&self) -> Option<MindsetSnapshot> {
        // A store that is mutably borrowed (mid-notification) reads as empty.
        self.try_borrow().ok().and_then(|store| store.snapshot())
    }
}

impl MindsetSource for MindsetContext {
    fn snapshot(&self) -> Option<MindsetSnapshot> {
        Some(MindsetContext::snapshot(self))
    }
}

/// A source pinned to a single year with no unknown-technology vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl MindsetSource for FixedYear {
    fn snapshot(&self) -> Option<MindsetSnapshot> {
        Some(MindsetSnapshot::year_only(self.0))
    }
}

/// A source that never has a mindset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMindset;

impl MindsetSource for NoMindset {
    fn snapshot(&self) -> Option<MindsetSnapshot> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_store_source_follows_swaps() {
        let store = Rc::new(RefCell::new(MindsetStore::new()));
        let source: Box<dyn MindsetSource> = Box::new(store.clone());

        assert!(source.snapshot().is_none());

        store
            .borrow_mut()
            .set_mindset(MindsetContext::new(1971).with_unknown("internet"));
        let snapshot = source.snapshot().unwrap();
        assert_eq!(snapshot.year, 1971);
        assert!(snapshot.is_unknown("internet"));

        store.borrow_mut().clear_mindset();
        assert!(source.snapshot().is_none());
    }

    #[test]
    fn test_fixed_sources() {
        assert_eq!(FixedYear(1984).snapshot().unwrap().year, 1984);
        assert!(FixedYear(1984).snapshot().unwrap().unknown_technology.is_empty());
        assert!(NoMindset.snapshot().is_none());

        let context = MindsetContext::new(-44).with_unknown("clock");
        assert!(MindsetSource::snapshot(&context).unwrap().is_unknown("Clock"));
    }
}

//! Retired-slot storage for chronolist.
//!
//! The retired sequence is append-only and unbounded: compaction is out of
//! scope, so the store sits behind a trait that a pruning implementation
//! could satisfy later without touching the list itself.

use crate::slot::Slot;

/// Trait for retired-slot storage implementations.
///
/// Retirement order is the only order the store knows about; external list
/// indices mean nothing here. Non-temporal operations never read it.
pub trait HistoryStore<T> {
    /// Append a retired slot. Slots are never removed or reordered.
    fn record(&mut self, slot: Slot<T>);

    /// All retired slots, in retirement-append order.
    fn slots(&self) -> &[Slot<T>];

    /// Number of retired slots retained.
    fn len(&self) -> usize {
        self.slots().len()
    }

    fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }
}

/// In-memory retired-slot store backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory<T> {
    slots: Vec<Slot<T>>,
}

impl<T> MemoryHistory<T> {
    const RETAINED_WARN_THRESHOLD: usize = 100_000;

    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> HistoryStore<T> for MemoryHistory<T> {
    fn record(&mut self, slot: Slot<T>) {
        self.slots.push(slot);

        if self.slots.len() == Self::RETAINED_WARN_THRESHOLD {
            log::warn!(
                "Retired history has grown to {} slots and is never compacted. \
                 Long-lived lists with heavy churn retain every overwritten element.",
                self.slots.len()
            );
        }
    }

    fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }
}

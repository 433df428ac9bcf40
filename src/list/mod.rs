//! Core versioned list implementation.
//!
//! This module defines the main `ChronoList` type: an ordered container that
//! keeps every element it has ever held. Mutations act on the live sequence
//! and migrate overwritten or removed slots into the retired history, so the
//! list can later answer "what did I look like at instant X".

use crate::config::{Config, ListStats};
use crate::error::{ChronoListError, Result};
use crate::history::{HistoryStore, MemoryHistory};
use crate::slot::{self, Slot};

mod temporal;
mod views;

pub use views::Iter;

/// An ordered container that preserves the full history of its mutations.
///
/// Every insertion, removal, and replacement is timestamped. The current
/// contents behave like a conventional list; [`query_as_of`] reconstructs the
/// apparent contents at any past instant.
///
/// Not thread-safe by design: the list assumes a single logical owner, and
/// callers that need sharing must provide their own exclusion.
///
/// ```rust
/// use chronolist::ChronoList;
///
/// let mut list = ChronoList::new();
/// list.push("alpha");
/// list.push("beta");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(*list.get(1)?, "beta");
///
/// let removed = list.remove(0)?;
/// assert_eq!(removed, "alpha");
/// assert_eq!(list.len(), 1);
/// # Ok::<(), chronolist::ChronoListError>(())
/// ```
///
/// [`query_as_of`]: ChronoList::query_as_of
#[derive(Debug, Clone)]
pub struct ChronoList<T> {
    /// Slots currently visible as list content, in external index order.
    pub(crate) live: Vec<Slot<T>>,
    /// Slots that were overwritten or removed, in retirement order.
    pub(crate) retired: MemoryHistory<T>,
    config: Config,
    operations_count: u64,
}

impl<T> ChronoList<T> {
    /// Create an empty list with the default time format
    /// (`%Y-%m-%d %H:%M:%S`).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty list whose reconstruction queries parse their input
    /// with the given strftime pattern.
    ///
    /// ```rust
    /// use chronolist::ChronoList;
    ///
    /// let list: ChronoList<i32> = ChronoList::with_format("%d.%m.%Y %H:%M:%S");
    /// assert_eq!(list.config().time_format, "%d.%m.%Y %H:%M:%S");
    /// ```
    pub fn with_format(format: impl Into<String>) -> Self {
        Self::with_config(Config::default().with_time_format(format))
    }

    /// Create an empty list with the given configuration.
    ///
    /// The configuration is owned by this instance and immutable afterwards;
    /// lists configured differently never interfere with each other.
    pub fn with_config(config: Config) -> Self {
        Self {
            live: Vec::new(),
            retired: MemoryHistory::new(),
            config,
            operations_count: 0,
        }
    }

    /// This list's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Reference to the live element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.live
            .get(index)
            .map(Slot::value)
            .ok_or(ChronoListError::IndexOutOfRange {
                index,
                len: self.live.len(),
            })
    }

    /// Append an element, stamped with the current instant.
    pub fn push(&mut self, value: T) {
        self.live.push(Slot::new(value));
        self.operations_count += 1;
    }

    /// Insert an element at `index`, shifting subsequent elements right.
    ///
    /// `index == len` appends. Fails with `IndexOutOfRange` past that, and a
    /// failed bounds check leaves the list untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.live.len() {
            return Err(ChronoListError::IndexOutOfRange {
                index,
                len: self.live.len(),
            });
        }
        self.live.insert(index, Slot::new(value));
        self.operations_count += 1;
        Ok(())
    }

    /// Bulk-append elements, each independently timestamped at insertion.
    ///
    /// **Compatibility quirk**: the `index` argument is accepted but not
    /// honored — elements always land at the end of the list, whatever
    /// position is requested. This mirrors the original contract exactly and
    /// is deliberately not fixed here.
    pub fn insert_all(&mut self, index: usize, values: impl IntoIterator<Item = T>) {
        let _ = index;
        for value in values {
            self.live.push(Slot::new(value));
        }
        self.operations_count += 1;
    }

    /// Statistics for this list.
    pub fn stats(&self) -> ListStats {
        ListStats {
            live_count: self.live.len(),
            retired_count: self.retired.len(),
            operations_count: self.operations_count,
        }
    }
}

impl<T: Clone> ChronoList<T> {
    /// Remove the element at `index`, retiring its slot into history.
    ///
    /// The slot's validity window closes at the current instant (first
    /// retirement wins; an already-closed window is never moved) and the slot
    /// migrates to the retired sequence. Returns the removed value.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.live.len() {
            return Err(ChronoListError::IndexOutOfRange {
                index,
                len: self.live.len(),
            });
        }

        let mut slot = self.live.remove(index);
        slot.retire_at(slot::now());
        let value = slot.value().clone();
        self.retired.record(slot);
        self.operations_count += 1;
        Ok(value)
    }

    /// Replace the element at `index`, returning the old value.
    ///
    /// The existing slot is retired into history and a brand-new slot,
    /// stamped with the current instant, takes its position.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        if index >= self.live.len() {
            return Err(ChronoListError::IndexOutOfRange {
                index,
                len: self.live.len(),
            });
        }

        let mut old = std::mem::replace(&mut self.live[index], Slot::new(value));
        old.retire_at(slot::now());
        let old_value = old.value().clone();
        self.retired.record(old);
        self.operations_count += 1;
        Ok(old_value)
    }
}

impl<T> ChronoList<T> {
    /// Retire every live element and empty the list.
    ///
    /// One timestamp is captured for the whole batch, so all cleared elements
    /// share an identical retirement instant.
    pub fn clear(&mut self) {
        let at = slot::now();
        for mut s in self.live.drain(..) {
            s.retire_at(at);
            self.retired.record(s);
        }
        self.operations_count += 1;
    }
}

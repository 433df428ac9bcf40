//! Point-in-time reconstruction queries.

use super::ChronoList;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::slot::Slot;
use chrono::NaiveDateTime;

impl<T: Clone> ChronoList<T> {
    /// Reconstruct the list's apparent contents as of a past instant.
    ///
    /// `timestamp` is parsed against this list's configured format
    /// ([`Config::time_format`](crate::Config)); a malformed string fails
    /// with [`TimestampParse`](crate::ChronoListError::TimestampParse) and
    /// leaves the list untouched, with no partial result.
    ///
    /// The result contains, in order: every live slot created strictly before
    /// the instant, scanned in current index order, followed by every retired
    /// slot whose validity window strictly contains the instant, in
    /// retirement order. The concatenation is **not** re-sorted by creation
    /// time, so when insertions and retirements interleave the element order
    /// can differ from the true historical order. That is a property of the
    /// two-sequence design and part of the contract.
    ///
    /// Timestamps are read from the wall clock at each mutation; two
    /// mutations inside one clock tick can alias under the strict-inequality
    /// filter. No sub-tick ordering is attempted.
    ///
    /// ```rust
    /// use chronolist::ChronoList;
    ///
    /// let mut list = ChronoList::new();
    /// list.push("a");
    ///
    /// // Everything was created after the epoch-era instant below.
    /// let then = list.query_as_of("1970-01-01 00:00:00")?;
    /// assert!(then.is_empty());
    /// # Ok::<(), chronolist::ChronoListError>(())
    /// ```
    pub fn query_as_of(&self, timestamp: &str) -> Result<Vec<T>> {
        let instant = self.parse_timestamp(timestamp)?;
        Ok(self.query_as_of_instant(instant))
    }

    /// Reconstruct the list's apparent contents at an already-parsed instant.
    ///
    /// Same filter and ordering contract as [`query_as_of`], without the
    /// string parsing step.
    ///
    /// [`query_as_of`]: ChronoList::query_as_of
    pub fn query_as_of_instant(&self, instant: NaiveDateTime) -> Vec<T> {
        let visible = |slot: &&Slot<T>| slot.was_live_at(instant);

        self.live
            .iter()
            .filter(visible)
            .chain(self.retired.slots().iter().filter(visible))
            .map(|slot| slot.value().clone())
            .collect()
    }
}

impl<T> ChronoList<T> {
    fn parse_timestamp(&self, input: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(input, &self.config().time_format).map_err(Into::into)
    }
}

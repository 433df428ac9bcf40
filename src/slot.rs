//! Tombstone slot: a stored value plus its validity window.

use chrono::{Local, NaiveDateTime};

/// Current wall-clock instant on the local, zone-less scale all slot
/// timestamps live on.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One logical element of a [`ChronoList`](crate::ChronoList).
///
/// A slot is live while `retired_at` is `None`. Retirement happens at most
/// once; the value and `created_at` never change.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    value: T,
    created_at: NaiveDateTime,
    retired_at: Option<NaiveDateTime>,
}

impl<T> Slot<T> {
    /// Wrap a value, stamping it with the current instant.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            created_at: now(),
            retired_at: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_window(
        value: T,
        created_at: NaiveDateTime,
        retired_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            value,
            created_at,
            retired_at,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn retired_at(&self) -> Option<NaiveDateTime> {
        self.retired_at
    }

    pub fn is_live(&self) -> bool {
        self.retired_at.is_none()
    }

    /// Close the validity window at `at`. No-op if the slot is already
    /// retired; the first retirement wins.
    pub(crate) fn retire_at(&mut self, at: NaiveDateTime) {
        if self.retired_at.is_none() {
            self.retired_at = Some(at);
        }
    }

    /// Whether this slot was part of the visible list at `instant`.
    ///
    /// Strict inequalities on both bounds: a slot created or retired exactly
    /// at `instant` is not counted.
    pub(crate) fn was_live_at(&self, instant: NaiveDateTime) -> bool {
        if self.created_at >= instant {
            return false;
        }
        match self.retired_at {
            None => true,
            Some(retired) => retired > instant,
        }
    }
}

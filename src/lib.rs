//! Embedded versioned list with point-in-time reconstruction.
//!
//! Every insertion, removal, and replacement is timestamped. Overwritten or
//! removed elements are retired into an append-only history instead of being
//! destroyed, so the list can answer what its contents looked like as of any
//! past instant.
//!
//! ```rust
//! use chronolist::ChronoList;
//!
//! let mut list = ChronoList::new();
//! list.push("first");
//! list.push("second");
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.remove(0)?, "first");
//!
//! // Nothing existed before the list did.
//! let earlier = list.query_as_of("1970-01-01 00:00:00")?;
//! assert!(earlier.is_empty());
//! # Ok::<(), chronolist::ChronoListError>(())
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod list;
pub mod slot;

pub use config::{Config, ListStats};
pub use error::{ChronoListError, Result};
pub use history::{HistoryStore, MemoryHistory};
pub use list::{ChronoList, Iter};
pub use slot::Slot;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{ChronoList, ChronoListError, Config, Result};
}

//! # Snapshot storage
//!
//! The whole [`AddressBook`] is persisted as one opaque snapshot: loaded
//! once at startup, written on exit (or explicit save). The
//! [`SnapshotStore`] trait abstracts where that snapshot lives so the rest
//! of the crate never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file on disk
//! - [`memory::InMemoryStore`]: no persistence, for fast isolated tests
//!
//! Fallback behavior for missing or unreadable snapshots is deliberately
//! *not* here — a store reports `Ok(None)` or an error, and
//! [`crate::api::RoloApi::open`] decides to start a fresh book.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address-book snapshots.
pub trait SnapshotStore {
    /// Serialize and persist the entire book.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Read back the last snapshot. `Ok(None)` means no snapshot exists;
    /// an error means one exists but could not be read or parsed.
    fn load(&self) -> Result<Option<AddressBook>>;
}

//! # API facade
//!
//! [`RoloApi`] is the single entry point for all operations: it owns the
//! in-memory [`AddressBook`] and the snapshot store, and dispatches to the
//! command layer. It never touches stdout or stderr — it returns structured
//! [`CmdResult`] values for the CLI (or any other front end) to render.
//!
//! Generic over [`SnapshotStore`] so tests can run against
//! [`crate::store::memory::InMemoryStore`] while production uses
//! [`crate::store::fs::FileStore`].

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

pub struct RoloApi<S: SnapshotStore> {
    book: AddressBook,
    store: S,
}

impl<S: SnapshotStore> RoloApi<S> {
    /// Load the book from `store`, falling back to a fresh empty book when
    /// no snapshot exists or the snapshot cannot be read. Neither case is
    /// fatal; both are reported through the returned messages.
    pub fn open(store: S) -> (Self, CmdResult) {
        let mut result = CmdResult::default();
        let book = match store.load() {
            Ok(Some(book)) => book,
            Ok(None) => {
                result.add_message(CmdMessage::info(
                    "No saved address book found. Creating a new one.",
                ));
                AddressBook::new()
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Error loading address book: {}. Creating a new one.",
                    e
                )));
                AddressBook::new()
            }
        };
        (Self { book, store }, result)
    }

    /// Persist the book. Failure is reported, not raised — the session
    /// keeps running with its in-memory state intact.
    pub fn save(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match self.store.save(&self.book) {
            Ok(()) => result.add_message(CmdMessage::info("Address book saved.")),
            Err(e) => result.add_message(CmdMessage::error(format!(
                "Error saving address book: {}",
                e
            ))),
        }
        result
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.book.set_page_size(page_size);
    }

    pub fn add(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phones, birthday)
    }

    pub fn change(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::show::run(&self.book)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::run(&self.book, name)
    }

    pub fn show_pages(&self) -> Result<CmdResult> {
        commands::pages::run(&self.book)
    }
}

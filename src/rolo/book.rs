//! The keyed, ordered collection of all records for one session.

use crate::record::Record;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// An ordered mapping from contact name to [`Record`].
///
/// One record per distinct name; re-adding a name overwrites the prior
/// entry in place, so iteration and pagination order stay stable. The raw
/// collection is never exposed, which keeps the uniqueness invariant
/// enforceable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    records: Vec<Record>,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }

    /// Insert a record keyed by its name. An existing name is silently
    /// overwritten, keeping its position (last-write-wins).
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-key lookup. No fuzzy or partial matching.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove the entry for `name` if present; silent no-op otherwise.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
        }
    }

    /// All records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// A fresh, restartable pagination pass over a snapshot of the book.
    ///
    /// Pages come in insertion order, each up to `page_size` records,
    /// non-overlapping, covering every record exactly once; the last page
    /// may be short. An empty book yields no pages. Because the pass owns
    /// its snapshot, mutating the book mid-pagination cannot invalidate it.
    pub fn pages(&self) -> Pages {
        Pages {
            records: self.records.clone(),
            page_size: self.page_size.max(1),
            cursor: 0,
        }
    }
}

/// Iterator of record pages produced by [`AddressBook::pages`].
pub struct Pages {
    records: Vec<Record>,
    page_size: usize,
    cursor: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }
        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }
}

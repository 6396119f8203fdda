use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// In-memory snapshot storage for testing and development.
/// Does NOT persist data across processes.
///
/// The book still passes through JSON so tests exercise the same
/// serialization path as [`super::fs::FileStore`].
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose snapshot cannot be parsed, for exercising the
    /// corrupt-snapshot fallback path.
    pub fn with_corrupt_snapshot() -> Self {
        Self {
            snapshot: Some("{ definitely not an address book".to_string()),
        }
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let content = serde_json::to_string(book).map_err(RoloError::Serialization)?;
        self.snapshot = Some(content);
        Ok(())
    }

    fn load(&self) -> Result<Option<AddressBook>> {
        match &self.snapshot {
            None => Ok(None),
            Some(content) => {
                let book = serde_json::from_str(content).map_err(RoloError::Serialization)?;
                Ok(Some(book))
            }
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::record::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new(format!("contact{}", i + 1), None).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str], birthday: Option<&str>) -> Self {
            let mut record = Record::new(name, birthday).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }
    }
}

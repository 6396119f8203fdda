use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed snapshot storage: the whole book as one pretty-printed JSON
/// file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<AddressBook>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(Some(book))
    }
}

//! In-process storage
//!
//! Keeps the serialized JSON in memory so round trips go through the same
//! encoding as the file system storage. Writes can be made to fail on demand.

use crate::domain::{MoodEntry, User};
use crate::error::{EmotiqError, Result};
use crate::infrastructure::storage::{EntryStorage, SessionStorage};
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<Option<String>>,
    user: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds raw entry text, valid or not
    pub fn with_raw_entries(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.entries.borrow_mut() = Some(raw.into());
        storage
    }

    /// Make every following write fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw stored entry text, if any
    pub fn raw_entries(&self) -> Option<String> {
        self.entries.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(EmotiqError::PersistenceWrite(
                "storage is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl EntryStorage for MemoryStorage {
    fn load_entries(&self) -> Result<Option<Vec<MoodEntry>>> {
        match self.entries.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| EmotiqError::PersistenceRead(e.to_string())),
        }
    }

    fn save_entries(&self, entries: &[MoodEntry]) -> Result<()> {
        self.check_writable()?;
        *self.entries.borrow_mut() = Some(serde_json::to_string(entries)?);
        Ok(())
    }
}

impl SessionStorage for MemoryStorage {
    fn load_user(&self) -> Result<Option<User>> {
        match self.user.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| EmotiqError::PersistenceRead(e.to_string())),
        }
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.check_writable()?;
        *self.user.borrow_mut() = Some(serde_json::to_string(user)?);
        Ok(())
    }

    fn clear_user(&self) -> Result<()> {
        self.check_writable()?;
        *self.user.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_writes_keep_previous_value() {
        let storage = MemoryStorage::new();
        storage.save_entries(&[]).unwrap();
        assert_eq!(storage.raw_entries().as_deref(), Some("[]"));

        storage.set_fail_writes(true);
        let user = User::new("user-1", "Demo User", "demo@example.com");
        assert!(matches!(
            storage.save_user(&user),
            Err(EmotiqError::PersistenceWrite(_))
        ));
        assert!(storage.load_user().unwrap().is_none());
    }

    #[test]
    fn test_garbage_is_read_error() {
        let storage = MemoryStorage::with_raw_entries("nope");
        assert!(matches!(
            storage.load_entries(),
            Err(EmotiqError::PersistenceRead(_))
        ));
    }
}

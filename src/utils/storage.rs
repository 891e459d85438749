use web_sys::{window, Storage};
use crate::errors::StorageError;

/// Raw string key/value storage. The session gate only ever needs two
/// string entries, so values are stored as-is (no JSON encoding).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Remove { key: key.to_string() })
    }
}

#[cfg(test)]
pub mod memory {
    use super::KeyValueStore;
    use crate::errors::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage
    #[derive(Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}

// ============================================================================
// SESSION SERVICE - Read/write the session flag in client storage
// ============================================================================

use crate::config::StorageKeys;
use crate::errors::StorageError;
use crate::models::Session;
use crate::utils::storage::KeyValueStore;

const LOGGED_IN_VALUE: &str = "true";

/// Read the session. Only the exact string "true" counts as logged in.
pub fn check_session(store: &dyn KeyValueStore, keys: &StorageKeys) -> Session {
    let logged_in = store.get(&keys.logged_in).as_deref() == Some(LOGGED_IN_VALUE);
    if !logged_in {
        return Session::anonymous();
    }
    Session {
        is_authenticated: true,
        username: store.get(&keys.username),
    }
}

pub fn persist_session(
    store: &dyn KeyValueStore,
    keys: &StorageKeys,
    session: &Session,
) -> Result<(), StorageError> {
    if !session.is_authenticated {
        return clear_session(store, keys);
    }
    store.set(&keys.logged_in, LOGGED_IN_VALUE)?;
    match &session.username {
        Some(username) => store.set(&keys.username, username),
        None => store.remove(&keys.username),
    }
}

pub fn clear_session(store: &dyn KeyValueStore, keys: &StorageKeys) -> Result<(), StorageError> {
    // Attempt both removals before reporting
    let flag = store.remove(&keys.logged_in);
    let user = store.remove(&keys.username);
    flag.and(user)
}

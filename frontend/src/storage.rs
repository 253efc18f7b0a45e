//! localStorage-backed session store.

use shared::{ConsoleConfig, ConsoleError, SessionStore, CONFIG_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// The browser's localStorage. Missing or blocked storage reads as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConsoleError> {
        let storage = local_storage()
            .ok_or_else(|| ConsoleError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ConsoleError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), ConsoleError> {
        let storage = local_storage()
            .ok_or_else(|| ConsoleError::Storage("localStorage unavailable".to_string()))?;
        storage
            .remove_item(key)
            .map_err(|e| ConsoleError::Storage(format!("cannot remove '{}': {:?}", key, e)))
    }
}

/// Console configuration, optionally overridden through localStorage.
pub fn load_config() -> ConsoleConfig {
    ConsoleConfig::load_or_default(BrowserStorage.get(CONFIG_STORAGE_KEY).as_deref())
}

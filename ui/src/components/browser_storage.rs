use campus_bites_common::storage::{KeyValueStore, StoreError};

/// `window.localStorage` as a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_family = "wasm")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("No window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("localStorage blocked: {:?}", e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".to_string()))
}

#[cfg(target_family = "wasm")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("Failed to read {key}: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("Failed to write {key}: {:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("Failed to remove {key}: {:?}", e)))
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(
            "localStorage only available in WASM".to_string(),
        ))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

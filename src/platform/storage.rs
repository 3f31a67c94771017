//! LocalStorage helpers
//!
//! Failures (no window, storage disabled, quota exceeded) are logged and
//! reported as `None`/`false` rather than propagated.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read a string value
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a string value; returns whether it was stored
pub fn set_item(key: &str, value: &str) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, '{}' not saved", key);
        return false;
    };
    match storage.set_item(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save '{}': {:?}", key, e);
            false
        }
    }
}

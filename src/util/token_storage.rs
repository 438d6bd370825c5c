//! Browser `localStorage` access for the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only (`csr`): in native builds and tests reads return `None` and
//! writes are no-ops.

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the token stored under `key`. Storage errors count as absent.
pub fn read_token(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Persist `token` under `key`.
pub fn store_token(key: &str, token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("token_storage: localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(key, token).is_err() {
            log::warn!("token_storage: failed to write key={key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, token);
    }
}

/// Remove the token stored under `key`.
pub fn clear_token(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

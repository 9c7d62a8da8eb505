//! Session token persistence in browser `localStorage`.
//!
//! The token is an opaque string stored under a single key. There is no
//! expiry, refresh, or integrity check client-side. SSR/test builds have no
//! storage, so reads return `None` and writes are no-ops.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, if any. Empty strings count as absent.
pub fn load_token(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist `token` under `key`.
pub fn store_token(key: &str, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, token);
    }
}

/// Remove the token stored under `key`.
pub fn clear_token(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

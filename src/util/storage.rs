//! Browser localStorage reads for session credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this crate) writes the access token; the HTTP
//! client only reads it, once per request.

/// Load a raw string from `localStorage` for `key`. Blank values count as absent.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        non_blank(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

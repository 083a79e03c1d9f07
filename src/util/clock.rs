//! Wall-clock access in whole seconds since the Unix epoch.
//!
//! `std::time::SystemTime::now` panics on `wasm32-unknown-unknown`, so the
//! browser build reads `Date.now()` instead.

/// Source of the current time, injected into the session store so expiry
/// checks are deterministic under test.
pub type Clock = fn() -> i64;

/// Current time in seconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        (js_sys::Date::now() / 1000.0).floor() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}

//! Wall-clock access for the browser.
//!
//! SSR has no use for timestamps (nothing expires during a render), so the
//! server build returns zero.

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

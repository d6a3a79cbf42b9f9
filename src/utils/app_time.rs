// src/utils/app_time.rs
// One clock for the engine and the UI. std::time::Instant is unavailable in the browser.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Seconds elapsed between `start` and `at`, clamped at zero. Drives animation phases.
pub fn seconds_between(start: AppInstant, at: AppInstant) -> f32 {
    at.saturating_duration_since(start).as_secs_f32()
}

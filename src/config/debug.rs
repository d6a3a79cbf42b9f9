//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Callers further gate these with `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per navigation transition (view before/after, event).
    pub print_nav_transitions: bool,
    /// Emit UI interaction logs (category switching, sort changes, etc.).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_nav_transitions: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};

//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit a line for every probe-then-sync cycle (status, counts).
    pub print_poll_cycles: bool,
    /// Emit the schedule built for each path animation.
    pub print_animation_schedule: bool,
    /// Emit UI interaction logs (form submits, result clicks, logout).
    pub print_ui_interactions: bool,
    /// Emit request/response traces from the HTTP client.
    pub print_http_traffic: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_poll_cycles: false,
    print_animation_schedule: false,
    print_ui_interactions: false,
    print_http_traffic: false,
    print_shutdown: false,
};

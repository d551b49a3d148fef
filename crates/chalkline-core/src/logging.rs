//! Logging facilities for Chalkline.
//!
//! Chalkline uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] keep filter directives stable across
//! refactors, e.g. `RUST_LOG=chalkline_core::signal=trace`.

/// Span names used throughout Chalkline for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "chalkline::signal";
    /// Control state change span.
    pub const CONTROL: &str = "chalkline::control";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "chalkline_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "chalkline_core::signal";
    /// Control crate target.
    pub const CONTROL: &str = "chalkline::control";
    /// Model (choices and selection) target.
    pub const MODEL: &str = "chalkline::model";
}

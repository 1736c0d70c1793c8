//! Logging facilities for Spindle.
//!
//! Spindle uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
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
//! Every event emitted by the picker models carries one of the targets in
//! [`targets`], so subsystems can be filtered individually, e.g.
//! `RUST_LOG=spindle::calendar=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "spindle_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "spindle_core::signal";
    /// Selection controller target.
    pub const CONTROLLER: &str = "spindle::controller";
    /// Calendar adapter target.
    pub const CALENDAR: &str = "spindle::calendar";
    /// Array/linked adapter target.
    pub const ARRAY: &str = "spindle::array";
    /// Option-tree construction target.
    pub const OPTIONS: &str = "spindle::options";
}

/// Macros for common tracing patterns.
///
/// These are re-exported for convenience but are just wrappers around the
/// `tracing` crate macros with consistent target naming.
#[macro_export]
macro_rules! spindle_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "spindle_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! spindle_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "spindle_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! spindle_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "spindle_core", $($arg)*)
    };
}

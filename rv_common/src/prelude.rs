//! Prelude module for common re-exports.
//!
//! ```rust
//! use rv_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Markup Constants ───────────────────────────────────────────────
pub use crate::consts::{
    DEFAULT_MAX_VELOCITY, DEFAULT_MIN_VELOCITY, MOTOR_TAG, NAMESPACE, NUMBER_PRECISION, PID_TAG,
};

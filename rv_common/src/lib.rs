//! RV Common Library
//!
//! Shared constants and configuration loading utilities for all RV
//! workspace crates.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Tag names and numeric defaults of the motor markup
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use rv_common::consts::MOTOR_TAG;
//! use rv_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod consts;
pub mod prelude;

//! Error type for motor description tooling.

use rv_common::config::ConfigError;
use rv_sdf::SdfError;
use thiserror::Error;

/// Errors surfaced while loading descriptions and writing fragments.
///
/// Building and rendering entities never fails.
#[derive(Debug, Clone, Error)]
pub enum MotorsError {
    /// Loading or validating the description file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Markup serialisation failed.
    #[error(transparent)]
    Markup(#[from] SdfError),

    /// JSON serialisation failed.
    #[error("Failed to encode JSON: {0}")]
    Json(String),

    /// Writing the output file failed.
    #[error("Failed to write output: {0}")]
    Io(String),
}

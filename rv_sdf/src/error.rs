//! Error types for markup rendering.

use thiserror::Error;

/// Result type for markup rendering operations.
pub type SdfResult<T> = Result<T, SdfError>;

/// Errors that can occur while turning a node tree into markup text.
///
/// Building and rendering nodes never fails; only the final text write can.
#[derive(Debug, Clone, Error)]
pub enum SdfError {
    /// The XML writer rejected an event.
    #[error("failed to write {tag}: {message}")]
    Write {
        /// Tag of the element being written.
        tag: String,
        /// Writer error description.
        message: String,
    },

    /// The generated bytes were not valid UTF-8.
    #[error("invalid UTF-8 in generated markup: {0}")]
    Utf8(String),
}

impl SdfError {
    /// Create a write error for the given element tag.
    pub fn write(tag: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            tag: tag.into(),
            message: message.to_string(),
        }
    }
}

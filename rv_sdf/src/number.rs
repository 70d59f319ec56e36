//! Canonical number formatting for attribute values and element bodies.

use rv_common::consts::NUMBER_PRECISION;

/// Format a number the way the model controller expects to read it back.
///
/// Fixed-point with [`NUMBER_PRECISION`] digits, `.` as decimal separator
/// regardless of locale. Non-finite values render as `nan`, `inf` and `-inf`.
pub fn number_format(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", NUMBER_PRECISION, value)
}

/// Join a namespace prefix and a local name into a qualified tag.
pub fn namespaced(prefix: &str, local: &str) -> String {
    format!("{prefix}:{local}")
}

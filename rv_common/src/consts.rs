//! Workspace-wide constants.
//!
//! Single source of truth for tag names and numeric defaults shared between
//! the markup layer and the motor entities.

/// Namespace prefix of every tag read by the model controller plugin.
pub const NAMESPACE: &str = "rv";

/// Tag of a motor element. Identical for every motor variant.
pub const MOTOR_TAG: &str = "rv:motor";

/// Tag of the PID element nested inside PID-driven motors.
pub const PID_TAG: &str = "rv:pid";

/// Digits after the decimal point in rendered numbers.
pub const NUMBER_PRECISION: usize = 6;

/// Default lower velocity bound of a velocity motor.
pub const DEFAULT_MIN_VELOCITY: f64 = -100.0;

/// Default upper velocity bound of a velocity motor.
pub const DEFAULT_MAX_VELOCITY: f64 = 100.0;

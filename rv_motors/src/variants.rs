//! Position and velocity motors.
//!
//! Both wrap a [`PidMotor`] and only change the default type tag; the
//! velocity motor also renders its velocity bounds.

use rv_common::consts::{DEFAULT_MAX_VELOCITY, DEFAULT_MIN_VELOCITY, MOTOR_TAG};
use rv_sdf::{Attributes, Element, Joint, Node, number_format};

use crate::motor::PidMotor;
use crate::pid::Pid;

/// Builder methods forwarded to the wrapped [`PidMotor`].
macro_rules! forward_pid_motor_builders {
    ($ty:ty) => {
        impl $ty {
            /// Actuate the given joint.
            pub fn with_joint(mut self, joint: &Joint) -> Self {
                self.inner = self.inner.with_joint(joint);
                self
            }

            /// Actuate the joint with the given name.
            pub fn with_joint_name(mut self, name: impl Into<String>) -> Self {
                self.inner = self.inner.with_joint_name(name);
                self
            }

            /// Override the type tag.
            pub fn with_motor_type(mut self, motor_type: impl Into<String>) -> Self {
                self.inner = self.inner.with_motor_type(motor_type);
                self
            }

            /// Replace the PID parameters.
            pub fn with_pid(mut self, pid: Pid) -> Self {
                self.inner = self.inner.with_pid(pid);
                self
            }

            /// The wrapped PID motor.
            pub fn pid_motor(&self) -> &PidMotor {
                &self.inner
            }
        }
    };
}

/// PID motor controlling joint position. Position limits come from the joint.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMotor {
    inner: PidMotor,
}

impl PositionMotor {
    /// Type tag rendered when no explicit type is given.
    pub const DEFAULT_TYPE: &'static str = "position";

    /// Position motor belonging to the given body part, with an empty PID.
    pub fn new(part_id: impl Into<String>) -> Self {
        Self {
            inner: PidMotor::new(part_id),
        }
    }
}

forward_pid_motor_builders!(PositionMotor);

impl From<PidMotor> for PositionMotor {
    fn from(inner: PidMotor) -> Self {
        Self { inner }
    }
}

impl Element for PositionMotor {
    fn tag_name(&self) -> &str {
        MOTOR_TAG
    }

    fn render_attributes(&self) -> Attributes {
        self.inner.render_attributes_as(Self::DEFAULT_TYPE)
    }

    fn render_elements(&self) -> Vec<Node> {
        self.inner.render_elements()
    }
}

/// PID motor controlling joint velocity within `[min_velocity, max_velocity]`.
///
/// The bounds are handed to the controller as-is; `min > max` is not
/// rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityMotor {
    inner: PidMotor,
    min_velocity: f64,
    max_velocity: f64,
}

impl VelocityMotor {
    /// Type tag rendered when no explicit type is given.
    pub const DEFAULT_TYPE: &'static str = "velocity";

    /// Velocity motor with default bounds and an empty PID.
    pub fn new(part_id: impl Into<String>) -> Self {
        Self::from(PidMotor::new(part_id))
    }

    /// Set both velocity bounds.
    pub fn with_velocity_bounds(mut self, min_velocity: f64, max_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self.max_velocity = max_velocity;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: f64) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Returns true if the lower bound exceeds the upper bound.
    pub fn has_inverted_bounds(&self) -> bool {
        self.min_velocity > self.max_velocity
    }
}

forward_pid_motor_builders!(VelocityMotor);

/// Wraps the motor with default velocity bounds.
impl From<PidMotor> for VelocityMotor {
    fn from(inner: PidMotor) -> Self {
        Self {
            inner,
            min_velocity: DEFAULT_MIN_VELOCITY,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

impl Element for VelocityMotor {
    fn tag_name(&self) -> &str {
        MOTOR_TAG
    }

    fn render_attributes(&self) -> Attributes {
        let mut attrs = self.inner.render_attributes_as(Self::DEFAULT_TYPE);
        attrs.insert("min_velocity", number_format(self.min_velocity));
        attrs.insert("max_velocity", number_format(self.max_velocity));
        attrs
    }

    fn render_elements(&self) -> Vec<Node> {
        self.inner.render_elements()
    }
}

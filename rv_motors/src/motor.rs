//! Motor base entity and the generic PID-driven motor.
//!
//! Variants are built by composition. Each layer exposes
//! `render_attributes_as(default_type)`; a specialised motor calls the layer
//! below with its own default type tag, then adds its own attributes on top
//! of the returned map.

use rv_common::consts::MOTOR_TAG;
use rv_sdf::{Attributes, Element, Joint, Node};

use crate::pid::Pid;

/// Identity shared by every motor: owning part, actuated joint, type tag.
///
/// The joint is captured by name only; the motor never owns the joint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motor {
    part_id: String,
    joint: Option<String>,
    motor_type: Option<String>,
}

impl Motor {
    /// Type tag rendered when no explicit type is given.
    pub const DEFAULT_TYPE: &'static str = "motor";

    /// Motor belonging to the given body part.
    pub fn new(part_id: impl Into<String>) -> Self {
        Self {
            part_id: part_id.into(),
            joint: None,
            motor_type: None,
        }
    }

    /// Actuate the given joint.
    pub fn with_joint(self, joint: &Joint) -> Self {
        self.with_joint_name(joint.name())
    }

    /// Actuate the joint with the given name.
    pub fn with_joint_name(mut self, name: impl Into<String>) -> Self {
        self.joint = Some(name.into());
        self
    }

    /// Override the type tag of whichever variant wraps this motor.
    pub fn with_motor_type(mut self, motor_type: impl Into<String>) -> Self {
        self.motor_type = Some(motor_type.into());
        self
    }

    pub fn part_id(&self) -> &str {
        &self.part_id
    }

    pub fn joint_name(&self) -> Option<&str> {
        self.joint.as_deref()
    }

    /// Explicit type override, if any.
    pub fn motor_type(&self) -> Option<&str> {
        self.motor_type.as_deref()
    }

    /// The type tag that will be rendered given a variant default.
    pub fn resolved_type<'a>(&'a self, default_type: &'a str) -> &'a str {
        self.motor_type.as_deref().unwrap_or(default_type)
    }

    /// `type`, `part_id` and, when a joint is set, `joint`.
    pub fn render_attributes_as(&self, default_type: &str) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("type", self.resolved_type(default_type));
        attrs.insert("part_id", self.part_id.as_str());
        if let Some(joint) = &self.joint {
            attrs.insert("joint", joint.as_str());
        }
        attrs
    }
}

impl Element for Motor {
    fn tag_name(&self) -> &str {
        MOTOR_TAG
    }

    fn render_attributes(&self) -> Attributes {
        self.render_attributes_as(Self::DEFAULT_TYPE)
    }
}

/// Motor driven by a PID controller on the plugin side.
///
/// Always carries a [`Pid`]; one with every term unset stands for "use the
/// controller defaults".
#[derive(Debug, Clone, PartialEq)]
pub struct PidMotor {
    motor: Motor,
    pid: Pid,
}

impl PidMotor {
    /// Type tag rendered when no explicit type is given.
    pub const DEFAULT_TYPE: &'static str = "pid";

    /// PID motor belonging to the given body part, with an empty PID.
    pub fn new(part_id: impl Into<String>) -> Self {
        Self {
            motor: Motor::new(part_id),
            pid: Pid::default(),
        }
    }

    /// Actuate the given joint.
    pub fn with_joint(mut self, joint: &Joint) -> Self {
        self.motor = self.motor.with_joint(joint);
        self
    }

    /// Actuate the joint with the given name.
    pub fn with_joint_name(mut self, name: impl Into<String>) -> Self {
        self.motor = self.motor.with_joint_name(name);
        self
    }

    /// Override the type tag.
    pub fn with_motor_type(mut self, motor_type: impl Into<String>) -> Self {
        self.motor = self.motor.with_motor_type(motor_type);
        self
    }

    /// Replace the PID parameters.
    pub fn with_pid(mut self, pid: Pid) -> Self {
        self.pid = pid;
        self
    }

    pub fn motor(&self) -> &Motor {
        &self.motor
    }

    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    /// Base motor attributes under the given default type tag.
    pub fn render_attributes_as(&self, default_type: &str) -> Attributes {
        self.motor.render_attributes_as(default_type)
    }
}

impl Element for PidMotor {
    fn tag_name(&self) -> &str {
        MOTOR_TAG
    }

    fn render_attributes(&self) -> Attributes {
        self.render_attributes_as(Self::DEFAULT_TYPE)
    }

    /// Base motor children, then the PID element last.
    fn render_elements(&self) -> Vec<Node> {
        let mut children = self.motor.render_elements();
        children.push(self.pid.to_node());
        children
    }
}

//! Heterogeneous motor list entry.

use rv_sdf::{Attributes, Element, Node};

use crate::motor::{Motor, PidMotor};
use crate::variants::{PositionMotor, VelocityMotor};

/// Any of the motor variants, usable wherever a single element type is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMotor {
    /// Plain motor without a PID.
    Motor(Motor),
    /// Generic PID-driven motor.
    Pid(PidMotor),
    /// Position-controlled PID motor.
    Position(PositionMotor),
    /// Velocity-controlled PID motor.
    Velocity(VelocityMotor),
}

impl AnyMotor {
    fn as_element(&self) -> &dyn Element {
        match self {
            AnyMotor::Motor(m) => m,
            AnyMotor::Pid(m) => m,
            AnyMotor::Position(m) => m,
            AnyMotor::Velocity(m) => m,
        }
    }

    fn base(&self) -> &Motor {
        match self {
            AnyMotor::Motor(m) => m,
            AnyMotor::Pid(m) => m.motor(),
            AnyMotor::Position(m) => m.pid_motor().motor(),
            AnyMotor::Velocity(m) => m.pid_motor().motor(),
        }
    }

    /// Body part the motor belongs to.
    pub fn part_id(&self) -> &str {
        self.base().part_id()
    }

    /// Name of the actuated joint, if any.
    pub fn joint_name(&self) -> Option<&str> {
        self.base().joint_name()
    }

    /// Variant name as used by the `kind` key of motor descriptions.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyMotor::Motor(_) => "motor",
            AnyMotor::Pid(_) => "pid",
            AnyMotor::Position(_) => "position",
            AnyMotor::Velocity(_) => "velocity",
        }
    }
}

impl Element for AnyMotor {
    fn tag_name(&self) -> &str {
        self.as_element().tag_name()
    }

    fn render_attributes(&self) -> Attributes {
        self.as_element().render_attributes()
    }

    fn render_elements(&self) -> Vec<Node> {
        self.as_element().render_elements()
    }

    fn render_body(&self) -> Option<String> {
        self.as_element().render_body()
    }
}

impl From<Motor> for AnyMotor {
    fn from(m: Motor) -> Self {
        AnyMotor::Motor(m)
    }
}

impl From<PidMotor> for AnyMotor {
    fn from(m: PidMotor) -> Self {
        AnyMotor::Pid(m)
    }
}

impl From<PositionMotor> for AnyMotor {
    fn from(m: PositionMotor) -> Self {
        AnyMotor::Position(m)
    }
}

impl From<VelocityMotor> for AnyMotor {
    fn from(m: VelocityMotor) -> Self {
        AnyMotor::Velocity(m)
    }
}

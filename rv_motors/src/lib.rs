//! # RV Motors Library
//!
//! Declarative motor descriptions rendered into `rv:motor` elements for the
//! model controller plugin. The plugin reads these elements at load time
//! and creates the matching actuator.
//!
//! # Module Structure
//!
//! - [`motor`] - Base motor identity and the generic PID motor
//! - [`pid`] - PID parameters with sparse rendering
//! - [`variants`] - Position and velocity motors
//! - [`any`] - `AnyMotor` sum type for mixed motor lists
//! - [`config`] - TOML motor description files
//! - [`output`] - Fragment rendering (XML / JSON) and output
//! - [`error`] - Error type of the tooling layer
//!
//! # Example
//!
//! ```rust
//! use rv_motors::{Pid, PositionMotor};
//! use rv_sdf::{Element, Joint};
//!
//! let joint = Joint::new("leg1_joint");
//! let motor = PositionMotor::new("leg1")
//!     .with_joint(&joint)
//!     .with_pid(Pid::new().with_proportional_gain(2.5));
//! let xml = motor.to_xml().unwrap();
//! assert!(xml.contains("<rv:p>2.500000</rv:p>"));
//! ```

pub mod any;
pub mod config;
pub mod error;
pub mod motor;
pub mod output;
pub mod pid;
pub mod variants;

pub use crate::any::AnyMotor;
pub use crate::config::{MotorConfig, MotorsConfig, load_motors_config};
pub use crate::error::MotorsError;
pub use crate::motor::{Motor, PidMotor};
pub use crate::output::{FragmentFormat, render_fragment, write_output};
pub use crate::pid::{PID_TERMS, Pid};
pub use crate::variants::{PositionMotor, VelocityMotor};

// Entities are immutable after construction and shared freely across threads.
mod thread_safety {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Motor: Send, Sync, Clone);
    assert_impl_all!(Pid: Send, Sync, Copy);
    assert_impl_all!(PidMotor: Send, Sync, Clone);
    assert_impl_all!(PositionMotor: Send, Sync, Clone);
    assert_impl_all!(VelocityMotor: Send, Sync, Clone);
    assert_impl_all!(AnyMotor: Send, Sync, Clone);
}

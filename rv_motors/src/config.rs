//! Motor description files.
//!
//! A description file lists the motors of one robot. Each entry is tagged by
//! `kind` and is turned into the matching entity by [`MotorConfig::build`].
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! service_name = "spider9-motors"
//!
//! [[motors]]
//! kind = "position"
//! part_id = "leg1"
//! joint = "leg1_joint"
//!
//! [motors.pid]
//! p = 2.5
//!
//! [[motors]]
//! kind = "velocity"
//! part_id = "wheelL"
//! type = "wheel_velocity"
//! min_velocity = -50.0
//! max_velocity = 50.0
//! ```
//!
//! Numeric values are passed through untouched. Inverted velocity bounds
//! are logged, never rejected.

use rv_common::prelude::{
    ConfigError, ConfigLoader, DEFAULT_MAX_VELOCITY, DEFAULT_MIN_VELOCITY, SharedConfig,
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::any::AnyMotor;
use crate::motor::{Motor, PidMotor};
use crate::pid::Pid;
use crate::variants::{PositionMotor, VelocityMotor};

fn default_min_velocity() -> f64 {
    DEFAULT_MIN_VELOCITY
}

fn default_max_velocity() -> f64 {
    DEFAULT_MAX_VELOCITY
}

/// Top-level motor description file.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorsConfig {
    /// Shared section (log level, description name).
    pub shared: SharedConfig,

    /// Motors in render order.
    #[serde(default)]
    pub motors: Vec<MotorConfig>,
}

/// One motor entry, selected by its `kind` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MotorConfig {
    /// Plain motor.
    Motor(BaseMotorConfig),
    /// Generic PID-driven motor.
    Pid(PidMotorConfig),
    /// Position-controlled PID motor.
    Position(PidMotorConfig),
    /// Velocity-controlled PID motor.
    Velocity(VelocityMotorConfig),
}

/// Fields of a plain motor entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseMotorConfig {
    /// Owning body part.
    pub part_id: String,
    /// Actuated joint name.
    #[serde(default)]
    pub joint: Option<String>,
    /// Type tag override.
    #[serde(default, rename = "type")]
    pub motor_type: Option<String>,
}

/// Fields of a PID or position motor entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PidMotorConfig {
    /// Owning body part.
    pub part_id: String,
    /// Actuated joint name.
    #[serde(default)]
    pub joint: Option<String>,
    /// Type tag override.
    #[serde(default, rename = "type")]
    pub motor_type: Option<String>,
    /// PID parameters; absent means every term unset.
    #[serde(default)]
    pub pid: Option<Pid>,
}

/// Fields of a velocity motor entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VelocityMotorConfig {
    /// Owning body part.
    pub part_id: String,
    /// Actuated joint name.
    #[serde(default)]
    pub joint: Option<String>,
    /// Type tag override.
    #[serde(default, rename = "type")]
    pub motor_type: Option<String>,
    /// PID parameters; absent means every term unset.
    #[serde(default)]
    pub pid: Option<Pid>,
    /// Lower velocity bound (default: -100).
    #[serde(default = "default_min_velocity")]
    pub min_velocity: f64,
    /// Upper velocity bound (default: 100).
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,
}

fn build_pid_motor(
    part_id: &str,
    joint: Option<&str>,
    motor_type: Option<&str>,
    pid: Option<Pid>,
) -> PidMotor {
    let mut motor = PidMotor::new(part_id).with_pid(pid.unwrap_or_default());
    if let Some(joint) = joint {
        motor = motor.with_joint_name(joint);
    }
    if let Some(motor_type) = motor_type {
        motor = motor.with_motor_type(motor_type);
    }
    motor
}

impl PidMotorConfig {
    fn to_pid_motor(&self) -> PidMotor {
        build_pid_motor(
            &self.part_id,
            self.joint.as_deref(),
            self.motor_type.as_deref(),
            self.pid,
        )
    }
}

impl MotorConfig {
    /// Owning body part of this entry.
    pub fn part_id(&self) -> &str {
        match self {
            MotorConfig::Motor(c) => &c.part_id,
            MotorConfig::Pid(c) | MotorConfig::Position(c) => &c.part_id,
            MotorConfig::Velocity(c) => &c.part_id,
        }
    }

    /// Build the entity this entry describes.
    pub fn build(&self) -> AnyMotor {
        match self {
            MotorConfig::Motor(c) => {
                let mut motor = Motor::new(c.part_id.as_str());
                if let Some(joint) = &c.joint {
                    motor = motor.with_joint_name(joint.as_str());
                }
                if let Some(motor_type) = &c.motor_type {
                    motor = motor.with_motor_type(motor_type.as_str());
                }
                motor.into()
            }
            MotorConfig::Pid(c) => c.to_pid_motor().into(),
            MotorConfig::Position(c) => PositionMotor::from(c.to_pid_motor()).into(),
            MotorConfig::Velocity(c) => {
                let inner = build_pid_motor(
                    &c.part_id,
                    c.joint.as_deref(),
                    c.motor_type.as_deref(),
                    c.pid,
                );
                VelocityMotor::from(inner)
                    .with_velocity_bounds(c.min_velocity, c.max_velocity)
                    .into()
            }
        }
    }
}

impl MotorsConfig {
    /// Validate the description.
    ///
    /// Only the shared section is checked. Inverted velocity bounds are
    /// reported with a warning and left as written.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        for motor in &self.motors {
            if let MotorConfig::Velocity(c) = motor {
                if c.min_velocity > c.max_velocity {
                    warn!(
                        part_id = %c.part_id,
                        min_velocity = c.min_velocity,
                        max_velocity = c.max_velocity,
                        "velocity bounds are inverted; passing them through unchanged"
                    );
                }
            }
        }
        Ok(())
    }

    /// Build every motor in file order.
    pub fn build_all(&self) -> Vec<AnyMotor> {
        self.motors
            .iter()
            .map(|entry| {
                let motor = entry.build();
                debug!(part_id = %motor.part_id(), kind = motor.kind(), "built motor");
                motor
            })
            .collect()
    }
}

/// Load and validate a motor description file.
///
/// Validation logs through the current subscriber. A caller that sets up
/// logging from the file's `log_level` parses with [`ConfigLoader::load`]
/// first and calls [`MotorsConfig::validate`] afterwards.
///
/// # Errors
///
/// - `ConfigError::FileNotFound` if the file does not exist
/// - `ConfigError::ParseError` if the TOML is invalid or an entry is malformed
/// - `ConfigError::ValidationError` if the shared section is invalid
pub fn load_motors_config(path: &Path) -> Result<MotorsConfig, ConfigError> {
    let config = MotorsConfig::load(path)?;
    config.validate()?;
    debug!(
        path = %path.display(),
        service = %config.shared.service_name,
        motors = config.motors.len(),
        "loaded motor description"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rv_sdf::Element;
    use std::sync::{Arc, Mutex};

    const SAMPLE: &str = r#"
[shared]
log_level = "debug"
service_name = "spider9-motors"

[[motors]]
kind = "position"
part_id = "leg1"
joint = "leg1_joint"

[motors.pid]
p = 2.5

[[motors]]
kind = "velocity"
part_id = "wheelL"
joint = "J"
min_velocity = -50.0
max_velocity = 50.0

[[motors]]
kind = "motor"
part_id = "head"
type = "custom"
"#;

    #[test]
    fn parses_kinds_in_order() {
        let config = MotorsConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.motors.len(), 3);
        assert!(matches!(config.motors[0], MotorConfig::Position(_)));
        assert!(matches!(config.motors[1], MotorConfig::Velocity(_)));
        assert!(matches!(config.motors[2], MotorConfig::Motor(_)));
        assert_eq!(config.motors[1].part_id(), "wheelL");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builds_matching_entities() {
        let config = MotorsConfig::from_toml(SAMPLE).unwrap();
        let motors = config.build_all();

        let position = motors[0].to_node();
        assert_eq!(position.attributes.get("type"), Some("position"));
        assert_eq!(position.attributes.get("joint"), Some("leg1_joint"));
        assert_eq!(position.children[0].child_tags(), ["rv:p"]);

        let velocity = motors[1].render_attributes();
        assert_eq!(velocity.get("min_velocity"), Some("-50.000000"));
        assert_eq!(velocity.get("max_velocity"), Some("50.000000"));

        let head = motors[2].to_node();
        assert_eq!(head.attributes.get("type"), Some("custom"));
        assert!(head.children.is_empty());
    }

    #[test]
    fn velocity_defaults_apply() {
        let config = MotorsConfig::from_toml(
            r#"
[shared]
service_name = "rover"

[[motors]]
kind = "velocity"
part_id = "wheelR"
"#,
        )
        .unwrap();
        let MotorConfig::Velocity(c) = &config.motors[0] else {
            panic!("expected velocity entry");
        };
        assert_eq!(c.min_velocity, -100.0);
        assert_eq!(c.max_velocity, 100.0);
        assert_eq!(c.pid, None);
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let result = MotorsConfig::from_toml(
            r#"
[shared]
service_name = "rover"

[[motors]]
kind = "stepper"
part_id = "x"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_part_id_is_parse_error() {
        let result = MotorsConfig::from_toml(
            r#"
[shared]
service_name = "rover"

[[motors]]
kind = "pid"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn inverted_bounds_are_accepted() {
        let config = MotorsConfig::from_toml(
            r#"
[shared]
service_name = "rover"

[[motors]]
kind = "velocity"
part_id = "wheelR"
min_velocity = 5.0
max_velocity = -5.0
"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        let attrs = config.build_all()[0].render_attributes();
        assert_eq!(attrs.get("min_velocity"), Some("5.000000"));
    }

    #[test]
    fn misspelled_key_is_parse_error() {
        let result = MotorsConfig::from_toml(
            r#"
[shared]
service_name = "rover"

[[motors]]
kind = "velocity"
part_id = "wheelR"
min_velocity = 5.0
max_velocty = -5.0
"#,
        );
        let Err(ConfigError::ParseError(message)) = &result else {
            panic!("expected parse error, got {result:?}");
        };
        assert!(message.contains("max_velocty"), "{message}");
    }

    #[test]
    fn unknown_key_rejected_for_every_kind() {
        for kind in ["motor", "pid", "position"] {
            let text = format!(
                "[shared]\nservice_name = \"rover\"\n\n[[motors]]\nkind = \"{kind}\"\npart_id = \"x\"\njoints = \"j\"\n"
            );
            assert!(
                matches!(
                    MotorsConfig::from_toml(&text),
                    Err(ConfigError::ParseError(_))
                ),
                "{kind}"
            );
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn inverted_bounds_are_logged_as_warning() {
        let config = MotorsConfig::from_toml(
            r#"
[shared]
log_level = "warn"
service_name = "rover"

[[motors]]
kind = "velocity"
part_id = "wheelR"
min_velocity = 5.0
max_velocity = -5.0

[[motors]]
kind = "velocity"
part_id = "wheelL"
"#,
        )
        .unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || config.validate());
        assert!(result.is_ok());

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("velocity bounds are inverted"), "{logs}");
        assert!(logs.contains("wheelR"), "{logs}");
        assert!(!logs.contains("wheelL"), "{logs}");
    }

    #[test]
    fn empty_service_name_fails_validation() {
        let config = MotorsConfig::from_toml("[shared]\nservice_name = \"\"\n").unwrap();
        assert!(config.motors.is_empty());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}

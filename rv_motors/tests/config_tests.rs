//! Motor description file tests.
//!
//! Loading from disk, error mapping, `kind` dispatch and fragment output.

use rv_common::config::{ConfigError, LogLevel};
use rv_motors::{FragmentFormat, load_motors_config, render_fragment, write_output};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a description with one motor of every kind.
fn write_motors_toml(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("motors.toml");
    fs::write(
        &path,
        r#"
[shared]
log_level = "warn"
service_name = "spider9-motors"

[[motors]]
kind = "motor"
part_id = "head"

[[motors]]
kind = "pid"
part_id = "arm"
joint = "elbow"

[motors.pid]
i = 0.5
cmd_max = 12.0

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
type = "wheel"
min_velocity = -50.0
max_velocity = 50.0
"#,
    )
    .unwrap();
    path
}

#[test]
fn load_and_render_all_kinds() {
    let tmp = TempDir::new().unwrap();
    let path = write_motors_toml(tmp.path());

    let config = load_motors_config(&path).expect("should load");
    assert_eq!(config.shared.log_level, LogLevel::Warn);
    assert_eq!(config.motors.len(), 4);

    let motors = config.build_all();
    let kinds: Vec<_> = motors.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, ["motor", "pid", "position", "velocity"]);

    let fragment = render_fragment(&motors, FragmentFormat::Xml).unwrap();
    let lines: Vec<_> = fragment.lines().collect();
    assert_eq!(lines[0], r#"<rv:motor type="motor" part_id="head"/>"#);
    assert_eq!(
        lines[1],
        concat!(
            r#"<rv:motor type="pid" part_id="arm" joint="elbow">"#,
            "<rv:pid><rv:i>0.500000</rv:i><rv:cmd_max>12.000000</rv:cmd_max></rv:pid>",
            "</rv:motor>"
        )
    );
    assert_eq!(
        lines[2],
        concat!(
            r#"<rv:motor type="position" part_id="leg1" joint="leg1_joint">"#,
            "<rv:pid><rv:p>2.500000</rv:p></rv:pid>",
            "</rv:motor>"
        )
    );
    assert_eq!(
        lines[3],
        concat!(
            r#"<rv:motor type="wheel" part_id="wheelL" joint="J" "#,
            r#"min_velocity="-50.000000" max_velocity="50.000000">"#,
            "<rv:pid/></rv:motor>"
        )
    );
}

#[test]
fn missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = load_motors_config(&tmp.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn malformed_pid_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("motors.toml");
    fs::write(
        &path,
        r#"
[shared]
service_name = "rover"

[[motors]]
kind = "position"
part_id = "leg1"

[motors.pid]
p = "stiff"
"#,
    )
    .unwrap();

    assert!(matches!(
        load_motors_config(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn misspelled_velocity_bound_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("motors.toml");
    fs::write(
        &path,
        r#"
[shared]
service_name = "rover"

[[motors]]
kind = "velocity"
part_id = "wheelR"
min_velocity = 5.0
max_velocty = -5.0
"#,
    )
    .unwrap();

    assert!(matches!(
        load_motors_config(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn empty_service_name_is_validation_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("motors.toml");
    fs::write(&path, "[shared]\nservice_name = \"\"\n").unwrap();

    assert!(matches!(
        load_motors_config(&path),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn empty_part_id_passes_through() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("motors.toml");
    fs::write(
        &path,
        r#"
[shared]
service_name = "rover"

[[motors]]
kind = "motor"
part_id = ""
"#,
    )
    .unwrap();

    let config = load_motors_config(&path).expect("identity is not checked");
    let fragment = render_fragment(&config.build_all(), FragmentFormat::Xml).unwrap();
    assert_eq!(fragment, r#"<rv:motor type="motor" part_id=""/>"#);
}

#[test]
fn write_output_to_file() {
    let tmp = TempDir::new().unwrap();
    let config = load_motors_config(&write_motors_toml(tmp.path())).unwrap();
    let fragment = render_fragment(&config.build_all(), FragmentFormat::Pretty).unwrap();

    let out = tmp.path().join("motors.sdf");
    write_output(&fragment, Some(out.as_path())).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, format!("{fragment}\n"));
    assert!(written.contains("\n  <rv:pid>\n    <rv:p>2.500000</rv:p>\n  </rv:pid>"));
}

#[test]
fn write_output_to_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("no_such_dir").join("motors.sdf");
    assert!(write_output("<rv:motor/>", Some(out.as_path())).is_err());
}

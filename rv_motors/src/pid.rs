//! PID parameters attached to PID-driven motors.
//!
//! Every term is optional. An unset term is left out of the markup entirely,
//! and the controller then falls back to its own default for that term, so
//! "unset" and "explicitly zero" render differently.

use rv_common::consts::{NAMESPACE, PID_TAG};
use rv_sdf::{Element, Node, namespaced, number_format};
use serde::{Deserialize, Serialize};

/// Local tag names of the PID terms, in render order.
pub const PID_TERMS: [&str; 7] = ["p", "i", "d", "i_max", "i_min", "cmd_max", "cmd_min"];

/// PID controller parameters of a motor.
///
/// Deserializes from a TOML table keyed by the short term names:
///
/// ```toml
/// [pid]
/// p = 1.0
/// i_min = -5.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pid {
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    proportional_gain: Option<f64>,
    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    integral_gain: Option<f64>,
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    derivative_gain: Option<f64>,
    #[serde(rename = "i_max", default, skip_serializing_if = "Option::is_none")]
    integral_max: Option<f64>,
    #[serde(rename = "i_min", default, skip_serializing_if = "Option::is_none")]
    integral_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cmd_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cmd_min: Option<f64>,
}

impl Pid {
    /// PID with every term unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the proportional gain.
    pub fn with_proportional_gain(mut self, value: f64) -> Self {
        self.proportional_gain = Some(value);
        self
    }

    /// Set the integral gain.
    pub fn with_integral_gain(mut self, value: f64) -> Self {
        self.integral_gain = Some(value);
        self
    }

    /// Set the derivative gain.
    pub fn with_derivative_gain(mut self, value: f64) -> Self {
        self.derivative_gain = Some(value);
        self
    }

    /// Set the upper clamp of the integral term.
    pub fn with_integral_max(mut self, value: f64) -> Self {
        self.integral_max = Some(value);
        self
    }

    /// Set the lower clamp of the integral term.
    pub fn with_integral_min(mut self, value: f64) -> Self {
        self.integral_min = Some(value);
        self
    }

    /// Set the upper command limit.
    pub fn with_cmd_max(mut self, value: f64) -> Self {
        self.cmd_max = Some(value);
        self
    }

    /// Set the lower command limit.
    pub fn with_cmd_min(mut self, value: f64) -> Self {
        self.cmd_min = Some(value);
        self
    }

    pub fn proportional_gain(&self) -> Option<f64> {
        self.proportional_gain
    }

    pub fn integral_gain(&self) -> Option<f64> {
        self.integral_gain
    }

    pub fn derivative_gain(&self) -> Option<f64> {
        self.derivative_gain
    }

    pub fn integral_max(&self) -> Option<f64> {
        self.integral_max
    }

    pub fn integral_min(&self) -> Option<f64> {
        self.integral_min
    }

    pub fn cmd_max(&self) -> Option<f64> {
        self.cmd_max
    }

    pub fn cmd_min(&self) -> Option<f64> {
        self.cmd_min
    }

    /// All terms paired with their local tag name, in render order.
    pub fn terms(&self) -> [(&'static str, Option<f64>); 7] {
        let [p, i, d, i_max, i_min, cmd_max, cmd_min] = PID_TERMS;
        [
            (p, self.proportional_gain),
            (i, self.integral_gain),
            (d, self.derivative_gain),
            (i_max, self.integral_max),
            (i_min, self.integral_min),
            (cmd_max, self.cmd_max),
            (cmd_min, self.cmd_min),
        ]
    }

    /// Returns true if no term is set.
    pub fn is_empty(&self) -> bool {
        self.terms().iter().all(|(_, value)| value.is_none())
    }
}

impl Element for Pid {
    fn tag_name(&self) -> &str {
        PID_TAG
    }

    fn render_elements(&self) -> Vec<Node> {
        self.terms()
            .into_iter()
            .filter_map(|(name, value)| {
                value.map(|v| Node::new(namespaced(NAMESPACE, name)).with_body(number_format(v)))
            })
            .collect()
    }
}

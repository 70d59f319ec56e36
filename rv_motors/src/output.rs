//! Fragment rendering and output.

use clap::ValueEnum;
use rv_sdf::writer::write_fragment;
use rv_sdf::{Element, Node};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::any::AnyMotor;
use crate::error::MotorsError;

/// Text form of a rendered motor fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FragmentFormat {
    /// Compact XML, one motor per line.
    #[default]
    Xml,
    /// XML indented by two spaces.
    Pretty,
    /// JSON array of rendered node trees.
    Json,
}

/// Render motors in order into a single text fragment.
pub fn render_fragment(motors: &[AnyMotor], format: FragmentFormat) -> Result<String, MotorsError> {
    let nodes: Vec<Node> = motors.iter().map(|m| m.to_node()).collect();
    debug!(motors = nodes.len(), ?format, "rendering fragment");

    match format {
        FragmentFormat::Xml => Ok(write_fragment(&nodes, None)?),
        FragmentFormat::Pretty => Ok(write_fragment(&nodes, Some(2))?),
        FragmentFormat::Json => {
            serde_json::to_string_pretty(&nodes).map_err(|e| MotorsError::Json(e.to_string()))
        }
    }
}

/// Write a fragment to `path`, or to stdout when no path is given.
pub fn write_output(fragment: &str, path: Option<&Path>) -> Result<(), MotorsError> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{fragment}\n"))
                .map_err(|e| MotorsError::Io(format!("{}: {e}", path.display())))?;
            info!("Fragment written to {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{fragment}").map_err(|e| MotorsError::Io(e.to_string()))?;
        }
    }
    Ok(())
}

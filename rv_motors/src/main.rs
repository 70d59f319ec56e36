//! # RV Motors Binary
//!
//! Renders a TOML motor description into the `rv:motor` fragment embedded in
//! a robot's scene description.
//!
//! # Usage
//!
//! ```bash
//! # Compact XML to stdout
//! rv_motors --config robots/spider9/motors.toml
//!
//! # Indented XML into a file, verbose logging
//! rv_motors --config motors.toml --format pretty --output motors.sdf -v
//!
//! # Inspect the rendered node trees
//! rv_motors --config motors.toml --format json
//! ```

use clap::Parser;
use rv_common::config::ConfigLoader;
use rv_motors::{FragmentFormat, MotorsConfig, MotorsError, render_fragment, write_output};
use std::path::PathBuf;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// RV Motors - render motor descriptions for the model controller plugin
#[derive(Parser, Debug)]
#[command(name = "rv_motors")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Render motor descriptions into scene-description fragments")]
#[command(long_about = None)]
struct Args {
    /// Path to the motor description file.
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Write the fragment to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format of the fragment.
    #[arg(long, value_enum, default_value_t = FragmentFormat::Xml)]
    format: FragmentFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Motor fragment build failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MotorsError> {
    let args = Args::parse();

    // The description's own log level applies unless --verbose is given.
    // Parsing logs nothing; validation runs once the subscriber exists.
    let parsed = MotorsConfig::load(&args.config);
    let file_level = parsed
        .as_ref()
        .map(|c| Level::from(c.shared.log_level))
        .unwrap_or(Level::INFO);
    setup_tracing(&args, file_level);

    info!("RV Motors v{} starting...", env!("CARGO_PKG_VERSION"));
    let config = parsed?;
    config.validate()?;
    info!(
        "Loaded {} motors for '{}' from {}",
        config.motors.len(),
        config.shared.service_name,
        args.config.display()
    );

    let motors = config.build_all();
    let fragment = render_fragment(&motors, args.format)?;
    write_output(&fragment, args.output.as_deref())?;

    info!("RV Motors done");
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments. Logs go to stderr.
fn setup_tracing(args: &Args, default_level: Level) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        default_level
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

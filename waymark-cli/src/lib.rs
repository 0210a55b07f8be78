//! Command-line interface for planning routes with Waymark.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_OUTPUT: &str = "output";
const ARG_PLAN_OPTIMIZE: &str = "optimize";
const ARG_PLAN_MODE: &str = "mode";
const ENV_PLAN_REQUEST: &str = "WAYMARK_CMDS_PLAN_REQUEST_PATH";

/// Run the Waymark CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Plan waypoint routes and export them as GeoJSON",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a route from a JSON request and print it as GeoJSON.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;

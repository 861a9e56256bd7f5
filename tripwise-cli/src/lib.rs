//! Command-line interface for the Tripwise cost engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod output;
mod plan;
mod recommend;

pub use error::CliError;

use catalog::{RoutesArgs, run_routes_with};
use plan::{PlanArgs, run_plan_with};
use recommend::{RecommendArgs, run_recommend_with};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_HOP_DISTANCE: &str = "hop-distance-km";
pub(crate) const ARG_EXTRAS: &str = "extras";
pub(crate) const ENV_PLAN_REQUEST: &str = "TRIPWISE_CMDS_PLAN_REQUEST_PATH";

/// Run the Tripwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading,
/// planning or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => run_plan_with(args, writer),
        Command::Recommend(args) => run_recommend_with(&args, writer),
        Command::Routes(args) => run_routes_with(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripwise",
    about = "Estimate the cost of a multi-city trip",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a trip described by a JSON plan request.
    Plan(PlanArgs),
    /// Suggest a transport mode for a budget and trip length.
    Recommend(RecommendArgs),
    /// List the routes available in a catalog.
    Routes(RoutesArgs),
}

#[cfg(test)]
mod tests;

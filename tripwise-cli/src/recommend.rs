//! The `recommend` subcommand.

use std::io::Write;

use clap::Parser;
use serde::Serialize;
use tripwise_core::{PlannerSettings, TransportMode, recommend_transport, validate_trip};

use crate::CliError;
use crate::output::write_json;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser)]
pub(crate) struct RecommendArgs {
    /// Budget ceiling. Must be positive.
    #[arg(long, value_name = "amount")]
    pub(crate) budget: f64,
    /// Trip length in days, within the planner's accepted range.
    #[arg(long, value_name = "days")]
    pub(crate) days: u32,
}

#[derive(Debug, Serialize)]
struct Recommendation {
    transport: TransportMode,
    label: &'static str,
}

pub(crate) fn run_recommend_with(
    args: &RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    validate_trip(args.days, args.budget, &PlannerSettings::default())
        .map_err(|source| CliError::InvalidRecommendation { source })?;
    let transport = recommend_transport(args.budget, args.days);
    write_json(
        writer,
        &Recommendation {
            transport,
            label: transport.display_name(),
        },
    )
}

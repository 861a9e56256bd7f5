//! Plan command implementation for the Tripwise CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripwise_core::{PlanOutcome, PlanRequest, Planner, PlannerSettings};
use tripwise_fs::{create_utf8_file, open_utf8_file};

use crate::catalog::load_catalog;
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_EXTRAS, ARG_HOP_DISTANCE, ARG_OUTPUT, ARG_PLAN_REQUEST, CliError,
    ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Price a multi-city trip. The request is a JSON-encoded \
                 PlanRequest naming the route, transport, days, budget and \
                 profile. Routes come from the built-in catalog unless \
                 --catalog points at a JSON catalog file.",
    about = "Price a trip plan"
)]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a `PlanRequest`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON city catalog. Defaults to the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Write the outcome to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Distance charged between consecutive stops, in kilometres.
    #[arg(long = ARG_HOP_DISTANCE, value_name = "km")]
    #[serde(default)]
    pub(crate) hop_distance_km: Option<f64>,
    /// Flat amount added to every trip.
    #[arg(long = ARG_EXTRAS, value_name = "amount")]
    #[serde(default)]
    pub(crate) extras: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional catalog file; `None` selects the built-in catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Optional output file; `None` writes to the caller's writer.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Pricing and risk settings handed to the planner.
    pub(crate) settings: PlannerSettings,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let Some(catalog) = &self.catalog {
            Self::require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match tripwise_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        let defaults = PlannerSettings::default();
        let settings = PlannerSettings {
            hop_distance_km: args.hop_distance_km.unwrap_or(defaults.hop_distance_km),
            extras: args.extras.unwrap_or(defaults.extras),
            ..defaults
        };
        settings
            .validate()
            .map_err(|source| CliError::InvalidSettings { source })?;

        Ok(Self {
            request_path,
            catalog: args.catalog,
            output: args.output,
            settings,
        })
    }
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let outcome = execute_plan(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            log::debug!("writing plan outcome to {path}");
            write_json(&mut file, &outcome)
        }
        None => write_json(writer, &outcome),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig) -> Result<PlanOutcome, CliError> {
    let request = load_plan_request(&config.request_path)?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let planner = Planner::new(&catalog, config.settings);
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

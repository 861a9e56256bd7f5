//! Catalog loading and the `routes` subcommand.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use serde::Serialize;
use tripwise_core::CityCatalog;
use tripwise_fs::open_utf8_file;

use crate::output::write_json;
use crate::{ARG_CATALOG, CliError};

/// Load the catalog at `path`, or the built-in catalog when no path is given.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<CityCatalog, CliError> {
    let Some(catalog_path) = path else {
        log::debug!("using the built-in catalog");
        return Ok(CityCatalog::builtin());
    };
    let file = open_utf8_file(catalog_path).map_err(|source| CliError::OpenCatalog {
        path: catalog_path.to_path_buf(),
        source,
    })?;
    CityCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: catalog_path.to_path_buf(),
            source,
        }
    })
}

/// CLI arguments for the `routes` subcommand.
#[derive(Debug, Clone, Parser, Default)]
pub(crate) struct RoutesArgs {
    /// Path to a JSON city catalog. Defaults to the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// One route and its stops, in travel order.
#[derive(Debug, Serialize)]
pub(crate) struct RouteSummary<'c> {
    pub(crate) key: &'c str,
    pub(crate) cities: Vec<&'c str>,
}

pub(crate) fn run_routes_with(args: &RoutesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let summaries = route_summaries(&catalog)?;
    write_json(writer, &summaries)
}

fn route_summaries(catalog: &CityCatalog) -> Result<Vec<RouteSummary<'_>>, CliError> {
    catalog
        .route_keys()
        .map(|key| {
            let route = catalog
                .route(key)
                .map_err(|source| CliError::Catalog { source })?;
            Ok(RouteSummary {
                key,
                cities: route.cities().iter().map(|city| city.name()).collect(),
            })
        })
        .collect()
}

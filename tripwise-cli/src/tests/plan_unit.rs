//! Focused unit tests covering plan CLI configuration and request parsing.

use super::helpers::{Workspace, approx_eq, request_json, write_utf8};
use super::*;
use crate::plan::{PlanConfig, config_from_layers_for_test, load_plan_request};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use tripwise_core::{
    BUILTIN_ROUTE, CatalogError, PlanError, PlanOutcome, PlanRequest, PlannerSettings,
    RiskFlag, SettingsError, TransportChoice, TransportMode, TravelerProfile,
};

fn run_plan_to_string(args: PlanArgs) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_plan_with(args, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("stdout utf-8"))
}

fn parse_outcome(stdout: &str) -> PlanOutcome {
    serde_json::from_str(stdout).expect("output should be a JSON plan outcome")
}

#[rstest]
fn converting_plan_without_request_errors() {
    let args = PlanArgs {
        request_path: None,
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn plan_config_defaults_settings() {
    let args = PlanArgs {
        request_path: Some("request.json".into()),
        ..PlanArgs::default()
    };

    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.settings, PlannerSettings::default());
    assert!(config.catalog.is_none());
    assert!(config.output.is_none());
}

#[rstest]
fn plan_config_applies_setting_overrides() {
    let args = PlanArgs {
        request_path: Some("request.json".into()),
        hop_distance_km: Some(120.0),
        extras: Some(0.0),
        ..PlanArgs::default()
    };

    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.settings.hop_distance_km, 120.0);
    assert_eq!(config.settings.extras, 0.0);
    assert_eq!(
        config.settings.max_days,
        PlannerSettings::default().max_days
    );
}

#[rstest]
#[case::negative_hop(Some(-300.0), None, "hop_distance_km")]
#[case::nan_extras(None, Some(f64::NAN), "extras")]
fn plan_config_rejects_unpriceable_settings(
    #[case] hop_distance_km: Option<f64>,
    #[case] extras: Option<f64>,
    #[case] expected: &str,
) {
    let args = PlanArgs {
        request_path: Some("request.json".into()),
        hop_distance_km,
        extras,
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("invalid settings should error");
    match err {
        CliError::InvalidSettings {
            source: SettingsError::NegativeAmount { field, .. },
        } => assert_eq!(field, expected),
        other => panic!("expected InvalidSettings, found {other:?}"),
    }
}

#[rstest]
#[case::request(ARG_PLAN_REQUEST)]
#[case::catalog(ARG_CATALOG)]
fn validate_sources_reports_missing_files(#[case] missing: &'static str) {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let catalog_path = workspace.path("catalog.json");
    if missing != ARG_PLAN_REQUEST {
        write_utf8(&request_path, b"{}");
    }
    if missing != ARG_CATALOG {
        write_utf8(&catalog_path, b"{}");
    }

    let config = PlanConfig {
        request_path,
        catalog: Some(catalog_path),
        output: None,
        settings: PlannerSettings::default(),
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).expect("request directory");

    let config = PlanConfig {
        request_path: request_path.clone(),
        catalog: None,
        output: None,
        settings: PlannerSettings::default(),
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_plan_request_decodes_json() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, 6, 1200.0)
        .with_profile(TravelerProfile::Family)
        .with_day_overrides(vec![1, 2, 2, 1]);
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&request_path, payload.as_bytes());

    let decoded = load_plan_request(&request_path).expect("request should decode");
    assert_eq!(decoded, request);
}

#[rstest]
fn load_plan_request_rejects_invalid_json() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_plan_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParsePlanRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_plan_request_rejects_unknown_transport() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json("a-b", "bicycle", 4, 1500.0).as_bytes(),
    );

    let err = load_plan_request(&request_path).expect_err("unknown transport should error");
    match err {
        CliError::ParsePlanRequest { source, .. } => {
            assert!(source.to_string().contains("bicycle"));
        }
        other => panic!("expected ParsePlanRequest, found {other:?}"),
    }
}

#[rstest]
fn load_plan_request_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");

    let err = load_plan_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenPlanRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenPlanRequest, found {other:?}"),
    }
}

#[rstest]
fn plan_prices_builtin_route_without_catalog() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json(BUILTIN_ROUTE, "train", 8, 1500.0).as_bytes(),
    );

    let stdout = run_plan_to_string(PlanArgs {
        request_path: Some(request_path),
        ..PlanArgs::default()
    })
    .expect("plan should succeed");
    let outcome = parse_outcome(&stdout);

    assert_eq!(outcome.transport, TransportMode::Train);
    assert_eq!(outcome.map_path.len(), 4);
    assert!(approx_eq(outcome.cost.distance_km, 900.0));
    assert!(approx_eq(outcome.cost.total, 1103.0));
    assert!(
        outcome
            .risks
            .iter()
            .any(|flag| matches!(flag, RiskFlag::LongDistance { .. }))
    );
    assert!(outcome.verdict.is_sufficient());
}

#[rstest]
fn plan_reads_catalog_file() {
    let workspace = Workspace::new();
    let catalog_path = workspace.write_pair_catalog();
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json("a-b", "train", 4, 1500.0).as_bytes(),
    );

    let stdout = run_plan_to_string(PlanArgs {
        request_path: Some(request_path),
        catalog: Some(catalog_path),
        ..PlanArgs::default()
    })
    .expect("plan should succeed");
    let outcome = parse_outcome(&stdout);

    assert!(approx_eq(outcome.cost.total, 476.0));
    assert!(outcome.risks.is_empty());
    assert!(stdout.ends_with('\n'));
}

#[rstest]
fn plan_rejects_malformed_catalog() {
    let workspace = Workspace::new();
    let catalog_path = workspace.path("catalog.json");
    write_utf8(
        &catalog_path,
        br#"{"cities": [], "routes": {"a-b": ["CityA"]}}"#,
    );
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json("a-b", "car", 2, 500.0).as_bytes(),
    );

    let err = run_plan_to_string(PlanArgs {
        request_path: Some(request_path),
        catalog: Some(catalog_path.clone()),
        ..PlanArgs::default()
    })
    .expect_err("inconsistent catalog should fail");
    match err {
        CliError::LoadCatalog { path, .. } => assert_eq!(path, catalog_path),
        other => panic!("expected LoadCatalog, found {other:?}"),
    }
}

#[rstest]
fn plan_surfaces_planner_errors() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json("atlantis", "car", 4, 1500.0).as_bytes(),
    );

    let err = run_plan_to_string(PlanArgs {
        request_path: Some(request_path),
        ..PlanArgs::default()
    })
    .expect_err("unknown route should fail");
    match err {
        CliError::Plan {
            source: PlanError::Catalog(CatalogError::UnknownRoute(route)),
        } => assert_eq!(route, "atlantis"),
        other => panic!("expected Plan error, found {other:?}"),
    }
}

#[rstest]
fn plan_writes_output_file() {
    let workspace = Workspace::new();
    let catalog_path = workspace.write_pair_catalog();
    let request_path = workspace.path("request.json");
    write_utf8(
        &request_path,
        request_json("a-b", "plane", 1, 300.0).as_bytes(),
    );
    let output_path = workspace.path("out/outcome.json");

    let stdout = run_plan_to_string(PlanArgs {
        request_path: Some(request_path),
        catalog: Some(catalog_path),
        output: Some(output_path.clone()),
        ..PlanArgs::default()
    })
    .expect("plan should succeed");
    assert!(stdout.is_empty());

    let written = std::fs::read_to_string(&output_path).expect("output file");
    let outcome = parse_outcome(&written);
    assert!(approx_eq(outcome.cost.total, 380.0));
    assert!(!outcome.verdict.is_sufficient());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let workspace = Workspace::new();
    let env_request = workspace.path("from-env-request.json");
    let cli_catalog = workspace.path("from-cli-catalog.json");

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.path("from-file-catalog.json").as_str(),
            "hop_distance_km": 150.0,
            "extras": 10.0,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "extras": 20.0,
    }));
    composer.push_cli(json!({
        "catalog": cli_catalog.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.catalog, Some(cli_catalog));
    assert_eq!(config.settings.hop_distance_km, 150.0);
    assert_eq!(config.settings.extras, 20.0);
}

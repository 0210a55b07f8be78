//! Plan command implementation for the Waymark CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geojson::FeatureCollection;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use waymark_core::{
    RouteOptions, RoutePoint, RouteStore, RouteStoreError, TravelMode, format_distance,
    format_duration,
};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_MODE, ARG_PLAN_OPTIMIZE, ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST, CliError,
    ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a route from a JSON-encoded plan request, optionally \
                 reorder its interior waypoints, and emit the result as a \
                 GeoJSON feature collection. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Plan a route and export it as GeoJSON"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the GeoJSON document to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Reorder interior waypoints before exporting.
    #[arg(
        long = ARG_PLAN_OPTIMIZE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) optimize: Option<bool>,
    /// Override the request's travel mode (driving, walking, transit, cycling).
    #[arg(long = ARG_PLAN_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Destination file; `None` writes to the supplied writer.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Force optimization regardless of the request options.
    pub(crate) optimize: bool,
    /// Travel mode overriding the request options.
    pub(crate) mode: Option<TravelMode>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
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
        Ok(Self {
            request_path,
            output: args.output,
            optimize: args.optimize.unwrap_or(false),
            mode: args.mode.as_deref().map(TravelMode::from_name),
        })
    }
}

/// JSON payload accepted by `waymark plan`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlanRequest {
    /// Display name for the route.
    pub(crate) name: String,
    /// Waypoints in visiting order.
    #[serde(default)]
    pub(crate) points: Vec<RoutePoint>,
    /// Creation options; omitted fields take their defaults.
    #[serde(default)]
    pub(crate) options: RouteOptions,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let document = execute_plan(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_document(&mut file, &document)
        }
        None => write_document(writer, &document),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(config: &PlanConfig) -> Result<FeatureCollection, CliError> {
    let request = load_plan_request(&config.request_path)?;
    let mut options = request.options;
    if let Some(mode) = config.mode {
        options.mode = mode;
    }

    let mut store = RouteStore::new();
    let id = store
        .create_route(request.name, request.points, options)
        .id()
        .clone();

    if config.optimize || options.optimize {
        match store.optimize(&id) {
            Ok(()) => {}
            Err(RouteStoreError::InsufficientPoints { count, .. }) => {
                log::warn!("skipping optimization: route has only {count} points");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let document = store.export_geojson(&id)?;
    if let Some(route) = store.get(&id) {
        log::info!(
            "planned {:?}: {} points, {}, {} by {}",
            route.name(),
            route.points().len(),
            format_distance(route.distance()),
            format_duration(route.duration()),
            route.mode()
        );
    }
    Ok(document)
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

fn write_document(writer: &mut dyn Write, document: &FeatureCollection) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(document).map_err(CliError::SerializeDocument)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dotenv::dotenv;
use tracing::{error, info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{DEFAULT_CSV_PATH, DEFAULT_OUTPUT_FORMAT};
use crate::domain::error::NetworkError;
use crate::domain::types::NetworkConfig;
use crate::export::{print_dist_matrix, render_table, to_json, write_matrix_csv};
use crate::network::create_network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Table,
}

impl FromStr for OutputFormat {
    type Err = NetworkError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(NetworkError::UnknownFormat {
                name: name.to_string(),
            }),
        }
    }
}

/// Resolve `OUTPUT_FORMAT`, unknown names fall back to JSON.
pub fn output_format(name: Option<String>) -> OutputFormat {
    let name = name.unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string());
    name.parse().unwrap_or_else(|e| {
        warn!("{}, falling back to json", e);
        OutputFormat::Json
    })
}

/// Resolve `OUTPUT_PATH` for CSV output.
pub fn output_path(path: Option<String>) -> PathBuf {
    PathBuf::from(path.unwrap_or_else(|| DEFAULT_CSV_PATH.to_string()))
}

/// Load `.env` (from `env_file`, or the working directory) and build the log filter.
///
/// `.env` must be loaded first so a `RUST_LOG` set there reaches the filter.
fn env_filter(env_file: Option<&Path>) -> EnvFilter {
    if let Some(path) = env_file {
        dotenv::from_path(path).ok();
    } else {
        dotenv().ok();
    }
    EnvFilter::from_default_env()
}

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(env_filter(None))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

/// Emit the network in `format`. JSON and table go to `out`, CSV goes to `csv_path`.
pub fn write_output<W: Write>(
    format: OutputFormat,
    network: &NetworkConfig,
    csv_path: &Path,
    out: &mut W,
) -> crate::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json(network)?)?,
        OutputFormat::Csv => write_matrix_csv(network, csv_path)?,
        OutputFormat::Table => write!(out, "{}", render_table(network))?,
    }
    Ok(())
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let format = output_format(env::var("OUTPUT_FORMAT").ok());
    let span = span!(Level::INFO, "roadnetwork", ?format);
    let _guard = span.enter();

    let network = create_network();
    if let Err(e) = network.validate() {
        error!("Road network failed validation: {}", e);
        return Err(e.into());
    }
    print_dist_matrix(&network.distance_matrix);

    if network.is_symmetric() {
        info!("Distance matrix is symmetric");
    } else {
        warn!("Distance matrix is not symmetric");
    }

    let csv_path = output_path(env::var("OUTPUT_PATH").ok());
    write_output(format, &network, &csv_path, &mut io::stdout().lock())?;

    info!(
        "Road network ready: {} nodes, {} vehicle(s), depot {}",
        network.num_nodes(),
        network.num_vehicles,
        network.depot
    );
    Ok(())
}

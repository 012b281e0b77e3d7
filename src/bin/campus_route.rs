//! campus-route: print nearest-reception routes as JSON.
//!
//! Reads campus data from a JSON snapshot or from the backend REST API.

use std::path::PathBuf;
use std::process::ExitCode;

use campus_router::error::{NearestPathError, StoreError};
use campus_router::rest::{RestStore, StoreConfig};
use campus_router::store::MemoryStore;
use campus_router::traits::SpatialPointStore;
use campus_router::{campus_routes, nearest_path, RouterConfig, DEFAULT_TOLERANCE};
use clap::{ArgGroup, Parser};
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "campus-route", about = "Route campus totems to their nearest reception")]
#[command(group(ArgGroup::new("source").required(true).args(["snapshot", "base_url"])))]
#[command(group(ArgGroup::new("target").required(true).args(["totem", "campus"])))]
struct Args {
    /// JSON snapshot with totems, receptions and paths
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long)]
    base_url: Option<String>,

    /// API path prefix on the backend
    #[arg(long, default_value = "/api")]
    api_prefix: String,

    /// Bearer token for the backend
    #[arg(long, env = "CAMPUS_ROUTE_TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Route a single totem
    #[arg(long)]
    totem: Option<i64>,

    /// Route every totem of a campus
    #[arg(long)]
    campus: Option<String>,

    /// Per-axis attachment tolerance in degrees
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RouterConfig {
        tolerance: args.tolerance,
    };

    let store: Box<dyn SpatialPointStore> = match open_store(&args) {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "Failed to open store");
            return ExitCode::FAILURE;
        }
    };

    if let Some(totem_id) = args.totem {
        return match nearest_path(&*store, totem_id, &config) {
            Ok(route) => print_json(&route),
            Err(err) => {
                print_error(&err);
                ExitCode::FAILURE
            }
        };
    }

    let campus = args.campus.unwrap_or_default();
    match campus_routes(&*store, &campus, &config) {
        Ok(routes) => {
            let body: Vec<_> = routes
                .iter()
                .map(|route| match &route.result {
                    Ok(path) => json!({ "totem_id": route.totem_id, "path": path }),
                    Err(err) => json!({ "totem_id": route.totem_id, "error": err.to_string() }),
                })
                .collect();
            print_json(&body)
        }
        Err(err) => {
            print_error(&NearestPathError::from(err));
            ExitCode::FAILURE
        }
    }
}

fn open_store(args: &Args) -> Result<Box<dyn SpatialPointStore>, StoreError> {
    if let Some(path) = &args.snapshot {
        return Ok(Box::new(MemoryStore::load(path)?));
    }
    let config = StoreConfig {
        base_url: args.base_url.clone().unwrap_or_default(),
        api_prefix: args.api_prefix.clone(),
        timeout_secs: args.timeout_secs,
        access_token: args.token.clone(),
    };
    Ok(Box::new(RestStore::new(config)?))
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to serialize output");
            ExitCode::FAILURE
        }
    }
}

fn print_error(err: &NearestPathError) {
    error!(status = err.status_code(), error = %err, "Routing failed");
    if let Ok(text) = serde_json::to_string(&err.body()) {
        println!("{text}");
    }
}

//! Checker application wiring.
//!
//! Run providing the env file of the frontend that points to the backend:
//!
//! ```text
//! cargo run -- --env-path ./frontend/.env
//! STATUS_CHECKER_ENV_PATH=./frontend/.env cargo run
//! ```
//!
//! Run providing the backend base URL directly:
//!
//! ```text
//! cargo run -- --backend-url http://127.0.0.1:8000
//! STATUS_CHECKER_BACKEND_URL=http://127.0.0.1:8000 cargo run
//! ```
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::config::{parse_from_env_file, Configuration};
use crate::console::Console;
use crate::service::{CheckResult, Service};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the env file containing the backend URL entry.
    #[clap(short, long, env = "STATUS_CHECKER_ENV_PATH")]
    env_path: Option<PathBuf>,

    /// Backend base URL, overriding the env file.
    #[clap(short, long, env = "STATUS_CHECKER_BACKEND_URL")]
    backend_url: Option<String>,
}

/// # Errors
///
/// Will return an error if the backend URL cannot be resolved from the
/// command line arguments or the env file. Check failures are not errors;
/// they are reported inside the returned results.
pub async fn run() -> Result<Vec<CheckResult>> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let args = Args::parse();

    let config = setup_config(args)?;

    let service = Service::new(Arc::new(config), Console::default())?;

    Ok(service.run_checks().await)
}

fn setup_config(args: Args) -> Result<Configuration> {
    // If a base URL is directly supplied, we use it.
    if let Some(backend_url) = args.backend_url {
        Configuration::from_backend_url(&backend_url).context("invalid backend URL")
    }
    // or we extract it from the frontend env file...
    else if let Some(path) = args.env_path {
        let file_content = std::fs::read_to_string(path.clone()).with_context(|| format!("can't read env file {path:?}"))?;
        parse_from_env_file(&file_content).with_context(|| format!("no usable backend URL in env file {path:?}"))
    }
    // but we cannot run without any config...
    else {
        Err(anyhow::anyhow!("no configuration provided"))
    }
}

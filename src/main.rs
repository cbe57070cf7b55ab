//! Program to run the contract checks against a running status API.
//!
//! ```text
//! cargo run -- --env-path ./frontend/.env
//! cargo run -- --backend-url http://127.0.0.1:8000
//! ```
use std::process;

use status_api_checker::app;
use status_api_checker::service::CheckResult;

#[tokio::main]
async fn main() {
    match app::run().await {
        Ok(results) => {
            if results.iter().all(CheckResult::passed) {
                process::exit(0);
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            process::exit(1);
        }
    }
}

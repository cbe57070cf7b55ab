//! The Contract Verifier service.
//!
//! It runs the fixed check battery strictly sequentially, in a fixed order:
//! root reachability, create record, list records, cross-origin policy,
//! persistence round trip. A failing check never aborts the run; its error
//! is printed and recorded, and the next check still executes.
use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::checks::{api_root, cors, persistence, status};
use crate::config::{Configuration, DEFAULT_TIMEOUT};
use crate::printer::Printer;

/// Client name submitted by the standalone create check.
pub const CREATE_CLIENT_NAME: &str = "Fresh Meat Market";

/// Client name submitted by the persistence round-trip check.
pub const ROUND_TRIP_CLIENT_NAME: &str = "Premium Butcher Shop";

pub struct Service<P: Printer> {
    config: Arc<Configuration>,
    console: P,
    client: HttpClient,
}

/// Outcome of one check, under its position in the fixed battery.
#[derive(Debug)]
pub enum CheckResult {
    ApiRoot(Result<(), api_root::Error>),
    CreateStatus(Result<status::StatusCheck, status::Error>),
    ListStatus(Result<usize, status::Error>),
    Cors(Result<cors::CorsSupport, cors::Error>),
    Persistence(Result<(), persistence::Error>),
}

impl CheckResult {
    /// Display name used in the summary table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApiRoot(_) => "GET /api/",
            Self::CreateStatus(_) => "POST /api/status",
            Self::ListStatus(_) => "GET /api/status",
            Self::Cors(_) => "CORS configuration",
            Self::Persistence(_) => "Persistence round trip",
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Self::ApiRoot(result) => result.is_ok(),
            Self::CreateStatus(result) => result.is_ok(),
            Self::ListStatus(result) => result.is_ok(),
            Self::Cors(result) => result.is_ok(),
            Self::Persistence(result) => result.is_ok(),
        }
    }
}

impl<P: Printer> Service<P> {
    /// Builds the service with one shared HTTP client. The per-request
    /// timeout bounds the whole run even against an unresponsive service.
    ///
    /// # Errors
    ///
    /// Will return an error if the HTTP client cannot be built.
    pub fn new(config: Arc<Configuration>, console: P) -> Result<Self, reqwest::Error> {
        let client = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self { config, console, client })
    }

    /// The printer the service reports through. Tests use it to read back
    /// captured output.
    pub fn console(&self) -> &P {
        &self.console
    }

    /// Runs all checks in the fixed order and prints the summary.
    ///
    /// The returned results keep that order. Overall success is every
    /// result passing; the binary maps that to the process exit code.
    pub async fn run_checks(&self) -> Vec<CheckResult> {
        tracing::info!("running checks against {}", self.config.backend_url);

        self.console
            .println(&format!("Checking the status API at {} ...", self.config.backend_url));

        let mut results = Vec::with_capacity(5);

        // Root reachability
        {
            let check = api_root::run(&self.client, &self.config.api_root_url).await;
            match &check {
                Ok(()) => self.console.println("✓ - GET /api/ returned the expected greeting"),
                Err(err) => self.console.eprintln(&format!("✗ - GET /api/ failed: {err}")),
            }
            results.push(CheckResult::ApiRoot(check));
        }

        // Create record
        {
            let check = status::create(&self.client, &self.config.status_url, CREATE_CLIENT_NAME).await;
            match &check {
                Ok(created) => self
                    .console
                    .println(&format!("✓ - POST /api/status created record {}", created.id)),
                Err(err) => self.console.eprintln(&format!("✗ - POST /api/status failed: {err}")),
            }
            results.push(CheckResult::CreateStatus(check));
        }

        // List records
        {
            let check = status::list(&self.client, &self.config.status_url)
                .await
                .map(|records| records.len());
            match &check {
                Ok(count) => self.console.println(&format!("✓ - GET /api/status returned {count} record(s)")),
                Err(err) => self.console.eprintln(&format!("✗ - GET /api/status failed: {err}")),
            }
            results.push(CheckResult::ListStatus(check));
        }

        // Cross-origin policy
        {
            let check = cors::run(&self.client, &self.config.status_url, &self.config.api_root_url).await;
            match &check {
                Ok(support) => self.console.println(&format!(
                    "✓ - CORS allow-origin {:?} (preflight status {})",
                    support.allow_origin, support.preflight_status
                )),
                Err(err) => self.console.eprintln(&format!("✗ - CORS check failed: {err}")),
            }
            results.push(CheckResult::Cors(check));
        }

        // Persistence round trip
        {
            let check = persistence::run(&self.client, &self.config.status_url, ROUND_TRIP_CLIENT_NAME).await;
            match &check {
                Ok(()) => self.console.println("✓ - created record observable in a later listing"),
                Err(err) => self.console.eprintln(&format!("✗ - persistence round trip failed: {err}")),
            }
            results.push(CheckResult::Persistence(check));
        }

        self.print_summary(&results);

        results
    }

    fn print_summary(&self, results: &[CheckResult]) {
        self.console.println("");
        self.console.println(&"=".repeat(60));
        self.console.println("CHECK SUMMARY");
        self.console.println(&"=".repeat(60));

        let mut passed = 0;
        let mut failed = 0;

        for result in results {
            let status = if result.passed() {
                passed += 1;
                "PASSED"
            } else {
                failed += 1;
                "FAILED"
            };
            self.console.println(&format!("{:<25} {status}", result.name()));
        }

        self.console
            .println(&format!("\nTotal: {}, Passed: {passed}, Failed: {failed}", results.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::CheckResult;
    use crate::checks::{api_root, cors};

    #[test]
    fn it_should_map_each_result_to_its_display_name() {
        let result = CheckResult::ApiRoot(Ok(()));

        assert_eq!(result.name(), "GET /api/");
        assert_eq!(CheckResult::ListStatus(Ok(0)).name(), "GET /api/status");
    }

    #[test]
    fn a_check_passes_only_when_its_result_is_ok() {
        assert!(CheckResult::ApiRoot(Ok(())).passed());
        assert!(CheckResult::ListStatus(Ok(0)).passed());
        assert!(!CheckResult::Cors(Err(cors::Error::MissingAllowOriginHeader)).passed());
        assert!(!CheckResult::ApiRoot(Err(api_root::Error::WrongGreeting {
            actual: "Goodbye".to_owned(),
        }))
        .passed());
    }
}

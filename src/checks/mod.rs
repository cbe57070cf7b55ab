//! The individual contract checks.
//!
//! Each check is a pure async function from the shared HTTP client and the
//! endpoint URL to an explicit `Result`. Checks never print and never panic;
//! the [`service`](crate::service) runs them in a fixed order and reports.
pub mod api_root;
pub mod cors;
pub mod persistence;
pub mod status;

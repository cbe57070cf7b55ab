//! Contract checker for the status REST API.
//!
//! It resolves the backend base URL from the frontend env file (or directly
//! from the command line), runs a fixed battery of HTTP checks against the
//! live service and reports an aggregated pass/fail summary:
//!
//! - `GET /api/` returns the expected greeting.
//! - `POST /api/status` creates a status check and echoes the client name.
//! - `GET /api/status` returns the status check collection.
//! - The API answers cross-origin requests with an
//!   `access-control-allow-origin` header.
//! - A created status check is observable unchanged in a later listing
//!   (persistence round trip).
//!
//! Checks run strictly sequentially and never abort the run: every transport
//! fault or contract mismatch becomes a failing result with a diagnostic.
//! Only a configuration error is fatal. The process exits with `0` if and
//! only if every check passed.
pub mod app;
pub mod checks;
pub mod config;
pub mod console;
pub mod logger;
pub mod printer;
pub mod service;

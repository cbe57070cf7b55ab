//! Cross-origin policy check.
//!
//! It probes the API the way a browser would: a preflight `OPTIONS` request
//! with cross-origin simulation headers, then a plain `GET` whose response
//! headers are scanned (case-insensitively) for
//! `access-control-allow-origin`. Presence of the header is sufficient to
//! pass; the preflight status is reported but not asserted.
use reqwest::{Client as HttpClient, StatusCode};
use thiserror::Error;
use url::Url;

/// Origin submitted with the preflight request.
pub const SIMULATED_ORIGIN: &str = "https://example.com";

const ALLOW_ORIGIN_HEADER: &str = "access-control-allow-origin";

/// What the check observed on a passing run.
#[derive(Debug, Clone)]
pub struct CorsSupport {
    /// Preflight response status. Logged, not asserted.
    pub preflight_status: StatusCode,
    /// Value of the `access-control-allow-origin` header on the plain GET.
    pub allow_origin: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("preflight request failed: {err}")]
    PreflightError { err: reqwest::Error },
    #[error("failed to get a response: {err}")]
    ResponseError { err: reqwest::Error },
    #[error("no access-control-allow-origin header found")]
    MissingAllowOriginHeader,
}

/// Checks that the API announces a cross-origin policy.
///
/// # Errors
///
/// Will return an error if either request fails or the plain response
/// carries no `access-control-allow-origin` header.
pub async fn run(client: &HttpClient, status_url: &Url, api_root_url: &Url) -> Result<CorsSupport, Error> {
    tracing::debug!("OPTIONS {status_url} (simulated origin {SIMULATED_ORIGIN})");

    let preflight = client
        .request(reqwest::Method::OPTIONS, status_url.clone())
        .header("Origin", SIMULATED_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "Content-Type")
        .send()
        .await
        .map_err(|err| Error::PreflightError { err })?;

    let preflight_status = preflight.status();

    let response = client
        .get(api_root_url.clone())
        .send()
        .await
        .map_err(|err| Error::ResponseError { err })?;

    // reqwest lowercases header names, but the contract is about the header
    // being present whatever its casing on the wire.
    let allow_origin = response
        .headers()
        .iter()
        .find(|(name, _)| name.as_str().eq_ignore_ascii_case(ALLOW_ORIGIN_HEADER))
        .map(|(_, value)| String::from_utf8_lossy(value.as_bytes()).into_owned());

    match allow_origin {
        Some(allow_origin) => Ok(CorsSupport {
            preflight_status,
            allow_origin,
        }),
        None => Err(Error::MissingAllowOriginHeader),
    }
}

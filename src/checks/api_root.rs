//! Root reachability check.
//!
//! `GET /api/` must answer `200 OK` with a JSON body carrying the exact
//! greeting the backend template ships with.
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// The greeting the API root must return.
pub const EXPECTED_GREETING: &str = "Hello World";

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to get a response: {err}")]
    ResponseError { err: reqwest::Error },
    #[error("expected status 200, got {code}")]
    UnexpectedStatusCode { code: StatusCode },
    #[error("response body is not valid JSON: {err}")]
    InvalidJsonBody { err: reqwest::Error },
    #[error("response has no \"message\" field: {body}")]
    MissingGreeting { body: Value },
    #[error("expected greeting \"Hello World\", got {actual:?}")]
    WrongGreeting { actual: String },
}

/// Checks that the API root answers with the expected greeting.
///
/// # Errors
///
/// Will return an error if the request fails, the status code is not `200`
/// or the body does not carry the exact greeting.
pub async fn run(client: &HttpClient, api_root_url: &Url) -> Result<(), Error> {
    tracing::debug!("GET {api_root_url}");

    let response = client
        .get(api_root_url.clone())
        .send()
        .await
        .map_err(|err| Error::ResponseError { err })?;

    if response.status() != StatusCode::OK {
        return Err(Error::UnexpectedStatusCode { code: response.status() });
    }

    let body: Value = response.json().await.map_err(|err| Error::InvalidJsonBody { err })?;

    match body.get("message").and_then(Value::as_str) {
        Some(greeting) if greeting == EXPECTED_GREETING => Ok(()),
        Some(greeting) => Err(Error::WrongGreeting {
            actual: greeting.to_owned(),
        }),
        None => Err(Error::MissingGreeting { body }),
    }
}

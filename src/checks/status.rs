//! Status check resource checks: create one record, list the collection.
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// The resource under test. The service owns its lifecycle; the checker
/// only ever reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

/// The fields every status check record must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "client_name", "timestamp"];

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to get a response: {err}")]
    ResponseError { err: reqwest::Error },
    #[error("expected status 200, got {code}")]
    UnexpectedStatusCode { code: StatusCode },
    #[error("response body is not valid JSON: {err}")]
    InvalidJsonBody { err: reqwest::Error },
    #[error("record is missing fields {fields:?}: {record}")]
    MissingFields { fields: Vec<&'static str>, record: Value },
    #[error("record is malformed: {err}")]
    MalformedRecord { err: serde_json::Error },
    #[error("expected client name {expected:?}, got {actual:?}")]
    ClientNameMismatch { expected: String, actual: String },
    #[error("record has an empty timestamp: {record}")]
    EmptyTimestamp { record: Value },
    #[error("expected a JSON array, got: {body}")]
    NotAnArray { body: Value },
}

/// Creates a status check record and validates the echoed record.
///
/// The response must be `200` with a JSON object carrying all of
/// [`REQUIRED_FIELDS`], the submitted client name unchanged and a non-empty
/// timestamp.
///
/// # Errors
///
/// Will return an error if the request fails or the echoed record violates
/// any of those expectations.
pub async fn create(client: &HttpClient, status_url: &Url, client_name: &str) -> Result<StatusCheck, Error> {
    tracing::debug!("POST {status_url} client_name={client_name:?}");

    let response = client
        .post(status_url.clone())
        .json(&serde_json::json!({ "client_name": client_name }))
        .send()
        .await
        .map_err(|err| Error::ResponseError { err })?;

    if response.status() != StatusCode::OK {
        return Err(Error::UnexpectedStatusCode { code: response.status() });
    }

    let record: Value = response.json().await.map_err(|err| Error::InvalidJsonBody { err })?;

    validate_record_shape(&record)?;

    let status_check: StatusCheck = serde_json::from_value(record.clone()).map_err(|err| Error::MalformedRecord { err })?;

    if status_check.client_name != client_name {
        return Err(Error::ClientNameMismatch {
            expected: client_name.to_owned(),
            actual: status_check.client_name,
        });
    }

    if status_check.timestamp.is_empty() {
        return Err(Error::EmptyTimestamp { record });
    }

    Ok(status_check)
}

/// Lists the status check collection.
///
/// An empty collection passes. A non-empty collection gets a structural
/// spot-check of its first element only; full validation of every element
/// is intentionally out of scope. The raw elements are returned so callers
/// can scan them.
///
/// # Errors
///
/// Will return an error if the request fails, the body is not a JSON array
/// or the first element does not carry all of [`REQUIRED_FIELDS`].
pub async fn list(client: &HttpClient, status_url: &Url) -> Result<Vec<Value>, Error> {
    tracing::debug!("GET {status_url}");

    let response = client
        .get(status_url.clone())
        .send()
        .await
        .map_err(|err| Error::ResponseError { err })?;

    if response.status() != StatusCode::OK {
        return Err(Error::UnexpectedStatusCode { code: response.status() });
    }

    let body: Value = response.json().await.map_err(|err| Error::InvalidJsonBody { err })?;

    let Value::Array(records) = body else {
        return Err(Error::NotAnArray { body });
    };

    if let Some(first) = records.first() {
        validate_record_shape(first)?;
    }

    Ok(records)
}

fn validate_record_shape(record: &Value) -> Result<(), Error> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| record.get(field).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields {
            fields: missing,
            record: record.clone(),
        })
    }
}

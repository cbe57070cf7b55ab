//! Persistence round-trip check.
//!
//! The only check composing two operations: create a record, list the
//! collection, and require the created record to be observable unchanged.
//! It validates end-to-end durability through the service's storage layer.
use reqwest::Client as HttpClient;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::status;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not create the record: {err}")]
    CreateError { err: status::Error },
    #[error("could not list the collection: {err}")]
    ListError { err: status::Error },
    #[error("created record {id:?} not found in the listed collection")]
    RecordNotFound { id: String },
    #[error("record {id:?} came back with client name {actual:?}, expected {expected:?}")]
    ClientNameChanged { id: String, expected: String, actual: String },
}

/// Creates a record and requires a later listing to contain it unchanged.
///
/// The collection is scanned linearly; no ordering is assumed.
///
/// # Errors
///
/// Will return an error if the create or list operation fails, if the
/// created record is absent from the listing or if its client name changed.
pub async fn run(client: &HttpClient, status_url: &Url, client_name: &str) -> Result<(), Error> {
    let created = status::create(client, status_url, client_name)
        .await
        .map_err(|err| Error::CreateError { err })?;

    let records = status::list(client, status_url)
        .await
        .map_err(|err| Error::ListError { err })?;

    let found = records
        .iter()
        .find(|record| record.get("id").and_then(Value::as_str) == Some(created.id.as_str()));

    let Some(found) = found else {
        return Err(Error::RecordNotFound { id: created.id });
    };

    match found.get("client_name").and_then(Value::as_str) {
        Some(actual) if actual == client_name => Ok(()),
        actual => Err(Error::ClientNameChanged {
            id: created.id,
            expected: client_name.to_owned(),
            actual: actual.unwrap_or_default().to_owned(),
        }),
    }
}

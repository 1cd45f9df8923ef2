//! Request handlers for the entry point and both resource collections.
//!
//! Every handler follows the same shape: extract the identifier and body,
//! validate, perform one store operation, then assemble a response whose
//! `links` point back into the API.

pub mod root;
pub mod todos;
pub mod users;

use axum::extract::FromRequest;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::links::{BaseUrl, Links};
use crate::store::{from_document, DocumentCollection, DocumentId};

/// JSON request body whose rejections map onto [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Body of a collection listing.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub items: Vec<String>,
    pub links: Links,
}

async fn list_collection(
    collection: &dyn DocumentCollection,
    base: &BaseUrl,
) -> Result<Listing, ApiError> {
    let items = collection
        .distinct_ids()
        .await?
        .into_iter()
        .map(|id| base.join(id))
        .collect();
    Ok(Listing {
        items,
        links: Links::to_self(base.as_str()),
    })
}

/// Resolve a path identifier to its stored record.
///
/// A malformed identifier and a missing document both become `NotFound`.
async fn load<T: DeserializeOwned>(
    collection: &dyn DocumentCollection,
    raw_id: &str,
) -> Result<(DocumentId, T), ApiError> {
    let id = DocumentId::parse(raw_id).map_err(|_| ApiError::NotFound)?;
    let document = collection.find_one(&id).await?.ok_or(ApiError::NotFound)?;
    let record = from_document(&id, document)?;
    Ok((id, record))
}

//! Envelope types for the documents the content API returns
//!
//! The backend answers every query with a `{ "data": ..., "errors": [...] }`
//! envelope. Entry payloads carry a single `{ "id", "attributes" }` record,
//! collection payloads a list of them plus an optional pagination metadata
//! block mirroring the requested response flags.

use serde::Deserialize;
use serde_json::Value;

/// Error type for response-document handling
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Malformed response document: {0}")]
    Malformed(String),

    #[error("Response data has no \"{0}\" payload")]
    MissingEntity(String),

    #[error("API returned errors: {0}")]
    Api(String),
}

/// Top-level response envelope
#[derive(Debug, Deserialize, Clone)]
pub struct Envelope {
    pub data: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// A single GraphQL-style error entry
#[derive(Debug, Deserialize, Clone)]
pub struct ApiError {
    pub message: String,
}

/// One addressable record: identifier plus the requested attributes
#[derive(Debug, Deserialize, Clone)]
pub struct Entry<A> {
    pub id: String,
    pub attributes: A,
}

/// Entry payload: `{ "data": { "id", "attributes" } }`
#[derive(Debug, Deserialize, Clone)]
pub struct EntryDocument<A> {
    pub data: Option<Entry<A>>,
}

/// Collection payload: `{ "data": [...], "meta": { "pagination": {...} } }`
#[derive(Debug, Deserialize, Clone)]
pub struct CollectionDocument<A> {
    pub data: Vec<Entry<A>>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Meta {
    pub pagination: Option<PaginationMeta>,
}

/// Pagination metadata block. Every field is optional; presence mirrors the
/// response flags the query requested.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PaginationMeta {
    pub page: Option<u32>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    #[serde(rename = "pageCount")]
    pub page_count: Option<u32>,
    pub total: Option<u64>,
}

/// Parse a raw response document and extract the payload for one entity.
///
/// Surfaces API errors as a joined message and distinguishes a missing
/// payload from a malformed document.
pub fn extract_entity(raw: &str, entity: &str) -> Result<Value, ResponseError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|e| ResponseError::Malformed(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(ResponseError::Api(messages.join("; ")));
    }

    envelope
        .data
        .and_then(|mut data| data.remove(entity))
        .ok_or_else(|| ResponseError::MissingEntity(entity.to_string()))
}

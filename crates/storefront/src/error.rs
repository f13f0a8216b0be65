#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid filter spec: {0}")]
    InvalidFilter(String),

    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),
}

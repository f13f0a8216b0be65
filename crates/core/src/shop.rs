//! Transformations for the shop header display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::{self, EntryDocument, ResponseError};

/// Entity name under which the backend exposes the shop entry
pub const SHOP_ENTITY: &str = "shop";

/// Raw shop attributes as returned by the content API
#[derive(Debug, Deserialize, Clone)]
pub struct ShopAttributes {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Clean shop header model ready for rendering
#[derive(Debug, Serialize, Clone)]
pub struct ShopHeader {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
}

/// Convert an ISO-8601 timestamp to the display format
pub fn format_timestamp(raw: Option<&str>) -> Option<String> {
    raw.and_then(|raw| {
        let dt: DateTime<Utc> = raw.parse().ok()?;
        Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    })
}

/// Transform a raw shop entry into the header model
pub fn transform_shop(id: String, attributes: ShopAttributes) -> ShopHeader {
    ShopHeader {
        id,
        name: attributes.name,
        description: attributes.description,
        logo: attributes.logo,
        published: format_timestamp(attributes.published_at.as_deref()),
        updated: format_timestamp(attributes.updated_at.as_deref()),
    }
}

/// Parse a raw response document into the shop header model
pub fn parse_shop_document(raw: &str) -> Result<ShopHeader, ResponseError> {
    let payload = response::extract_entity(raw, SHOP_ENTITY)?;
    let document: EntryDocument<ShopAttributes> = serde_json::from_value(payload)
        .map_err(|e| ResponseError::Malformed(e.to_string()))?;

    let entry = document
        .data
        .ok_or_else(|| ResponseError::MissingEntity(SHOP_ENTITY.to_string()))?;

    Ok(transform_shop(entry.id, entry.attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_document() -> String {
        r#"{
            "data": {
                "shop": {
                    "data": {
                        "id": "1",
                        "attributes": {
                            "name": "Corner Shop",
                            "description": "Everything for the corner of your desk.",
                            "logo": "https://cdn.example.com/logo.svg",
                            "publishedAt": "2024-03-01T09:30:00Z",
                            "updatedAt": "2024-04-15T17:05:10Z"
                        }
                    }
                }
            }
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_shop_document() {
        let header = parse_shop_document(&shop_document()).unwrap();
        assert_eq!(header.id, "1");
        assert_eq!(header.name, "Corner Shop");
        assert_eq!(
            header.description.as_deref(),
            Some("Everything for the corner of your desk.")
        );
        assert_eq!(header.logo.as_deref(), Some("https://cdn.example.com/logo.svg"));
        assert_eq!(header.published.as_deref(), Some("2024-03-01 09:30:00 UTC"));
        assert_eq!(header.updated.as_deref(), Some("2024-04-15 17:05:10 UTC"));
    }

    #[test]
    fn test_parse_shop_document_minimal_attributes() {
        let raw = r#"{
            "data": {
                "shop": {
                    "data": {"id": "3", "attributes": {"name": "Bare Shop"}}
                }
            }
        }"#;
        let header = parse_shop_document(raw).unwrap();
        assert_eq!(header.name, "Bare Shop");
        assert!(header.description.is_none());
        assert!(header.published.is_none());
    }

    #[test]
    fn test_parse_shop_document_null_entry() {
        let raw = r#"{"data": {"shop": {"data": null}}}"#;
        let err = parse_shop_document(raw).unwrap_err();
        assert!(matches!(err, ResponseError::MissingEntity(_)));
    }

    #[test]
    fn test_parse_shop_document_api_errors() {
        let raw = r#"{"errors": [{"message": "Forbidden"}]}"#;
        let err = parse_shop_document(raw).unwrap_err();
        assert!(matches!(err, ResponseError::Api(_)));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(Some("2024-03-01T09:30:00Z")).as_deref(),
            Some("2024-03-01 09:30:00 UTC")
        );
        assert_eq!(format_timestamp(Some("yesterday")), None);
        assert_eq!(format_timestamp(None), None);
    }
}

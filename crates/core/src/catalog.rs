//! Transformations for product catalog listings

use serde::{Deserialize, Serialize};

use crate::response::{self, CollectionDocument, ResponseError};
use crate::shop::format_timestamp;

/// Entity name under which the backend exposes the product collection
pub const PRODUCTS_ENTITY: &str = "products";

/// Raw product attributes as returned by the content API
#[derive(Debug, Deserialize, Clone)]
pub struct ProductAttributes {
    pub name: String,
    pub slug: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Individual catalog item output
#[derive(Debug, Serialize, Clone)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
    pub published: Option<String>,
}

/// Pagination metadata for catalog output
#[derive(Debug, Serialize, Clone)]
pub struct CatalogPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete catalog output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct CatalogOutput {
    pub items: Vec<CatalogItem>,
    pub pagination: CatalogPaginationInfo,
}

/// Calculate pagination bounds for a given page
///
/// Returns (start_index, end_index) for slicing the items array.
/// Returns an error if the page is out of range or if there are no items.
pub fn calculate_pagination(
    total_items: usize,
    page: usize,
    limit: usize,
) -> Result<(usize, usize), String> {
    if total_items == 0 {
        return Err("No products available for pagination".to_string());
    }
    if page == 0 || limit == 0 {
        return Err("Page and limit must be at least 1".to_string());
    }

    let start = (page - 1) * limit;

    if start >= total_items {
        let total_pages = total_items.div_ceil(limit);
        return Err(format!(
            "Page {page} is out of range. Only {total_pages} pages available."
        ));
    }

    let end = (start + limit).min(total_items);
    Ok((start, end))
}

fn navigation_commands(current_page: usize, total_pages: usize) -> (Option<String>, Option<String>) {
    let next = (current_page < total_pages)
        .then(|| format!("storefront catalog list --page {}", current_page + 1));
    let prev = (current_page > 1)
        .then(|| format!("storefront catalog list --page {}", current_page - 1));
    (next, prev)
}

/// Transform a parsed product collection document into catalog output
///
/// Pagination info is taken from the response metadata block where present;
/// absent fields fall back to values derived from the item list itself.
pub fn transform_products(document: CollectionDocument<ProductAttributes>) -> CatalogOutput {
    let items: Vec<CatalogItem> = document
        .data
        .into_iter()
        .map(|entry| CatalogItem {
            id: entry.id,
            name: entry.attributes.name,
            slug: entry.attributes.slug,
            price: entry.attributes.price,
            in_stock: entry.attributes.in_stock,
            published: format_timestamp(entry.attributes.published_at.as_deref()),
        })
        .collect();

    let meta = document
        .meta
        .and_then(|meta| meta.pagination)
        .unwrap_or_default();

    let total_items = meta.total.map(|t| t as usize).unwrap_or(items.len());
    let page_size = meta
        .page_size
        .map(|n| n as usize)
        .unwrap_or_else(|| items.len())
        .max(1);
    let current_page = meta.page.map(|n| n as usize).unwrap_or(1);
    let total_pages = meta
        .page_count
        .map(|n| n as usize)
        .unwrap_or_else(|| total_items.div_ceil(page_size))
        .max(1);

    let (next_page_command, prev_page_command) = navigation_commands(current_page, total_pages);

    CatalogOutput {
        items,
        pagination: CatalogPaginationInfo {
            current_page,
            total_pages,
            total_items,
            page_size,
            next_page_command,
            prev_page_command,
        },
    }
}

/// Re-slice a catalog output client-side to one page of items
///
/// Used when the rendered document was fetched without server-side
/// pagination; the pagination info is recomputed from the slice.
pub fn paginate(output: CatalogOutput, page: usize, limit: usize) -> Result<CatalogOutput, String> {
    let total_items = output.items.len();
    let (start, end) = calculate_pagination(total_items, page, limit)?;
    let total_pages = total_items.div_ceil(limit);
    let (next_page_command, prev_page_command) = navigation_commands(page, total_pages);

    Ok(CatalogOutput {
        items: output.items[start..end].to_vec(),
        pagination: CatalogPaginationInfo {
            current_page: page,
            total_pages,
            total_items,
            page_size: limit,
            next_page_command,
            prev_page_command,
        },
    })
}

/// Parse a raw response document into catalog output
pub fn parse_catalog_document(raw: &str) -> Result<CatalogOutput, ResponseError> {
    let payload = response::extract_entity(raw, PRODUCTS_ENTITY)?;
    let document: CollectionDocument<ProductAttributes> = serde_json::from_value(payload)
        .map_err(|e| ResponseError::Malformed(e.to_string()))?;
    Ok(transform_products(document))
}

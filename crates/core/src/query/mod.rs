//! Assembly of GraphQL-style request strings for the content API
//!
//! The builder functions here are total: they never fail and never validate.
//! Malformed inputs (empty entity names, negative ids) are serialized
//! verbatim; the consuming API is the point where such requests are rejected.
//! Every function is referentially transparent and safe to call concurrently.
//!
//! The produced grammar, the sole external contract:
//!
//! ```text
//! Query       := "query { " RequestBody " }"
//! RequestBody := EntryReq | CollectionReq
//! EntryReq    := Name ("(id: " Int ")")? " { " DataBlock " }"
//! CollectionReq := Name ("(" ParamList ")")? " { " DataBlock (" " MetaBlock)? " }"
//! ParamList   := ("filters: " Literal ", ")? ("pagination: " Literal ", ")? ("sort: " Literal ", ")?
//! DataBlock   := "data { id attributes { " FieldList " } }"
//! MetaBlock   := "meta { pagination { " FlagNames " } }"
//! ```

mod filter;
mod params;

pub use filter::{CmpOp, FieldCondition, Filter, Scalar};
pub use params::{Pagination, PaginationResponseFlags, SortSpec};

/// Wrap arbitrary request content in the outer query envelope.
///
/// Pure concatenation, no validation; holds for any content including the
/// empty string.
pub fn wrap_query(content: &str) -> String {
    format!("query {{ {content} }}")
}

/// Build a request body for a single entry.
///
/// The id clause is present only when `id` is supplied; the value is
/// serialized verbatim with no bounds checking. An empty field list yields a
/// syntactically valid but semantically empty attribute selection.
pub fn build_entry(entity: &str, fields: &[&str], id: Option<i64>) -> String {
    let id_clause = match id {
        Some(id) => format!("(id: {id})"),
        None => String::new(),
    };
    format!(
        "{entity}{id_clause} {{ {} }}",
        data_block(fields)
    )
}

/// Build a request body for a filtered, sorted, paginated collection.
///
/// The parenthesized parameter list appears only if at least one of
/// filter/sort/pagination is supplied; clause order is fixed as filters,
/// pagination, sort, each contributing `<key>: <value>, ` (the trailing comma
/// is tolerated by the consuming grammar). The metadata block is appended
/// only when `flags` is supplied; false-valued flags are omitted from it.
pub fn build_collection(
    entity: &str,
    fields: &[&str],
    filter: Option<&Filter>,
    sort: Option<&SortSpec>,
    pagination: Option<&Pagination>,
    flags: Option<&PaginationResponseFlags>,
) -> String {
    let mut params = String::new();
    if let Some(filter) = filter {
        params.push_str("filters: ");
        params.push_str(&filter.to_literal());
        params.push_str(", ");
    }
    if let Some(pagination) = pagination {
        params.push_str("pagination: ");
        params.push_str(&pagination.to_literal());
        params.push_str(", ");
    }
    if let Some(sort) = sort {
        params.push_str("sort: ");
        params.push_str(&sort.to_literal());
        params.push_str(", ");
    }

    let param_clause = if params.is_empty() {
        String::new()
    } else {
        format!("({params})")
    };

    let meta_block = match flags {
        Some(flags) => format!(" meta {{ pagination {{ {} }} }}", flags.enabled().join(" ")),
        None => String::new(),
    };

    format!(
        "{entity}{param_clause} {{ {}{meta_block} }}",
        data_block(fields)
    )
}

fn data_block(fields: &[&str]) -> String {
    format!("data {{ id attributes {{ {} }} }}", fields.join(" "))
}

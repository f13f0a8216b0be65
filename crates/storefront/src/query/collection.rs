use crate::prelude::{println, *};
use storefront_core::query::{
    build_collection, wrap_query, CmpOp, FieldCondition, Filter, Pagination,
    PaginationResponseFlags, Scalar, SortSpec,
};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CollectionOptions {
    /// Entity name, e.g. "products"
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Attribute to request (repeatable, order preserved)
    #[arg(short, long = "field", value_name = "NAME", required = true)]
    pub fields: Vec<String>,

    /// Filter clause as FIELD:OP[:VALUE] (repeatable), e.g. name:eq:shop
    #[arg(long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,

    /// Combine repeated --filter clauses with "or" instead of the default "and"
    #[arg(long)]
    pub any: bool,

    /// Sort spec as "field:direction" (repeatable, order preserved)
    #[arg(short, long = "sort", value_name = "SPEC")]
    pub sorts: Vec<String>,

    /// Page index (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,

    /// Offset-based pagination: first record index
    #[arg(long)]
    pub start: Option<u32>,

    /// Offset-based pagination: record count
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination metadata field to request (repeatable), e.g. total
    #[arg(long = "meta", value_name = "FLAG")]
    pub meta: Vec<String>,

    /// Print the request body without the outer query envelope
    #[arg(long)]
    pub raw: bool,
}

pub fn run(options: CollectionOptions, _global: crate::Global) -> Result<()> {
    println!("{}", collection_query(&options)?);
    Ok(())
}

/// Assemble a collection query string from the parsed options
pub fn collection_query(options: &CollectionOptions) -> Result<String> {
    let filter = build_filter(&options.filters, options.any).map_err(|e| eyre!(e))?;
    let sort = SortSpec::from_specs(&options.sorts);
    let pagination = build_pagination(options);
    let flags = build_flags(&options.meta);

    let fields: Vec<&str> = options.fields.iter().map(String::as_str).collect();
    let body = build_collection(
        &options.entity,
        &fields,
        filter.as_ref(),
        sort.as_ref(),
        pagination.as_ref(),
        flags.as_ref(),
    );

    Ok(if options.raw { body } else { wrap_query(&body) })
}

/// Parse a FIELD:OP[:VALUE] spec into its parts
///
/// The value is typed by inspection (int, float, bool, null, then string);
/// surrounding double quotes force string interpretation. Operators that
/// take no value, like `null`, default to true.
fn parse_filter_spec(spec: &str) -> Result<(String, CmpOp, Scalar), Error> {
    let mut parts = spec.splitn(3, ':');

    let field = match parts.next() {
        Some(field) if !field.is_empty() => field.to_string(),
        _ => {
            return Err(Error::InvalidFilter(f!(
                "{spec} (expected FIELD:OP[:VALUE])"
            )))
        }
    };

    let op: CmpOp = parts
        .next()
        .ok_or_else(|| Error::InvalidFilter(f!("{spec} (expected FIELD:OP[:VALUE])")))?
        .parse()
        .map_err(Error::InvalidFilter)?;

    let value = match parts.next() {
        Some(raw) => Scalar::guess(raw),
        None => Scalar::Bool(true),
    };

    Ok((field, op, value))
}

fn build_filter(specs: &[String], any: bool) -> Result<Option<Filter>, Error> {
    if specs.is_empty() {
        return Ok(None);
    }

    let clauses = specs
        .iter()
        .map(|spec| parse_filter_spec(spec))
        .collect::<Result<Vec<_>, Error>>()?;

    let filter = if any && clauses.len() > 1 {
        Filter::new().or(clauses
            .into_iter()
            .map(|(field, op, value)| Filter::new().field(field, FieldCondition::cmp(op, value)))
            .collect())
    } else {
        clauses
            .into_iter()
            .fold(Filter::new(), |filter, (field, op, value)| {
                filter.field(field, FieldCondition::cmp(op, value))
            })
    };

    Ok(Some(filter))
}

fn build_pagination(options: &CollectionOptions) -> Option<Pagination> {
    let pagination = Pagination {
        page: options.page,
        page_size: options.page_size,
        start: options.start,
        limit: options.limit,
    };

    (!pagination.is_empty()).then_some(pagination)
}

fn build_flags(meta: &[String]) -> Option<PaginationResponseFlags> {
    if meta.is_empty() {
        return None;
    }

    Some(
        meta.iter()
            .fold(PaginationResponseFlags::new(), |flags, name| {
                flags.include(name.clone())
            }),
    )
}

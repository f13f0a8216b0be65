use crate::prelude::{println, *};
use storefront_core::query::{build_entry, wrap_query};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct EntryOptions {
    /// Entity name, e.g. "shop"
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Attribute to request (repeatable, order preserved)
    #[arg(short, long = "field", value_name = "NAME", required = true)]
    pub fields: Vec<String>,

    /// Entry identifier
    #[arg(long)]
    pub id: Option<i64>,

    /// Print the request body without the outer query envelope
    #[arg(long)]
    pub raw: bool,
}

pub fn run(options: EntryOptions, _global: crate::Global) -> Result<()> {
    println!("{}", entry_query(&options));
    Ok(())
}

/// Assemble an entry query string from the parsed options
pub fn entry_query(options: &EntryOptions) -> String {
    let fields: Vec<&str> = options.fields.iter().map(String::as_str).collect();
    let body = build_entry(&options.entity, &fields, options.id);

    if options.raw {
        body
    } else {
        wrap_query(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(entity: &str, fields: &[&str]) -> EntryOptions {
        EntryOptions {
            entity: entity.to_string(),
            fields: fields.iter().map(|s| s.to_string()).collect(),
            id: None,
            raw: false,
        }
    }

    #[test]
    fn test_entry_query_wrapped() {
        let query = entry_query(&options("shop", &["name", "description"]));
        assert_eq!(
            query,
            "query { shop { data { id attributes { name description } } } }"
        );
    }

    #[test]
    fn test_entry_query_with_id() {
        let mut opts = options("shop", &["name"]);
        opts.id = Some(7);
        assert!(entry_query(&opts).contains("shop(id: 7)"));
    }

    #[test]
    fn test_entry_query_raw() {
        let mut opts = options("shop", &["name"]);
        opts.raw = true;
        let query = entry_query(&opts);
        assert!(!query.starts_with("query {"));
        assert!(query.starts_with("shop {"));
    }
}

//! Pagination, sort and pagination-metadata parameters
//!
//! Small value objects serialized into the collection parameter list. All are
//! opaque to the builder beyond serialization; only set options are emitted.

use crate::query::filter::write_quoted;

/// Numeric pagination options. Only the options that are set appear in the
/// literal, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.page_size.is_none()
            && self.start.is_none()
            && self.limit.is_none()
    }

    /// Serialize to a literal like `{page: 2, pageSize: 10}`.
    pub fn to_literal(&self) -> String {
        let mut out = String::from("{");
        let options = [
            ("page", self.page),
            ("pageSize", self.page_size),
            ("start", self.start),
            ("limit", self.limit),
        ];
        let mut first = true;
        for (key, value) in options {
            if let Some(value) = value {
                if !first {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                out.push_str(&value.to_string());
                first = false;
            }
        }
        out.push('}');
        out
    }
}

/// Sort specification: one `"field:direction"` string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSpec {
    One(String),
    Many(Vec<String>),
}

impl SortSpec {
    /// Build from an ordered list of CLI-supplied specs.
    ///
    /// Returns `None` for an empty list so callers can pass the result
    /// straight to the builder.
    pub fn from_specs(specs: &[String]) -> Option<SortSpec> {
        match specs {
            [] => None,
            [only] => Some(SortSpec::One(only.clone())),
            many => Some(SortSpec::Many(many.to_vec())),
        }
    }

    /// Serialize to `"name:asc"` or `["name:asc", "price:desc"]`.
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        match self {
            SortSpec::One(spec) => write_quoted(spec, &mut out),
            SortSpec::Many(specs) => {
                out.push('[');
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_quoted(spec, &mut out);
                }
                out.push(']');
            }
        }
        out
    }
}

/// Which pagination-metadata fields the response should include. Insertion
/// order is output order; false-valued flags are omitted from output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationResponseFlags {
    flags: Vec<(String, bool)>,
}

impl PaginationResponseFlags {
    pub fn new() -> Self {
        PaginationResponseFlags::default()
    }

    pub fn flag(mut self, name: impl Into<String>, include: bool) -> Self {
        self.flags.push((name.into(), include));
        self
    }

    /// Shorthand for a true-valued flag.
    pub fn include(self, name: impl Into<String>) -> Self {
        self.flag(name, true)
    }

    /// Names of the true-valued flags, in insertion order.
    pub fn enabled(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|(_, include)| *include)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_emits_only_set_options() {
        let pagination = Pagination {
            page: Some(2),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(pagination.to_literal(), "{page: 2, pageSize: 10}");
    }

    #[test]
    fn test_pagination_declaration_order() {
        let pagination = Pagination {
            limit: Some(5),
            start: Some(20),
            ..Default::default()
        };
        // start precedes limit regardless of construction order
        assert_eq!(pagination.to_literal(), "{start: 20, limit: 5}");
    }

    #[test]
    fn test_pagination_empty() {
        assert!(Pagination::default().is_empty());
        assert_eq!(Pagination::default().to_literal(), "{}");
    }

    #[test]
    fn test_sort_single_spec() {
        let sort = SortSpec::One("name:asc".to_string());
        assert_eq!(sort.to_literal(), r#""name:asc""#);
    }

    #[test]
    fn test_sort_many_specs() {
        let sort = SortSpec::Many(vec!["name:asc".to_string(), "price:desc".to_string()]);
        assert_eq!(sort.to_literal(), r#"["name:asc", "price:desc"]"#);
    }

    #[test]
    fn test_sort_from_specs() {
        assert_eq!(SortSpec::from_specs(&[]), None);
        assert_eq!(
            SortSpec::from_specs(&["name:asc".to_string()]),
            Some(SortSpec::One("name:asc".to_string()))
        );
        assert_eq!(
            SortSpec::from_specs(&["a:asc".to_string(), "b:desc".to_string()]),
            Some(SortSpec::Many(vec!["a:asc".to_string(), "b:desc".to_string()]))
        );
    }

    #[test]
    fn test_flags_enabled_preserves_insertion_order() {
        let flags = PaginationResponseFlags::new()
            .flag("total", true)
            .flag("pageCount", false)
            .flag("page", true);
        assert_eq!(flags.enabled(), vec!["total", "page"]);
    }

    #[test]
    fn test_flags_all_false() {
        let flags = PaginationResponseFlags::new().flag("total", false);
        assert!(flags.enabled().is_empty());
    }
}

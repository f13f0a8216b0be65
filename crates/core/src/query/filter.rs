//! Filter expressions and their literal serialization
//!
//! Filters are modelled as a small tagged-variant tree and serialized by a
//! dedicated recursive writer. Object keys are emitted unquoted, string leaf
//! values quoted and escaped, so a string value that happens to contain
//! `"key":`-shaped text can never corrupt the surrounding literal.

use std::str::FromStr;

/// A scalar literal appearing as a filter leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<Scalar>),
}

impl Scalar {
    /// Parse a CLI-supplied value into the most specific scalar it matches.
    ///
    /// Tries integer, float, boolean and null in that order, falling back to
    /// a string. Surrounding double quotes force string interpretation.
    pub fn guess(raw: &str) -> Scalar {
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Scalar::String(raw[1..raw.len() - 1].to_string());
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Scalar::Int(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            return Scalar::Float(x);
        }
        match raw {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            "null" => Scalar::Null,
            _ => Scalar::String(raw.to_string()),
        }
    }

    pub(crate) fn write_literal(&self, out: &mut String) {
        match self {
            Scalar::String(s) => write_quoted(s, out),
            Scalar::Int(n) => out.push_str(&n.to_string()),
            Scalar::Float(x) => out.push_str(&x.to_string()),
            Scalar::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Scalar::Null => out.push_str("null"),
            Scalar::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_literal(out);
                }
                out.push(']');
            }
        }
    }
}

/// Quote and escape a string value for embedding in a query literal.
pub(crate) fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Comparison operator on a single field, named by its API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    Null,
    NotNull,
}

impl CmpOp {
    /// The operator key as it appears in the serialized literal.
    pub fn key(self) -> &'static str {
        match self {
            CmpOp::Eq => "eq",
            CmpOp::Ne => "ne",
            CmpOp::Lt => "lt",
            CmpOp::Lte => "lte",
            CmpOp::Gt => "gt",
            CmpOp::Gte => "gte",
            CmpOp::Contains => "contains",
            CmpOp::NotContains => "notContains",
            CmpOp::StartsWith => "startsWith",
            CmpOp::EndsWith => "endsWith",
            CmpOp::In => "in",
            CmpOp::NotIn => "notIn",
            CmpOp::Null => "null",
            CmpOp::NotNull => "notNull",
        }
    }
}

impl FromStr for CmpOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(CmpOp::Eq),
            "ne" => Ok(CmpOp::Ne),
            "lt" => Ok(CmpOp::Lt),
            "lte" => Ok(CmpOp::Lte),
            "gt" => Ok(CmpOp::Gt),
            "gte" => Ok(CmpOp::Gte),
            "contains" => Ok(CmpOp::Contains),
            "notContains" => Ok(CmpOp::NotContains),
            "startsWith" => Ok(CmpOp::StartsWith),
            "endsWith" => Ok(CmpOp::EndsWith),
            "in" => Ok(CmpOp::In),
            "notIn" => Ok(CmpOp::NotIn),
            "null" => Ok(CmpOp::Null),
            "notNull" => Ok(CmpOp::NotNull),
            other => Err(format!("Unknown comparison operator: {other}")),
        }
    }
}

/// Condition applied to a single field: one or more comparisons, or a nested
/// filter for relation traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCondition {
    Cmp(Vec<(CmpOp, Scalar)>),
    Nested(Filter),
}

impl FieldCondition {
    pub fn cmp(op: CmpOp, value: impl Into<Scalar>) -> Self {
        FieldCondition::Cmp(vec![(op, value.into())])
    }

    pub fn eq(value: impl Into<Scalar>) -> Self {
        Self::cmp(CmpOp::Eq, value)
    }

    pub fn ne(value: impl Into<Scalar>) -> Self {
        Self::cmp(CmpOp::Ne, value)
    }

    pub fn lt(value: impl Into<Scalar>) -> Self {
        Self::cmp(CmpOp::Lt, value)
    }

    pub fn gt(value: impl Into<Scalar>) -> Self {
        Self::cmp(CmpOp::Gt, value)
    }

    pub fn contains(value: impl Into<Scalar>) -> Self {
        Self::cmp(CmpOp::Contains, value)
    }

    pub fn is_in(values: Vec<Scalar>) -> Self {
        Self::cmp(CmpOp::In, Scalar::List(values))
    }

    pub fn nested(filter: Filter) -> Self {
        FieldCondition::Nested(filter)
    }

    /// Add another comparison to an existing condition, e.g. a range
    /// `gte ... lte ...` on one field. No-op on nested conditions.
    pub fn and_cmp(mut self, op: CmpOp, value: impl Into<Scalar>) -> Self {
        if let FieldCondition::Cmp(conditions) = &mut self {
            conditions.push((op, value.into()));
        }
        self
    }

    fn write(&self, out: &mut String) {
        match self {
            FieldCondition::Cmp(conditions) => {
                out.push('{');
                for (i, (op, value)) in conditions.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(op.key());
                    out.push_str(": ");
                    value.write_literal(out);
                }
                out.push('}');
            }
            FieldCondition::Nested(filter) => filter.write(out),
        }
    }
}

/// A filter expression: an ordered sequence of field conditions and logical
/// combinators. Insertion order is output order; no semantic validation is
/// performed, contradictory filters serialize as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq)]
enum Clause {
    Field(String, FieldCondition),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Filter),
}

impl Filter {
    pub fn new() -> Self {
        Filter::default()
    }

    /// Add a `field: condition` clause.
    pub fn field(mut self, name: impl Into<String>, condition: FieldCondition) -> Self {
        self.clauses.push(Clause::Field(name.into(), condition));
        self
    }

    /// Add an `and: [...]` combinator over nested filters.
    pub fn and(mut self, branches: Vec<Filter>) -> Self {
        self.clauses.push(Clause::And(branches));
        self
    }

    /// Add an `or: [...]` combinator over nested filters.
    pub fn or(mut self, branches: Vec<Filter>) -> Self {
        self.clauses.push(Clause::Or(branches));
        self
    }

    /// Add a `not: {...}` combinator.
    pub fn not(mut self, inner: Filter) -> Self {
        self.clauses.push(Clause::Not(inner));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Serialize to a query literal with unquoted keys, e.g.
    /// `{name: {eq: "shop"}}`.
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    pub(crate) fn write(&self, out: &mut String) {
        out.push('{');
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            clause.write(out);
        }
        out.push('}');
    }
}

impl Clause {
    fn write(&self, out: &mut String) {
        match self {
            Clause::Field(name, condition) => {
                out.push_str(name);
                out.push_str(": ");
                condition.write(out);
            }
            Clause::And(branches) => write_branches("and", branches, out),
            Clause::Or(branches) => write_branches("or", branches, out),
            Clause::Not(inner) => {
                out.push_str("not: ");
                inner.write(out);
            }
        }
    }
}

fn write_branches(key: &str, branches: &[Filter], out: &mut String) {
    out.push_str(key);
    out.push_str(": [");
    for (i, branch) in branches.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        branch.write(out);
    }
    out.push(']');
}

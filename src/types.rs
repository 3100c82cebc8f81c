use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Param
// ---------------------------------------------------------------------------

/// A raw `name[=value]` parameter as it appears in a link-value, before
/// `rel` / `anchor` extraction and attribute deduplication.
///
/// The name is already normalized to lowercase; the value is the unescaped
/// text (quoted-string escapes resolved, nothing else decoded). A parameter
/// without a `=value` part carries an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Parameter name, lowercased.
    pub name: String,
    /// Parameter value (empty when the parameter had no `=value` part).
    pub value: String,
}

impl Param {
    /// Build a param, lowercasing the name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// TargetAttribute
// ---------------------------------------------------------------------------

/// One `(name, value)` target attribute of a [`Link`], e.g. `title` or
/// `type` (RFC 8288 §3.4).
///
/// Names are lowercase; values are the raw parameter text. `rel` and
/// `anchor` never appear here — they are consumed to produce the link's
/// relation type and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetAttribute {
    /// Attribute name, lowercased.
    pub name: String,
    /// Attribute value, raw (RFC 8187 `name*` values are left encoded).
    pub value: String,
}

impl TargetAttribute {
    /// Build a target attribute, lowercasing the name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TargetAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// One resolved web link (RFC 8288 §2).
///
/// A link-value whose `rel` parameter lists N relation types expands into
/// N `Link` records sharing the same context, target, and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// URI of the resource the relation is asserted *from*. Empty when the
    /// context is the representation's own (unknown) URL.
    pub context: String,
    /// A single lowercase relation-type token (never the multi-token
    /// `rel` string).
    pub relation_type: String,
    /// URI the relation points *to*, resolved against the base URI when
    /// possible, otherwise the literal target text.
    pub target: String,
    /// Target attributes in wire order, deduplicated per RFC 8288 §3
    /// (`media`, `title`, `title*`, `type` are single-valued).
    pub attributes: Vec<TargetAttribute>,
}

impl Link {
    /// Look up the first attribute value by name (case-insensitive).
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// Return all values for attributes matching `name` (case-insensitive).
    pub fn attribute_values(&self, name: &str) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
            .collect()
    }

    /// Return `true` if this link carries the given relation type
    /// (case-insensitive).
    pub fn has_relation(&self, relation_type: &str) -> bool {
        self.relation_type.eq_ignore_ascii_case(relation_type)
    }
}

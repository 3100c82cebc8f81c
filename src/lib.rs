//! # linkfield
//!
//! A tolerant **RFC 8288 `Link` header field parser**, designed for use
//! both as a Rust library and as a CLI tool.
//!
//! linkfield turns a raw `Link` field value (or a whole set of header
//! lines) into a flat list of typed [`Link`] records: the bracketed
//! target, the semicolon-delimited parameters, relative-URI resolution
//! against an optional base, and the expansion of multi-token `rel`
//! lists into one record per relation type.
//!
//! Malformed input never produces an error. Following the RFC's
//! tolerances, a broken `<`/`>` delimiter abandons the rest of the field
//! and returns the links parsed so far, and an unresolvable URI falls
//! back to its literal text.
//!
//! Internationalized (`name*`, RFC 8187) parameter values are folded
//! onto their base attribute name but **left in encoded form**; charset
//! and percent decoding is not implemented.
//!
//! ## Quick start — one field value
//!
//! ```rust
//! use linkfield::parse_field;
//!
//! let links = parse_field(r#"<https://example.org/2>; rel="next""#);
//! assert_eq!(links.len(), 1);
//! assert_eq!(links[0].relation_type, "next");
//! assert_eq!(links[0].target, "https://example.org/2");
//! ```
//!
//! ## Quick start — raw header lines with a base URI
//!
//! ```rust
//! use linkfield::parse_header_lines_with_base;
//!
//! let headers = [
//!     "Content-Type: text/html",
//!     r#"Link: </terms>; rel="copyright""#,
//! ];
//! let links = parse_header_lines_with_base(&headers, "https://example.org/a/b");
//! assert_eq!(links[0].target, "https://example.org/terms");
//! ```

mod output;
mod parser;
mod resolve;
mod types;

// Re-export public API.
pub use output::{format_debug, format_json, format_targets};
pub use parser::{parse_param_list, parse_quoted_string, scan_quoted_string, Cursor, ScanOutcome};
pub use resolve::{resolve, ResolveError};
pub use types::{Link, Param, TargetAttribute};

/// Parse one `Link` field value already isolated from its field name.
///
/// Relative target and anchor URIs are left as-is (no base to resolve
/// against). Use [`parse_field_with_base`] to resolve them.
pub fn parse_field(field_value: &str) -> Vec<Link> {
    parser::field_value(field_value, "")
}

/// Parse one `Link` field value, resolving relative URIs against
/// `base_uri` (RFC 3986 §5.2).
///
/// URIs that cannot be resolved are kept literally; resolution failure
/// never aborts the parse.
pub fn parse_field_with_base(field_value: &str, base_uri: &str) -> Vec<Link> {
    parser::field_value(field_value, base_uri)
}

/// Parse a collection of raw header lines, keeping only lines with the
/// literal `Link: ` prefix and concatenating per-line results in order.
pub fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Link> {
    parser::header_set(lines, "")
}

/// Like [`parse_header_lines`], resolving relative URIs against
/// `base_uri`.
pub fn parse_header_lines_with_base<S: AsRef<str>>(lines: &[S], base_uri: &str) -> Vec<Link> {
    parser::header_set(lines, base_uri)
}

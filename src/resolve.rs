use std::fmt;
use url::Url;

/// Reasons URI resolution can fail.
///
/// Resolution failure is never fatal to link parsing: callers fall back to
/// the literal, unresolved reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No base URI was supplied (empty string).
    EmptyBase,
    /// The base URI is not a parseable absolute URI.
    InvalidBase(url::ParseError),
    /// The reference cannot be resolved against the base.
    InvalidReference(url::ParseError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBase => write!(f, "no base URI to resolve against"),
            Self::InvalidBase(e) => write!(f, "invalid base URI: {e}"),
            Self::InvalidReference(e) => write!(f, "unresolvable URI reference: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve a possibly-relative URI `reference` against `base_uri`
/// (RFC 3986 §5.2).
///
/// An empty `reference` resolves to the base itself (minus any fragment),
/// per the RFC's merge rules.
///
/// # Errors
///
/// Returns [`ResolveError`] when the base is empty, the base is not an
/// absolute URI, or the join fails.
pub fn resolve(base_uri: &str, reference: &str) -> Result<String, ResolveError> {
    if base_uri.is_empty() {
        return Err(ResolveError::EmptyBase);
    }

    let base = Url::parse(base_uri).map_err(ResolveError::InvalidBase)?;
    let resolved = base.join(reference).map_err(ResolveError::InvalidReference)?;

    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_merged() {
        assert_eq!(
            resolve("https://example.org/a/b", "terms").unwrap(),
            "https://example.org/a/terms"
        );
    }

    #[test]
    fn dot_dot_segments_are_removed() {
        assert_eq!(
            resolve("https://example.org/a/b", "../terms").unwrap(),
            "https://example.org/terms"
        );
    }

    #[test]
    fn fragment_only_reference_keeps_base_path() {
        assert_eq!(
            resolve("https://example.org/a/b", "#foo").unwrap(),
            "https://example.org/a/b#foo"
        );
    }

    #[test]
    fn empty_reference_resolves_to_base() {
        assert_eq!(
            resolve("https://example.org/a/b", "").unwrap(),
            "https://example.org/a/b"
        );
    }

    #[test]
    fn absolute_reference_ignores_base() {
        assert_eq!(
            resolve("https://example.org/a/b", "http://other.net/x").unwrap(),
            "http://other.net/x"
        );
    }

    #[test]
    fn empty_base_is_reported() {
        assert_eq!(resolve("", "terms"), Err(ResolveError::EmptyBase));
    }

    #[test]
    fn relative_base_is_reported() {
        assert!(matches!(
            resolve("/just/a/path", "terms"),
            Err(ResolveError::InvalidBase(_))
        ));
    }
}

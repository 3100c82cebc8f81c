use crate::resolve::resolve;
use crate::types::{Link, Param, TargetAttribute};

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// A read cursor over an immutable input string.
///
/// All parsing layers advance a shared `Cursor` instead of re-slicing the
/// input, so consumption is monotonic and the unconsumed remainder is
/// always cheap to inspect.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns `true` when the input is fully consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `n` bytes. `n` must land on a UTF-8 character boundary.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.input.is_char_boundary(self.pos + n));
        self.pos += n;
    }

    /// Consume and return the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip horizontal whitespace (SP / HTAB).
    pub fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.pos += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Scan outcome
// ---------------------------------------------------------------------------

/// How a tolerant scan of a quoted string or parameter list terminated.
///
/// Malformed input never raises here; RFC 8288 mandates silent tolerance,
/// so the termination reason is carried as data instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan ended normally (closing quote found, or the parameter
    /// list ran to end of input / a non-parameter character).
    Complete,
    /// Input ended early: a dangling backslash or a quote mark that is
    /// never closed. The accumulated text is still returned.
    TruncatedAtEnd,
    /// A top-level `,` terminated the parameter list; the comma was
    /// consumed as the link-value separator.
    StoppedAtComma,
}

// ---------------------------------------------------------------------------
// Quoted strings
// ---------------------------------------------------------------------------

/// Consume a leading `quoted-string` from the cursor and report how the
/// scan ended.
///
/// If the next character is not a quote mark, nothing is consumed and the
/// result is an empty string. Inside the quotes, `\X` yields a literal `X`
/// for any `X`. A dangling backslash or a missing closing quote truncates
/// silently (RFC 8288 §B.1 tolerance).
pub fn scan_quoted_string(cursor: &mut Cursor<'_>) -> (String, ScanOutcome) {
    if cursor.peek() != Some('"') {
        return (String::new(), ScanOutcome::Complete);
    }
    cursor.bump();

    let mut text = String::new();
    loop {
        match cursor.bump() {
            None => return (text, ScanOutcome::TruncatedAtEnd),
            Some('"') => return (text, ScanOutcome::Complete),
            Some('\\') => match cursor.bump() {
                Some(escaped) => text.push(escaped),
                None => return (text, ScanOutcome::TruncatedAtEnd),
            },
            Some(c) => text.push(c),
        }
    }
}

/// Consume a leading `quoted-string` and return its unquoted text.
///
/// Convenience wrapper around [`scan_quoted_string`] for callers that do
/// not care how the scan terminated.
pub fn parse_quoted_string(cursor: &mut Cursor<'_>) -> String {
    scan_quoted_string(cursor).0
}

// ---------------------------------------------------------------------------
// Parameter lists
// ---------------------------------------------------------------------------

/// Consume a `;`-delimited parameter list from the cursor.
///
/// Parameter names are lowercased. A parameter without `=` carries an
/// empty value. The scan stops at end of input, at the first character
/// that does not start another `;` parameter, or at a top-level `,`
/// (which is consumed — it separates link-values, so the caller's
/// link-value ends there).
pub fn parse_param_list(cursor: &mut Cursor<'_>) -> (Vec<Param>, ScanOutcome) {
    let mut params = Vec::new();

    loop {
        cursor.skip_ws();
        if cursor.peek() != Some(';') {
            return (params, ScanOutcome::Complete);
        }
        cursor.bump();
        cursor.skip_ws();

        // Name runs up to whitespace, '=', ';' or ','. It may be empty
        // when '=' follows the ';' directly.
        let rest = cursor.rest();
        let name_end = rest.find([' ', '\t', '=', ';', ',']).unwrap_or(rest.len());
        let name = &rest[..name_end];
        cursor.advance(name_end);
        cursor.skip_ws();

        let value = if cursor.peek() == Some('=') {
            cursor.bump();
            cursor.skip_ws();
            if cursor.peek() == Some('"') {
                parse_quoted_string(cursor)
            } else {
                scan_unquoted_value(cursor)
            }
        } else {
            String::new()
        };

        params.push(Param::new(name, value));

        cursor.skip_ws();
        match cursor.peek() {
            None => return (params, ScanOutcome::Complete),
            Some(',') => {
                cursor.bump();
                return (params, ScanOutcome::StoppedAtComma);
            }
            _ => {}
        }
    }
}

/// Consume an unquoted parameter value.
///
/// The first character is captured unconditionally; the scan for a
/// terminating `;` or `,` starts one position later. Trailing whitespace
/// stays part of the value. The comma-splitting of the field parser
/// relies on this capture rule, so it is kept as-is.
fn scan_unquoted_value(cursor: &mut Cursor<'_>) -> String {
    let rest = cursor.rest();
    let first_len = rest.chars().next().map_or(0, char::len_utf8);
    let end = rest[first_len..]
        .find([';', ','])
        .map_or(rest.len(), |i| first_len + i);

    let value = rest[..end].to_string();
    cursor.advance(end);
    value
}

// ---------------------------------------------------------------------------
// Link-values
// ---------------------------------------------------------------------------

/// Target attributes that may appear at most once per link (RFC 8288 §3).
const SINGLE_VALUED: [&str; 4] = ["media", "title", "title*", "type"];

/// Parse one `<target>; params...` link-value from the cursor.
///
/// Returns `None` on a structural break (missing `<` or `>`), which
/// aborts the remainder of the whole field, not just this value.
fn parse_link_value(cursor: &mut Cursor<'_>, base_uri: &str) -> Option<Vec<Link>> {
    cursor.skip_ws();
    if cursor.peek() != Some('<') {
        return None;
    }
    cursor.bump();

    let rest = cursor.rest();
    let close = rest.find('>')?;
    let target_text = &rest[..close];
    cursor.advance(close + 1);

    let (params, _) = parse_param_list(cursor);

    let relations = params
        .iter()
        .find(|p| p.name == "rel")
        .map_or("", |p| p.value.as_str());
    let anchor = params
        .iter()
        .find(|p| p.name == "anchor")
        .map_or("", |p| p.value.as_str());

    // Resolution failure degrades to the literal reference text.
    let target = resolve(base_uri, target_text).unwrap_or_else(|_| target_text.to_string());
    let context = resolve(base_uri, anchor).unwrap_or_else(|_| anchor.to_string());

    let attributes = collect_attributes(&params);

    // An N-token rel list expands into N links. A rel value without any
    // whitespace is a single token even when empty.
    let relation_types: Vec<String> = if relations.contains(|c: char| c.is_ascii_whitespace()) {
        relations
            .split_ascii_whitespace()
            .map(|t| t.to_ascii_lowercase())
            .collect()
    } else {
        vec![relations.to_ascii_lowercase()]
    };

    let links = relation_types
        .into_iter()
        .map(|relation_type| Link {
            context: context.clone(),
            relation_type,
            target: target.clone(),
            attributes: attributes.clone(),
        })
        .collect();

    Some(links)
}

/// Build the final attribute list from the raw parameters.
///
/// `rel` and `anchor` are consumed elsewhere and stripped here. Names in
/// [`SINGLE_VALUED`] keep only their first occurrence. A `name*` entry
/// then replaces every plain `name` entry and is renamed to `name`; its
/// value stays in the RFC 8187 encoded form (decoding not implemented).
fn collect_attributes(params: &[Param]) -> Vec<TargetAttribute> {
    let mut attrs: Vec<TargetAttribute> = Vec::new();

    for param in params {
        if param.name == "rel" || param.name == "anchor" {
            continue;
        }
        if SINGLE_VALUED.contains(&param.name.as_str())
            && attrs.iter().any(|a| a.name == param.name)
        {
            continue;
        }
        attrs.push(TargetAttribute::new(
            param.name.as_str(),
            param.value.as_str(),
        ));
    }

    let starred_bases: Vec<String> = attrs
        .iter()
        .filter_map(|a| a.name.strip_suffix('*'))
        .map(str::to_owned)
        .collect();

    attrs.retain(|a| a.name.ends_with('*') || !starred_bases.contains(&a.name));
    for attr in &mut attrs {
        if attr.name.ends_with('*') {
            attr.name.pop();
        }
    }

    attrs
}

// ---------------------------------------------------------------------------
// Field values and header sets
// ---------------------------------------------------------------------------

/// Parse a full comma-joined field value into links.
///
/// A structural break abandons the rest of the field and returns the
/// links collected so far (partial success, never an error).
pub(crate) fn field_value(value: &str, base_uri: &str) -> Vec<Link> {
    let mut cursor = Cursor::new(value);
    let mut links = Vec::new();

    while !cursor.is_empty() {
        match parse_link_value(&mut cursor, base_uri) {
            Some(parsed) => links.extend(parsed),
            None => break,
        }
    }

    links
}

/// The literal field-name prefix expected in raw-header-dump mode.
const FIELD_PREFIX: &str = "Link: ";

/// Parse every `Link: `-prefixed line of a raw header set, in order.
pub(crate) fn header_set<S: AsRef<str>>(lines: &[S], base_uri: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for line in lines {
        if let Some(value) = line.as_ref().strip_prefix(FIELD_PREFIX) {
            links.extend(field_value(value, base_uri));
        }
    }

    links
}

// ---------------------------------------------------------------------------
// Tests (unit)
// ---------------------------------------------------------------------------

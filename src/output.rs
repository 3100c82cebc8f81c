use crate::types::Link;

/// Serialize a slice of [`Link`]s to a JSON array string.
///
/// When `pretty` is `true` the output is indented for readability.
pub fn format_json(links: &[Link], pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(links).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    } else {
        serde_json::to_string(links).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// Render links in a human-readable debug format.
pub fn format_debug(links: &[Link]) -> String {
    let mut out = String::with_capacity(128 + links.len() * 96);

    out.push_str(&format!("=== Links ({}) ===\n", links.len()));
    for link in links {
        out.push_str(&format!("rel:     {}\n", link.relation_type));
        out.push_str(&format!("target:  {}\n", link.target));
        if !link.context.is_empty() {
            out.push_str(&format!("context: {}\n", link.context));
        }
        for attr in &link.attributes {
            out.push_str(&format!("  {}: {}\n", attr.name, attr.value));
        }
        out.push_str("---\n");
    }

    out
}

/// Render one resolved target URI per line, for shell pipelines.
pub fn format_targets(links: &[Link]) -> String {
    let mut out = String::with_capacity(links.len() * 40);

    for link in links {
        out.push_str(&link.target);
        out.push('\n');
    }

    out
}

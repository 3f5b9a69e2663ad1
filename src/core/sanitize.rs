// src/core/sanitize.rs

/// Index-table label → prefix key: `"'A' Codes"` → `"A"`.
/// Drops the literal `" Codes"`, then any surrounding quotes and spaces.
pub fn category_prefix(label: &str) -> String {
    label
        .trim()
        .replace(" Codes", "")
        .trim_matches(|c| c == '\'' || c == ' ')
        .to_string()
}

/// Display label for a category: `HCPCS 'A' Codes`.
pub fn group_label(prefix: &str) -> String {
    format!("HCPCS '{prefix}' Codes")
}

/// `"/Codes/A"` → `Some("A")`. Anything else, including deeper paths like
/// `/Codes/A/A0021`, is not a category link.
pub fn prefix_from_href<'a>(href: &'a str, codes_path: &str) -> Option<&'a str> {
    let rest = href.trim().strip_prefix(codes_path)?.strip_prefix('/')?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(rest),
        _ => None,
    }
}

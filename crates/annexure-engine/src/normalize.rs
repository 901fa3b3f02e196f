//! Label canonicalization so equivalent textual forms compare equal
//!
//! "Annexure-I", "Annexure I", and "annexure i" all normalize to "I";
//! every comparison in the validation engine happens on normalized
//! labels, never on raw strings.

/// Canonicalizes an annexure label.
///
/// Trims the input, uppercases alphabetics, collapses every run of
/// whitespace/hyphen/en-dash separators into a single space, and strips
/// a leading "ANNEXURE" word if present (some upload paths record the
/// full phrase rather than the bare label). Idempotent.
pub fn normalize_label(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '\u{2013}' {
            pending_separator = !collapsed.is_empty();
        } else {
            if pending_separator {
                collapsed.push(' ');
                pending_separator = false;
            }
            collapsed.extend(ch.to_uppercase());
        }
    }

    match collapsed.strip_prefix("ANNEXURE ") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => collapsed,
    }
}

/// Canonicalizes a LAQ number: trimmed and uppercased.
pub fn normalize_laq_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

//! Annexure reference extraction from LAQ answer text

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

use crate::normalize::normalize_label;

lazy_static! {
    // Both \b anchors matter: without the trailing one the plural
    // "annexures" would match and capture "s" as a label.
    static ref ANNEXURE_REF: Regex =
        Regex::new(r"(?i)\bAnnexure\b\s*[-\u{2013}]?\s*([A-Za-z0-9]+)")
            .expect("annexure reference pattern is valid");
}

/// Scans free text for annexure mentions and returns the set of
/// normalized labels it references.
///
/// Returns the empty set when the text contains no annexure pattern;
/// a LAQ legitimately answered without annexures is not an error.
pub fn extract_references(text: &str) -> BTreeSet<String> {
    ANNEXURE_REF
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|label| normalize_label(label.as_str()))
        .collect()
}

//! Property-based tests for annexure extraction and normalization
//!
//! Exercises the word-boundary guarantee and normalization algebra
//! using proptest.

use annexure_engine::{extract_references, normalize_label};
use proptest::prelude::*;

/// Labels as they appear in answers: roman numerals, letters, digits
fn label_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[IVX]{1,4}",
        "[A-Z]",
        "[A-Z][0-9]{1,2}",
        "[0-9]{1,3}",
    ]
}

/// Separator variants seen between "Annexure" and the label
fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("-".to_string()),
        Just(" - ".to_string()),
        Just(" \u{2013} ".to_string()),
        Just("  ".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Normalization algebra
    // ============================================================

    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_label(&raw);
        prop_assert_eq!(normalize_label(&once), once);
    }

    #[test]
    fn normalize_output_has_no_leading_or_trailing_space(raw in "\\PC{0,40}") {
        let normalized = normalize_label(&raw);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn separator_variants_normalize_identically(
        label in label_token(),
        sep_a in separator(),
        sep_b in separator()
    ) {
        let form_a = format!("Annexure{}{}", sep_a, label);
        let form_b = format!("annexure{}{}", sep_b, label.to_lowercase());
        prop_assert_eq!(normalize_label(&form_a), normalize_label(&form_b));
    }

    // ============================================================
    // Extraction
    // ============================================================

    #[test]
    fn extraction_never_panics(text in "\\PC{0,300}") {
        let _ = extract_references(&text);
    }

    #[test]
    fn embedded_mention_is_extracted(
        label in label_token(),
        sep in separator(),
        prefix in "[a-z ]{0,30}",
        suffix in "[a-z .]{0,30}"
    ) {
        prop_assume!(!prefix.contains("annexure") && !suffix.contains("annexure"));
        let text = format!("{} Annexure{}{} {}", prefix, sep, label, suffix);
        let refs = extract_references(&text);
        prop_assert!(
            refs.contains(&normalize_label(&label)),
            "label {:?} not found in {:?} -> {:?}", label, text, refs
        );
    }

    #[test]
    fn plural_word_alone_never_matches(
        prefix in "[a-z ]{0,30}",
        suffix in "[a-z .]{0,30}"
    ) {
        prop_assume!(!prefix.contains("annexure") && !suffix.contains("annexure"));
        // "annexures" must not be read as "annexure" plus label "s"
        let text = format!("{} the annexures attached {}", prefix, suffix);
        prop_assert!(extract_references(&text).is_empty(), "matched in {:?}", text);
    }

    #[test]
    fn text_without_the_word_yields_nothing(text in "[a-z0-9 .,]{0,200}") {
        prop_assume!(!text.to_lowercase().contains("annexure"));
        prop_assert!(extract_references(&text).is_empty());
    }
}

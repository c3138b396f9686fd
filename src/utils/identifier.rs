//! CNPJ normalization
//!
//! Identifiers travel as bare digit strings. Punctuation from formatted input
//! (`12.345.678/0001-90`) is dropped; leading zeros are kept.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Strip every non-digit character
pub fn normalize_identifier(raw: &str) -> String {
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Normalize, drop empties and deduplicate, keeping first-seen order
pub fn normalize_all<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .map(|value| normalize_identifier(value.as_ref()))
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

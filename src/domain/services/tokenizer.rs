//! Geographic Reference Tokenizer
//!
//! Pure domain logic for splitting a raw provenance string into ordered
//! location tokens. This service has NO external dependencies - it's pure Rust.

/// Split a raw geographic reference into ordered location tokens.
///
/// The split happens in three stages:
/// 1. Split on `,` and trim each part.
/// 2. Split each part on the literal conjunction ` and `.
/// 3. If a sub-part carries a parenthesized qualifier, keep only the text
///    between the first `(` and the first `)` after it (a preceding label
///    like `Java (Indonesia)` is dropped). Unbalanced or absent parentheses
///    leave the sub-part unchanged.
///
/// Sub-parts that are empty after trimming are dropped, so a stray comma or
/// an empty qualifier never produces an empty token. Absent input yields an
/// empty token sequence; tokenization itself never fails.
pub fn tokenize(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    for part in raw.split(',') {
        for subpart in part.split(" and ") {
            let token = extract_parenthetical(subpart.trim()).trim();
            if !token.is_empty() {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Reduce `label (qualifier)` to `qualifier`.
///
/// Only the first `(`/`)` pair counts; anything outside it is discarded.
fn extract_parenthetical(subpart: &str) -> &str {
    if let Some(open) = subpart.find('(') {
        if let Some(len) = subpart[open + 1..].find(')') {
            return &subpart[open + 1..open + 1 + len];
        }
    }
    subpart
}

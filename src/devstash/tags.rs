//! Tag parsing for the `--tags` flag.
//!
//! Tags are free-form: the raw flag value is split on commas and each token is
//! trimmed. There is no registry, no validation, no case folding and no
//! de-duplication. Empty tokens between adjacent commas are kept as-is, so
//! `"a,,b"` yields three tags.

/// Splits a comma-separated tag string into trimmed tags.
///
/// Blank input yields an empty list rather than a list holding one empty tag.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

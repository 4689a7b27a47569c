use crate::Snippet;

/// Returned in place of an empty caption text — a sentinel, not an error.
pub const NO_CAPTIONS: &str = "No captions found for video";

/// Join snippet texts with single spaces, in playback order.
pub fn captions_text(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return NO_CAPTIONS.to_string();
    }
    snippets
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one "M:SS - text" line per snippet.
///
/// Fractional start offsets are truncated toward zero before the split into
/// minutes and seconds. Empty input yields an empty vector, not the sentinel
/// used by [`captions_text`].
pub fn timestamp_lines(snippets: &[Snippet]) -> Vec<String> {
    snippets
        .iter()
        .map(|s| {
            let start = s.start as u64;
            format!("{}:{:02} - {}", start / 60, start % 60, s.text)
        })
        .collect()
}

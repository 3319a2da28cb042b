//! Extraction of Mermaid diagrams from Markdown documents

use regex::Regex;
use std::sync::OnceLock;

/// Matches the first mermaid code fence, non-greedy across lines.
fn mermaid_fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```mermaid\s+(.*?)\s+```").expect("mermaid fence pattern is valid")
    })
}

/// Extract the inner text of the first mermaid code fence in `markdown`.
///
/// Returns the trimmed text strictly between the opening and closing fence
/// lines, or `None` when the document contains no mermaid fence. Only the
/// first fence is considered; content of later fences is ignored.
pub fn extract_mermaid_diagram(markdown: &str) -> Option<String> {
    mermaid_fence_regex()
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|content| content.as_str().trim().to_string())
}

//! Building workflow descriptors from Markdown documents
//!
//! Drives the extractor and the diagram compiler, falling back to the fixed
//! default machine when a document carries no usable state diagram.

use crate::workflow::{extract_mermaid_diagram, MermaidParser, ParseResult, WorkflowDescriptor};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Matches the `[*] -->` initial-transition marker.
fn initial_marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\[\*\]\s*-->").expect("initial marker pattern is valid"))
}

/// Cheap content check that text resembles state diagram notation.
///
/// Not a parse: text that merely contains the `stateDiagram` keyword still
/// goes to the compiler even when it declares nothing else.
fn looks_like_state_diagram(diagram: &str) -> bool {
    diagram.contains("stateDiagram") || initial_marker_regex().is_match(diagram)
}

/// Build a workflow descriptor from a Markdown document.
///
/// Extracts the first mermaid fence and compiles it into a descriptor with
/// the fixed `"workflow"` identifier. Documents without a mermaid fence, and
/// fences that do not look like state diagrams, yield
/// [`WorkflowDescriptor::fallback`] instead of an error.
pub fn workflow_from_markdown(markdown: &str) -> ParseResult<WorkflowDescriptor> {
    let Some(diagram) = extract_mermaid_diagram(markdown) else {
        debug!("no mermaid diagram found, using fallback workflow");
        return Ok(WorkflowDescriptor::fallback());
    };

    if !looks_like_state_diagram(&diagram) {
        debug!("mermaid block is not a state diagram, using fallback workflow");
        return Ok(WorkflowDescriptor::fallback());
    }

    let compiled = MermaidParser::new()?.parse(&diagram);
    Ok(WorkflowDescriptor::new(compiled.initial, compiled.states))
}

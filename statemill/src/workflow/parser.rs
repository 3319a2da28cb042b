//! Mermaid state diagram parser for workflows
//!
//! Recognizes the line-oriented subset of Mermaid state diagram notation:
//! initial transitions from `[*]`, labeled transitions, final transitions to
//! `[*]`, and state declarations. Diagram text is free-form, so unrecognized
//! lines are skipped rather than rejected.

use crate::workflow::{StateId, StateNode, StateType, DEFAULT_INITIAL_STATE};
use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during Mermaid parsing
#[derive(Debug, Error)]
pub enum ParseError {
    /// A diagram line pattern failed to compile
    #[error("Failed to compile diagram pattern: {0}")]
    Pattern(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Output of one compile pass over diagram text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDiagram {
    /// State registry in first-seen order
    pub states: IndexMap<StateId, StateNode>,
    /// Resolved initial state
    pub initial: StateId,
}

/// Parser for Mermaid state diagrams using pre-compiled line patterns
pub struct MermaidParser {
    /// Matches `[*] --> StateName`
    initial_regex: Regex,
    /// Matches `Source --> Target` with an optional `: EVENT` label
    transition_regex: Regex,
    /// Matches `StateName --> [*]`
    final_regex: Regex,
    /// Matches `state "Label" as Alias` or `state Name`
    state_decl_regex: Regex,
}

impl MermaidParser {
    /// Create a new parser with compiled line patterns
    pub fn new() -> ParseResult<Self> {
        Ok(Self {
            initial_regex: Regex::new(r"\[\*\]\s*-->\s*(\w+)")
                .map_err(|e| ParseError::Pattern(format!("initial transition: {e}")))?,
            transition_regex: Regex::new(r"(\w+)\s*-->\s*(\w+)(?:\s*:\s*(.+))?")
                .map_err(|e| ParseError::Pattern(format!("labeled transition: {e}")))?,
            final_regex: Regex::new(r"(\w+)\s*-->\s*\[\*\]")
                .map_err(|e| ParseError::Pattern(format!("final transition: {e}")))?,
            state_decl_regex: Regex::new(r#"state\s+(?:"([^"]+)"\s+as\s+)?(\w+)"#)
                .map_err(|e| ParseError::Pattern(format!("state declaration: {e}")))?,
        })
    }

    /// Compile diagram text into a state registry and an initial state.
    ///
    /// Each line is processed exactly once, in source order, against the
    /// patterns above in priority order; the first matching pattern wins.
    /// Blank lines and `%` comments have no effect. States are registered
    /// lazily: any referenced name gets an empty registry entry on first
    /// sight, and the registry preserves that first-seen order.
    ///
    /// The initial state is the target of the last `[*] -->` line, falling
    /// back to the first registered state, then to `idle` for an empty
    /// registry.
    pub fn parse(&self, input: &str) -> CompiledDiagram {
        let mut states: IndexMap<StateId, StateNode> = IndexMap::new();
        let mut initial: Option<StateId> = None;

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }

            if let Some(caps) = self.initial_regex.captures(line) {
                let target = StateId::from(&caps[1]);
                states.entry(target.clone()).or_default();
                initial = Some(target);
                continue;
            }

            if let Some(caps) = self.transition_regex.captures(line) {
                let from = StateId::from(&caps[1]);
                let to = StateId::from(&caps[2]);
                let event = match caps.get(3) {
                    Some(label) => label.as_str().trim().to_string(),
                    None => format!("TO_{}", caps[2].to_uppercase()),
                };
                // Source registers before target so first-seen order holds.
                states.entry(from.clone()).or_default();
                states.entry(to.clone()).or_default();
                states.entry(from).or_default().on.insert(event, to);
                continue;
            }

            if let Some(caps) = self.final_regex.captures(line) {
                let state = StateId::from(&caps[1]);
                // Marking final does not clear existing transitions.
                states.entry(state).or_default().state_type = Some(StateType::Final);
                continue;
            }

            if let Some(caps) = self.state_decl_regex.captures(line) {
                // Display labels are not modeled; only the alias or bare
                // identifier becomes a registry key.
                let state = StateId::from(&caps[2]);
                states.entry(state).or_default();
                continue;
            }

            trace!(line, "skipping unrecognized diagram line");
        }

        let initial = initial
            .or_else(|| states.keys().next().cloned())
            .unwrap_or_else(|| StateId::from(DEFAULT_INITIAL_STATE));
        debug!(initial = %initial, states = states.len(), "compiled state diagram");

        CompiledDiagram { states, initial }
    }
}

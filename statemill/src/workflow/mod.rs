//! Workflow system data structures and types
//!
//! This module provides the core types for representing workflows compiled
//! from Mermaid state diagrams, the diagram extractor, the line-oriented
//! diagram compiler, and the descriptor builder with its fallback workflow.

mod builder;
mod definition;
mod extractor;
mod parser;
mod state;

pub use builder::workflow_from_markdown;
pub use definition::{WorkflowDescriptor, DEFAULT_INITIAL_STATE, WORKFLOW_ID};
pub use extractor::extract_mermaid_diagram;
pub use parser::{CompiledDiagram, MermaidParser, ParseError, ParseResult};
pub use state::{StateError, StateId, StateNode, StateResult, StateType};

//! # Statemill
//!
//! Compile Mermaid state diagrams embedded in Markdown into state machine
//! definitions.
//!
//! ## Features
//!
//! - **Diagram Extraction**: Locate the first mermaid code fence inside a
//!   Markdown document
//! - **State Diagram Compilation**: Parse the state diagram notation
//!   line-by-line into a state registry with transitions, an initial state,
//!   and terminal markers
//! - **Fallback Workflow**: Documents without a usable diagram get a fixed
//!   default machine instead of an error
//!
//! ## Quick Start
//!
//! ````rust
//! use statemill::workflow_from_markdown;
//!
//! let markdown = r#"
//! # Order Processing
//!
//! ```mermaid
//! stateDiagram-v2
//!     [*] --> Idle
//!     Idle --> Processing: START
//!     Processing --> [*]
//! ```
//! "#;
//!
//! let workflow = workflow_from_markdown(markdown)?;
//! assert_eq!(workflow.id, "workflow");
//! assert_eq!(workflow.initial.as_str(), "Idle");
//! # Ok::<(), statemill::ParseError>(())
//! ````

#![warn(missing_docs)]

/// Workflow descriptor types and the Mermaid state diagram compiler
pub mod workflow;

// Re-export core types
pub use workflow::{
    extract_mermaid_diagram, workflow_from_markdown, CompiledDiagram, MermaidParser, ParseError,
    ParseResult, StateError, StateId, StateNode, StateResult, StateType, WorkflowDescriptor,
    DEFAULT_INITIAL_STATE, WORKFLOW_ID,
};

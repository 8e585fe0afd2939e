//! Free-text command interpreter for Kopeck.
//!
//! Converts a raw line of player input into a structured, unambiguous
//! command the rest of the engine can execute: multi-word verb synonyms,
//! compound commands (give X to Y, use X on Y, persuade X that Y),
//! partial-name resolution against live candidate pools, numeric shorthand
//! over the last rendered view, a bounded command history with `!!` replay,
//! and a confidence-gated fallback to an external intent classifier when no
//! deterministic rule matches. The interpreter classifies and resolves; it
//! never mutates world state.

/// Numbered action context for numeric shorthand.
pub mod actions;
/// Canonical commands and argument shapes.
pub mod command;
/// Error types.
pub mod error;
/// Bounded command history.
pub mod history;
/// Intent classification gate.
pub mod intent;
/// The interpreter entry point.
pub mod interpreter;
/// Verb/argument parsing strategies.
pub mod parser;
/// Partial-name resolution against candidate pools.
pub mod resolver;

pub use actions::{ActionContext, ActionKind, NumberedAction};
pub use command::{Command, UseArgs, UseMode};
pub use error::{ClassifierError, ClassifierResult};
pub use history::CommandHistory;
pub use intent::{
    ClassifierContext, Intent, IntentClassification, IntentClassifier, RawClassification,
};
pub use interpreter::{Interpretation, Interpreter};
pub use parser::{Parsed, closest_commands, parse};
pub use resolver::{CandidatePool, ResolutionResult, resolve, resolve_exits};

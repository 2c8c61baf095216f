//! Shared types for the tool lifecycle.
//!
//! These carry no I/O; they describe what a tool resolved and how its run
//! ended.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::messages::MsgType;

/// How many paths a tool hands to its service on `initialize()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Input and output.
    One2One,
    /// Input, template, and output.
    Two2One,
}

/// Path set resolved for one `initialize()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub base: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

/// Lifecycle state of a tool. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    Uninitialized,
    Initialized,
    Succeeded,
    Failed,
}

impl ToolState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ToolState::Succeeded | ToolState::Failed)
    }
}

/// Classified reason a run did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// `execute()` ran without a successful `initialize()`.
    NotInitialized,
    /// The service returned `false` from `initialize()` or raised an error there.
    InitializeFailed,
    /// The service returned `false` from `process()` (or a loading step did).
    Declined,
    /// A message-coded error.
    Message(MsgType),
    /// A validation error carrying this many items.
    Validation(usize),
    /// Any other error, with its rendered text.
    Unclassified(String),
}

/// Result of one lifecycle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub success: bool,
    pub failure: Option<Failure>,
}

impl ToolOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            failure: None,
        }
    }

    pub fn failed(failure: Failure) -> Self {
        Self {
            success: false,
            failure: Some(failure),
        }
    }
}

//! Rule application errors.
//!
//! [`RuleApplicationError`] covers every way a rule application can fail.
//! All variants are local and recoverable: the caller decides whether to
//! report them to a user or abandon the proof attempt.

use spider_core::{CoreError, SubDiagramIndex};

use crate::args::ArgumentKind;

/// Errors produced while selecting, validating or applying an inference rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleApplicationError {
    /// The addressed sub-diagram does not satisfy the rule's preconditions.
    #[error("rule '{rule}' is not applicable to sub-diagram {index}: {reason}")]
    InapplicableShape {
        rule: String,
        index: SubDiagramIndex,
        reason: String,
    },

    /// The argument addresses a sub-diagram the goal does not have.
    #[error("rule '{rule}': sub-diagram {index} out of range (goal has {count} sub-diagrams)")]
    IndexOutOfRange {
        rule: String,
        index: SubDiagramIndex,
        count: usize,
    },

    /// The rule cannot be driven automatically for this operation.
    #[error("rule '{rule}' does not support {operation}")]
    UnsupportedOperation {
        rule: String,
        operation: &'static str,
    },

    /// The argument is of a different kind than the rule takes.
    #[error("rule '{rule}' expects {expected}, got {actual}")]
    ArgumentMismatch {
        rule: String,
        expected: ArgumentKind,
        actual: ArgumentKind,
    },

    /// No rule with this name is registered.
    #[error("unknown inference rule '{name}'")]
    UnknownRule { name: String },

    /// A rule with this name is already registered.
    #[error("inference rule '{name}' is already registered")]
    DuplicateRule { name: String },

    /// The proof has no applied steps to undo.
    #[error("the proof has no steps to undo")]
    NothingToUndo,

    /// A diagram could not be built or rewritten.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RuleApplicationError {
    /// Attributes a transform failure to `rule`.
    pub(crate) fn from_core(rule: &str, err: CoreError) -> Self {
        match err {
            CoreError::InapplicableShape { index, reason } => RuleApplicationError::InapplicableShape {
                rule: rule.to_string(),
                index,
                reason,
            },
            CoreError::IndexOutOfRange { index, count } => RuleApplicationError::IndexOutOfRange {
                rule: rule.to_string(),
                index,
                count,
            },
            other => RuleApplicationError::Core(other),
        }
    }
}

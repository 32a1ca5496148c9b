//! Core error types for spider-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Construction
//! failures (structural violations) are raised by the checked constructors and
//! are never observable on an already-built value. Transform failures are
//! raised while a [`Transformer`](crate::transform::Transformer) walks a tree.

use thiserror::Error;

use crate::id::SubDiagramIndex;
use crate::operator::Operator;

/// Core errors produced by the spider-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A zone names the same contour as both an in-contour and an out-contour.
    #[error("contour '{contour}' is both inside and outside the same zone")]
    OverlappingContours { contour: String },

    /// A compound diagram was given the wrong number of operands.
    #[error("operator {operator} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        actual: usize,
    },

    /// A habitat refers to a spider that is not declared by the diagram.
    #[error("habitat given for undeclared spider '{spider}'")]
    UnknownHabitatSpider { spider: String },

    /// The node addressed by a transformer does not have the expected shape.
    #[error("sub-diagram {index} has the wrong shape: {reason}")]
    InapplicableShape {
        index: SubDiagramIndex,
        reason: String,
    },

    /// A sub-diagram index does not address any node of the tree.
    #[error("sub-diagram index {index} out of range (tree has {count} sub-diagrams)")]
    IndexOutOfRange { index: SubDiagramIndex, count: usize },
}

impl CoreError {
    /// Returns `true` for errors raised by a checked constructor.
    pub fn is_structural_violation(&self) -> bool {
        matches!(
            self,
            CoreError::OverlappingContours { .. }
                | CoreError::ArityMismatch { .. }
                | CoreError::UnknownHabitatSpider { .. }
        )
    }
}

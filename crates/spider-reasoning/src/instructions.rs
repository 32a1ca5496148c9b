//! Argument-selection protocols.
//!
//! An [`ArgumentSelection`] tells a front end how to gather a rule's argument
//! from the user. It carries no computation of its own.

use serde::{Deserialize, Serialize};

use crate::args::ArgumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentSelection {
    /// Ask the user to pick exactly one sub-diagram.
    SelectSingleSubDiagram,
    /// Ask the user to pick two sub-diagrams, in order.
    SelectTwoSubDiagrams,
    /// Ask the user to pick one spider within a primary sub-diagram.
    SelectSpiderInSubDiagram,
}

impl ArgumentSelection {
    /// The kind of [`RuleArg`](crate::args::RuleArg) this protocol produces.
    pub fn argument_kind(self) -> ArgumentKind {
        match self {
            ArgumentSelection::SelectSingleSubDiagram => ArgumentKind::SubDiagram,
            ArgumentSelection::SelectTwoSubDiagrams => ArgumentKind::SubDiagrams,
            ArgumentSelection::SelectSpiderInSubDiagram => ArgumentKind::Spider,
        }
    }

    /// Short English prompt for the selection.
    pub fn prompt(self) -> &'static str {
        match self {
            ArgumentSelection::SelectSingleSubDiagram => "Select a sub-diagram.",
            ArgumentSelection::SelectTwoSubDiagrams => "Select two sub-diagrams.",
            ArgumentSelection::SelectSpiderInSubDiagram => "Select a spider.",
        }
    }
}

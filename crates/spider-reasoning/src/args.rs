//! Rule arguments.
//!
//! Each rule takes one kind of argument. [`RuleArg`] is the closed set of
//! argument shapes; a rule checks the [`ArgumentKind`] before it does
//! anything else.

use std::fmt;

use serde::{Deserialize, Serialize};
use spider_core::{SpiderName, SubDiagramIndex};

/// A concrete rule argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleArg {
    /// A single sub-diagram.
    SubDiagram { index: SubDiagramIndex },
    /// Two sub-diagrams, in selection order.
    SubDiagrams {
        first: SubDiagramIndex,
        second: SubDiagramIndex,
    },
    /// A spider within a sub-diagram.
    Spider {
        spider: SpiderName,
        index: SubDiagramIndex,
    },
}

/// The shape of a [`RuleArg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentKind {
    SubDiagram,
    SubDiagrams,
    Spider,
}

impl RuleArg {
    pub fn sub_diagram(index: usize) -> Self {
        RuleArg::SubDiagram {
            index: SubDiagramIndex(index),
        }
    }

    pub fn kind(&self) -> ArgumentKind {
        match self {
            RuleArg::SubDiagram { .. } => ArgumentKind::SubDiagram,
            RuleArg::SubDiagrams { .. } => ArgumentKind::SubDiagrams,
            RuleArg::Spider { .. } => ArgumentKind::Spider,
        }
    }

    /// Every sub-diagram index the argument refers to.
    pub fn indices(&self) -> Vec<SubDiagramIndex> {
        match self {
            RuleArg::SubDiagram { index } | RuleArg::Spider { index, .. } => vec![*index],
            RuleArg::SubDiagrams { first, second } => vec![*first, *second],
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgumentKind::SubDiagram => "a sub-diagram index",
            ArgumentKind::SubDiagrams => "two sub-diagram indices",
            ArgumentKind::Spider => "a spider and a sub-diagram index",
        })
    }
}

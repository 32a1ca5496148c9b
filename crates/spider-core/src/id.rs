//! Pre-order sub-diagram addressing.
//!
//! Every node of a [`SpiderDiagram`](crate::diagram::SpiderDiagram) tree has a
//! stable index given by a fixed pre-order numbering: the root is `0` and
//! children are numbered consecutively depth-first. The numbering is stable
//! across read-only traversals of one tree value; a rewritten tree is a new
//! numbering space.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pre-order index of a sub-diagram within a diagram tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubDiagramIndex(pub usize);

impl SubDiagramIndex {
    /// The index of the root of every tree.
    pub const ROOT: SubDiagramIndex = SubDiagramIndex(0);
}

impl fmt::Display for SubDiagramIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SubDiagramIndex {
    fn from(index: usize) -> Self {
        SubDiagramIndex(index)
    }
}

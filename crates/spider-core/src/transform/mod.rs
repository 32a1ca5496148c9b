//! Structural rewriting of spider diagram trees.
//!
//! A [`Transformer`] is a visitor over the three tree variants. [`transform`]
//! walks a tree in pre-order, asks the transformer what to do with each node
//! and assembles the result:
//!
//! - [`Visit::Descend`] keeps the node and visits its operands.
//! - [`Visit::Skip`] keeps the node without visiting its subtree.
//! - [`Visit::Replace`] substitutes a new node; the replacement is not visited.
//! - [`Visit::Halt`] keeps the node and stops the whole traversal.
//!
//! The input tree is never modified. Only the nodes on the path to a
//! replacement are rebuilt; every other subtree is shared with the input.
//! The returned root is always a fresh allocation, even when nothing changed,
//! so each rewrite step yields a distinct value.
//!
//! Indices handed to the transformer always refer to the numbering of the
//! input tree: skipping or replacing a node advances the counter by the size
//! of the original subtree.

mod double_negation;
mod identity;

pub use double_negation::DoubleNegationEliminationTransformer;
pub use identity::IdTransformer;

use std::sync::Arc;

use crate::diagram::{CompoundDiagram, Operands, PrimaryDiagram, SpiderDiagram};
use crate::error::CoreError;
use crate::id::SubDiagramIndex;

/// What to do with the node being visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    Descend,
    Skip,
    Replace(Arc<SpiderDiagram>),
    Halt,
}

/// Position of the visited node within the input tree.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    index: SubDiagramIndex,
    path: &'a [usize],
    subtree_size: usize,
}

impl<'a> TransformContext<'a> {
    /// Pre-order index of the node.
    pub fn index(&self) -> SubDiagramIndex {
        self.index
    }

    /// Operand positions leading from the root to the node.
    pub fn path(&self) -> &'a [usize] {
        self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Number of nodes in the subtree rooted at the node.
    pub fn subtree_size(&self) -> usize {
        self.subtree_size
    }

    /// Whether `index` addresses the node or one of its descendants.
    pub fn contains(&self, index: SubDiagramIndex) -> bool {
        index >= self.index && index.0 < self.index.0 + self.subtree_size
    }
}

/// A structural rewrite over diagram trees.
///
/// Every method defaults to [`Visit::Descend`], so an empty implementation is
/// the identity.
pub trait Transformer {
    fn transform_null(&mut self, _ctx: &TransformContext<'_>) -> Result<Visit, CoreError> {
        Ok(Visit::Descend)
    }

    fn transform_primary(
        &mut self,
        _psd: &PrimaryDiagram,
        _ctx: &TransformContext<'_>,
    ) -> Result<Visit, CoreError> {
        Ok(Visit::Descend)
    }

    fn transform_compound(
        &mut self,
        _csd: &CompoundDiagram,
        _ctx: &TransformContext<'_>,
    ) -> Result<Visit, CoreError> {
        Ok(Visit::Descend)
    }
}

/// Applies `transformer` to `tree`, producing a new tree.
///
/// Errors returned by the transformer abort the walk and are passed through.
pub fn transform<T>(tree: &Arc<SpiderDiagram>, transformer: &mut T) -> Result<Arc<SpiderDiagram>, CoreError>
where
    T: Transformer + ?Sized,
{
    let mut walk = Walk {
        transformer,
        sizes: tree.subtree_sizes(),
        next_index: 0,
        path: Vec::new(),
        halted: false,
    };
    let rewritten = walk.visit(tree)?;
    Ok(rewritten.unwrap_or_else(|| Arc::new(tree.as_ref().clone())))
}

/// Traversal state of one [`transform`] call.
struct Walk<'t, T: ?Sized> {
    transformer: &'t mut T,
    /// Subtree sizes of the input tree, by pre-order index.
    sizes: Vec<usize>,
    next_index: usize,
    path: Vec<usize>,
    halted: bool,
}

impl<'t, T: Transformer + ?Sized> Walk<'t, T> {
    /// Visits `node`, returning its replacement if the subtree changed.
    fn visit(&mut self, node: &Arc<SpiderDiagram>) -> Result<Option<Arc<SpiderDiagram>>, CoreError> {
        if self.halted {
            return Ok(None);
        }

        let subtree_size = self.sizes[self.next_index];
        let ctx = TransformContext {
            index: SubDiagramIndex(self.next_index),
            path: &self.path,
            subtree_size,
        };
        let visit = match node.as_ref() {
            SpiderDiagram::Null => self.transformer.transform_null(&ctx)?,
            SpiderDiagram::Primary(psd) => self.transformer.transform_primary(psd, &ctx)?,
            SpiderDiagram::Compound(csd) => self.transformer.transform_compound(csd, &ctx)?,
        };

        match visit {
            Visit::Descend => {
                self.next_index += 1;
                match node.as_ref() {
                    SpiderDiagram::Compound(csd) => self.visit_operands(csd),
                    SpiderDiagram::Null | SpiderDiagram::Primary(_) => Ok(None),
                }
            }
            Visit::Skip => {
                self.next_index += subtree_size;
                Ok(None)
            }
            Visit::Replace(replacement) => {
                self.next_index += subtree_size;
                Ok(Some(replacement))
            }
            Visit::Halt => {
                self.halted = true;
                Ok(None)
            }
        }
    }

    fn visit_operands(&mut self, csd: &CompoundDiagram) -> Result<Option<Arc<SpiderDiagram>>, CoreError> {
        let mut rebuilt: Option<Operands> = None;
        for (position, operand) in csd.operands().iter().enumerate() {
            self.path.push(position);
            let result = self.visit(operand);
            self.path.pop();

            if let Some(replacement) = result? {
                let operands = rebuilt.get_or_insert_with(|| csd.operands().iter().cloned().collect());
                operands[position] = replacement;
            }
        }
        Ok(rebuilt.map(|operands| Arc::new(SpiderDiagram::Compound(csd.with_operands(operands)))))
    }
}

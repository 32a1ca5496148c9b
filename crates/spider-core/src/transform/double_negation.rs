//! Double negation elimination: `~ ~ D` becomes `D`.

use std::sync::Arc;

use super::{TransformContext, Transformer, Visit};
use crate::diagram::{CompoundDiagram, PrimaryDiagram};
use crate::error::CoreError;
use crate::id::SubDiagramIndex;

/// Replaces the double negation at `target` with its innermost operand.
///
/// Every other node is kept. Subtrees that cannot contain `target` are
/// skipped, and the walk halts once the replacement is made. Addressing a
/// node that is not `~ ~ D` fails with [`CoreError::InapplicableShape`].
///
/// A `target` outside the tree fails with [`CoreError::IndexOutOfRange`]
/// when the root is visited, before anything is rewritten.
#[derive(Debug, Clone)]
pub struct DoubleNegationEliminationTransformer {
    target: SubDiagramIndex,
    applied: bool,
}

impl DoubleNegationEliminationTransformer {
    pub fn new(target: SubDiagramIndex) -> Self {
        DoubleNegationEliminationTransformer {
            target,
            applied: false,
        }
    }

    pub fn target(&self) -> SubDiagramIndex {
        self.target
    }

    /// Whether the addressed double negation has been eliminated.
    pub fn applied(&self) -> bool {
        self.applied
    }

    /// At the root, checks that `target` addresses a node of the tree.
    fn check_range(&self, ctx: &TransformContext<'_>) -> Result<(), CoreError> {
        if ctx.index() == SubDiagramIndex::ROOT && self.target.0 >= ctx.subtree_size() {
            return Err(CoreError::IndexOutOfRange {
                index: self.target,
                count: ctx.subtree_size(),
            });
        }
        Ok(())
    }

    fn wrong_shape(&self, reason: String) -> CoreError {
        CoreError::InapplicableShape {
            index: self.target,
            reason,
        }
    }
}

impl Transformer for DoubleNegationEliminationTransformer {
    fn transform_null(&mut self, ctx: &TransformContext<'_>) -> Result<Visit, CoreError> {
        if self.applied {
            return Ok(Visit::Halt);
        }
        self.check_range(ctx)?;
        if ctx.index() != self.target {
            return Ok(Visit::Descend);
        }
        Err(self.wrong_shape("expected a double negation, found a null diagram".to_string()))
    }

    fn transform_primary(
        &mut self,
        psd: &PrimaryDiagram,
        ctx: &TransformContext<'_>,
    ) -> Result<Visit, CoreError> {
        if self.applied {
            return Ok(Visit::Halt);
        }
        self.check_range(ctx)?;
        if ctx.index() != self.target {
            return Ok(Visit::Descend);
        }
        Err(self.wrong_shape(format!(
            "expected a double negation, found a primary diagram with {} spider(s)",
            psd.spiders_count()
        )))
    }

    fn transform_compound(
        &mut self,
        csd: &CompoundDiagram,
        ctx: &TransformContext<'_>,
    ) -> Result<Visit, CoreError> {
        if self.applied {
            return Ok(Visit::Halt);
        }
        self.check_range(ctx)?;
        if ctx.index() == self.target {
            let inner = csd.double_negated_operand().ok_or_else(|| {
                self.wrong_shape(format!(
                    "expected a double negation, found {} over {} operand(s)",
                    csd.operator(),
                    csd.operand_count()
                ))
            })?;
            self.applied = true;
            return Ok(Visit::Replace(Arc::clone(inner)));
        }
        if ctx.contains(self.target) {
            Ok(Visit::Descend)
        } else {
            Ok(Visit::Skip)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::SpiderDiagram;
    use crate::operator::Operator;
    use crate::region::Region;
    use crate::transform::transform;
    use crate::zone::Zone;

    fn d() -> Arc<SpiderDiagram> {
        Arc::new(
            SpiderDiagram::primary(
                vec!["s".to_string()],
                vec![("s".to_string(), Region::new(vec![Zone::from_in_contours(["A"])]))],
                Vec::new(),
            )
            .unwrap(),
        )
    }

    fn not(operand: Arc<SpiderDiagram>) -> Arc<SpiderDiagram> {
        Arc::new(SpiderDiagram::negation(operand))
    }

    #[test]
    fn eliminates_at_the_root() {
        let inner = d();
        let tree = not(not(inner.clone()));
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(0));

        let result = transform(&tree, &mut dne).unwrap();
        assert!(dne.applied());
        assert!(Arc::ptr_eq(&result, &inner));
    }

    #[test]
    fn eliminates_inside_a_compound() {
        // 0: -->, 1: null, 2: ~, 3: ~, 4: primary
        let tree = Arc::new(
            SpiderDiagram::binary(
                Operator::Implication,
                Arc::new(SpiderDiagram::Null),
                not(not(d())),
            )
            .unwrap(),
        );
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(2));
        let result = transform(&tree, &mut dne).unwrap();

        let expected =
            SpiderDiagram::binary(Operator::Implication, Arc::new(SpiderDiagram::Null), d()).unwrap();
        assert_eq!(result.as_ref(), &expected);
    }

    #[test]
    fn single_negation_is_inapplicable() {
        let tree = not(d());
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(0));
        let err = transform(&tree, &mut dne).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InapplicableShape { index: SubDiagramIndex(0), .. }
        ));
        assert!(!dne.applied());
    }

    #[test]
    fn leaves_are_inapplicable() {
        let tree = not(not(d()));

        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(2));
        let err = transform(&tree, &mut dne).unwrap_err();
        assert!(matches!(err, CoreError::InapplicableShape { .. }));

        let null = Arc::new(SpiderDiagram::Null);
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(0));
        assert!(transform(&null, &mut dne).is_err());
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let tree = not(not(d()));
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(9));
        let err = transform(&tree, &mut dne).unwrap_err();
        assert_eq!(
            err,
            CoreError::IndexOutOfRange {
                index: SubDiagramIndex(9),
                count: 3,
            }
        );
        assert!(!dne.applied());

        let null = Arc::new(SpiderDiagram::Null);
        let mut dne = DoubleNegationEliminationTransformer::new(SubDiagramIndex(1));
        assert!(matches!(
            transform(&null, &mut dne),
            Err(CoreError::IndexOutOfRange { count: 1, .. })
        ));
    }
}

use std::sync::Arc;

use spider_core::transform::DoubleNegationEliminationTransformer;
use spider_core::SpiderDiagram;

use super::{apply_sentential, ApplyStyle, InferenceRule};
use crate::args::{ArgumentKind, RuleArg};
use crate::error::RuleApplicationError;
use crate::instructions::ArgumentSelection;

/// Rewrites a selected `~ ~ D` to `D`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleNegationElimination;

impl DoubleNegationElimination {
    pub const NAME: &'static str = "double_negation_elimination";
}

impl InferenceRule for DoubleNegationElimination {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self, _locale: &str) -> String {
        "Double Negation Elimination".to_string()
    }

    fn description(&self, _locale: &str) -> String {
        "Replaces a doubly negated sub-diagram with the sub-diagram itself.".to_string()
    }

    fn argument_kind(&self) -> ArgumentKind {
        ArgumentKind::SubDiagram
    }

    fn instructions(&self) -> Result<ArgumentSelection, RuleApplicationError> {
        Ok(ArgumentSelection::SelectSingleSubDiagram)
    }

    fn apply(
        &self,
        goal: &Arc<SpiderDiagram>,
        arg: &RuleArg,
        _style: ApplyStyle,
    ) -> Result<Arc<SpiderDiagram>, RuleApplicationError> {
        apply_sentential(Self::NAME, goal, arg, DoubleNegationEliminationTransformer::new)
    }
}

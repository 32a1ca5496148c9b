use std::sync::Arc;

use spider_core::transform::IdTransformer;
use spider_core::SpiderDiagram;

use super::{apply_sentential, ApplyStyle, InferenceRule};
use crate::args::{ArgumentKind, RuleArg};
use crate::error::RuleApplicationError;
use crate::instructions::ArgumentSelection;

/// Equivalence introduction.
///
/// Only the argument is validated; the goal is reproduced unchanged as a new
/// tree. The rule has no interactive selection protocol yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalenceIntroduction;

impl EquivalenceIntroduction {
    pub const NAME: &'static str = "equivalence_introduction";
}

impl InferenceRule for EquivalenceIntroduction {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self, _locale: &str) -> String {
        "Equivalence Introduction".to_string()
    }

    fn description(&self, _locale: &str) -> String {
        "Introduces an equivalence at the selected sub-diagram.".to_string()
    }

    fn argument_kind(&self) -> ArgumentKind {
        ArgumentKind::SubDiagram
    }

    fn instructions(&self) -> Result<ArgumentSelection, RuleApplicationError> {
        Err(RuleApplicationError::UnsupportedOperation {
            rule: Self::NAME.to_string(),
            operation: "interactive argument selection",
        })
    }

    fn apply(
        &self,
        goal: &Arc<SpiderDiagram>,
        arg: &RuleArg,
        _style: ApplyStyle,
    ) -> Result<Arc<SpiderDiagram>, RuleApplicationError> {
        apply_sentential(Self::NAME, goal, arg, |_| IdTransformer)
    }
}

//! Inference rules.
//!
//! An [`InferenceRule`] is a named operation that, given a goal diagram and
//! an argument, produces the next goal. Applying a rule goes through three
//! stages:
//!
//! 1. validate the argument (kind, then index range), rejecting it with
//!    [`RuleApplicationError::ArgumentMismatch`] or
//!    [`RuleApplicationError::IndexOutOfRange`] before anything runs;
//! 2. build a [`Transformer`] closed over the argument and run it over the goal;
//! 3. return the rewritten tree.
//!
//! The goal passed in is never modified, and the produced tree is always a
//! new value, even for rules that leave the diagram logically unchanged.

mod double_negation;
mod equivalence_introduction;

pub use double_negation::DoubleNegationElimination;
pub use equivalence_introduction::EquivalenceIntroduction;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use spider_core::transform::{transform, Transformer};
use spider_core::{SpiderDiagram, SubDiagramIndex};

use crate::args::{ArgumentKind, RuleArg};
use crate::error::RuleApplicationError;
use crate::instructions::ArgumentSelection;

/// Direction of a rule application.
///
/// Forward application turns a goal into a simpler or equivalent goal.
/// Sentential rules select the same transformer for both styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStyle {
    #[default]
    Forward,
    Backward,
}

/// A named inference rule.
pub trait InferenceRule: Send + Sync {
    /// Stable identifier used to look the rule up.
    fn name(&self) -> &'static str;

    /// Human-readable name. `locale` affects presentation only.
    fn display_name(&self, locale: &str) -> String;

    fn description(&self, locale: &str) -> String;

    /// The kind of argument [`apply`](Self::apply) accepts.
    fn argument_kind(&self) -> ArgumentKind;

    /// How a front end should gather the argument.
    ///
    /// Returns [`RuleApplicationError::UnsupportedOperation`] if the rule
    /// cannot yet be driven interactively.
    fn instructions(&self) -> Result<ArgumentSelection, RuleApplicationError>;

    /// Applies the rule to `goal`, producing the next goal.
    fn apply(
        &self,
        goal: &Arc<SpiderDiagram>,
        arg: &RuleArg,
        style: ApplyStyle,
    ) -> Result<Arc<SpiderDiagram>, RuleApplicationError>;
}

/// Shared application path of rules that rewrite one addressed sub-diagram.
///
/// Checks that `arg` is a single in-range sub-diagram index, then runs the
/// transformer built by `make_transformer` over `goal`.
pub(crate) fn apply_sentential<T, F>(
    rule: &'static str,
    goal: &Arc<SpiderDiagram>,
    arg: &RuleArg,
    make_transformer: F,
) -> Result<Arc<SpiderDiagram>, RuleApplicationError>
where
    T: Transformer,
    F: FnOnce(SubDiagramIndex) -> T,
{
    let index = match arg {
        RuleArg::SubDiagram { index } => *index,
        other => {
            return Err(RuleApplicationError::ArgumentMismatch {
                rule: rule.to_string(),
                expected: ArgumentKind::SubDiagram,
                actual: other.kind(),
            })
        }
    };

    check_indices(rule, goal, arg)?;

    let mut transformer = make_transformer(index);
    transform(goal, &mut transformer).map_err(|err| RuleApplicationError::from_core(rule, err))
}

/// Checks that every sub-diagram index in `arg` addresses a node of `goal`.
pub(crate) fn check_indices(
    rule: &'static str,
    goal: &SpiderDiagram,
    arg: &RuleArg,
) -> Result<(), RuleApplicationError> {
    let count = goal.subdiagram_count();
    match arg.indices().into_iter().find(|index| index.0 >= count) {
        Some(index) => Err(RuleApplicationError::IndexOutOfRange {
            rule: rule.to_string(),
            index,
            count,
        }),
        None => Ok(()),
    }
}

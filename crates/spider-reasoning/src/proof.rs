//! Proof states.
//!
//! A [`Proof`] is the ordered sequence of goals of one proof attempt: the
//! initial goal followed by one goal per applied rule. It is the only mutable
//! value in this crate; each step only appends a new immutable diagram.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use spider_core::SpiderDiagram;

use crate::args::RuleArg;
use crate::error::RuleApplicationError;
use crate::registry::RuleRegistry;
use crate::rules::ApplyStyle;

/// Which rule produced a step, and how it was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleApplication {
    pub rule: String,
    pub arg: RuleArg,
    pub style: ApplyStyle,
}

/// One applied rule and the goal it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub application: RuleApplication,
    pub goal: Arc<SpiderDiagram>,
}

#[derive(Debug, Clone)]
pub struct Proof {
    initial_goal: Arc<SpiderDiagram>,
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Starts a proof of `goal`.
    pub fn new(goal: Arc<SpiderDiagram>) -> Self {
        Proof {
            initial_goal: goal,
            steps: Vec::new(),
        }
    }

    pub fn initial_goal(&self) -> &Arc<SpiderDiagram> {
        &self.initial_goal
    }

    /// The goal produced by the most recent step.
    pub fn current_goal(&self) -> &Arc<SpiderDiagram> {
        self.steps
            .last()
            .map(|step| &step.goal)
            .unwrap_or(&self.initial_goal)
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Every goal in order, the initial goal first.
    pub fn goals(&self) -> impl Iterator<Item = &Arc<SpiderDiagram>> + '_ {
        std::iter::once(&self.initial_goal).chain(self.steps.iter().map(|step| &step.goal))
    }

    /// Number of goals, the initial goal included.
    pub fn len(&self) -> usize {
        self.steps.len() + 1
    }

    /// Whether the current goal is the trivially true diagram.
    pub fn is_finished(&self) -> bool {
        self.current_goal().is_null()
    }

    /// Applies the named rule to the current goal and records the step.
    ///
    /// On failure the proof is left as it was.
    pub fn apply_rule(
        &mut self,
        registry: &RuleRegistry,
        rule: &str,
        arg: RuleArg,
        style: ApplyStyle,
    ) -> Result<&Arc<SpiderDiagram>, RuleApplicationError> {
        let goal = registry.apply(self.current_goal(), rule, &arg, style)?;
        self.steps.push(ProofStep {
            application: RuleApplication {
                rule: rule.to_string(),
                arg,
                style,
            },
            goal,
        });
        Ok(self.current_goal())
    }

    /// Removes and returns the most recent step.
    pub fn undo_last_step(&mut self) -> Result<ProofStep, RuleApplicationError> {
        self.steps.pop().ok_or(RuleApplicationError::NothingToUndo)
    }
}

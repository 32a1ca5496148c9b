//! Registry of available inference rules.
//!
//! [`RuleRegistry`] keeps rules in registration order so that front ends can
//! list them predictably, and dispatches rule applications by name.

use std::sync::Arc;

use indexmap::IndexMap;
use spider_core::SpiderDiagram;

use crate::args::RuleArg;
use crate::error::RuleApplicationError;
use crate::instructions::ArgumentSelection;
use crate::rules::{ApplyStyle, DoubleNegationElimination, EquivalenceIntroduction, InferenceRule};

/// Inference rules indexed by name, in registration order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: IndexMap<&'static str, Box<dyn InferenceRule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        RuleRegistry::default()
    }

    /// Creates a registry holding every built-in rule.
    pub fn with_builtin_rules() -> Self {
        let mut registry = RuleRegistry::new();
        registry.insert(Box::new(DoubleNegationElimination));
        registry.insert(Box::new(EquivalenceIntroduction));
        registry
    }

    /// Registers `rule` under its [name](InferenceRule::name).
    ///
    /// Returns [`RuleApplicationError::DuplicateRule`] if the name is taken.
    pub fn register<R: InferenceRule + 'static>(&mut self, rule: R) -> Result<(), RuleApplicationError> {
        if self.rules.contains_key(rule.name()) {
            return Err(RuleApplicationError::DuplicateRule {
                name: rule.name().to_string(),
            });
        }
        self.insert(Box::new(rule));
        Ok(())
    }

    fn insert(&mut self, rule: Box<dyn InferenceRule>) {
        self.rules.insert(rule.name(), rule);
    }

    /// Rule names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn InferenceRule> + '_ {
        self.rules.values().map(|rule| &**rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Result<&dyn InferenceRule, RuleApplicationError> {
        self.rules
            .get(name)
            .map(|rule| &**rule)
            .ok_or_else(|| RuleApplicationError::UnknownRule {
                name: name.to_string(),
            })
    }

    /// The argument-selection protocol of the named rule.
    pub fn instructions(&self, name: &str) -> Result<ArgumentSelection, RuleApplicationError> {
        self.get(name)?.instructions()
    }

    /// Applies the named rule to `goal`.
    pub fn apply(
        &self,
        goal: &Arc<SpiderDiagram>,
        name: &str,
        arg: &RuleArg,
        style: ApplyStyle,
    ) -> Result<Arc<SpiderDiagram>, RuleApplicationError> {
        self.get(name)?.apply(goal, arg, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_are_listed_in_order() {
        let registry = RuleRegistry::with_builtin_rules();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["double_negation_elimination", "equivalence_introduction"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains(DoubleNegationElimination::NAME));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = RuleRegistry::with_builtin_rules();
        let err = registry.register(DoubleNegationElimination).unwrap_err();
        assert_eq!(
            err,
            RuleApplicationError::DuplicateRule {
                name: "double_negation_elimination".into()
            }
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registering_into_an_empty_registry() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());
        registry.register(EquivalenceIntroduction).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["equivalence_introduction"]);
    }

    #[test]
    fn unknown_rules_are_reported() {
        let registry = RuleRegistry::with_builtin_rules();
        assert!(matches!(
            registry.get("modus_ponens"),
            Err(RuleApplicationError::UnknownRule { name }) if name == "modus_ponens"
        ));
    }

    #[test]
    fn instructions_by_name() {
        let registry = RuleRegistry::with_builtin_rules();
        assert_eq!(
            registry.instructions(DoubleNegationElimination::NAME),
            Ok(ArgumentSelection::SelectSingleSubDiagram)
        );
        assert!(matches!(
            registry.instructions(EquivalenceIntroduction::NAME),
            Err(RuleApplicationError::UnsupportedOperation { .. })
        ));
    }
}

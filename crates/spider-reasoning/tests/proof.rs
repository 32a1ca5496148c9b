//! Integration tests for the proof-state sequence.

use std::sync::Arc;

use spider_core::SpiderDiagram;
use spider_reasoning::{
    ApplyStyle, DoubleNegationElimination, EquivalenceIntroduction, Proof, RuleApplicationError,
    RuleArg, RuleRegistry,
};

fn not(operand: Arc<SpiderDiagram>) -> Arc<SpiderDiagram> {
    Arc::new(SpiderDiagram::negation(operand))
}

#[test]
fn steps_append_new_goals() {
    let registry = RuleRegistry::with_builtin_rules();
    let initial = not(not(not(not(Arc::new(SpiderDiagram::Null)))));
    let mut proof = Proof::new(initial.clone());
    assert_eq!(proof.len(), 1);
    assert!(!proof.is_finished());

    proof
        .apply_rule(&registry, DoubleNegationElimination::NAME, RuleArg::sub_diagram(2), ApplyStyle::Forward)
        .unwrap();
    assert_eq!(proof.current_goal(), &not(not(Arc::new(SpiderDiagram::Null))));

    proof
        .apply_rule(&registry, DoubleNegationElimination::NAME, RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap();
    assert!(proof.is_finished());
    assert_eq!(proof.len(), 3);

    let goals: Vec<usize> = proof.goals().map(|g| g.subdiagram_count()).collect();
    assert_eq!(goals, vec![5, 3, 1]);

    // Earlier goals are untouched.
    assert_eq!(proof.initial_goal(), &initial);
    assert_eq!(proof.steps()[0].application.rule, DoubleNegationElimination::NAME);
    assert_eq!(proof.steps()[0].application.arg, RuleArg::sub_diagram(2));
}

#[test]
fn identity_steps_still_produce_distinct_goals() {
    let registry = RuleRegistry::with_builtin_rules();
    let mut proof = Proof::new(not(Arc::new(SpiderDiagram::Null)));

    proof
        .apply_rule(&registry, EquivalenceIntroduction::NAME, RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap();
    let goals: Vec<&Arc<SpiderDiagram>> = proof.goals().collect();
    assert_eq!(goals[0], goals[1]);
    assert!(!Arc::ptr_eq(goals[0], goals[1]));
}

#[test]
fn failed_steps_leave_the_proof_unchanged() {
    let registry = RuleRegistry::with_builtin_rules();
    let mut proof = Proof::new(not(Arc::new(SpiderDiagram::Null)));

    let err = proof
        .apply_rule(&registry, DoubleNegationElimination::NAME, RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap_err();
    assert!(matches!(err, RuleApplicationError::InapplicableShape { .. }));
    assert_eq!(proof.len(), 1);
    assert!(proof.steps().is_empty());
}

#[test]
fn undo_removes_the_latest_step() {
    let registry = RuleRegistry::with_builtin_rules();
    let initial = not(not(Arc::new(SpiderDiagram::Null)));
    let mut proof = Proof::new(initial.clone());

    assert_eq!(proof.undo_last_step(), Err(RuleApplicationError::NothingToUndo));

    proof
        .apply_rule(&registry, DoubleNegationElimination::NAME, RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap();
    let step = proof.undo_last_step().unwrap();
    assert!(step.goal.is_null());
    assert_eq!(proof.current_goal(), &initial);
}

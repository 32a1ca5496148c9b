//! Integration tests for applying the built-in inference rules.

use std::sync::Arc;

use proptest::prelude::*;

use spider_core::{Operator, Region, SpiderDiagram, SubDiagramIndex, Zone};
use spider_reasoning::{
    ApplyStyle, ArgumentKind, DoubleNegationElimination, EquivalenceIntroduction, InferenceRule,
    RuleApplicationError, RuleArg, RuleRegistry,
};

fn d() -> Arc<SpiderDiagram> {
    Arc::new(
        SpiderDiagram::primary(
            vec!["s".to_string()],
            vec![("s".to_string(), Region::new(vec![Zone::from_in_contours(["A"])]))],
            vec![Zone::new(["B"], ["A"]).unwrap()],
        )
        .unwrap(),
    )
}

fn not(operand: Arc<SpiderDiagram>) -> Arc<SpiderDiagram> {
    Arc::new(SpiderDiagram::negation(operand))
}

fn implies(left: Arc<SpiderDiagram>, right: Arc<SpiderDiagram>) -> Arc<SpiderDiagram> {
    Arc::new(SpiderDiagram::binary(Operator::Implication, left, right).unwrap())
}

#[test]
fn double_negation_elimination_at_the_root() {
    let inner = d();
    let goal = not(not(inner.clone()));

    let result = DoubleNegationElimination
        .apply(&goal, &RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap();
    assert_eq!(result, inner);
}

#[test]
fn double_negation_elimination_in_a_consequent() {
    // 0: -->, 1: primary, 2: ~, 3: ~, 4: primary
    let goal = implies(d(), not(not(d())));
    let result = DoubleNegationElimination
        .apply(&goal, &RuleArg::sub_diagram(2), ApplyStyle::Forward)
        .unwrap();
    assert_eq!(result, implies(d(), d()));
}

#[test]
fn backward_style_selects_the_same_rewrite() {
    let goal = implies(d(), not(not(d())));
    let forward = DoubleNegationElimination
        .apply(&goal, &RuleArg::sub_diagram(2), ApplyStyle::Forward)
        .unwrap();
    let backward = DoubleNegationElimination
        .apply(&goal, &RuleArg::sub_diagram(2), ApplyStyle::Backward)
        .unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn double_negation_elimination_rejects_other_shapes() {
    let goal = implies(d(), not(d()));

    for index in [0, 1, 2, 3] {
        let err = DoubleNegationElimination
            .apply(&goal, &RuleArg::sub_diagram(index), ApplyStyle::Forward)
            .unwrap_err();
        match err {
            RuleApplicationError::InapplicableShape { rule, index: at, .. } => {
                assert_eq!(rule, DoubleNegationElimination::NAME);
                assert_eq!(at, SubDiagramIndex(index));
            }
            other => panic!("expected InapplicableShape, got {:?}", other),
        }
    }
}

#[test]
fn out_of_range_indices_are_rejected_before_transforming() {
    let goal = not(not(d()));
    for rule in [&DoubleNegationElimination as &dyn InferenceRule, &EquivalenceIntroduction] {
        let err = rule
            .apply(&goal, &RuleArg::sub_diagram(3), ApplyStyle::Forward)
            .unwrap_err();
        assert_eq!(
            err,
            RuleApplicationError::IndexOutOfRange {
                rule: rule.name().to_string(),
                index: SubDiagramIndex(3),
                count: 3,
            }
        );
    }
}

#[test]
fn wrong_argument_kind_is_rejected() {
    let goal = not(not(d()));
    let arg = RuleArg::Spider {
        spider: "s".into(),
        index: SubDiagramIndex(0),
    };
    let err = DoubleNegationElimination
        .apply(&goal, &arg, ApplyStyle::Forward)
        .unwrap_err();
    assert_eq!(
        err,
        RuleApplicationError::ArgumentMismatch {
            rule: DoubleNegationElimination::NAME.to_string(),
            expected: ArgumentKind::SubDiagram,
            actual: ArgumentKind::Spider,
        }
    );
}

#[test]
fn equivalence_introduction_reproduces_the_goal_as_a_new_tree() {
    let goal = implies(d(), not(d()));
    let result = EquivalenceIntroduction
        .apply(&goal, &RuleArg::sub_diagram(1), ApplyStyle::Forward)
        .unwrap();
    assert_eq!(result, goal);
    assert!(!Arc::ptr_eq(&result, &goal));
}

#[test]
fn equivalence_introduction_has_no_selection_protocol() {
    assert_eq!(
        EquivalenceIntroduction.instructions(),
        Err(RuleApplicationError::UnsupportedOperation {
            rule: EquivalenceIntroduction::NAME.to_string(),
            operation: "interactive argument selection",
        })
    );
}

#[test]
fn rule_metadata() {
    let registry = RuleRegistry::with_builtin_rules();
    for rule in registry.iter() {
        assert!(!rule.display_name("en").is_empty());
        assert!(!rule.description("en").is_empty());
        assert_eq!(rule.argument_kind(), ArgumentKind::SubDiagram);
        if let Ok(selection) = rule.instructions() {
            assert_eq!(selection.argument_kind(), rule.argument_kind());
        }
    }
    assert_eq!(
        DoubleNegationElimination.display_name("de"),
        DoubleNegationElimination.display_name("en")
    );
}

#[test]
fn registry_applies_rules_by_name() {
    let registry = RuleRegistry::with_builtin_rules();
    let goal = not(not(d()));

    let result = registry
        .apply(&goal, "double_negation_elimination", &RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap();
    assert_eq!(result, d());

    let err = registry
        .apply(&goal, "modus_ponens", &RuleArg::sub_diagram(0), ApplyStyle::Forward)
        .unwrap_err();
    assert_eq!(
        err,
        RuleApplicationError::UnknownRule {
            name: "modus_ponens".into()
        }
    );
}

fn arbitrary_goal() -> impl Strategy<Value = Arc<SpiderDiagram>> {
    let leaf = prop_oneof![Just(Arc::new(SpiderDiagram::Null)), Just(d())];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(not),
            (inner.clone(), inner).prop_map(|(l, r)| implies(l, r)),
        ]
    })
}

proptest! {
    #[test]
    fn applying_a_rule_never_mutates_the_goal(goal in arbitrary_goal(), index in 0usize..16) {
        let registry = RuleRegistry::with_builtin_rules();
        let snapshot = goal.as_ref().clone();

        for name in [DoubleNegationElimination::NAME, EquivalenceIntroduction::NAME] {
            let outcome = registry.apply(&goal, name, &RuleArg::sub_diagram(index), ApplyStyle::Forward);
            if index >= goal.subdiagram_count() {
                let out_of_range = matches!(outcome, Err(RuleApplicationError::IndexOutOfRange { .. }));
                prop_assert!(out_of_range);
            }
            prop_assert_eq!(goal.as_ref(), &snapshot);
        }
    }

    #[test]
    fn double_negation_elimination_succeeds_exactly_on_double_negations(
        goal in arbitrary_goal(),
        index in 0usize..16,
    ) {
        prop_assume!(index < goal.subdiagram_count());
        let node = goal.subdiagram_at(SubDiagramIndex(index)).expect("index is in range");
        let is_double_negation = node
            .as_compound()
            .and_then(|csd| csd.double_negated_operand())
            .is_some();

        let outcome = DoubleNegationElimination.apply(&goal, &RuleArg::sub_diagram(index), ApplyStyle::Forward);
        prop_assert_eq!(outcome.is_ok(), is_double_negation);
        if let Ok(result) = outcome {
            // Two negation nodes disappear.
            prop_assert_eq!(result.subdiagram_count(), goal.subdiagram_count() - 2);
        }
    }
}

//! Tests for rule chain evaluation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use morms::validation::{Rule, RuleChain, ValidationOutcome, Value, evaluate, rules};
use proptest::prelude::*;

fn counting_rule(calls: &Arc<AtomicUsize>) -> Rule {
    let calls = Arc::clone(calls);
    Rule::new("counting", move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        ValidationOutcome::Valid
    })
}

fn builtin_rules() -> Vec<Rule> {
    vec![
        rules::required(None),
        rules::integer(None),
        rules::float(None, None),
        rules::float(Some(1), None),
        rules::base(8, None).unwrap(),
        rules::max_value(100, None),
        rules::min_value(-100, None),
        rules::mac_address(None),
        rules::ip_address(None),
        rules::min_length(3, None),
        rules::max_length(6, None),
        rules::email(None),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<f64>().prop_map(Value::Number),
        (-1000i64..1000).prop_map(Value::from),
        "[0-9a-fA-F.,:@ -]{0,16}".prop_map(Value::Text),
        "\\PC{0,16}".prop_map(Value::Text),
    ]
}

#[test]
fn test_empty_chain_is_valid() {
    for value in [Value::Absent, Value::from(""), Value::from("x"), Value::from(1.5)] {
        assert_eq!(evaluate(&value, &[]), ValidationOutcome::Valid);
        assert_eq!(RuleChain::new().evaluate(&value), ValidationOutcome::Valid);
    }
}

#[test]
fn test_first_failure_wins() {
    let chain = RuleChain::new()
        .with(rules::required(None))
        .with(rules::min_length(6, None))
        .with(rules::max_length(3, None));

    assert_eq!(
        chain.evaluate(&Value::Absent).message(),
        "This field is required"
    );
    assert_eq!(
        chain.evaluate(&Value::from("abcd")).message(),
        "Must at least be 6 characters long"
    );
    assert_eq!(
        chain.evaluate(&Value::from("abcdefg")).message(),
        "Must at most be 3 characters long"
    );
}

#[test]
fn test_later_rules_are_not_run_after_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = RuleChain::new()
        .with(rules::required(None))
        .with(counting_rule(&calls));

    chain.evaluate(&Value::Absent);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    chain.evaluate(&Value::from("x"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_invalid_outcome_may_carry_empty_message() {
    let silent = Rule::check("silent", |_| false, "");
    let outcome = silent.validate(&Value::from("x"));
    assert!(outcome.is_invalid());
    assert_eq!(outcome.message(), "");
}

#[test]
fn test_into_result() {
    let chain = RuleChain::new().with(rules::integer(None));
    assert!(chain.evaluate(&Value::from("12")).into_result().is_ok());

    let err = chain.evaluate(&Value::from("1.5")).into_result().unwrap_err();
    assert_eq!(err.to_string(), "Must be a whole number");
}

#[test]
fn test_prepend_runs_first() {
    let mut chain = RuleChain::new().with(rules::min_length(10, None));
    chain.prepend(rules::integer(None));

    assert_eq!(chain.len(), 2);
    assert_eq!(chain.rules()[0].name(), "integer");
    assert_eq!(
        chain.evaluate(&Value::from("abc")).message(),
        "Must be a whole number"
    );
}

#[test]
fn test_chain_from_iterator() {
    let chain: RuleChain = vec![rules::required(None), rules::integer(None)]
        .into_iter()
        .collect();
    let names: Vec<_> = chain.rules().iter().map(Rule::name).collect();
    assert_eq!(names, ["required", "integer"]);
}

proptest! {
    #[test]
    fn prop_evaluate_returns_first_invalid_outcome(
        value in value_strategy(),
        picks in prop::collection::vec(0usize..12, 0..8),
    ) {
        let all = builtin_rules();
        let chain: Vec<Rule> = picks.iter().map(|&i| all[i].clone()).collect();

        let expected = chain
            .iter()
            .map(|rule| rule.validate(&value))
            .find(ValidationOutcome::is_invalid)
            .unwrap_or(ValidationOutcome::Valid);

        prop_assert_eq!(evaluate(&value, &chain), expected);
    }

    #[test]
    fn prop_rules_are_pure(value in value_strategy()) {
        for rule in builtin_rules() {
            prop_assert_eq!(rule.validate(&value), rule.validate(&value));
        }
    }

    #[test]
    fn prop_valid_outcomes_carry_no_message(value in value_strategy()) {
        for rule in builtin_rules() {
            let outcome = rule.validate(&value);
            prop_assert_eq!(outcome.is_valid(), outcome.message().is_empty());
        }
    }
}

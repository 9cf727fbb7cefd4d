//! End-to-end validation of nested entities.

use verdict::core::{ErrorMap, Outcome, Property, Rule};
use verdict::evaluation::{rule_for, rule_set, rule_set_for, shared, RuleSet, Validator};
use verdict::rules::{email, min_length, not_empty};
use verdict::{property, RuleSetBuilder};

#[derive(Clone, Debug, PartialEq)]
struct Inner {
    bar: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Outer {
    foo: Inner,
    baz: String,
}

fn inner_rules() -> RuleSet<Inner> {
    rule_set(vec![rule_for(
        Property::new("Bar", |i: &Inner| &i.bar).unwrap(),
        vec![not_empty()],
    )
    .boxed()])
}

fn outer_rules() -> RuleSet<Outer> {
    rule_set(vec![
        rule_set_for(Property::new("Foo", |o: &Outer| &o.foo).unwrap(), inner_rules()).boxed(),
        rule_for(
            Property::new("Baz", |o: &Outer| &o.baz).unwrap(),
            vec![not_empty()],
        )
        .boxed(),
    ])
}

fn outer(bar: &str, baz: &str) -> Outer {
    Outer {
        foo: Inner {
            bar: bar.to_string(),
        },
        baz: baz.to_string(),
    }
}

#[test]
fn nested_and_direct_failures_are_reported_together() {
    let outcome = outer_rules().validate(outer("", ""));

    let mut expected = ErrorMap::single("Foo.Bar", "Value cannot be empty");
    expected.push("Baz", "Value cannot be empty");
    assert_eq!(outcome, Outcome::Invalid(expected));
    assert_eq!(
        outcome.errors().unwrap().keys().collect::<Vec<_>>(),
        vec!["Foo.Bar", "Baz"]
    );
}

#[test]
fn valid_nested_entity_is_returned_unchanged() {
    let entity = outer("bar", "baz");
    assert_eq!(outer_rules().validate(entity.clone()), Outcome::Valid(entity));
}

#[test]
fn only_failing_branch_is_reported() {
    let outcome = outer_rules().validate(outer("bar", ""));

    assert_eq!(
        outcome,
        Outcome::Invalid(ErrorMap::single("Baz", "Value cannot be empty"))
    );
}

#[test]
fn direct_rule_and_nested_rekey_share_a_key() {
    // A direct rule declared on "Foo.Bar" lands on the same key as the
    // nested failure; the earlier evaluator's message comes first.
    let validator = rule_set(vec![
        rule_set_for(Property::new("Foo", |o: &Outer| &o.foo).unwrap(), inner_rules()).boxed(),
        rule_for(
            Property::new("Foo.Bar", |o: &Outer| &o.foo.bar).unwrap(),
            vec![min_length(3)],
        )
        .boxed(),
    ]);

    let outcome = validator.validate(outer("", "baz"));

    assert_eq!(
        outcome.errors().unwrap().get("Foo.Bar").unwrap(),
        [
            "Value cannot be empty",
            "Value is too short. Must be less than 3"
        ]
    );
}

#[derive(Clone, Debug, PartialEq)]
struct Contact {
    email: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Company {
    name: String,
    owner: Contact,
    billing: Contact,
}

#[test]
fn builder_macro_and_shared_validators_compose() {
    let contact = shared(
        RuleSetBuilder::new()
            .rule_for(property!(Contact, email), vec![not_empty(), email()])
            .build(),
    );

    let company = RuleSetBuilder::new()
        .rule_for(property!(Company, name), vec![not_empty()])
        .rule_set_for(property!(Company, owner), contact.clone())
        .rule_set_for(property!(Company, billing), contact)
        .build();

    let entity = Company {
        name: "Acme".to_string(),
        owner: Contact {
            email: "owner@acme.io".to_string(),
        },
        billing: Contact {
            email: String::new(),
        },
    };

    let outcome = company.validate(entity);
    let errors = outcome.errors().unwrap();

    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["billing.email"]);
    assert_eq!(
        errors.get("billing.email").unwrap(),
        [
            "Value cannot be empty",
            "Value is not a valid email address"
        ]
    );
}

#[test]
fn rule_sets_can_be_reused_across_threads() {
    let validator = std::sync::Arc::new(outer_rules());

    let handles: Vec<_> = ["", "x"]
        .into_iter()
        .map(|bar| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.validate(outer(bar, "baz")).is_valid())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true]);
}

#[test]
fn outcome_serializes_with_ordered_keys() {
    let outcome = outer_rules().validate(outer("", "")).map(|_| ());

    let json = serde_json::to_string(&outcome).unwrap();

    assert_eq!(
        json,
        r#"{"invalid":{"Foo.Bar":["Value cannot be empty"],"Baz":["Value cannot be empty"]}}"#
    );
}

#[test]
fn error_map_round_trips_and_rejects_empty_lists() {
    let errors: ErrorMap =
        serde_json::from_str(r#"{"name":["a","b"],"email":["c"]}"#).unwrap();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name", "email"]);

    let rejected = serde_json::from_str::<ErrorMap>(r#"{"name":[]}"#);
    assert!(rejected.is_err());
}

fn exploding_rule() -> Rule<String> {
    Rule::new(|_: &String| -> bool { panic!("predicate exploded") })
}

#[test]
#[should_panic(expected = "predicate exploded")]
fn panicking_predicate_escapes_rule_set() {
    let validator = rule_set(vec![
        rule_for(
            Property::new("Baz", |o: &Outer| &o.baz).unwrap(),
            vec![not_empty()],
        )
        .boxed(),
        rule_for(
            Property::new("Baz", |o: &Outer| &o.baz).unwrap(),
            vec![exploding_rule()],
        )
        .boxed(),
    ]);

    let _ = validator.validate(outer("bar", "baz"));
}

#[test]
#[should_panic(expected = "predicate exploded")]
fn panicking_predicate_escapes_nested_rule_set() {
    let exploding_inner = rule_set(vec![rule_for(
        Property::new("Bar", |i: &Inner| &i.bar).unwrap(),
        vec![exploding_rule()],
    )
    .boxed()]);
    let validator = rule_set(vec![rule_set_for(
        Property::new("Foo", |o: &Outer| &o.foo).unwrap(),
        exploding_inner,
    )
    .boxed()]);

    let _ = validator.validate(outer("bar", "baz"));
}

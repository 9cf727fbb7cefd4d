//! Validation of a single property against a list of rules.

use crate::core::{ErrorMap, Property, PropertyFailure, Rule};
use crate::evaluation::validator::Validator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::trace;

/// Type alias for the result of checking one rule
type RuleCheck = Validation<(), NonEmptyVec<PropertyFailure>>;

/// Validates one property of `A` with an ordered list of rules.
///
/// Every rule runs, even after one has failed, so the report lists each
/// failing rule's message in declaration order.
pub struct PropertyEvaluator<A: ?Sized, B: ?Sized> {
    property: Property<A, B>,
    rules: Vec<Rule<B>>,
}

impl<A: ?Sized, B: ?Sized> PropertyEvaluator<A, B> {
    /// Key under which this evaluator reports failures.
    pub fn property_name(&self) -> &str {
        self.property.name()
    }

    pub fn rules(&self) -> &[Rule<B>] {
        &self.rules
    }

    fn check_rule(&self, rule: &Rule<B>, value: &B) -> RuleCheck {
        if rule.check(value) {
            Validation::Success(())
        } else {
            trace!(
                property = self.property.name(),
                rule = rule.message(),
                "rule failed"
            );
            Validation::fail(PropertyFailure::new(self.property.name(), rule.message()))
        }
    }
}

impl<A: ?Sized, B: ?Sized> Validator<A> for PropertyEvaluator<A, B> {
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        let value = self.property.get(entity);
        let checks: Vec<RuleCheck> = self
            .rules
            .iter()
            .map(|rule| self.check_rule(rule, value))
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(_) => Validation::Success(()),
            Validation::Failure(failures) => {
                Validation::Failure(failures.iter().cloned().collect())
            }
        }
    }
}

/// Bind a list of rules to a property.
///
/// # Example
///
/// ```rust
/// use verdict::core::{Outcome, Property};
/// use verdict::evaluation::{rule_for, Validator};
/// use verdict::rules::{min_length, not_empty};
///
/// struct Foo {
///     bar: String,
/// }
///
/// let bar = Property::new("Bar", |foo: &Foo| &foo.bar).unwrap();
/// let validator = rule_for(bar, vec![not_empty(), min_length(5)]);
///
/// let outcome = validator.validate(Foo { bar: String::new() });
/// let errors = outcome.errors().unwrap();
/// assert_eq!(
///     errors.get("Bar").unwrap(),
///     ["Value cannot be empty", "Value is too short. Must be less than 5"]
/// );
/// ```
pub fn rule_for<A: ?Sized, B: ?Sized>(
    property: Property<A, B>,
    rules: Vec<Rule<B>>,
) -> PropertyEvaluator<A, B> {
    PropertyEvaluator { property, rules }
}

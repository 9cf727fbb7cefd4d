//! Whole-entity validation from a list of evaluators.

use crate::core::ErrorMap;
use crate::evaluation::validator::{BoxedValidator, Validator};
use stillwater::validation::Validation;
use tracing::debug;

/// Validates an entity with every evaluator it holds, merging their reports.
///
/// Evaluators are property evaluators, nested rule sets, or any other
/// [`Validator`]. All of them run; failures for the same key are
/// concatenated with the earlier evaluator's messages first.
pub struct RuleSet<A: ?Sized> {
    evaluators: Vec<BoxedValidator<A>>,
}

impl<A: ?Sized> RuleSet<A> {
    /// Number of evaluators in the set.
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl<A: ?Sized> Validator<A> for RuleSet<A> {
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        let checks: Vec<Validation<(), ErrorMap>> = self
            .evaluators
            .iter()
            .map(|evaluator| evaluator.check(entity))
            .collect();

        // all_vec combines failures left to right, so declaration order wins
        let result = Validation::all_vec(checks).map(|_| ());

        if let Validation::Failure(errors) = &result {
            debug!(
                evaluators = self.evaluators.len(),
                failed_properties = errors.len(),
                "rule set rejected entity"
            );
        }
        result
    }
}

/// Combine evaluators into a rule set.
///
/// # Example
///
/// ```rust
/// use verdict::core::Property;
/// use verdict::evaluation::{rule_for, rule_set, Validator};
/// use verdict::rules::{email, not_empty};
///
/// struct Signup {
///     name: String,
///     email: String,
/// }
///
/// let validator = rule_set(vec![
///     rule_for(Property::new("name", |s: &Signup| &s.name).unwrap(), vec![not_empty()]).boxed(),
///     rule_for(Property::new("email", |s: &Signup| &s.email).unwrap(), vec![email()]).boxed(),
/// ]);
///
/// let outcome = validator.validate(Signup { name: String::new(), email: "nope".to_string() });
/// let errors = outcome.errors().unwrap();
/// assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name", "email"]);
/// ```
pub fn rule_set<A: ?Sized>(evaluators: Vec<BoxedValidator<A>>) -> RuleSet<A> {
    RuleSet { evaluators }
}

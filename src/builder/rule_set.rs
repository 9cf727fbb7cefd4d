//! Builder for constructing rule sets.

use crate::builder::error::BuildError;
use crate::core::{Property, Rule};
use crate::evaluation::{rule_for, rule_set, rule_set_for, BoxedValidator, RuleSet, Validator};

/// Builder for rule sets with a fluent API.
///
/// Evaluators run in the order they are added, which is also the order in
/// which messages for a shared key are reported.
pub struct RuleSetBuilder<A: ?Sized + 'static> {
    evaluators: Vec<BoxedValidator<A>>,
}

impl<A: ?Sized + 'static> RuleSetBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// Validate a property with a list of rules.
    pub fn rule_for<B>(mut self, property: Property<A, B>, rules: Vec<Rule<B>>) -> Self
    where
        B: ?Sized + 'static,
    {
        self.evaluators.push(rule_for(property, rules).boxed());
        self
    }

    /// Validate a property named by hand.
    /// Returns an error if the name is not a field path.
    pub fn rule_for_named<B, F>(
        self,
        name: &str,
        accessor: F,
        rules: Vec<Rule<B>>,
    ) -> Result<Self, BuildError>
    where
        B: ?Sized + 'static,
        F: Fn(&A) -> &B + Send + Sync + 'static,
    {
        let property = Property::new(name, accessor)?;
        Ok(self.rule_for(property, rules))
    }

    /// Validate a property with its own validator, re-keying its failures.
    pub fn rule_set_for<B, V>(mut self, property: Property<A, B>, nested: V) -> Self
    where
        B: ?Sized + 'static,
        V: Validator<B> + Send + Sync + 'static,
    {
        self.evaluators.push(rule_set_for(property, nested).boxed());
        self
    }

    /// Add any other validator for the whole entity.
    pub fn validator<V>(mut self, validator: V) -> Self
    where
        V: Validator<A> + Send + Sync + 'static,
    {
        self.evaluators.push(validator.boxed());
        self
    }

    /// Build the rule set.
    pub fn build(self) -> RuleSet<A> {
        rule_set(self.evaluators)
    }
}

impl<A: ?Sized + 'static> Default for RuleSetBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

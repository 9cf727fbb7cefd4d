//! Validation of a sub-entity with its own validator.

use crate::core::{ErrorMap, Property};
use crate::evaluation::validator::Validator;
use stillwater::validation::Validation;

/// Runs a validator for `B` on a property of `A`.
///
/// Failures reported by the nested validator are re-keyed under the
/// property name, so `Value` inside `Bar` is reported as `Bar.Value`.
/// Nesting composes: a nested validator that itself nests produces keys
/// such as `Foo.Bar.Baz`.
pub struct NestedRuleSet<A: ?Sized, B: ?Sized, V> {
    property: Property<A, B>,
    nested: V,
}

impl<A: ?Sized, B: ?Sized, V> NestedRuleSet<A, B, V> {
    pub fn property_name(&self) -> &str {
        self.property.name()
    }
}

impl<A: ?Sized, B: ?Sized, V> Validator<A> for NestedRuleSet<A, B, V>
where
    V: Validator<B>,
{
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        match self.nested.check(self.property.get(entity)) {
            Validation::Success(()) => Validation::Success(()),
            Validation::Failure(errors) => Validation::Failure(errors.rekey(self.property.name())),
        }
    }
}

/// Bind a validator for `B` to a property of `A`.
///
/// Pass the nested validator by value, or wrap it in an `Arc` to share one
/// definition between several parents.
///
/// # Example
///
/// ```rust
/// use verdict::core::Property;
/// use verdict::evaluation::{rule_for, rule_set, rule_set_for, Validator};
/// use verdict::rules::not_empty;
///
/// struct Bar {
///     value: String,
/// }
///
/// struct Foo {
///     bar: Bar,
/// }
///
/// let bar_rules = rule_set(vec![
///     rule_for(Property::new("Value", |b: &Bar| &b.value).unwrap(), vec![not_empty()]).boxed(),
/// ]);
/// let foo_rules = rule_set(vec![
///     rule_set_for(Property::new("Bar", |f: &Foo| &f.bar).unwrap(), bar_rules).boxed(),
/// ]);
///
/// let outcome = foo_rules.validate(Foo { bar: Bar { value: String::new() } });
/// let errors = outcome.errors().unwrap();
/// assert_eq!(errors.get("Bar.Value").unwrap(), ["Value cannot be empty"]);
/// ```
pub fn rule_set_for<A, B, V>(property: Property<A, B>, nested: V) -> NestedRuleSet<A, B, V>
where
    A: ?Sized,
    B: ?Sized,
    V: Validator<B>,
{
    NestedRuleSet { property, nested }
}

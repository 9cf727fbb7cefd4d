//! The validator capability shared by every composition primitive.

use crate::core::{ErrorMap, Outcome};
use std::marker::PhantomData;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Boxed validator stored by rule sets.
pub type BoxedValidator<A> = Box<dyn Validator<A> + Send + Sync>;

/// Shared validator handle for dependency-injection style consumers.
pub type SharedValidator<A> = Arc<dyn Validator<A> + Send + Sync>;

/// Something that can validate an `A`.
///
/// Implementors only provide [`check`](Validator::check), which borrows the
/// entity and reports failures. [`validate`](Validator::validate) hands the
/// entity back inside an [`Outcome`].
pub trait Validator<A: ?Sized> {
    /// Evaluate every rule against `entity`, accumulating all failures.
    fn check(&self, entity: &A) -> Validation<(), ErrorMap>;

    /// Validate an entity, returning it unchanged when every rule passes.
    fn validate(&self, entity: A) -> Outcome<A>
    where
        A: Sized,
    {
        let check = self.check(&entity);
        Outcome::from_check(entity, check)
    }

    /// Box this validator so it can sit alongside others in a rule set.
    fn boxed(self) -> BoxedValidator<A>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<A: ?Sized, V: Validator<A> + ?Sized> Validator<A> for &V {
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        (**self).check(entity)
    }
}

impl<A: ?Sized, V: Validator<A> + ?Sized> Validator<A> for Box<V> {
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        (**self).check(entity)
    }
}

impl<A: ?Sized, V: Validator<A> + ?Sized> Validator<A> for Arc<V> {
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        (**self).check(entity)
    }
}

/// Validator backed by a plain function.
pub struct FnValidator<A: ?Sized, F> {
    check: F,
    _phantom: PhantomData<fn(&A)>,
}

impl<A: ?Sized, F> Validator<A> for FnValidator<A, F>
where
    F: Fn(&A) -> Outcome<()>,
{
    fn check(&self, entity: &A) -> Validation<(), ErrorMap> {
        (self.check)(entity).into_validation()
    }
}

/// Wrap a validation function behind the [`Validator`] trait.
///
/// The function borrows the entity and returns `Outcome<()>`; the value is
/// attached by [`Validator::validate`]. A function that takes the entity by
/// value and returns `Outcome<A>` can be adapted by cloning into it and
/// discarding the value with `.map(|_| ())`, or by implementing
/// [`Validator::check`] directly. Pass the result to [`shared`] to hand it
/// out as a [`SharedValidator`].
///
/// # Example
///
/// ```rust
/// use verdict::core::{ErrorMap, Outcome};
/// use verdict::evaluation::{to_validator, Validator};
///
/// struct Order {
///     total: u64,
/// }
///
/// let validator = to_validator(|order: &Order| {
///     if order.total > 0 {
///         Outcome::Valid(())
///     } else {
///         Outcome::Invalid(ErrorMap::single("total", "Value must be positive"))
///     }
/// });
///
/// assert!(validator.validate(Order { total: 5 }).is_valid());
/// assert!(validator.validate(Order { total: 0 }).is_invalid());
/// ```
pub fn to_validator<A, F>(check: F) -> FnValidator<A, F>
where
    A: ?Sized,
    F: Fn(&A) -> Outcome<()>,
{
    FnValidator {
        check,
        _phantom: PhantomData,
    }
}

/// Put a validator behind a shared, thread-safe trait object.
pub fn shared<A, V>(validator: V) -> SharedValidator<A>
where
    A: ?Sized,
    V: Validator<A> + Send + Sync + 'static,
{
    Arc::new(validator)
}

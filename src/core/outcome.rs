//! The result of validating an entity.

use super::errors::ErrorMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Either the validated value, unchanged, or every failure found for it.
///
/// Unlike `Result`, an `Invalid` outcome is never the first error only: it
/// carries the full [`ErrorMap`] accumulated across all rules and properties.
///
/// # Example
///
/// ```rust
/// use verdict::core::{ErrorMap, Outcome};
///
/// let valid: Outcome<u32> = Outcome::Valid(21);
/// assert_eq!(valid.map(|n| n * 2), Outcome::Valid(42));
///
/// let invalid: Outcome<u32> = Outcome::Invalid(ErrorMap::single("age", "Value is required"));
/// assert_eq!(invalid.count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The entity passed every rule
    Valid(T),
    /// At least one rule failed
    Invalid(ErrorMap),
}

impl<T> Outcome<T> {
    /// Attach a value to the result of a borrowing check.
    pub fn from_check(value: T, check: Validation<(), ErrorMap>) -> Self {
        match check {
            Validation::Success(()) => Outcome::Valid(value),
            Validation::Failure(errors) => Outcome::Invalid(errors),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// The accumulated failures, if any.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(errors) => Some(errors),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Valid(value) => Outcome::Valid(f(value)),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    /// Chain a further validation onto a valid value.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Valid(value) => f(value),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    /// Alias of [`Outcome::bind`].
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.bind(f)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Valid(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorMap> {
        match self {
            Outcome::Valid(value) => Ok(value),
            Outcome::Invalid(errors) => Err(errors),
        }
    }

    pub fn into_validation(self) -> Validation<T, ErrorMap> {
        match self {
            Outcome::Valid(value) => Validation::Success(value),
            Outcome::Invalid(errors) => Validation::Failure(errors),
        }
    }

    /// Zero or one element.
    pub fn into_vec(self) -> Vec<T> {
        self.into_option().into_iter().collect()
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Outcome::Valid(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
        .into_iter()
    }

    /// Keep a valid value only if it satisfies `predicate`.
    ///
    /// A rejected value becomes `Invalid` with an *empty* error map: there is
    /// no property to blame. Check [`ErrorMap::is_empty`] to tell a filtered
    /// outcome apart from one produced by a validator.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Valid(value) if predicate(&value) => Outcome::Valid(value),
            Outcome::Valid(_) => Outcome::Invalid(ErrorMap::new()),
            invalid => invalid,
        }
    }

    pub fn default_value(self, default: T) -> T {
        match self {
            Outcome::Valid(value) => value,
            Outcome::Invalid(_) => default,
        }
    }

    pub fn default_with<F>(self, f: F) -> T
    where
        F: FnOnce(ErrorMap) -> T,
    {
        match self {
            Outcome::Valid(value) => value,
            Outcome::Invalid(errors) => f(errors),
        }
    }

    /// `self` if valid, otherwise `other`.
    pub fn or_else(self, other: Outcome<T>) -> Outcome<T> {
        match self {
            Outcome::Valid(value) => Outcome::Valid(value),
            Outcome::Invalid(_) => other,
        }
    }

    pub fn or_else_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(ErrorMap) -> Outcome<T>,
    {
        match self {
            Outcome::Valid(value) => Outcome::Valid(value),
            Outcome::Invalid(errors) => f(errors),
        }
    }

    pub fn fold<R, V, I>(self, on_valid: V, on_invalid: I) -> R
    where
        V: FnOnce(T) -> R,
        I: FnOnce(ErrorMap) -> R,
    {
        match self {
            Outcome::Valid(value) => on_valid(value),
            Outcome::Invalid(errors) => on_invalid(errors),
        }
    }

    /// True if valid and the value satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Valid(value) => predicate(value),
            Outcome::Invalid(_) => false,
        }
    }

    /// True if invalid, or valid and the value satisfies `predicate`.
    ///
    /// This is a universal quantifier, not an alias of [`Outcome::exists`]:
    /// an invalid outcome has no value to falsify `predicate`, so it yields
    /// `true` where `exists` yields `false`.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Valid(value) => predicate(value),
            Outcome::Invalid(_) => true,
        }
    }

    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// 1 if valid, 0 if invalid.
    pub fn count(&self) -> usize {
        usize::from(self.is_valid())
    }
}

impl<T> Outcome<Outcome<T>> {
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorMap> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, ErrorMap>> for Outcome<T> {
    fn from(result: Result<T, ErrorMap>) -> Self {
        match result {
            Ok(value) => Outcome::Valid(value),
            Err(errors) => Outcome::Invalid(errors),
        }
    }
}

impl<T> From<Validation<T, ErrorMap>> for Outcome<T> {
    fn from(validation: Validation<T, ErrorMap>) -> Self {
        match validation {
            Validation::Success(value) => Outcome::Valid(value),
            Validation::Failure(errors) => Outcome::Invalid(errors),
        }
    }
}

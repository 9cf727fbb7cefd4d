//! Single predicate rules.

use std::fmt;

/// Message used when a rule is built without one.
pub const DEFAULT_MESSAGE: &str = "Validation failed";

/// A pure predicate paired with the message reported when it fails.
///
/// Rules hold no state and are evaluated against a property value, never
/// the whole entity. A predicate that panics propagates the panic to the
/// caller of the validator; rules do not guard against it.
///
/// # Example
///
/// ```rust
/// use verdict::core::Rule;
///
/// let positive = Rule::new(|n: &i32| *n > 0).with_message("Value must be positive");
///
/// assert!(positive.check(&3));
/// assert!(!positive.check(&-1));
/// assert_eq!(positive.message(), "Value must be positive");
/// ```
pub struct Rule<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

impl<T: ?Sized> Rule<T> {
    /// Create a rule with the default message.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule {
            predicate: Box::new(predicate),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Replace the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Build a rule from a predicate and an optional message.
pub fn make_rule<T, F>(predicate: F, message: Option<&str>) -> Rule<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let rule = Rule::new(predicate);
    match message {
        Some(message) => rule.with_message(message),
        None => rule,
    }
}

//! Accumulated validation failures.
//!
//! An [`ErrorMap`] is the report carried by [`Outcome::Invalid`](super::Outcome):
//! an insertion-ordered map from property name (or dotted path for nested
//! properties) to the messages of every rule that failed for it.
//!
//! `ErrorMap` is a [`Semigroup`]: combining two maps unions their keys and
//! concatenates message lists for shared keys, left before right. This is what
//! lets rule sets merge partial reports with Stillwater's `Validation`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::Semigroup;
use thiserror::Error;

/// Separator placed between a parent property and a nested key.
pub const KEY_SEPARATOR: &str = ".";

/// Errors raised when an `ErrorMap` is rebuilt from raw data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ErrorMapError {
    #[error("Property '{property}' has no failure messages")]
    EmptyMessages { property: String },
}

/// A single failed rule for a single property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyFailure {
    /// Name (or dotted path) of the property that failed
    pub property: String,
    /// Message of the rule that failed
    pub message: String,
}

impl PropertyFailure {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PropertyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}

/// Ordered map of property name to failure messages.
///
/// Keys keep the order in which they were first reported and a key never
/// maps to an empty message list. Equality compares contents, not key order;
/// use [`ErrorMap::keys`] when order matters.
///
/// # Example
///
/// ```rust
/// use verdict::core::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.push("name", "Value cannot be empty");
/// errors.push("email", "Value is not a valid email address");
/// errors.push("name", "Value is too short. Must be less than 3");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name", "email"]);
/// assert_eq!(errors.get("name").map(|m| m.len()), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Vec<String>>",
    into = "IndexMap<String, Vec<String>>"
)]
pub struct ErrorMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ErrorMap {
    /// Create an empty map.
    ///
    /// An empty map only ever appears inside an `Invalid` produced by
    /// [`Outcome::filter`](super::Outcome::filter); validators never report one.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create a map holding one message for one property.
    pub fn single(property: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(property, message);
        errors
    }

    /// Append a message to a property, adding the key if it is new.
    pub fn push(&mut self, property: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(property.into())
            .or_default()
            .push(message.into());
    }

    /// Messages reported for a property, in the order they were reported.
    pub fn get(&self, property: &str) -> Option<&[String]> {
        self.entries.get(property).map(Vec::as_slice)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Property names in first-reported order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct failing properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(property, messages)| (property.as_str(), messages.as_slice()))
    }

    /// Flatten into one failure per message, property by property.
    pub fn failures(&self) -> impl Iterator<Item = PropertyFailure> + '_ {
        self.iter().flat_map(|(property, messages)| {
            messages
                .iter()
                .map(move |message| PropertyFailure::new(property, message.as_str()))
        })
    }

    /// Merge `other` into this map.
    ///
    /// Keys of `other` that are new are appended in their order; messages for
    /// shared keys are appended after the existing ones.
    pub fn merge(mut self, other: ErrorMap) -> Self {
        for (property, messages) in other.entries {
            self.entries.entry(property).or_default().extend(messages);
        }
        self
    }

    /// Prefix every key with `parent` and the key separator.
    ///
    /// `{"Value": [..]}` rekeyed under `"Bar"` becomes `{"Bar.Value": [..]}`.
    pub fn rekey(self, parent: &str) -> Self {
        let entries = self
            .entries
            .into_iter()
            .map(|(child, messages)| (format!("{parent}{KEY_SEPARATOR}{child}"), messages))
            .collect();
        Self { entries }
    }
}

impl Semigroup for ErrorMap {
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl FromIterator<PropertyFailure> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = PropertyFailure>>(iter: I) -> Self {
        let mut errors = Self::new();
        for failure in iter {
            errors.push(failure.property, failure.message);
        }
        errors
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl TryFrom<IndexMap<String, Vec<String>>> for ErrorMap {
    type Error = ErrorMapError;

    fn try_from(entries: IndexMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        if let Some((property, _)) = entries.iter().find(|(_, messages)| messages.is_empty()) {
            return Err(ErrorMapError::EmptyMessages {
                property: property.clone(),
            });
        }
        Ok(Self { entries })
    }
}

impl From<ErrorMap> for IndexMap<String, Vec<String>> {
    fn from(errors: ErrorMap) -> Self {
        errors.entries
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in self.failures() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
            first = false;
        }
        Ok(())
    }
}

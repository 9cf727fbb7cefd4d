//! Verdict: declarative validation that reports every failure
//!
//! Verdict evaluates predicate rules against the properties of an entity and
//! accumulates a structured report of which properties failed and why,
//! instead of stopping at the first failure. It builds on Stillwater's
//! `Validation` type: validators are pure functions and partial reports are
//! merged as a semigroup.
//!
//! # Core Concepts
//!
//! - **Rule**: A predicate on a property value plus its failure message
//! - **Property evaluator** ([`rule_for`]): All rules for one property
//! - **Rule set** ([`rule_set`]): All evaluators for one entity
//! - **Nested rule set** ([`rule_set_for`]): A validator for a sub-entity,
//!   whose failures are reported as `parent.child`
//! - **Outcome**: `Valid(entity)` or `Invalid(errors)`
//!
//! # Example
//!
//! ```rust
//! use verdict::{property, rule_for, rule_set, rule_set_for, Outcome, Validator};
//! use verdict::rules::{min_length, not_empty};
//!
//! struct Profile {
//!     bio: String,
//! }
//!
//! struct User {
//!     name: String,
//!     profile: Profile,
//! }
//!
//! let profile_rules = rule_set(vec![
//!     rule_for(property!(Profile, bio), vec![not_empty()]).boxed(),
//! ]);
//!
//! let user_rules = rule_set(vec![
//!     rule_for(property!(User, name), vec![not_empty(), min_length(3)]).boxed(),
//!     rule_set_for(property!(User, profile), profile_rules).boxed(),
//! ]);
//!
//! let user = User {
//!     name: String::new(),
//!     profile: Profile { bio: String::new() },
//! };
//!
//! match user_rules.validate(user) {
//!     Outcome::Valid(_) => unreachable!(),
//!     Outcome::Invalid(errors) => {
//!         assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name", "profile.bio"]);
//!         assert_eq!(errors.get("name").map(|m| m.len()), Some(2));
//!     }
//! }
//! ```

pub mod builder;
pub mod core;
pub mod evaluation;
pub mod rules;

// Re-export commonly used types
pub use builder::{BuildError, RuleSetBuilder};
pub use self::core::{
    make_rule, ErrorMap, Outcome, Property, PropertyError, PropertyFailure, Rule,
};
pub use evaluation::{rule_for, rule_set, rule_set_for, to_validator, RuleSet, Validator};
pub use stillwater::{Semigroup, Validation};

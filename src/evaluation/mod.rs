//! Rule evaluation and error accumulation.
//!
//! This module composes rules into validators using Stillwater's
//! `Validation` type, so every failure is collected instead of stopping at
//! the first one.
//!
//! - [`rule_for`] validates one property with a list of rules
//! - [`rule_set`] validates a whole entity with a list of evaluators
//! - [`rule_set_for`] embeds a validator for a sub-entity, re-keying its
//!   failures as `parent.child`
//! - [`to_validator`] wraps a plain function behind the [`Validator`] trait
//!
//! All validators are immutable and `Send + Sync`; define them once and
//! reuse them across calls and threads.

mod nested;
mod property;
mod rule_set;
mod validator;

pub use nested::{rule_set_for, NestedRuleSet};
pub use property::{rule_for, PropertyEvaluator};
pub use rule_set::{rule_set, RuleSet};
pub use validator::{shared, to_validator, BoxedValidator, FnValidator, SharedValidator, Validator};

//! Builder API for ergonomic validator construction.
//!
//! This module provides a fluent builder and a macro for defining
//! validators with minimal boilerplate. Mistakes in a definition surface as
//! [`BuildError`] when the validator is built, never while validating.

pub mod error;
pub mod macros;
pub mod rule_set;

pub use error::BuildError;
pub use rule_set::RuleSetBuilder;

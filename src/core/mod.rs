//! Core validation types.
//!
//! This module contains the pure data the engine is built from:
//! - `Outcome`, the valid/invalid result of validating an entity
//! - `ErrorMap`, the ordered report of failures per property
//! - `Rule`, a predicate with its failure message
//! - `Property`, a named accessor into an entity
//!
//! Nothing here performs I/O or mutates an entity.

mod errors;
mod outcome;
mod property;
mod rule;

pub use errors::{ErrorMap, ErrorMapError, PropertyFailure, KEY_SEPARATOR};
pub use outcome::Outcome;
pub use property::{Property, PropertyError};
pub use rule::{make_rule, Rule, DEFAULT_MESSAGE};

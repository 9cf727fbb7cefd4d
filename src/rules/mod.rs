//! Built-in rules.
//!
//! These are ordinary [`Rule`](crate::core::Rule) constructors; nothing in
//! the evaluation engine depends on them.
//!
//! # Example
//!
//! ```rust
//! use verdict::core::Rule;
//! use verdict::rules::{max_length, not_empty};
//!
//! let rules: Vec<Rule<String>> = vec![not_empty(), max_length(32)];
//! assert!(rules.iter().all(|rule| rule.check(&"verdict".to_string())));
//! ```

mod string;

pub use string::{
    alphanumeric, email, exact_length, guid, ipv4, ipv6, matches, max_length, min_length,
    not_empty, numeric, url,
};

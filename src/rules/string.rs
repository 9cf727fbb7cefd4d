//! String rules.
//!
//! Every constructor returns a [`Rule`] usable on any `T: AsRef<str>`, so
//! the same rule validates `String`, `&str` and `str` properties. Lengths
//! are counted in characters, not bytes.

use crate::builder::BuildError;
use crate::core::Rule;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;
use uuid::Uuid;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("valid url regex"));

fn char_count<T: AsRef<str> + ?Sized>(value: &T) -> usize {
    value.as_ref().chars().count()
}

/// Value must not be the empty string.
pub fn not_empty<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| !value.as_ref().is_empty()).with_message("Value cannot be empty")
}

/// Value must have at least `min` characters.
pub fn min_length<T: AsRef<str> + ?Sized>(min: usize) -> Rule<T> {
    Rule::new(move |value: &T| char_count(value) >= min)
        .with_message(format!("Value is too short. Must be less than {min}"))
}

/// Value must have at most `max` characters.
pub fn max_length<T: AsRef<str> + ?Sized>(max: usize) -> Rule<T> {
    Rule::new(move |value: &T| char_count(value) <= max)
        .with_message(format!("Value is too long. Must be at most {max}"))
}

/// Value must have exactly `length` characters.
pub fn exact_length<T: AsRef<str> + ?Sized>(length: usize) -> Rule<T> {
    Rule::new(move |value: &T| char_count(value) == length)
        .with_message(format!("Value must be exactly {length} characters"))
}

pub fn email<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| EMAIL_REGEX.is_match(value.as_ref()))
        .with_message("Value is not a valid email address")
}

/// Value must be an absolute `http` or `https` URL.
pub fn url<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| URL_REGEX.is_match(value.as_ref()))
        .with_message("Value is not a valid URL")
}

/// Value must parse as a GUID, with or without braces and hyphens.
pub fn guid<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| Uuid::parse_str(value.as_ref()).is_ok())
        .with_message("Value is not a valid GUID")
}

pub fn ipv4<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| value.as_ref().parse::<Ipv4Addr>().is_ok())
        .with_message("Value is not a valid IPv4 address")
}

pub fn ipv6<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| value.as_ref().parse::<Ipv6Addr>().is_ok())
        .with_message("Value is not a valid IPv6 address")
}

/// Value may contain only letters and digits. The empty string passes.
pub fn alphanumeric<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| value.as_ref().chars().all(char::is_alphanumeric))
        .with_message("Value must contain only letters and digits")
}

/// Value must be one or more ASCII digits.
pub fn numeric<T: AsRef<str> + ?Sized>() -> Rule<T> {
    Rule::new(|value: &T| {
        let value = value.as_ref();
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    })
    .with_message("Value must contain only digits")
}

/// Value must match a regular expression.
/// Returns an error if `pattern` does not compile.
pub fn matches<T: AsRef<str> + ?Sized>(pattern: &str) -> Result<Rule<T>, BuildError> {
    let regex = Regex::new(pattern).map_err(|source| BuildError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let message = format!("Value does not match pattern {pattern}");
    Ok(Rule::new(move |value: &T| regex.is_match(value.as_ref())).with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(rule: &Rule<str>, value: &str) -> bool {
        rule.check(value)
    }

    #[test]
    fn not_empty_rejects_only_empty() {
        let rule = not_empty();
        assert!(!passes(&rule, ""));
        assert!(passes(&rule, " "));
        assert_eq!(rule.message(), "Value cannot be empty");
    }

    #[test]
    fn length_rules_count_characters() {
        assert!(passes(&min_length(3), "héé"));
        assert!(!passes(&min_length(3), "hé"));
        assert!(passes(&max_length(2), "éé"));
        assert!(!passes(&max_length(2), "abc"));
        assert!(passes(&exact_length(4), "four"));
        assert!(!passes(&exact_length(4), "five!"));
    }

    #[test]
    fn min_length_message_names_the_bound() {
        let rule: Rule<String> = min_length(5);
        assert_eq!(rule.message(), "Value is too short. Must be less than 5");
        assert!(!rule.check(&String::new()));
    }

    #[test]
    fn email_addresses() {
        let rule = email();
        assert!(passes(&rule, "ada@example.com"));
        assert!(passes(&rule, "first.last+tag@sub.example.org"));
        assert!(!passes(&rule, "not-an-email"));
        assert!(!passes(&rule, "missing@"));
        assert!(!passes(&rule, "@example.com"));
    }

    #[test]
    fn urls() {
        let rule = url();
        assert!(passes(&rule, "https://example.com/path?q=1"));
        assert!(passes(&rule, "http://localhost:8080"));
        assert!(!passes(&rule, "ftp://example.com"));
        assert!(!passes(&rule, "example.com"));
    }

    #[test]
    fn guids() {
        let rule = guid();
        assert!(passes(&rule, "67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(passes(&rule, "67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!passes(&rule, "67e55044-10b1-426f-9247"));
        assert!(!passes(&rule, "not-a-guid"));
    }

    #[test]
    fn ip_addresses() {
        assert!(passes(&ipv4(), "192.168.0.1"));
        assert!(!passes(&ipv4(), "256.1.1.1"));
        assert!(!passes(&ipv4(), "::1"));

        assert!(passes(&ipv6(), "::1"));
        assert!(passes(&ipv6(), "2001:db8::ff00:42:8329"));
        assert!(!passes(&ipv6(), "192.168.0.1"));
    }

    #[test]
    fn character_classes() {
        assert!(passes(&alphanumeric(), "abc123"));
        assert!(passes(&alphanumeric(), ""));
        assert!(!passes(&alphanumeric(), "abc-123"));

        assert!(passes(&numeric(), "0042"));
        assert!(!passes(&numeric(), ""));
        assert!(!passes(&numeric(), "4.2"));
    }

    #[test]
    fn custom_patterns() {
        let rule: Rule<str> = matches(r"^[A-Z]{3}$").unwrap();
        assert!(rule.check("ABC"));
        assert!(!rule.check("abc"));
    }

    #[test]
    fn invalid_patterns_fail_at_construction() {
        let result = matches::<str>("(unclosed");
        assert!(matches!(result, Err(BuildError::InvalidPattern { .. })));
    }
}

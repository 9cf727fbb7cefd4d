//! Registration Form Validation
//!
//! This example validates a nested registration form and prints every
//! failure at once.
//!
//! Key concepts:
//! - Per-property rules that all run, even after one fails
//! - Nested rule sets reported under dotted keys
//! - Custom whole-entity validators alongside property rules
//!
//! Run with: cargo run --example registration

use verdict::core::{ErrorMap, Outcome, Rule};
use verdict::evaluation::{to_validator, RuleSet, Validator};
use verdict::rules::{email, ipv4, max_length, min_length, not_empty, numeric};
use verdict::{property, RuleSetBuilder};

#[derive(Clone, Debug)]
struct Address {
    street: String,
    postcode: String,
}

#[derive(Clone, Debug)]
struct Registration {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    last_login_ip: String,
    address: Address,
}

fn address_rules() -> RuleSet<Address> {
    RuleSetBuilder::new()
        .rule_for(property!(Address, street), vec![not_empty(), max_length(64)])
        .rule_for(
            property!(Address, postcode),
            vec![
                numeric(),
                Rule::new(|p: &String| p.len() == 5).with_message("Postcode must have 5 digits"),
            ],
        )
        .build()
}

fn registration_rules() -> RuleSet<Registration> {
    RuleSetBuilder::new()
        .rule_for(
            property!(Registration, username),
            vec![not_empty(), min_length(3), max_length(16)],
        )
        .rule_for(property!(Registration, email), vec![not_empty(), email()])
        .rule_for(property!(Registration, password), vec![min_length(8)])
        .rule_for(property!(Registration, last_login_ip), vec![ipv4()])
        .rule_set_for(property!(Registration, address), address_rules())
        .validator(to_validator(|r: &Registration| {
            if r.password == r.confirm_password {
                Outcome::Valid(())
            } else {
                Outcome::Invalid(ErrorMap::single(
                    "confirm_password",
                    "Passwords do not match",
                ))
            }
        }))
        .build()
}

fn report(outcome: Outcome<Registration>) {
    match outcome {
        Outcome::Valid(registration) => {
            println!("  Accepted registration for {}\n", registration.username);
        }
        Outcome::Invalid(errors) => {
            println!("  Rejected with {} failing properties:", errors.len());
            for (property, messages) in errors.iter() {
                for message in messages {
                    println!("    - {property}: {message}");
                }
            }
            println!();
        }
    }
}

fn main() {
    println!("=== Registration Validation Example ===\n");

    let rules = registration_rules();

    println!("Example 1: Valid registration");
    report(rules.validate(Registration {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "analytical-engine".to_string(),
        confirm_password: "analytical-engine".to_string(),
        last_login_ip: "10.0.0.7".to_string(),
        address: Address {
            street: "12 St James's Square".to_string(),
            postcode: "12345".to_string(),
        },
    }));

    println!("Example 2: Every failure is reported");
    report(rules.validate(Registration {
        username: String::new(),
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        confirm_password: "different".to_string(),
        last_login_ip: "300.1.1.1".to_string(),
        address: Address {
            street: String::new(),
            postcode: "12a".to_string(),
        },
    }));

    println!("=== Example Complete ===");
}

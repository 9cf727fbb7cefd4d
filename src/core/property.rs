//! Named property accessors.
//!
//! A [`Property`] is how validators reach into an entity: a pure accessor
//! from the entity to one of its values, plus the stable name under which
//! failures for that value are reported.

use std::fmt;
use thiserror::Error;

/// A property name that is not a field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("Property name is empty. Pass the field name, e.g. Property::new(\"email\", ..)")]
    EmptyName,

    #[error("Property name '{name}' is not a field path. Use identifiers separated by '.'")]
    InvalidName { name: String },
}

/// Accessor from `A` to one of its values of type `B`, with a name.
///
/// Build one with [`Property::new`], which checks the name, or with the
/// [`property!`](crate::property) macro, which derives the name from the
/// field path at compile time.
///
/// # Example
///
/// ```rust
/// use verdict::core::Property;
///
/// struct User {
///     email: String,
/// }
///
/// let email = Property::new("email", |user: &User| &user.email).unwrap();
///
/// let user = User { email: "a@b.io".to_string() };
/// assert_eq!(email.name(), "email");
/// assert_eq!(email.get(&user), "a@b.io");
/// ```
pub struct Property<A: ?Sized, B: ?Sized> {
    name: String,
    accessor: Box<dyn Fn(&A) -> &B + Send + Sync>,
}

impl<A: ?Sized, B: ?Sized> Property<A, B> {
    /// Create a property, rejecting names that are not field paths.
    ///
    /// A valid name is one or more identifiers separated by `.`, such as
    /// `"email"` or `"address.city"`.
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Result<Self, PropertyError>
    where
        F: Fn(&A) -> &B + Send + Sync + 'static,
    {
        let name = name.into();
        validate_name(&name)?;
        Ok(Property {
            name,
            accessor: Box::new(accessor),
        })
    }

    /// Create a property whose name is already known to be a field path.
    ///
    /// Used by the `property!` macro; prefer [`Property::new`].
    #[doc(hidden)]
    pub fn from_parts<F>(name: &'static str, accessor: F) -> Self
    where
        F: Fn(&A) -> &B + Send + Sync + 'static,
    {
        Property {
            name: name.to_string(),
            accessor: Box::new(accessor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the property from an entity.
    pub fn get<'a>(&self, entity: &'a A) -> &'a B {
        (self.accessor)(entity)
    }
}

impl<A: ?Sized, B: ?Sized> fmt::Debug for Property<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn validate_name(name: &str) -> Result<(), PropertyError> {
    if name.is_empty() {
        return Err(PropertyError::EmptyName);
    }
    if name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(PropertyError::InvalidName {
            name: name.to_string(),
        })
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

//! Macros for ergonomic property selection.

/// Create a [`Property`](crate::core::Property) from a field path.
///
/// The property name is the field path as written, so `property!(User, email)`
/// is reported as `email` and `property!(User, address.city)` as
/// `address.city`. The name is generated at compile time and cannot be
/// malformed.
///
/// # Example
///
/// ```
/// use verdict::property;
///
/// struct Address {
///     city: String,
/// }
///
/// struct User {
///     email: String,
///     address: Address,
/// }
///
/// let email = property!(User, email);
/// let city = property!(User, address.city);
///
/// let user = User {
///     email: "ada@example.com".to_string(),
///     address: Address { city: "London".to_string() },
/// };
///
/// assert_eq!(email.name(), "email");
/// assert_eq!(city.name(), "address.city");
/// assert_eq!(city.get(&user), "London");
/// ```
#[macro_export]
macro_rules! property {
    ($ty:ty, $first:ident $(. $rest:ident)*) => {
        $crate::core::Property::<$ty, _>::from_parts(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |entity: &$ty| &entity.$first $(.$rest)*,
        )
    };
}

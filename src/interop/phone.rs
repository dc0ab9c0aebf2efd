//! Phone-number normalization and validation.

use crate::control::Maybe;

const INTERNATIONAL_PREFIX: char = '+';

/// Decides whether a phone number could exist.
///
/// Implemented for any `Fn(&str) -> bool`, so a plain closure can stand in
/// for a full validation library.
pub trait PhoneValidator {
    /// `true` when `phone` has a plausible length and shape.
    fn is_possible(&self, phone: &str) -> bool;
}

impl<F> PhoneValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_possible(&self, phone: &str) -> bool {
        self(phone)
    }
}

/// Keeps only the ASCII digits of `phone`.
#[must_use]
pub fn only_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Prepends `+` to non-blank numbers that lack it.
#[must_use]
pub fn with_prefix(phone: &str) -> String {
    if phone.trim().is_empty() || phone.starts_with(INTERNATIONAL_PREFIX) {
        phone.to_owned()
    } else {
        format!("{INTERNATIONAL_PREFIX}{phone}")
    }
}

/// Strips formatting and adds the international prefix.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    with_prefix(&only_digits(phone))
}

/// Creates a check that yields the normalized number when `validator`
/// accepts it.
///
/// ```
/// use pointfree::control::Maybe;
/// use pointfree::interop::possible_phone;
///
/// let check = possible_phone(|phone: &str| phone.len() == 12);
///
/// assert_eq!(check("(415) 555-0132 1"), Maybe::Just("+41555501321".to_string()));
/// assert!(check("555").is_nothing());
/// ```
pub fn possible_phone<V>(validator: V) -> impl Fn(&str) -> Maybe<String>
where
    V: PhoneValidator,
{
    move |phone: &str| {
        let normalized = normalize_phone(phone);
        if validator.is_possible(&normalized) {
            Maybe::just(normalized)
        } else {
            Maybe::nothing()
        }
    }
}

use num_bigint::BigInt;

/// Returns `true` if `text` is a non-empty run of ASCII digits.
///
/// # Example
/// ```
/// use quotient::util::num::is_digits;
///
/// assert!(is_digits("0042"));
/// assert!(!is_digits(""));
/// assert!(!is_digits("4a"));
/// assert!(!is_digits("+4"));
/// ```
#[must_use]
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an integer of the form `-?[0-9]+` into a `BigInt`.
///
/// Unlike `BigInt::from_str`, a leading `+`, underscores and surrounding
/// whitespace are all rejected.
///
/// ## Parameters
/// - `text`: The candidate integer text.
///
/// ## Returns
/// - `Some(BigInt)`: The parsed value.
/// - `None`: If the text is not a plain, optionally negative, digit string.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use quotient::util::num::parse_integer;
///
/// assert_eq!(parse_integer("-17"), Some(BigInt::from(-17)));
/// assert_eq!(parse_integer("123456789012345678901234567890").unwrap().to_string(),
///            "123456789012345678901234567890");
/// assert_eq!(parse_integer("+17"), None);
/// assert_eq!(parse_integer("-"), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !is_digits(digits) {
        return None;
    }

    text.parse().ok()
}

//! Lenient integer parsing
//!
//! Extracts an integer from free-form text instead of rejecting it:
//!
//! 1. Trim surrounding whitespace
//! 2. A leading `-` marks the value as negative
//! 3. Every ASCII digit after that is kept in order, everything else is dropped
//! 4. The digits are parsed and negated if needed
//!
//! ```
//! use promptline_domain::lenient_int;
//!
//! assert_eq!(lenient_int("a1b2c3"), Some(123));
//! assert_eq!(lenient_int(" -4 2 "), Some(-42));
//! assert_eq!(lenient_int("-"), None);
//! ```

use tracing::debug;

/// Parse possibly-absent text leniently.
///
/// Returns `None` when the input is absent, contains no digits, or the
/// digits do not fit in an `i32`.
pub fn parse_lenient_int(input: Option<&str>) -> Option<i32> {
    let Some(input) = input else {
        debug!("Lenient parse failed: no input");
        return None;
    };

    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        debug!(input, "Lenient parse failed: no digits");
        return None;
    }

    // Magnitude first so that i32::MIN is reachable
    let magnitude: i64 = match digits.parse() {
        Ok(m) => m,
        Err(_) => {
            debug!(input, "Lenient parse failed: too many digits");
            return None;
        }
    };
    let signed = if negative { -magnitude } else { magnitude };

    match i32::try_from(signed) {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(input, "Lenient parse failed: value out of range");
            None
        }
    }
}

/// Parse text leniently. Shorthand for `parse_lenient_int(Some(input))`.
pub fn lenient_int(input: &str) -> Option<i32> {
    parse_lenient_int(Some(input))
}

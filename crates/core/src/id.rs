//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers on the wire are positive integers, but clients send them as
//! path segments and loosely-typed JSON fields. The boundary parse rule is
//! deliberately permissive for compatibility: leading whitespace and a single
//! sign are skipped, digits are consumed up to the first non-digit, and
//! trailing garbage is ignored (`"12abc"` parses to 12). A string with no
//! leading digits does not parse at all.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a student record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

/// Identifier of the reviewer who last changed a student's status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewerId(i64);

/// Truncating decimal parse shared by request validation and handler
/// coercion: both sides must accept and reject exactly the same inputs.
///
/// Returns `None` when no digits were consumed. Values that would overflow
/// `i64` saturate rather than wrap.
pub fn parse_loose_int(input: &str) -> Option<i64> {
    let mut chars = input.trim_start().chars().peekable();

    let mut negative = false;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            negative = c == '-';
            chars.next();
        }
    }

    let mut value: i64 = 0;
    let mut saw_digit = false;
    while let Some(&c) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        saw_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
        chars.next();
    }

    if !saw_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

macro_rules! impl_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }

            /// Parse with the boundary's loose rule; valid iff the parsed
            /// value is strictly positive.
            pub fn parse_loose(s: &str) -> Result<Self, DomainError> {
                parse_loose_int(s)
                    .filter(|v| *v > 0)
                    .map(Self)
                    .ok_or_else(|| {
                        DomainError::invalid_id(format!("{}: {:?}", $name, s))
                    })
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_loose(s)
            }
        }
    };
}

impl_id_newtype!(StudentId, "StudentId");
impl_id_newtype!(ReviewerId, "ReviewerId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_loose_int("7"), Some(7));
        assert_eq!(parse_loose_int("0"), Some(0));
        assert_eq!(parse_loose_int("12345"), Some(12345));
    }

    #[test]
    fn parses_signed_and_padded_input() {
        assert_eq!(parse_loose_int("-5"), Some(-5));
        assert_eq!(parse_loose_int("+3"), Some(3));
        assert_eq!(parse_loose_int("  42"), Some(42));
    }

    #[test]
    fn truncates_at_first_non_digit() {
        assert_eq!(parse_loose_int("12abc"), Some(12));
        assert_eq!(parse_loose_int("3.9"), Some(3));
        assert_eq!(parse_loose_int("7 8"), Some(7));
    }

    #[test]
    fn rejects_input_without_leading_digits() {
        assert_eq!(parse_loose_int(""), None);
        assert_eq!(parse_loose_int("abc"), None);
        assert_eq!(parse_loose_int("-"), None);
        assert_eq!(parse_loose_int(".5"), None);
    }

    #[test]
    fn no_hex_auto_detection() {
        // "0x10" stops at the 'x'.
        assert_eq!(parse_loose_int("0x10"), Some(0));
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_loose_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_loose_int("-99999999999999999999999"), Some(i64::MIN + 1));
    }

    #[test]
    fn student_id_requires_strictly_positive_value() {
        assert_eq!(StudentId::parse_loose("7").unwrap().as_i64(), 7);
        assert_eq!(StudentId::parse_loose("12abc").unwrap().as_i64(), 12);
        assert!(StudentId::parse_loose("0").is_err());
        assert!(StudentId::parse_loose("-5").is_err());
        assert!(StudentId::parse_loose("abc").is_err());
    }

    #[test]
    fn from_str_round_trips_display() {
        let id: StudentId = "19".parse().unwrap();
        assert_eq!(id.to_string(), "19");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the loose parse is total over arbitrary strings.
            #[test]
            fn parse_never_panics(input in ".*") {
                let _ = parse_loose_int(&input);
            }

            /// Property: strings of digits with a non-zero lead always parse
            /// to a valid, positive identifier.
            #[test]
            fn positive_digit_strings_are_valid_ids(input in "[1-9][0-9]{0,8}") {
                let parsed = parse_loose_int(&input).unwrap();
                prop_assert!(parsed > 0);
                prop_assert_eq!(parsed, input.parse::<i64>().unwrap());
                prop_assert!(StudentId::parse_loose(&input).is_ok());
            }

            /// Property: trailing garbage never changes the numeric prefix.
            #[test]
            fn trailing_garbage_is_ignored(lead in "[1-9][0-9]{0,8}", tail in "[a-z!. ]{1,10}") {
                let loose = format!("{lead}{tail}");
                prop_assert_eq!(parse_loose_int(&loose), parse_loose_int(&lead));
            }
        }
    }
}

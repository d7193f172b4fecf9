//! Length rule: 2 to 8 characters, even.

use hsn_core::constants::{MAX_CODE_LEN, MIN_CODE_LEN};
use hsn_core::models::{LengthViolation, RuleName, RuleResult};

/// Classify a length failure. Too short is checked first, then too long,
/// then odd length. `None` means the length is valid.
pub fn classify(code: &str) -> Option<LengthViolation> {
    let len = code.chars().count();
    if len < MIN_CODE_LEN {
        Some(LengthViolation::TooShort)
    } else if len > MAX_CODE_LEN {
        Some(LengthViolation::TooLong)
    } else if len % 2 != 0 {
        Some(LengthViolation::OddLength)
    } else {
        None
    }
}

pub fn validate(code: &str) -> RuleResult {
    match classify(code) {
        None => RuleResult::pass(
            RuleName::Length,
            "Valid length - even number of digits between 2 and 8",
        ),
        Some(violation) => RuleResult::fail(RuleName::Length, message(violation)),
    }
}

/// Failure message for a violation class.
pub fn message(violation: LengthViolation) -> &'static str {
    match violation {
        LengthViolation::TooShort => "Invalid length - too short: code must be at least 2 digits",
        LengthViolation::TooLong => "Invalid length - too long: code must not exceed 8 digits",
        LengthViolation::OddLength => {
            "Invalid length - odd length: code must have an even number of digits"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lengths() {
        for code in ["01", "0101", "010110", "01011010"] {
            assert!(validate(code).passed, "{code}");
            assert_eq!(classify(code), None);
        }
    }

    #[test]
    fn violation_classes_are_distinct() {
        assert_eq!(classify(""), Some(LengthViolation::TooShort));
        assert_eq!(classify("1"), Some(LengthViolation::TooShort));
        assert_eq!(classify("123"), Some(LengthViolation::OddLength));
        assert_eq!(classify("1234567"), Some(LengthViolation::OddLength));
        assert_eq!(classify("123456789"), Some(LengthViolation::TooLong));
        assert_eq!(classify("1234567890"), Some(LengthViolation::TooLong));
    }

    #[test]
    fn messages_name_the_violation() {
        assert!(validate("1").message.contains("too short"));
        assert!(validate("123456789").message.contains("too long"));
        assert!(validate("12345").message.contains("odd length"));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(classify("éé"), None);
    }
}

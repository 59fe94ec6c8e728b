//! Numeric input parsing and decimal digit helpers.
//!
//! Inputs arrive as free text. Parsing accepts the same integer literals a
//! hand-typed form would: surrounding whitespace, an optional sign and digit
//! group underscores. Sign and parity are checked only after a successful
//! parse so that `-1234` is reported as an invalid seed, not as non-numeric.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::MiddleKsError;

/// Number of decimal digits of `value` (`0` has one digit).
pub fn digit_count(value: &BigUint) -> usize {
    value.to_string().len()
}

/// Returns `true` if `value` is positive with an even number of digits.
pub fn is_positive_even_digits(value: &BigUint) -> bool {
    !value.is_zero() && digit_count(value).is_multiple_of(2)
}

/// Parses a signed integer literal.
///
/// # Errors
/// Returns [`MiddleKsError::NonNumericInput`] if `input` is not an integer.
pub fn parse_integer(input: &str) -> Result<BigInt, MiddleKsError> {
    input
        .trim()
        .parse::<BigInt>()
        .map_err(|_| MiddleKsError::NonNumericInput)
}

/// Checks that a parsed seed or constant is positive with an even digit count.
///
/// # Errors
/// Returns [`MiddleKsError::InvalidSeedOrConstant`] for zero, negative values
/// or an odd digit count.
pub fn require_seed_like(value: BigInt) -> Result<BigUint, MiddleKsError> {
    let (sign, magnitude) = value.into_parts();
    if sign != Sign::Plus || !is_positive_even_digits(&magnitude) {
        return Err(MiddleKsError::InvalidSeedOrConstant);
    }
    Ok(magnitude)
}

/// Parses a confidence level given in whole percent.
///
/// # Errors
/// - [`MiddleKsError::NonNumericInput`] if `input` is not an integer.
/// - [`MiddleKsError::InvalidConfidenceLevel`] if it lies outside [0, 100].
pub fn parse_confidence(input: &str) -> Result<u8, MiddleKsError> {
    let value = parse_integer(input)?;
    match u8::try_from(&value) {
        Ok(percent) if percent <= crate::stats::ks_test::MAX_CONFIDENCE_PERCENT => Ok(percent),
        _ => Err(MiddleKsError::InvalidConfidenceLevel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(&BigUint::from(0u32)), 1);
        assert_eq!(digit_count(&BigUint::from(7u32)), 1);
        assert_eq!(digit_count(&BigUint::from(7006652u32)), 7);
        assert_eq!(digit_count(&BigUint::from(10u64.pow(19))), 20);
    }

    #[test]
    fn test_even_digits() {
        assert!(is_positive_even_digits(&BigUint::from(12u32)));
        assert!(is_positive_even_digits(&BigUint::from(1234u32)));
        assert!(!is_positive_even_digits(&BigUint::from(123u32)));
        assert!(!is_positive_even_digits(&BigUint::from(0u32)));
    }

    #[test]
    fn test_parse_integer_accepts_whitespace_and_sign() {
        assert_eq!(parse_integer(" 1234 ").unwrap(), BigInt::from(1234));
        assert_eq!(parse_integer("+56").unwrap(), BigInt::from(56));
        assert_eq!(parse_integer("-78").unwrap(), BigInt::from(-78));
    }

    #[test]
    fn test_parse_integer_rejects_text() {
        assert_eq!(parse_integer("abc"), Err(MiddleKsError::NonNumericInput));
        assert_eq!(parse_integer(""), Err(MiddleKsError::NonNumericInput));
        assert_eq!(parse_integer("12.5"), Err(MiddleKsError::NonNumericInput));
    }

    #[test]
    fn test_require_seed_like() {
        assert_eq!(
            require_seed_like(BigInt::from(1234)).unwrap(),
            BigUint::from(1234u32)
        );
        assert_eq!(
            require_seed_like(BigInt::from(-1234)),
            Err(MiddleKsError::InvalidSeedOrConstant)
        );
        assert_eq!(
            require_seed_like(BigInt::from(0)),
            Err(MiddleKsError::InvalidSeedOrConstant)
        );
        assert_eq!(
            require_seed_like(BigInt::from(123)),
            Err(MiddleKsError::InvalidSeedOrConstant)
        );
    }

    #[test]
    fn test_leading_zeros_count_on_value() {
        // "0012" is the integer 12, two digits
        let value = parse_integer("0012").unwrap();
        assert_eq!(require_seed_like(value).unwrap(), BigUint::from(12u32));
    }

    #[test]
    fn test_parse_confidence() {
        assert_eq!(parse_confidence("95"), Ok(95));
        assert_eq!(parse_confidence("0"), Ok(0));
        assert_eq!(parse_confidence("100"), Ok(100));
        assert_eq!(
            parse_confidence("101"),
            Err(MiddleKsError::InvalidConfidenceLevel)
        );
        assert_eq!(
            parse_confidence("-5"),
            Err(MiddleKsError::InvalidConfidenceLevel)
        );
        assert_eq!(parse_confidence("ninety"), Err(MiddleKsError::NonNumericInput));
    }

    #[test]
    fn test_parse_confidence_huge_value_is_out_of_range() {
        assert_eq!(
            parse_confidence("99999999999999999999"),
            Err(MiddleKsError::InvalidConfidenceLevel)
        );
        assert_eq!(parse_confidence("9_5"), Ok(95));
    }
}

//! Error types for the middle-ks library.

use std::fmt;

/// Errors produced by the middle-ks library.
///
/// All of them are detected before any result is emitted: a failed
/// generation or evaluation never returns partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddleKsError {
    /// Seed or constant is not positive, or has an odd number of digits.
    InvalidSeedOrConstant,
    /// Iteration count is outside the valid range [1, 30].
    InvalidIterationCount,
    /// Product of seed and constant has more digits than the widest bucket (32).
    ProductOverflow {
        /// Number of decimal digits of the offending product.
        digits: usize,
    },
    /// Seed, constant or iteration count could not be parsed as an integer.
    NonNumericInput,
    /// The evaluator received a sequence with no values.
    EmptySequence,
    /// Confidence level is outside the valid range [0, 100].
    InvalidConfidenceLevel,
}

impl fmt::Display for MiddleKsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiddleKsError::InvalidSeedOrConstant => {
                write!(
                    f,
                    "Seed and constant must be greater than 0 with an even number of digits"
                )
            }
            MiddleKsError::InvalidIterationCount => {
                write!(f, "Number of iterations must be between 1 and 30")
            }
            MiddleKsError::ProductOverflow { digits } => {
                write!(
                    f,
                    "Product has {} digits, more than the supported 32",
                    digits
                )
            }
            MiddleKsError::NonNumericInput => {
                write!(
                    f,
                    "Seed, constant and iterations must be valid integer values"
                )
            }
            MiddleKsError::EmptySequence => {
                write!(f, "Cannot evaluate an empty sequence")
            }
            MiddleKsError::InvalidConfidenceLevel => {
                write!(f, "Confidence level must be between 0 and 100")
            }
        }
    }
}

impl std::error::Error for MiddleKsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_seed_or_constant() {
        let err = MiddleKsError::InvalidSeedOrConstant;
        assert_eq!(
            format!("{}", err),
            "Seed and constant must be greater than 0 with an even number of digits"
        );
    }

    #[test]
    fn test_display_invalid_iteration_count() {
        let err = MiddleKsError::InvalidIterationCount;
        assert_eq!(
            format!("{}", err),
            "Number of iterations must be between 1 and 30"
        );
    }

    #[test]
    fn test_display_product_overflow() {
        let err = MiddleKsError::ProductOverflow { digits: 33 };
        assert_eq!(
            format!("{}", err),
            "Product has 33 digits, more than the supported 32"
        );
    }

    #[test]
    fn test_display_empty_sequence() {
        let err = MiddleKsError::EmptySequence;
        assert_eq!(format!("{}", err), "Cannot evaluate an empty sequence");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            MiddleKsError::NonNumericInput,
            MiddleKsError::NonNumericInput
        );
        assert_ne!(
            MiddleKsError::NonNumericInput,
            MiddleKsError::InvalidSeedOrConstant
        );
        assert_ne!(
            MiddleKsError::ProductOverflow { digits: 33 },
            MiddleKsError::ProductOverflow { digits: 34 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MiddleKsError::InvalidConfidenceLevel);
        assert_eq!(
            err.to_string(),
            "Confidence level must be between 0 and 100"
        );
    }
}

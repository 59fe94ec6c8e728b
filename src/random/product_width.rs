//! Zero-padding widths for the seed-constant product.
//!
//! The product is left-padded to the smallest of 8, 16 or 32 characters
//! that holds it, and the four middle digits are read at a fixed offset
//! per width:
//!
//! ```text
//! width  8  ->  [2, 6)
//! width 16  ->  [6, 10)
//! width 32  ->  [14, 18)
//! ```
//!
//! Products longer than 32 digits have no width and are rejected.

use std::fmt;

use crate::error::MiddleKsError;

/// Number of digits extracted from the padded product.
pub const MIDDLE_DIGITS: usize = 4;

/// Padding width bucket for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductWidth {
    /// Products of up to 8 digits.
    Eight,
    /// Products of 9 to 16 digits.
    Sixteen,
    /// Products of 17 to 32 digits.
    ThirtyTwo,
}

/// All widths in ascending order.
const WIDTHS: [ProductWidth; 3] = [
    ProductWidth::Eight,
    ProductWidth::Sixteen,
    ProductWidth::ThirtyTwo,
];

impl ProductWidth {
    /// Chooses the smallest width that holds a product of `digits` digits.
    ///
    /// # Errors
    /// Returns [`MiddleKsError::ProductOverflow`] if `digits > 32`.
    pub fn for_digits(digits: usize) -> Result<Self, MiddleKsError> {
        WIDTHS
            .iter()
            .copied()
            .find(|width| digits <= width.chars())
            .ok_or(MiddleKsError::ProductOverflow { digits })
    }

    /// Padded length in characters.
    pub fn chars(self) -> usize {
        match self {
            ProductWidth::Eight => 8,
            ProductWidth::Sixteen => 16,
            ProductWidth::ThirtyTwo => 32,
        }
    }

    /// Start offset of the middle digits within the padded product.
    pub fn middle_offset(self) -> usize {
        match self {
            ProductWidth::Eight => 2,
            ProductWidth::Sixteen => 6,
            ProductWidth::ThirtyTwo => 14,
        }
    }

    /// Half-open character range of the middle digits.
    pub fn middle_range(self) -> std::ops::Range<usize> {
        let start = self.middle_offset();
        start..start + MIDDLE_DIGITS
    }

    /// Left-pads the decimal `digits` with zeros to this width.
    pub fn pad(self, digits: &str) -> String {
        format!("{:0>width$}", digits, width = self.chars())
    }
}

impl fmt::Display for ProductWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chars())
    }
}

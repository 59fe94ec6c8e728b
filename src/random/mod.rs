//! Pseudo-random sequence generation.
//!
//! Provides the constant-multiplier middle-digits generator and the fixed
//! width table it pads products to.

pub mod multiplier;
pub mod product_width;

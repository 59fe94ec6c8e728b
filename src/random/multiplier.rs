//! Constant-multiplier middle-digits pseudo-random generator.
//!
//! Each step multiplies the current seed by a fixed constant, pads the
//! product to its width bucket, reads four middle digits and scales them
//! to `ri = middle / 10000`. The middle digits become the next seed.
//!
//! Seeds and constants are arbitrary precision: a 16-digit seed times a
//! 16-digit constant already needs 32 digits.

use num_bigint::BigUint;

use super::product_width::{ProductWidth, MIDDLE_DIGITS};
use crate::error::MiddleKsError;
use crate::utils::digits::{
    digit_count, is_positive_even_digits, parse_integer, require_seed_like,
};

/// Smallest accepted iteration count.
pub const MIN_ITERATIONS: u32 = 1;

/// Largest accepted iteration count.
pub const MAX_ITERATIONS: u32 = 30;

/// Divisor turning the middle digits into a value in [0, 1).
pub const RI_SCALE: f64 = 10_000.0;

/// Validated generator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    seed: BigUint,
    constant: BigUint,
    iterations: u32,
}

impl GeneratorConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// - [`MiddleKsError::InvalidSeedOrConstant`] if seed or constant is zero
    ///   or has an odd number of digits.
    /// - [`MiddleKsError::InvalidIterationCount`] if `iterations` is outside
    ///   [`MIN_ITERATIONS`]..=[`MAX_ITERATIONS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use middle_ks::GeneratorConfig;
    /// use num_bigint::BigUint;
    ///
    /// assert!(GeneratorConfig::new(BigUint::from(1234u32), BigUint::from(5678u32), 10).is_ok());
    /// assert!(GeneratorConfig::new(BigUint::from(123u32), BigUint::from(5678u32), 10).is_err());
    /// ```
    pub fn new(seed: BigUint, constant: BigUint, iterations: u32) -> Result<Self, MiddleKsError> {
        if !is_positive_even_digits(&seed) || !is_positive_even_digits(&constant) {
            return Err(MiddleKsError::InvalidSeedOrConstant);
        }
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
            return Err(MiddleKsError::InvalidIterationCount);
        }
        Ok(Self {
            seed,
            constant,
            iterations,
        })
    }

    /// Builds a configuration from raw text fields.
    ///
    /// All three fields are parsed before any of them is validated, so a
    /// non-numeric field always wins over a range or parity problem.
    ///
    /// # Errors
    /// - [`MiddleKsError::NonNumericInput`] if any field is not an integer.
    /// - [`MiddleKsError::InvalidSeedOrConstant`] for a non-positive or
    ///   odd-digit seed or constant.
    /// - [`MiddleKsError::InvalidIterationCount`] for an out-of-range count.
    pub fn from_input(
        seed: &str,
        constant: &str,
        iterations: &str,
    ) -> Result<Self, MiddleKsError> {
        let seed = parse_integer(seed)?;
        let constant = parse_integer(constant)?;
        let iterations = parse_integer(iterations)?;

        let seed = require_seed_like(seed)?;
        let constant = require_seed_like(constant)?;
        let iterations =
            u32::try_from(&iterations).map_err(|_| MiddleKsError::InvalidIterationCount)?;
        Self::new(seed, constant, iterations)
    }

    /// Initial seed.
    pub fn seed(&self) -> &BigUint {
        &self.seed
    }

    /// Fixed multiplier.
    pub fn constant(&self) -> &BigUint {
        &self.constant
    }

    /// Number of steps to generate.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// One iteration of the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStep {
    /// Seed used for this step.
    pub seed_before: BigUint,
    /// Fixed multiplier.
    pub constant: BigUint,
    /// Zero-padded product of seed and constant.
    pub product: String,
    /// Digit count of the unpadded product.
    pub digit_count: usize,
    /// Width bucket the product was padded to.
    pub width: ProductWidth,
    /// The four middle digits as an integer.
    pub middle: u16,
    /// `middle / 10000`.
    pub ri: f64,
}

/// Stateful middle-digits generator.
///
/// Holds the current seed and advances it one step per call to
/// [`next_step`](Self::next_step). The constant never changes.
#[derive(Debug, Clone)]
pub struct ConstantMultiplier {
    seed: BigUint,
    constant: BigUint,
}

impl ConstantMultiplier {
    /// Creates a generator starting from `seed`.
    ///
    /// No validation is done here; use [`GeneratorConfig`] for user input.
    pub fn new(seed: BigUint, constant: BigUint) -> Self {
        Self { seed, constant }
    }

    /// Creates a generator positioned at the start of `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.seed.clone(), config.constant.clone())
    }

    /// Current seed.
    pub fn seed(&self) -> &BigUint {
        &self.seed
    }

    /// Computes the next step and feeds its middle digits back as the seed.
    ///
    /// # Errors
    /// Returns [`MiddleKsError::ProductOverflow`] if the product has more
    /// than 32 digits. The seed is left unchanged in that case.
    pub fn next_step(&mut self) -> Result<GenerationStep, MiddleKsError> {
        let product = &self.seed * &self.constant;
        let raw = product.to_string();
        let digit_count = raw.len();
        let width = ProductWidth::for_digits(digit_count)?;
        let padded = width.pad(&raw);

        // Padded product is ASCII digits only and at least 8 wide.
        let middle_digits = &padded.as_bytes()[width.middle_range()];
        debug_assert_eq!(middle_digits.len(), MIDDLE_DIGITS);
        let middle = middle_digits
            .iter()
            .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
        let ri = f64::from(middle) / RI_SCALE;

        log::debug!(
            "seed={} constant={} product={} digits={} width={} middle={} ri={}",
            self.seed,
            self.constant,
            padded,
            digit_count,
            width,
            middle,
            ri
        );

        let step = GenerationStep {
            seed_before: std::mem::replace(&mut self.seed, BigUint::from(middle)),
            constant: self.constant.clone(),
            product: padded,
            digit_count,
            width,
            middle,
            ri,
        };
        Ok(step)
    }
}

/// Runs the generator for `config.iterations()` steps.
///
/// Either every step is returned or the first error; no partial sequence.
///
/// # Errors
/// Returns [`MiddleKsError::ProductOverflow`] if any step's product exceeds
/// 32 digits.
///
/// # Examples
///
/// ```
/// use middle_ks::{generate, GeneratorConfig};
///
/// let config = GeneratorConfig::from_input("1234", "5678", "1").unwrap();
/// let steps = generate(&config).unwrap();
/// assert_eq!(steps[0].product, "07006652");
/// assert_eq!(steps[0].middle, 66);
/// assert_eq!(steps[0].ri, 0.0066);
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<Vec<GenerationStep>, MiddleKsError> {
    let mut generator = ConstantMultiplier::from_config(config);
    let steps = (0..config.iterations)
        .map(|_| generator.next_step())
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "generated {} steps from seed={} constant={} (digits {})",
        steps.len(),
        config.seed,
        config.constant,
        digit_count(&config.seed)
    );
    Ok(steps)
}

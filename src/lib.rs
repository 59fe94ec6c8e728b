//! Middle-digits pseudo-random generator with a Kolmogorov-Smirnov test.
//!
//! A teaching tool in two stages. The generator multiplies a seed by a
//! fixed constant, pads the product to 8, 16 or 32 digits, takes the four
//! digits in the middle as the next value `ri = middle / 10000` and feeds
//! them back as the new seed. The evaluator then checks the resulting
//! sequence for uniformity with a one-sample Kolmogorov-Smirnov test.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (validated seed, constant, iterations)
//!     ↓ generate
//! Vec<GenerationStep> → Sequence (frozen ri values)
//!     ↓ evaluate(confidence)   (repeatable)
//! KsTable / KsResult (max deviation, critical value, verdict)
//! ```
//!
//! # Examples
//!
//! ```
//! use middle_ks::{GeneratorConfig, Session};
//!
//! let config = GeneratorConfig::from_input("1234", "5678", "10").unwrap();
//! let session = Session::start(config).unwrap();
//!
//! assert_eq!(session.steps()[0].product, "07006652");
//! assert_eq!(session.steps()[0].middle, 66);
//!
//! let result = session.evaluate(95).unwrap();
//! assert!(result.max_deviation >= 0.0);
//! assert!(!result.uniform);
//! ```
//!
//! Invalid input is rejected before anything is generated:
//!
//! ```
//! use middle_ks::{GeneratorConfig, MiddleKsError};
//!
//! assert_eq!(
//!     GeneratorConfig::from_input("123", "5678", "5"),
//!     Err(MiddleKsError::InvalidSeedOrConstant)
//! );
//! assert_eq!(
//!     GeneratorConfig::from_input("1234", "5678", "many"),
//!     Err(MiddleKsError::NonNumericInput)
//! );
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;
pub mod report;
pub mod session;
pub mod stats;
pub mod utils;

pub use error::MiddleKsError;
pub use random::multiplier::{
    generate, ConstantMultiplier, GenerationStep, GeneratorConfig, MAX_ITERATIONS, MIN_ITERATIONS,
};
pub use random::product_width::ProductWidth;
pub use session::{Sequence, Session};
pub use stats::ks_test::{
    critical_value, evaluate, evaluate_table, KsObservation, KsResult, KsRow, KsTable,
};

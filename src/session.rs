//! Generate-once, evaluate-many state.
//!
//! A [`Session`] owns the generation steps and the frozen sequence of `ri`
//! values derived from them. Evaluations borrow the sequence, so any number
//! of confidence levels can be tested without regenerating.

use crate::error::MiddleKsError;
use crate::random::multiplier::{generate, GenerationStep, GeneratorConfig};
use crate::stats::ks_test::{evaluate, evaluate_table, KsResult, KsTable};

/// Immutable sequence of generated values in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Collects the `ri` values of `steps`.
    pub fn from_steps(steps: &[GenerationStep]) -> Self {
        Self {
            values: steps.iter().map(|step| step.ri).collect(),
        }
    }

    /// Values in generation order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A generated sequence ready for repeated evaluation.
///
/// # Examples
///
/// ```
/// use middle_ks::{GeneratorConfig, Session};
///
/// let config = GeneratorConfig::from_input("5735", "3267", "10").unwrap();
/// let session = Session::start(config).unwrap();
/// assert_eq!(session.sequence().len(), 10);
///
/// let strict = session.evaluate(99).unwrap();
/// let loose = session.evaluate(80).unwrap();
/// assert_eq!(strict.max_deviation, loose.max_deviation);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: GeneratorConfig,
    steps: Vec<GenerationStep>,
    sequence: Sequence,
}

impl Session {
    /// Runs the generator and freezes its output.
    ///
    /// # Errors
    /// Returns [`MiddleKsError::ProductOverflow`] if generation fails.
    pub fn start(config: GeneratorConfig) -> Result<Self, MiddleKsError> {
        let steps = generate(&config)?;
        let sequence = Sequence::from_steps(&steps);
        log::debug!("session started with {} values", sequence.len());
        Ok(Self {
            config,
            steps,
            sequence,
        })
    }

    /// Configuration the session was started with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generation steps in order.
    pub fn steps(&self) -> &[GenerationStep] {
        &self.steps
    }

    /// Frozen sequence of `ri` values.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Tests the sequence at `confidence_percent`.
    ///
    /// # Errors
    /// Returns [`MiddleKsError::InvalidConfidenceLevel`] if the confidence
    /// exceeds 100.
    pub fn evaluate(&self, confidence_percent: u8) -> Result<KsResult, MiddleKsError> {
        evaluate(self.sequence.values(), confidence_percent)
    }

    /// Tests the sequence and keeps the full table.
    ///
    /// # Errors
    /// Same as [`evaluate`](Self::evaluate).
    pub fn evaluate_table(&self, confidence_percent: u8) -> Result<KsTable, MiddleKsError> {
        evaluate_table(self.sequence.values(), confidence_percent)
    }
}

//! Calculation-engine seam
//!
//! The numeric Z-test and confidence-interval arithmetic lives behind the
//! [`CalculationEngine`] trait; this crate only decides *what* to compute and
//! hands over fully validated parameters. Results go to the engine's own
//! output sink; the core sees success or failure and nothing else. The one
//! parse delegated to the engine is the raw-data value block, whose format
//! the engine owns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hypothesis::Hypothesis;

/// Errors raised by the calculation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// The external data source could not be read
    #[error("failed to read sample data: {0}")]
    Io(#[from] std::io::Error),

    /// The sample values could not be parsed as numbers
    #[error("sample data could not be parsed: {0}")]
    InvalidData(String),
}

/// Result type for engine calls
pub type Result<T> = std::result::Result<T, EngineError>;

/// Precomputed sample statistics supplied by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub sample_mean: f64,
    pub sample_size: u64,
}

/// A single computation request
///
/// The confidence-interval variant carries no test value: the interval does
/// not depend on one, and the request shape keeps a meaningless number from
/// ever reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Computation {
    /// One-sample Z-test of H0: μ = `test_value` against the given tail
    HypothesisTest {
        hypothesis: Hypothesis,
        test_value: f64,
    },
    /// Confidence interval for μ at level 1 − α
    ConfidenceInterval,
    /// Test and interval from a single pass over the data; only the
    /// file-import path issues this combined form
    Both {
        hypothesis: Hypothesis,
        test_value: f64,
    },
}

/// External engine that runs the requested computation and reports through
/// its own output channel
pub trait CalculationEngine {
    /// Runs a computation from precomputed summary statistics
    fn run_with_summary(
        &mut self,
        computation: Computation,
        summary: SampleSummary,
        std_dev: f64,
        alpha: f64,
    ) -> Result<()>;

    /// Runs a computation from a raw block of user-entered values
    ///
    /// Numeric parsing of the block is the engine's job; a block it cannot
    /// parse fails with [`EngineError::InvalidData`].
    fn run_with_raw_text(
        &mut self,
        computation: Computation,
        raw_text: &str,
        std_dev: f64,
        alpha: f64,
    ) -> Result<()>;

    /// Loads sample values from the engine's configured external source,
    /// then runs the computation
    fn run_from_file(&mut self, computation: Computation, std_dev: f64, alpha: f64) -> Result<()>;
}

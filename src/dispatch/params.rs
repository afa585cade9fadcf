//! Per-dispatch parameter collection and the dispatch error type

use thiserror::Error;

use super::prompts::SummaryEntry;
use crate::engine::{EngineError, SampleSummary};
use crate::validation::{self, Field, ValidationError, ValidationPolicy};

/// Raw texts of the persistent input fields at the moment of dispatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub test_value: String,
    pub std_dev: String,
    pub alpha: String,
}

/// Errors that abort a dispatch
///
/// Prompt cancellation is not here: it is a quiet outcome, not an error.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// One or more fields failed to parse or range-check; nothing was sent
    #[error("invalid input: {}", join_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The calculation engine failed; for the file-import mode this is the
    /// unreadable-source case
    #[error("calculation engine failure: {0}")]
    EngineFailure(#[from] EngineError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parameters validated for one dispatch cycle
///
/// Built fresh from the current field texts at every calculate trigger and
/// dropped when the cycle ends. `test_value` is present exactly when the
/// goal includes the hypothesis test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestParameters {
    pub alpha: f64,
    pub std_dev: f64,
    pub test_value: Option<f64>,
}

impl TestParameters {
    /// Validates the persistent fields, aggregating every failure
    ///
    /// `alpha` has already passed its early check, so only σ and (when the
    /// goal needs it) the test value are judged here.
    pub(crate) fn from_fields(
        fields: &FieldValues,
        needs_test_value: bool,
        policy: &ValidationPolicy,
        alpha: f64,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let std_dev = match validation::validate_std_dev(&fields.std_dev, policy) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let test_value = if needs_test_value {
            match validation::validate_real(Field::TestValue, &fields.test_value) {
                Ok(value) => Some(value),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        } else {
            None
        };

        match std_dev {
            Some(std_dev) if errors.is_empty() => Ok(Self {
                alpha,
                std_dev,
                test_value,
            }),
            _ => Err(errors),
        }
    }
}

/// Validates the texts confirmed in the summary prompt
pub(crate) fn parse_summary(
    entry: &SummaryEntry,
    policy: &ValidationPolicy,
) -> Result<SampleSummary, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let sample_mean = match validation::validate_real(Field::SampleMean, &entry.sample_mean) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let sample_size = match validation::validate_sample_size(&entry.sample_size, policy) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (sample_mean, sample_size) {
        (Some(sample_mean), Some(sample_size)) => Ok(SampleSummary {
            sample_mean,
            sample_size,
        }),
        _ => Err(errors),
    }
}

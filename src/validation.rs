//! Numeric validation for user-entered calculator fields
//!
//! Every parameter arrives from the view layer as raw text. This module
//! parses and range-checks each field into a typed value; nothing reaches the
//! calculation engine without passing through here first. The one exception
//! is the raw-data value block, whose parsing belongs to the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input field a validation result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Alpha,
    StdDev,
    TestValue,
    SampleMean,
    SampleSize,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Alpha => "significance level",
            Field::StdDev => "standard deviation",
            Field::TestValue => "test value",
            Field::SampleMean => "sample mean",
            Field::SampleSize => "sample size",
        };
        write!(f, "{}", name)
    }
}

/// Errors produced when parsing and range-checking a single field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} `{text}` is not a valid number")]
    InvalidNumber { field: Field, text: String },

    #[error("{field} must be {constraint}, got {value}")]
    OutOfRange {
        field: Field,
        constraint: String,
        value: f64,
    },
}

/// Result type for field validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Range-checking policy for the standard deviation and the sample size
///
/// The calculator historically accepted any σ and any unsigned sample size,
/// which lets a zero or negative standard deviation reach the engine. The
/// default policy closes both gaps; [`ValidationPolicy::legacy`] keeps the
/// old behavior for callers that depend on it.
///
/// # Example
/// ```
/// use zdispatch::validation::ValidationPolicy;
///
/// let policy = ValidationPolicy::default();
/// assert!(policy.require_positive_std_dev);
/// assert_eq!(policy.min_sample_size, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject σ ≤ 0 when set
    pub require_positive_std_dev: bool,

    /// Smallest accepted sample size; 0 disables the check
    pub min_sample_size: u64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_positive_std_dev: true,
            min_sample_size: 2,
        }
    }
}

impl ValidationPolicy {
    /// Bug-compatible policy: any σ parses, any unsigned integer is a valid
    /// sample size
    pub fn legacy() -> Self {
        Self {
            require_positive_std_dev: false,
            min_sample_size: 0,
        }
    }
}

/// Tri-state result of live, per-keystroke validation
///
/// The view maps this to a visual affordance (field highlight); it never
/// blocks typing and never aborts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Valid,
    Invalid,
    /// Empty field: nothing to judge yet
    Neutral,
}

/// Parses a significance level and requires 0 < α < 1, both ends exclusive
pub fn validate_alpha(text: &str) -> Result<f64> {
    let value = parse_real(Field::Alpha, text)?;
    if value <= 0.0 || value >= 1.0 {
        return Err(ValidationError::OutOfRange {
            field: Field::Alpha,
            constraint: "strictly between 0 and 1".to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parses an unconstrained real-valued field (test value, sample mean)
pub fn validate_real(field: Field, text: &str) -> Result<f64> {
    parse_real(field, text)
}

/// Parses a standard deviation, rejecting σ ≤ 0 under the default policy
pub fn validate_std_dev(text: &str, policy: &ValidationPolicy) -> Result<f64> {
    let value = parse_real(Field::StdDev, text)?;
    if policy.require_positive_std_dev && value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: Field::StdDev,
            constraint: "greater than 0".to_string(),
            value,
        });
    }
    Ok(value)
}

/// Parses a sample size against the policy's lower bound
pub fn validate_sample_size(text: &str, policy: &ValidationPolicy) -> Result<u64> {
    let value: u64 = text.trim().parse().map_err(|_| ValidationError::InvalidNumber {
        field: Field::SampleSize,
        text: text.to_string(),
    })?;
    if value < policy.min_sample_size {
        return Err(ValidationError::OutOfRange {
            field: Field::SampleSize,
            constraint: format!("at least {}", policy.min_sample_size),
            value: value as f64,
        });
    }
    Ok(value)
}

/// Live feedback for the significance field while the user is typing
///
/// Empty text is `Neutral` (nothing entered yet, not an error); any non-empty
/// text that fails [`validate_alpha`] is `Invalid`.
pub fn alpha_field_status(text: &str) -> FieldStatus {
    if text.is_empty() {
        return FieldStatus::Neutral;
    }
    match validate_alpha(text) {
        Ok(_) => FieldStatus::Valid,
        Err(_) => FieldStatus::Invalid,
    }
}

fn parse_real(field: Field, text: &str) -> Result<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            text: text.to_string(),
        })?;
    // f64 parsing accepts "NaN" and "inf"; neither is a usable parameter
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field,
            text: text.to_string(),
        });
    }
    Ok(value)
}

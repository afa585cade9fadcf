//! The dispatch algorithm: one calculate trigger in, zero/one/two engine
//! requests out

use tracing::{debug, warn};

use super::params::{parse_summary, DispatchError, FieldValues, TestParameters};
use super::prompts::{RawDataPrompt, SummaryPrompt};
use crate::engine::{CalculationEngine, Computation, SampleSummary};
use crate::hypothesis::Hypothesis;
use crate::options::{AcquisitionMode, CalculationGoal};
use crate::validation::{self, ValidationPolicy};

/// How a dispatch cycle ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every request for the active mode was issued
    Completed,
    /// The user dismissed the modal prompt; nothing was sent
    Cancelled,
}

/// Routes one calculate trigger to the calculation engine
///
/// Owns the engine, the two modal prompt collaborators, the validation
/// policy, and the last-used summary cache that pre-fills the next summary
/// prompt.
#[derive(Debug)]
pub struct Dispatcher<E, S, R> {
    engine: E,
    summary_prompt: S,
    raw_data_prompt: R,
    policy: ValidationPolicy,
    last_summary: Option<SampleSummary>,
}

impl<E, S, R> Dispatcher<E, S, R>
where
    E: CalculationEngine,
    S: SummaryPrompt,
    R: RawDataPrompt,
{
    pub fn new(engine: E, summary_prompt: S, raw_data_prompt: R) -> Self {
        Self {
            engine,
            summary_prompt,
            raw_data_prompt,
            policy: ValidationPolicy::default(),
            last_summary: None,
        }
    }

    /// Replace the default validation policy
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Last summary that passed validation, used to pre-fill the prompt
    pub fn last_summary(&self) -> Option<&SampleSummary> {
        self.last_summary.as_ref()
    }

    /// Validates the current fields and issues the requests for the active
    /// mode and goal
    ///
    /// The significance level is checked before anything else; a bad α means
    /// no prompt is shown and no request is sent. A validation failure
    /// anywhere aborts the whole cycle with zero engine calls. For an
    /// interval-only goal the `hypothesis` argument is never read (the
    /// interval request shape has no tail).
    pub fn dispatch(
        &mut self,
        mode: AcquisitionMode,
        goal: CalculationGoal,
        hypothesis: Hypothesis,
        fields: &FieldValues,
    ) -> Result<DispatchOutcome, DispatchError> {
        let alpha = validation::validate_alpha(&fields.alpha)
            .map_err(|e| DispatchError::InvalidInput(vec![e]))?;

        debug!(?mode, ?goal, alpha, "dispatching calculation");

        match mode {
            AcquisitionMode::ProvideSummary => {
                self.dispatch_summary(goal, hypothesis, fields, alpha)
            }
            AcquisitionMode::EnterRawData => {
                self.dispatch_raw_data(goal, hypothesis, fields, alpha)
            }
            AcquisitionMode::ImportRawData => self.dispatch_import(goal, hypothesis, fields, alpha),
        }
    }

    fn dispatch_summary(
        &mut self,
        goal: CalculationGoal,
        hypothesis: Hypothesis,
        fields: &FieldValues,
        alpha: f64,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(entry) = self.summary_prompt.request_summary(self.last_summary.as_ref()) else {
            debug!("summary prompt cancelled");
            return Ok(DispatchOutcome::Cancelled);
        };

        // Validate the prompt entries and the persistent fields together so
        // the user sees every problem in one message.
        let mut errors = Vec::new();
        let summary = match parse_summary(&entry, &self.policy) {
            Ok(summary) => Some(summary),
            Err(mut e) => {
                errors.append(&mut e);
                None
            }
        };
        let params =
            match TestParameters::from_fields(fields, goal.includes_test(), &self.policy, alpha) {
                Ok(params) => Some(params),
                Err(mut e) => {
                    errors.append(&mut e);
                    None
                }
            };
        let (Some(summary), Some(params)) = (summary, params) else {
            return Err(DispatchError::InvalidInput(errors));
        };

        self.last_summary = Some(summary);

        for computation in split_computations(goal, hypothesis, &params) {
            debug!(?computation, "issuing summary request");
            self.engine
                .run_with_summary(computation, summary, params.std_dev, alpha)?;
        }
        Ok(DispatchOutcome::Completed)
    }

    fn dispatch_raw_data(
        &mut self,
        goal: CalculationGoal,
        hypothesis: Hypothesis,
        fields: &FieldValues,
        alpha: f64,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(raw_text) = self.raw_data_prompt.request_values() else {
            debug!("raw-data prompt cancelled");
            return Ok(DispatchOutcome::Cancelled);
        };

        let params =
            TestParameters::from_fields(fields, goal.includes_test(), &self.policy, alpha)
                .map_err(DispatchError::InvalidInput)?;

        for computation in split_computations(goal, hypothesis, &params) {
            debug!(?computation, "issuing raw-data request");
            self.engine
                .run_with_raw_text(computation, &raw_text, params.std_dev, alpha)?;
        }
        Ok(DispatchOutcome::Completed)
    }

    fn dispatch_import(
        &mut self,
        goal: CalculationGoal,
        hypothesis: Hypothesis,
        fields: &FieldValues,
        alpha: f64,
    ) -> Result<DispatchOutcome, DispatchError> {
        let params =
            TestParameters::from_fields(fields, goal.includes_test(), &self.policy, alpha)
                .map_err(DispatchError::InvalidInput)?;

        // Unlike the prompt-driven modes, the engine loads the data itself
        // in one pass, so a goal of both results is a single combined call.
        let computation = combined_computation(goal, hypothesis, &params);
        debug!(?computation, "issuing file-import request");
        if let Err(e) = self.engine.run_from_file(computation, params.std_dev, alpha) {
            warn!(error = %e, "import failed");
            return Err(DispatchError::EngineFailure(e));
        }
        Ok(DispatchOutcome::Completed)
    }
}

/// Requests for the prompt-driven modes: the hypothesis test always goes
/// out before the confidence interval
fn split_computations(
    goal: CalculationGoal,
    hypothesis: Hypothesis,
    params: &TestParameters,
) -> Vec<Computation> {
    let mut requests = Vec::new();
    if goal.includes_test() {
        match params.test_value {
            Some(test_value) => requests.push(Computation::HypothesisTest {
                hypothesis,
                test_value,
            }),
            None => unreachable!(
                "validated parameters always carry a test value when the goal includes the test"
            ),
        }
    }
    if goal.includes_interval() {
        requests.push(Computation::ConfidenceInterval);
    }
    requests
}

/// The single combined request for the file-import mode
fn combined_computation(
    goal: CalculationGoal,
    hypothesis: Hypothesis,
    params: &TestParameters,
) -> Computation {
    match (goal, params.test_value) {
        (CalculationGoal::TestHypothesis, Some(test_value)) => Computation::HypothesisTest {
            hypothesis,
            test_value,
        },
        (CalculationGoal::Both, Some(test_value)) => Computation::Both {
            hypothesis,
            test_value,
        },
        (CalculationGoal::ConfidenceInterval, _) => Computation::ConfidenceInterval,
        (CalculationGoal::TestHypothesis | CalculationGoal::Both, None) => {
            unreachable!(
                "validated parameters always carry a test value when the goal includes the test"
            )
        }
    }
}

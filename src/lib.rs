//! Zdispatch - input-mode state machine and dispatch core for one-sample
//! Z procedures
//!
//! This library tracks which hypothesis tail, data-acquisition mode, and
//! calculation goal are active, validates user-entered parameters, and
//! routes one or two computation requests to an external calculation engine.
//! The interactive surface and the numeric arithmetic are collaborators
//! behind traits; this crate owns only the state machine and the dispatch
//! logic between them.

pub mod dispatch;
pub mod engine;
pub mod hypothesis;
pub mod options;
pub mod validation;

pub use dispatch::{DispatchError, DispatchOutcome, Dispatcher, FieldValues};
pub use engine::{CalculationEngine, Computation, EngineError, SampleSummary};
pub use hypothesis::{Hypothesis, HypothesisSelector};
pub use options::{AcquisitionMode, CalculationGoal, ModeController};
pub use validation::{FieldStatus, ValidationError, ValidationPolicy};

//! Input-mode dispatch
//!
//! Turns one calculate trigger into the right engine requests: checks the
//! significance level first, runs the modal prompt for the active
//! acquisition mode, validates every remaining field, and issues one or two
//! computations in a fixed order. Either every request for the active mode
//! goes out, or none does.

mod dispatcher;
mod params;
mod prompts;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use params::{DispatchError, FieldValues, TestParameters};
pub use prompts::{RawDataPrompt, SummaryEntry, SummaryPrompt};

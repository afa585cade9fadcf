//! Modal prompt collaborators for the interactive acquisition modes
//!
//! Both prompts block the dispatch until the user confirms or cancels; a
//! `None` return means cancelled, which aborts the dispatch silently.

use crate::engine::SampleSummary;

/// Raw texts confirmed in the summary prompt
///
/// Texts, not numbers: validation happens in the dispatcher so a bad entry
/// aggregates with the other field failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub sample_mean: String,
    pub sample_size: String,
}

/// Collects the sample mean and size for the provide-summary mode
pub trait SummaryPrompt {
    /// Shows the prompt, pre-filled with the last summary that validated
    fn request_summary(&mut self, prefill: Option<&SampleSummary>) -> Option<SummaryEntry>;
}

/// Collects a multi-line block of raw sample values
pub trait RawDataPrompt {
    fn request_values(&mut self) -> Option<String>;
}

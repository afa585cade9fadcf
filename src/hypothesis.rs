//! Hypothesis tail selection and H0/H1 display rendering
//!
//! The selector is pure state: it tracks the active tail and the raw
//! test-value text, and regenerates the rendered hypothesis pair on every
//! change. Rendering truncates long values for layout, but the raw text is
//! always kept intact: it is the only thing the validator ever parses.

use serde::{Deserialize, Serialize};

/// Longest test value rendered verbatim; longer values are cut for layout
const DISPLAY_LIMIT: usize = 9;

/// Direction of the alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hypothesis {
    /// H1: μ < test value
    LessThan,
    /// H1: μ > test value
    GreaterThan,
    /// H1: μ ≠ test value (two-sided, the default selection)
    #[default]
    NotEqual,
}

impl Hypothesis {
    /// Relational symbol used in the alternative hypothesis
    pub fn symbol(&self) -> &'static str {
        match self {
            Hypothesis::LessThan => "<",
            Hypothesis::GreaterThan => ">",
            Hypothesis::NotEqual => "≠",
        }
    }
}

/// One rendered hypothesis line
///
/// `short` fits the layout (truncated value); `full` always carries the
/// untruncated value and backs the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypothesisLine {
    pub short: String,
    pub full: String,
}

/// The rendered H0/H1 pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypothesisDisplay {
    pub null: HypothesisLine,
    pub alternative: HypothesisLine,
}

/// Tracks the active tail and the raw test-value text
#[derive(Debug, Clone, Default)]
pub struct HypothesisSelector {
    hypothesis: Hypothesis,
    test_value_text: String,
}

impl HypothesisSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected tail
    pub fn hypothesis(&self) -> Hypothesis {
        self.hypothesis
    }

    /// Raw test-value text exactly as typed; this is what validation parses
    pub fn test_value_text(&self) -> &str {
        &self.test_value_text
    }

    /// Switches the active tail and regenerates the display pair
    pub fn select_tail(&mut self, hypothesis: Hypothesis) -> HypothesisDisplay {
        self.hypothesis = hypothesis;
        self.display()
    }

    /// Records the latest test-value text and regenerates the display pair
    ///
    /// The pair is rebuilt from the tail that is active *now*, so changing
    /// the tail after typing stays consistent with the latest text.
    pub fn set_display_value(&mut self, text: impl Into<String>) -> HypothesisDisplay {
        self.test_value_text = text.into();
        self.display()
    }

    /// Renders H0/H1 from the current tail and text
    pub fn display(&self) -> HypothesisDisplay {
        let short = render_value(&self.test_value_text);
        let full = if self.test_value_text.is_empty() {
            "?"
        } else {
            self.test_value_text.as_str()
        };
        let symbol = self.hypothesis.symbol();
        HypothesisDisplay {
            null: HypothesisLine {
                short: format!("H0: μ = {}", short),
                full: format!("H0: μ = {}", full),
            },
            alternative: HypothesisLine {
                short: format!("H1: μ {} {}", symbol, short),
                full: format!("H1: μ {} {}", symbol, full),
            },
        }
    }
}

/// Short-form rendering of the test value: `?` when empty, verbatim up to
/// nine characters, first nine characters plus `...` beyond that
fn render_value(text: &str) -> String {
    if text.is_empty() {
        return "?".to_string();
    }
    if text.chars().count() <= DISPLAY_LIMIT {
        return text.to_string();
    }
    let head: String = text.chars().take(DISPLAY_LIMIT).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tail_is_two_sided() {
        let selector = HypothesisSelector::new();
        assert_eq!(selector.hypothesis(), Hypothesis::NotEqual);
    }

    #[test]
    fn test_empty_value_renders_placeholder() {
        let selector = HypothesisSelector::new();
        let display = selector.display();
        assert_eq!(display.null.short, "H0: μ = ?");
        assert_eq!(display.alternative.short, "H1: μ ≠ ?");
    }

    #[test]
    fn test_each_tail_uses_its_symbol() {
        let mut selector = HypothesisSelector::new();
        selector.set_display_value("10");

        let display = selector.select_tail(Hypothesis::LessThan);
        assert_eq!(display.alternative.short, "H1: μ < 10");

        let display = selector.select_tail(Hypothesis::GreaterThan);
        assert_eq!(display.alternative.short, "H1: μ > 10");

        let display = selector.select_tail(Hypothesis::NotEqual);
        assert_eq!(display.alternative.short, "H1: μ ≠ 10");
    }

    #[test]
    fn test_null_line_always_uses_equals() {
        let mut selector = HypothesisSelector::new();
        selector.set_display_value("5.5");
        for tail in [
            Hypothesis::LessThan,
            Hypothesis::GreaterThan,
            Hypothesis::NotEqual,
        ] {
            let display = selector.select_tail(tail);
            assert_eq!(display.null.short, "H0: μ = 5.5");
        }
    }

    #[test]
    fn test_nine_characters_render_verbatim() {
        let mut selector = HypothesisSelector::new();
        let display = selector.set_display_value("123456789");
        assert_eq!(display.alternative.short, "H1: μ ≠ 123456789");
        assert_eq!(display.alternative.full, "H1: μ ≠ 123456789");
    }

    #[test]
    fn test_ten_characters_truncate_in_short_form_only() {
        let mut selector = HypothesisSelector::new();
        let display = selector.set_display_value("1234567890");
        assert_eq!(display.alternative.short, "H1: μ ≠ 123456789...");
        assert_eq!(display.alternative.full, "H1: μ ≠ 1234567890");
        assert_eq!(display.null.short, "H0: μ = 123456789...");
        assert_eq!(display.null.full, "H0: μ = 1234567890");
    }

    #[test]
    fn test_raw_text_survives_truncation() {
        let mut selector = HypothesisSelector::new();
        selector.set_display_value("3.14159265358979");
        assert_eq!(selector.test_value_text(), "3.14159265358979");
    }

    #[test]
    fn test_tail_change_after_typing_keeps_latest_text() {
        let mut selector = HypothesisSelector::new();
        selector.set_display_value("42");
        let display = selector.select_tail(Hypothesis::LessThan);
        assert_eq!(display.alternative.short, "H1: μ < 42");

        // And text change after a tail change keeps the latest tail
        let display = selector.set_display_value("43");
        assert_eq!(display.alternative.short, "H1: μ < 43");
    }
}

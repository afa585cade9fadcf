//! Acquisition-mode and calculation-goal selection
//!
//! Two independent axes, each with exactly one active variant by
//! construction. Switching one axis never touches the other, so every
//! combination of mode, goal, and tail is reachable.

use serde::{Deserialize, Serialize};

/// How the sample data is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AcquisitionMode {
    /// Precomputed sample mean and size, collected through a modal prompt
    ProvideSummary,
    /// Raw values typed into a modal multi-line prompt (the default)
    #[default]
    EnterRawData,
    /// Raw values loaded by the engine from an external source
    ImportRawData,
}

/// Which results one calculate trigger should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalculationGoal {
    TestHypothesis,
    ConfidenceInterval,
    /// Hypothesis test and confidence interval together (the default)
    #[default]
    Both,
}

impl CalculationGoal {
    /// True when a hypothesis-test request is part of this goal
    pub fn includes_test(&self) -> bool {
        matches!(self, CalculationGoal::TestHypothesis | CalculationGoal::Both)
    }

    /// True when a confidence-interval request is part of this goal
    pub fn includes_interval(&self) -> bool {
        matches!(
            self,
            CalculationGoal::ConfidenceInterval | CalculationGoal::Both
        )
    }
}

/// Tracks the single active acquisition mode and calculation goal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModeController {
    mode: AcquisitionMode,
    goal: CalculationGoal,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AcquisitionMode {
        self.mode
    }

    pub fn goal(&self) -> CalculationGoal {
        self.goal
    }

    /// Switches the acquisition mode; the goal is untouched
    pub fn select_mode(&mut self, mode: AcquisitionMode) {
        self.mode = mode;
    }

    /// Switches the calculation goal; the acquisition mode is untouched
    pub fn select_goal(&mut self, goal: CalculationGoal) {
        self.goal = goal;
    }

    /// Whether the tail selector and test-value field participate
    ///
    /// An interval-only goal has no hypothesis, so the view disables those
    /// inputs and the dispatcher never reads the tail for it.
    pub fn hypothesis_inputs_enabled(&self) -> bool {
        self.goal != CalculationGoal::ConfidenceInterval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_selection() {
        let controller = ModeController::new();
        assert_eq!(controller.mode(), AcquisitionMode::EnterRawData);
        assert_eq!(controller.goal(), CalculationGoal::Both);
        assert!(controller.hypothesis_inputs_enabled());
    }

    #[test]
    fn test_mode_switch_leaves_goal_alone() {
        let mut controller = ModeController::new();
        controller.select_goal(CalculationGoal::TestHypothesis);
        controller.select_mode(AcquisitionMode::ImportRawData);
        assert_eq!(controller.goal(), CalculationGoal::TestHypothesis);
        assert_eq!(controller.mode(), AcquisitionMode::ImportRawData);
    }

    #[test]
    fn test_goal_switch_leaves_mode_alone() {
        let mut controller = ModeController::new();
        controller.select_mode(AcquisitionMode::ProvideSummary);
        controller.select_goal(CalculationGoal::ConfidenceInterval);
        assert_eq!(controller.mode(), AcquisitionMode::ProvideSummary);
        assert_eq!(controller.goal(), CalculationGoal::ConfidenceInterval);
    }

    #[test]
    fn test_every_mode_goal_combination_is_reachable() {
        let modes = [
            AcquisitionMode::ProvideSummary,
            AcquisitionMode::EnterRawData,
            AcquisitionMode::ImportRawData,
        ];
        let goals = [
            CalculationGoal::TestHypothesis,
            CalculationGoal::ConfidenceInterval,
            CalculationGoal::Both,
        ];
        let mut controller = ModeController::new();
        for mode in modes {
            for goal in goals {
                controller.select_mode(mode);
                controller.select_goal(goal);
                assert_eq!(controller.mode(), mode);
                assert_eq!(controller.goal(), goal);
            }
        }
    }

    #[test]
    fn test_hypothesis_inputs_disabled_only_for_interval_goal() {
        let mut controller = ModeController::new();

        controller.select_goal(CalculationGoal::ConfidenceInterval);
        assert!(!controller.hypothesis_inputs_enabled());

        controller.select_goal(CalculationGoal::TestHypothesis);
        assert!(controller.hypothesis_inputs_enabled());

        controller.select_goal(CalculationGoal::ConfidenceInterval);
        assert!(!controller.hypothesis_inputs_enabled());

        controller.select_goal(CalculationGoal::Both);
        assert!(controller.hypothesis_inputs_enabled());
    }

    #[test]
    fn test_goal_inclusion_accessors() {
        assert!(CalculationGoal::TestHypothesis.includes_test());
        assert!(!CalculationGoal::TestHypothesis.includes_interval());

        assert!(!CalculationGoal::ConfidenceInterval.includes_test());
        assert!(CalculationGoal::ConfidenceInterval.includes_interval());

        assert!(CalculationGoal::Both.includes_test());
        assert!(CalculationGoal::Both.includes_interval());
    }
}

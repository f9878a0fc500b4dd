use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{
    DAILY_GAP_WARNING_KCAL, DEFAULT_EARLY_EXIT_RATIO, SINGLE_DAY_GAP_WARNING_KCAL,
    WEEKLY_GAP_WARNING_KCAL,
};

/// Runtime-configurable planner thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Fraction of a slot's calorie target at which the slot stops taking items.
    pub early_exit_ratio: f64,
    pub weekly_gap_warning_kcal: f64,
    pub daily_gap_warning_kcal: f64,
    pub single_day_gap_warning_kcal: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            early_exit_ratio: DEFAULT_EARLY_EXIT_RATIO,
            weekly_gap_warning_kcal: WEEKLY_GAP_WARNING_KCAL,
            daily_gap_warning_kcal: DAILY_GAP_WARNING_KCAL,
            single_day_gap_warning_kcal: SINGLE_DAY_GAP_WARNING_KCAL,
        }
    }
}

impl PlannerConfig {
    /// Copy with a different early-exit ratio.
    pub fn with_early_exit(mut self, ratio: f64) -> Self {
        self.early_exit_ratio = ratio;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.early_exit_ratio > 0.0 && self.early_exit_ratio <= 1.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "early exit ratio must be in (0, 1], got {}",
                self.early_exit_ratio
            )));
        }

        let thresholds = [
            ("weekly gap warning", self.weekly_gap_warning_kcal),
            ("daily gap warning", self.daily_gap_warning_kcal),
            ("single-day gap warning", self.single_day_gap_warning_kcal),
        ];
        for (name, value) in thresholds {
            if value < 0.0 || value.is_nan() {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} threshold must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

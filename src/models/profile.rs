use serde::{Deserialize, Serialize};

use crate::models::plan::MacroTargets;
use crate::planner::config::PlannerConfig;

/// Highest weekly workout frequency a profile may declare.
pub const MAX_WORKOUT_FREQUENCY: u32 = 14;

/// The parts of a user profile the planner consumes.
///
/// Targets come precomputed from the BMR/TDEE calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub targets: MacroTargets,

    #[serde(default)]
    pub workout_frequency: u32,

    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Profile {
    pub fn is_valid(&self) -> bool {
        self.targets.is_non_negative() && self.workout_frequency <= MAX_WORKOUT_FREQUENCY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_section_is_optional() {
        let json = r#"{"targets": {"calories": 2000, "protein": 150, "carbs": 200, "fat": 60}, "workoutFrequency": 3}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.workout_frequency, 3);
        assert_eq!(profile.planner, PlannerConfig::default());
        assert!(profile.is_valid());
    }

    #[test]
    fn test_frequency_out_of_range() {
        let json = r#"{"targets": {"calories": 2000, "protein": 150, "carbs": 200, "fat": 60}, "workoutFrequency": 15}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(!profile.is_valid());
    }
}

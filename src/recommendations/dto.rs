use serde::Serialize;

use super::engine::RecommendationReport;
use crate::aggregation::range::DateRange;
use crate::profiles::repo_types::FitnessGoal;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    #[serde(flatten)]
    pub report: RecommendationReport,
    pub window: DateRange,
    /// `None` when the user never opened their profile.
    pub fitness_goal: Option<FitnessGoal>,
}

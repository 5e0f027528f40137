use serde::Serialize;

use crate::aggregation::services::WindowAverages;
use crate::display::{round_to, whole};
use crate::profiles::repo_types::{FitnessGoal, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Recommendation {
    fn new(severity: Severity, title: &str, message: String, action: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message,
            action: action.to_string(),
        }
    }
}

/// Targets the rules compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationThresholds {
    /// Net calories (consumed - burned) above which a weight-loss user is warned.
    pub target_deficit: f64,
    /// Net calories below which a muscle-gain user is told to eat more.
    pub target_surplus: f64,
    pub protein_g_per_kg: f64,
    pub min_weekly_workouts: i64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            target_deficit: 500.0,
            target_surplus: 300.0,
            protein_g_per_kg: 1.6,
            min_weekly_workouts: 3,
        }
    }
}

/// Advice in rule order plus the display-rounded averages it was based on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
    pub avg_calories_burned: i64,
    pub avg_calories_consumed: i64,
    pub avg_protein: f64,
    pub workout_count: i64,
}

pub fn recommend(profile: Option<&Profile>, averages: &WindowAverages) -> RecommendationReport {
    recommend_with(&RecommendationThresholds::default(), profile, averages)
}

/// Runs every rule in order and keeps each one that fires. The
/// congratulation is only emitted when nothing else did.
pub fn recommend_with(
    t: &RecommendationThresholds,
    profile: Option<&Profile>,
    averages: &WindowAverages,
) -> RecommendationReport {
    let mut recommendations = Vec::new();

    if let Some(r) = calorie_rule(t, profile, averages) {
        recommendations.push(r);
    }
    if let Some(r) = protein_rule(t, profile, averages) {
        recommendations.push(r);
    }
    if let Some(r) = frequency_rule(t, averages) {
        recommendations.push(r);
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::new(
            Severity::Success,
            "Great Job! Keep It Up!",
            "Your nutrition and workout routine look excellent! You're on track to reach your goals."
                .to_string(),
            "Maintain current habits and stay consistent",
        ));
    }

    RecommendationReport {
        recommendations,
        avg_calories_burned: whole(averages.avg_calories_burned),
        avg_calories_consumed: whole(averages.avg_calories_consumed),
        avg_protein: round_to(averages.avg_protein_g, 1),
        workout_count: averages.workout_count,
    }
}

fn calorie_rule(
    t: &RecommendationThresholds,
    profile: Option<&Profile>,
    a: &WindowAverages,
) -> Option<Recommendation> {
    let net = a.avg_calories_consumed - a.avg_calories_burned;
    match profile?.fitness_goal {
        FitnessGoal::LoseWeight if net > t.target_deficit => Some(Recommendation::new(
            Severity::Warning,
            "Calorie Deficit Needed",
            format!(
                "For weight loss, aim for a {} calorie deficit. Currently: {} calories. Reduce intake by {} calories.",
                whole(t.target_deficit),
                whole(net),
                whole(net - t.target_deficit)
            ),
            "Reduce portion sizes or increase cardio",
        )),
        FitnessGoal::GainMuscle if net < t.target_surplus => Some(Recommendation::new(
            Severity::Info,
            "Calorie Surplus Needed",
            format!(
                "For muscle gain, aim for a {} calorie surplus. Currently: {} calories. Increase intake by {} calories.",
                whole(t.target_surplus),
                whole(net),
                whole(t.target_surplus - net)
            ),
            "Add protein-rich meals like eggs, chicken, paneer",
        )),
        _ => None,
    }
}

fn protein_rule(
    t: &RecommendationThresholds,
    profile: Option<&Profile>,
    a: &WindowAverages,
) -> Option<Recommendation> {
    let weight = profile?.weight_kg?;
    let target = weight * t.protein_g_per_kg;
    if a.avg_protein_g >= target {
        return None;
    }
    Some(Recommendation::new(
        Severity::Warning,
        "Low Protein Intake",
        format!(
            "Target: {}g/day. Current: {}g/day. Increase by {}g.",
            whole(target),
            whole(a.avg_protein_g),
            whole(target - a.avg_protein_g)
        ),
        "Add: Chicken breast (31g), Paneer (18g), Eggs (6g each)",
    ))
}

fn frequency_rule(t: &RecommendationThresholds, a: &WindowAverages) -> Option<Recommendation> {
    if a.workout_count >= t.min_weekly_workouts {
        return None;
    }
    Some(Recommendation::new(
        Severity::Info,
        "Increase Workout Frequency",
        format!(
            "You worked out {} times this week. Aim for at least 3-4 sessions for better results.",
            a.workout_count
        ),
        "Schedule 3-4 workout days per week",
    ))
}

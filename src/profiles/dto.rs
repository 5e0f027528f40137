use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{FitnessGoal, Profile};
use crate::display::round_to;
use crate::error::{ensure, AppResult};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fitness_goal: FitnessGoal,
    pub bmi: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            bmi: p.bmi().map(|b| round_to(b, 2)),
            user_id: p.user_id,
            age: p.age,
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            fitness_goal: p.fitness_goal,
            created_at: p.created_at,
        }
    }
}

/// Full replacement of the editable profile fields; omitted measurements are cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(age) = self.age {
            ensure((10..=120).contains(&age), "age must be between 10 and 120")?;
        }
        if let Some(w) = self.weight_kg {
            ensure(w.is_finite() && w >= 20.0, "weight_kg must be at least 20")?;
        }
        if let Some(h) = self.height_cm {
            ensure(h.is_finite() && h >= 50.0, "height_cm must be at least 50")?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// What the user is training for. Drives the calorie recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "fitness_goal", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    #[default]
    Maintain,
    GainMuscle,
}

/// Profile record, one per user.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub fitness_goal: FitnessGoal,
    pub created_at: OffsetDateTime,
}

impl Profile {
    /// Body mass index, `None` unless both weight and a positive height are known.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(w), Some(h)) if h > 0.0 => {
                let height_m = h / 100.0;
                Some(w / (height_m * height_m))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight_kg: Option<f64>, height_cm: Option<f64>) -> Profile {
        Profile {
            user_id: Uuid::new_v4(),
            age: Some(30),
            weight_kg,
            height_cm,
            fitness_goal: FitnessGoal::Maintain,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn bmi_from_weight_and_height() {
        let bmi = profile(Some(70.0), Some(175.0)).bmi().unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
    }

    #[test]
    fn bmi_undefined_without_both_measurements() {
        assert_eq!(profile(None, Some(175.0)).bmi(), None);
        assert_eq!(profile(Some(70.0), None).bmi(), None);
        assert_eq!(profile(Some(70.0), Some(0.0)).bmi(), None);
    }

    #[test]
    fn goal_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&FitnessGoal::LoseWeight).unwrap(),
            "\"lose_weight\""
        );
        let g: FitnessGoal = serde_json::from_str("\"gain_muscle\"").unwrap();
        assert_eq!(g, FitnessGoal::GainMuscle);
        assert!(serde_json::from_str::<FitnessGoal>("\"bulk\"").is_err());
    }
}

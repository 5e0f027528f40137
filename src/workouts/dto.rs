use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::repo_types::{NewWorkout, Workout};
use crate::error::{ensure, AppResult};

pub const MAX_NAME_LEN: usize = 200;

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_used_kg: Option<f64>,
    pub calories_burned: i32,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Workout> for WorkoutResponse {
    fn from(w: Workout) -> Self {
        Self {
            id: w.id,
            exercise_name: w.exercise_name,
            sets: w.sets,
            reps: w.reps,
            weight_used_kg: w.weight_used_kg,
            calories_burned: w.calories_burned,
            duration_minutes: w.duration_minutes,
            notes: w.notes,
            date: w.date,
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub exercise_name: String,
    #[serde(default = "one")]
    pub sets: i32,
    #[serde(default = "one")]
    pub reps: i32,
    pub weight_used_kg: Option<f64>,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    pub notes: Option<String>,
    /// Defaults to the current day.
    pub date: Option<Date>,
}

fn one() -> i32 {
    1
}

fn default_duration() -> i32 {
    30
}

impl CreateWorkoutRequest {
    pub fn into_new(self, today: Date) -> AppResult<NewWorkout> {
        let exercise_name = self.exercise_name.trim().to_string();
        ensure(!exercise_name.is_empty(), "exercise_name is required")?;
        ensure(
            exercise_name.chars().count() <= MAX_NAME_LEN,
            "exercise_name must be at most 200 characters",
        )?;
        ensure(self.sets >= 1, "sets must be at least 1")?;
        ensure(self.reps >= 1, "reps must be at least 1")?;
        ensure(self.calories_burned >= 0, "calories_burned must not be negative")?;
        ensure(self.duration_minutes >= 1, "duration_minutes must be at least 1")?;
        if let Some(w) = self.weight_used_kg {
            ensure(w.is_finite() && w >= 0.0, "weight_used_kg must not be negative")?;
        }

        Ok(NewWorkout {
            exercise_name,
            sets: self.sets,
            reps: self.reps,
            weight_used_kg: self.weight_used_kg,
            calories_burned: self.calories_burned,
            duration_minutes: self.duration_minutes,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            date: self.date.unwrap_or(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(json: &str) -> CreateWorkoutRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn fills_defaults_and_today() {
        let new = parse(r#"{"exercise_name": "  Push-ups "}"#)
            .into_new(date!(2024 - 03 - 10))
            .unwrap();
        assert_eq!(new.exercise_name, "Push-ups");
        assert_eq!((new.sets, new.reps), (1, 1));
        assert_eq!(new.duration_minutes, 30);
        assert_eq!(new.calories_burned, 0);
        assert_eq!(new.date, date!(2024 - 03 - 10));
    }

    #[test]
    fn keeps_explicit_date() {
        let new = parse(
            r#"{"exercise_name": "Bench Press", "sets": 3, "reps": 8,
                "weight_used_kg": 60.0, "calories_burned": 120,
                "duration_minutes": 25, "date": "2024-03-01", "notes": ""}"#,
        )
        .into_new(date!(2024 - 03 - 10))
        .unwrap();
        assert_eq!(new.date, date!(2024 - 03 - 01));
        assert_eq!(new.weight_used_kg, Some(60.0));
        assert_eq!(new.notes, None);
    }

    #[test]
    fn rejects_bad_counts() {
        let today = date!(2024 - 03 - 10);
        assert!(parse(r#"{"exercise_name": "Run", "sets": 0}"#).into_new(today).is_err());
        assert!(parse(r#"{"exercise_name": "Run", "reps": 0}"#).into_new(today).is_err());
        assert!(parse(r#"{"exercise_name": "Run", "duration_minutes": 0}"#)
            .into_new(today)
            .is_err());
        assert!(parse(r#"{"exercise_name": "Run", "calories_burned": -5}"#)
            .into_new(today)
            .is_err());
        assert!(parse(r#"{"exercise_name": "   "}"#).into_new(today).is_err());
    }

    #[test]
    fn response_serializes_plain_date() {
        let w = Workout {
            id: Uuid::nil(),
            exercise_name: "Squat".into(),
            sets: 5,
            reps: 5,
            weight_used_kg: Some(100.0),
            calories_burned: 150,
            duration_minutes: 40,
            notes: None,
            date: date!(2024 - 01 - 02),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(WorkoutResponse::from(w)).unwrap();
        assert_eq!(json["date"], "2024-01-02");
        assert!(json.get("user_id").is_none());
    }
}

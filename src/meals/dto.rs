use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::repo_types::{Meal, MealType, NewMeal};
use crate::error::{ensure, AppResult};
use crate::workouts::dto::MAX_NAME_LEN;

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub id: Uuid,
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub quantity: f64,
    pub notes: Option<String>,
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Meal> for MealResponse {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            meal_type: m.meal_type,
            food_name: m.food_name,
            calories: m.calories,
            protein_g: m.protein_g,
            carbs_g: m.carbs_g,
            fats_g: m.fats_g,
            quantity: m.quantity,
            notes: m.notes,
            date: m.date,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    #[serde(default = "default_meal_type")]
    pub meal_type: MealType,
    pub food_name: String,
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fats_g: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub notes: Option<String>,
    pub date: Option<Date>,
}

fn default_meal_type() -> MealType {
    MealType::Breakfast
}

fn default_quantity() -> f64 {
    1.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

impl CreateMealRequest {
    pub fn into_new(self, today: Date) -> AppResult<NewMeal> {
        let food_name = self.food_name.trim().to_string();
        ensure(!food_name.is_empty(), "food_name is required")?;
        ensure(
            food_name.chars().count() <= MAX_NAME_LEN,
            "food_name must be at most 200 characters",
        )?;
        ensure(self.calories >= 0, "calories must not be negative")?;
        ensure(non_negative(self.protein_g), "protein_g must not be negative")?;
        ensure(non_negative(self.carbs_g), "carbs_g must not be negative")?;
        ensure(non_negative(self.fats_g), "fats_g must not be negative")?;
        ensure(
            self.quantity.is_finite() && self.quantity >= 0.1,
            "quantity must be at least 0.1",
        )?;

        Ok(NewMeal {
            meal_type: self.meal_type,
            food_name,
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fats_g: self.fats_g,
            quantity: self.quantity,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            date: self.date.unwrap_or(today),
        })
    }
}

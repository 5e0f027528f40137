use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Meal record as read back for its owner; queries filter on `user_id`.
#[derive(Debug, Clone, FromRow)]
pub struct Meal {
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
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub quantity: f64,
    pub notes: Option<String>,
    pub date: Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct MealTotals {
    pub calories: i64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct DailyMealRow {
    pub date: Date,
    pub calories: i64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub count: i64,
}

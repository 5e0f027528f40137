use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

use crate::meals::repo_types::{MealType, NewMeal};

/// Shared reference food with per-serving macros. Not owned by any user.
#[derive(Debug, Clone, FromRow)]
pub struct FoodTemplate {
    pub id: Uuid,
    pub food_name: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl FoodTemplate {
    /// A one-serving meal carrying a copy of the template's fields.
    pub fn to_new_meal(&self, date: Date) -> NewMeal {
        NewMeal {
            meal_type: self.meal_type,
            food_name: self.food_name.clone(),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fats_g: self.fats_g,
            quantity: 1.0,
            notes: None,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn copies_macros_into_single_serving() {
        let tpl = FoodTemplate {
            id: Uuid::new_v4(),
            food_name: "Paneer (100g)".into(),
            meal_type: MealType::Lunch,
            calories: 265,
            protein_g: 18.0,
            carbs_g: 1.2,
            fats_g: 20.0,
        };
        let meal = tpl.to_new_meal(date!(2024 - 02 - 29));
        assert_eq!(meal.food_name, "Paneer (100g)");
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert_eq!(meal.calories, 265);
        assert_eq!((meal.protein_g, meal.carbs_g, meal.fats_g), (18.0, 1.2, 20.0));
        assert_eq!(meal.quantity, 1.0);
        assert_eq!(meal.date, date!(2024 - 02 - 29));
    }
}

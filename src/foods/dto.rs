use serde::Serialize;
use uuid::Uuid;

use super::repo_types::FoodTemplate;
use crate::meals::repo_types::MealType;

#[derive(Debug, Serialize)]
pub struct FoodTemplateItem {
    pub id: Uuid,
    pub food_name: String,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl From<FoodTemplate> for FoodTemplateItem {
    fn from(t: FoodTemplate) -> Self {
        Self {
            id: t.id,
            food_name: t.food_name,
            calories: t.calories,
            protein_g: t.protein_g,
            carbs_g: t.carbs_g,
            fats_g: t.fats_g,
        }
    }
}

/// The template library split by meal type.
#[derive(Debug, Default, Serialize)]
pub struct FoodLibrary {
    pub breakfast: Vec<FoodTemplateItem>,
    pub lunch: Vec<FoodTemplateItem>,
    pub dinner: Vec<FoodTemplateItem>,
    pub snack: Vec<FoodTemplateItem>,
}

impl FromIterator<FoodTemplate> for FoodLibrary {
    fn from_iter<I: IntoIterator<Item = FoodTemplate>>(iter: I) -> Self {
        let mut lib = FoodLibrary::default();
        for t in iter {
            let bucket = match t.meal_type {
                MealType::Breakfast => &mut lib.breakfast,
                MealType::Lunch => &mut lib.lunch,
                MealType::Dinner => &mut lib.dinner,
                MealType::Snack => &mut lib.snack,
            };
            bucket.push(t.into());
        }
        lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tpl(name: &str, meal_type: MealType) -> FoodTemplate {
        FoodTemplate {
            id: Uuid::new_v4(),
            food_name: name.into(),
            meal_type,
            calories: 100,
            protein_g: 1.0,
            carbs_g: 2.0,
            fats_g: 3.0,
        }
    }

    #[test]
    fn groups_by_meal_type_keeping_order() {
        let lib: FoodLibrary = vec![
            tpl("Idli (2 pieces)", MealType::Breakfast),
            tpl("Poha (1 bowl)", MealType::Breakfast),
            tpl("Roti (1 piece)", MealType::Lunch),
            tpl("Chai (1 cup)", MealType::Snack),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = lib.breakfast.iter().map(|i| i.food_name.as_str()).collect();
        assert_eq!(names, ["Idli (2 pieces)", "Poha (1 bowl)"]);
        assert_eq!(lib.lunch.len(), 1);
        assert!(lib.dinner.is_empty());
        assert_eq!(lib.snack[0].food_name, "Chai (1 cup)");
    }
}

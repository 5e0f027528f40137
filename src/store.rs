use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::aggregation::range::DateRange;
use crate::meals::{
    repo as meals_repo,
    repo_types::{DailyMealRow, MealTotals},
};
use crate::profiles::{repo as profiles_repo, repo_types::Profile};
use crate::workouts::{
    repo as workouts_repo,
    repo_types::{DailyWorkoutRow, WorkoutTotals},
};

/// Read side consumed by aggregation and recommendations.
///
/// Every query is scoped to a single user; there is no way to ask for
/// another user's rows or for cross-user totals.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn workout_totals(&self, user_id: Uuid, range: DateRange)
        -> anyhow::Result<WorkoutTotals>;
    async fn meal_totals(&self, user_id: Uuid, range: DateRange) -> anyhow::Result<MealTotals>;
    async fn daily_workouts(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> anyhow::Result<Vec<DailyWorkoutRow>>;
    async fn daily_meals(&self, user_id: Uuid, range: DateRange)
        -> anyhow::Result<Vec<DailyMealRow>>;
    async fn find_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>>;
}

#[derive(Clone)]
pub struct PgActivityStore {
    db: PgPool,
}

impl PgActivityStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityStore for PgActivityStore {
    async fn workout_totals(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> anyhow::Result<WorkoutTotals> {
        workouts_repo::totals(&self.db, user_id, range.start, range.end).await
    }

    async fn meal_totals(&self, user_id: Uuid, range: DateRange) -> anyhow::Result<MealTotals> {
        meals_repo::totals(&self.db, user_id, range.start, range.end).await
    }

    async fn daily_workouts(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> anyhow::Result<Vec<DailyWorkoutRow>> {
        workouts_repo::daily(&self.db, user_id, range.start, range.end).await
    }

    async fn daily_meals(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> anyhow::Result<Vec<DailyMealRow>> {
        meals_repo::daily(&self.db, user_id, range.start, range.end).await
    }

    async fn find_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        profiles_repo::find(&self.db, user_id).await
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::{BTreeMap, HashMap};

    use async_trait::async_trait;
    use time::Date;
    use uuid::Uuid;

    use super::ActivityStore;
    use crate::aggregation::range::DateRange;
    use crate::meals::repo_types::{DailyMealRow, MealTotals};
    use crate::profiles::repo_types::Profile;
    use crate::workouts::repo_types::{DailyWorkoutRow, WorkoutTotals};

    struct WorkoutEntry {
        user_id: Uuid,
        date: Date,
        calories_burned: i64,
    }

    struct MealEntry {
        user_id: Uuid,
        date: Date,
        calories: i64,
        protein_g: f64,
        carbs_g: f64,
        fats_g: f64,
    }

    /// In-memory rows answering the same query shapes as Postgres.
    #[derive(Default)]
    pub struct MemoryStore {
        workouts: Vec<WorkoutEntry>,
        meals: Vec<MealEntry>,
        profiles: HashMap<Uuid, Profile>,
    }

    impl MemoryStore {
        pub fn with_workout(mut self, user_id: Uuid, date: Date, calories_burned: i64) -> Self {
            self.workouts.push(WorkoutEntry {
                user_id,
                date,
                calories_burned,
            });
            self
        }

        pub fn with_meal(
            mut self,
            user_id: Uuid,
            date: Date,
            calories: i64,
            (protein_g, carbs_g, fats_g): (f64, f64, f64),
        ) -> Self {
            self.meals.push(MealEntry {
                user_id,
                date,
                calories,
                protein_g,
                carbs_g,
                fats_g,
            });
            self
        }

        pub fn with_profile(mut self, profile: Profile) -> Self {
            self.profiles.insert(profile.user_id, profile);
            self
        }

        fn workouts_in(&self, user_id: Uuid, range: DateRange) -> impl Iterator<Item = &WorkoutEntry> {
            self.workouts
                .iter()
                .filter(move |w| w.user_id == user_id && range.contains(w.date))
        }

        fn meals_in(&self, user_id: Uuid, range: DateRange) -> impl Iterator<Item = &MealEntry> {
            self.meals
                .iter()
                .filter(move |m| m.user_id == user_id && range.contains(m.date))
        }
    }

    #[async_trait]
    impl ActivityStore for MemoryStore {
        async fn workout_totals(
            &self,
            user_id: Uuid,
            range: DateRange,
        ) -> anyhow::Result<WorkoutTotals> {
            Ok(self
                .workouts_in(user_id, range)
                .fold(WorkoutTotals::default(), |mut t, w| {
                    t.calories_burned += w.calories_burned;
                    t.count += 1;
                    t
                }))
        }

        async fn meal_totals(&self, user_id: Uuid, range: DateRange) -> anyhow::Result<MealTotals> {
            Ok(self
                .meals_in(user_id, range)
                .fold(MealTotals::default(), |mut t, m| {
                    t.calories += m.calories;
                    t.protein_g += m.protein_g;
                    t.carbs_g += m.carbs_g;
                    t.fats_g += m.fats_g;
                    t.count += 1;
                    t
                }))
        }

        async fn daily_workouts(
            &self,
            user_id: Uuid,
            range: DateRange,
        ) -> anyhow::Result<Vec<DailyWorkoutRow>> {
            let mut by_day: BTreeMap<Date, DailyWorkoutRow> = BTreeMap::new();
            for w in self.workouts_in(user_id, range) {
                let row = by_day.entry(w.date).or_insert(DailyWorkoutRow {
                    date: w.date,
                    calories_burned: 0,
                    count: 0,
                });
                row.calories_burned += w.calories_burned;
                row.count += 1;
            }
            Ok(by_day.into_values().collect())
        }

        async fn daily_meals(
            &self,
            user_id: Uuid,
            range: DateRange,
        ) -> anyhow::Result<Vec<DailyMealRow>> {
            let mut by_day: BTreeMap<Date, DailyMealRow> = BTreeMap::new();
            for m in self.meals_in(user_id, range) {
                let row = by_day.entry(m.date).or_insert(DailyMealRow {
                    date: m.date,
                    calories: 0,
                    protein_g: 0.0,
                    carbs_g: 0.0,
                    fats_g: 0.0,
                    count: 0,
                });
                row.calories += m.calories;
                row.protein_g += m.protein_g;
                row.carbs_g += m.carbs_g;
                row.fats_g += m.fats_g;
                row.count += 1;
            }
            Ok(by_day.into_values().collect())
        }

        async fn find_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
            Ok(self.profiles.get(&user_id).cloned())
        }
    }

    /// Every query fails, as when the database is down.
    pub struct FailingStore;

    #[async_trait]
    impl ActivityStore for FailingStore {
        async fn workout_totals(&self, _: Uuid, _: DateRange) -> anyhow::Result<WorkoutTotals> {
            anyhow::bail!("connection reset by peer")
        }
        async fn meal_totals(&self, _: Uuid, _: DateRange) -> anyhow::Result<MealTotals> {
            anyhow::bail!("connection reset by peer")
        }
        async fn daily_workouts(&self, _: Uuid, _: DateRange) -> anyhow::Result<Vec<DailyWorkoutRow>> {
            anyhow::bail!("connection reset by peer")
        }
        async fn daily_meals(&self, _: Uuid, _: DateRange) -> anyhow::Result<Vec<DailyMealRow>> {
            anyhow::bail!("connection reset by peer")
        }
        async fn find_profile(&self, _: Uuid) -> anyhow::Result<Option<Profile>> {
            anyhow::bail!("connection reset by peer")
        }
    }
}

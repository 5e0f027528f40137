use time::Date;
use tracing::debug;
use uuid::Uuid;

use super::range::DateRange;
use crate::error::AppResult;
use crate::meals::repo_types::DailyMealRow;
use crate::store::ActivityStore;
use crate::workouts::repo_types::DailyWorkoutRow;

/// Activity for one calendar day. Zero when nothing was logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotals {
    pub date: Date,
    pub calories_burned: i64,
    pub calories_consumed: i64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub workout_count: i64,
    pub meal_count: i64,
}

impl DailyTotals {
    pub fn zero(date: Date) -> Self {
        Self {
            date,
            calories_burned: 0,
            calories_consumed: 0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
            workout_count: 0,
            meal_count: 0,
        }
    }
}

/// Unrounded totals for one user over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub range: DateRange,
    pub total_calories_burned: i64,
    pub total_calories_consumed: i64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fats_g: f64,
    pub workout_count: i64,
    pub meal_count: i64,
    /// Dense and ascending when requested, empty otherwise.
    pub daily_series: Vec<DailyTotals>,
}

impl Summary {
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            total_calories_burned: 0,
            total_calories_consumed: 0,
            total_protein_g: 0.0,
            total_carbs_g: 0.0,
            total_fats_g: 0.0,
            workout_count: 0,
            meal_count: 0,
            daily_series: Vec::new(),
        }
    }
}

/// Sums and counts of a user's workouts and meals in `range`, plus the
/// per-day breakdown when `with_series` is set.
///
/// An inverted range short-circuits to an empty summary without touching
/// the store.
pub async fn summarize(
    store: &dyn ActivityStore,
    user_id: Uuid,
    range: DateRange,
    with_series: bool,
) -> AppResult<Summary> {
    if range.is_empty() {
        debug!(%user_id, start = %range.start, end = %range.end, "inverted range, empty summary");
        return Ok(Summary::empty(range));
    }

    let workouts = store.workout_totals(user_id, range).await?;
    let meals = store.meal_totals(user_id, range).await?;

    let daily_series = if with_series {
        let w = store.daily_workouts(user_id, range).await?;
        let m = store.daily_meals(user_id, range).await?;
        dense_series(range, &w, &m)
    } else {
        Vec::new()
    };

    debug!(
        %user_id,
        start = %range.start,
        end = %range.end,
        workouts = workouts.count,
        meals = meals.count,
        "summary computed"
    );

    Ok(Summary {
        range,
        total_calories_burned: workouts.calories_burned,
        total_calories_consumed: meals.calories,
        total_protein_g: meals.protein_g,
        total_carbs_g: meals.carbs_g,
        total_fats_g: meals.fats_g,
        workout_count: workouts.count,
        meal_count: meals.count,
        daily_series,
    })
}

/// One entry per day of `range`, zero-filled, rows outside the range ignored.
pub fn dense_series(
    range: DateRange,
    workouts: &[DailyWorkoutRow],
    meals: &[DailyMealRow],
) -> Vec<DailyTotals> {
    let mut series: Vec<DailyTotals> = range.days().map(DailyTotals::zero).collect();

    for row in workouts {
        if let Some(i) = range.offset_of(row.date) {
            let day = &mut series[i];
            day.calories_burned += row.calories_burned;
            day.workout_count += row.count;
        }
    }
    for row in meals {
        if let Some(i) = range.offset_of(row.date) {
            let day = &mut series[i];
            day.calories_consumed += row.calories;
            day.protein_g += row.protein_g;
            day.carbs_g += row.carbs_g;
            day.fats_g += row.fats_g;
            day.meal_count += row.count;
        }
    }
    series
}

/// Per-entry averages over a window, as fed to the recommendation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowAverages {
    /// Mean of `calories_burned` across the window's workouts.
    pub avg_calories_burned: f64,
    /// Mean of `calories` across the window's meals.
    pub avg_calories_consumed: f64,
    pub avg_protein_g: f64,
    pub workout_count: i64,
}

impl From<&Summary> for WindowAverages {
    fn from(s: &Summary) -> Self {
        Self {
            avg_calories_burned: mean(s.total_calories_burned as f64, s.workout_count),
            avg_calories_consumed: mean(s.total_calories_consumed as f64, s.meal_count),
            avg_protein_g: mean(s.total_protein_g, s.meal_count),
            workout_count: s.workout_count,
        }
    }
}

fn mean(total: f64, count: i64) -> f64 {
    if count > 0 {
        total / count as f64
    } else {
        0.0
    }
}

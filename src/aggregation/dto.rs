use serde::{Deserialize, Serialize};
use time::Date;

use super::services::{DailyTotals, Summary};
use crate::display::round_to;
use crate::meals::dto::MealResponse;
use crate::workouts::dto::WorkoutResponse;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub start: Date,
    pub end: Date,
    #[serde(default = "yes")]
    pub series: bool,
}

fn yes() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    /// Look-back in days; the configured trailing window when absent.
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DailyTotalsResponse {
    pub date: Date,
    pub calories_burned: i64,
    pub calories_consumed: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub workout_count: i64,
    pub meal_count: i64,
}

impl From<&DailyTotals> for DailyTotalsResponse {
    fn from(d: &DailyTotals) -> Self {
        Self {
            date: d.date,
            calories_burned: d.calories_burned,
            calories_consumed: d.calories_consumed,
            protein: round_to(d.protein_g, 1),
            carbs: round_to(d.carbs_g, 1),
            fats: round_to(d.fats_g, 1),
            workout_count: d.workout_count,
            meal_count: d.meal_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub start: Date,
    pub end: Date,
    pub total_calories_burned: i64,
    pub total_calories_consumed: i64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub workout_count: i64,
    pub meal_count: i64,
    pub daily_series: Vec<DailyTotalsResponse>,
}

impl From<&Summary> for SummaryResponse {
    fn from(s: &Summary) -> Self {
        Self {
            start: s.range.start,
            end: s.range.end,
            total_calories_burned: s.total_calories_burned,
            total_calories_consumed: s.total_calories_consumed,
            total_protein: round_to(s.total_protein_g, 1),
            total_carbs: round_to(s.total_carbs_g, 1),
            total_fats: round_to(s.total_fats_g, 1),
            workout_count: s.workout_count,
            meal_count: s.meal_count,
            daily_series: s.daily_series.iter().map(Into::into).collect(),
        }
    }
}

/// Equal-length parallel series, one slot per day, ready for charting.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub dates: Vec<Date>,
    pub workout_calories: Vec<i64>,
    pub meal_calories: Vec<i64>,
    pub protein: Vec<f64>,
    pub carbs: Vec<f64>,
    pub fats: Vec<f64>,
}

impl From<&Summary> for ProgressResponse {
    fn from(s: &Summary) -> Self {
        let series = &s.daily_series;
        Self {
            dates: series.iter().map(|d| d.date).collect(),
            workout_calories: series.iter().map(|d| d.calories_burned).collect(),
            meal_calories: series.iter().map(|d| d.calories_consumed).collect(),
            protein: series.iter().map(|d| round_to(d.protein_g, 1)).collect(),
            carbs: series.iter().map(|d| round_to(d.carbs_g, 1)).collect(),
            fats: series.iter().map(|d| round_to(d.fats_g, 1)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayTotals {
    pub calories_burned: i64,
    pub calories_consumed: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl From<&Summary> for TodayTotals {
    fn from(s: &Summary) -> Self {
        Self {
            calories_burned: s.total_calories_burned,
            calories_consumed: s.total_calories_consumed,
            protein: round_to(s.total_protein_g, 1),
            carbs: round_to(s.total_carbs_g, 1),
            fats: round_to(s.total_fats_g, 1),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: Date,
    pub today: TodayTotals,
    pub workouts: Vec<WorkoutResponse>,
    pub meals: Vec<MealResponse>,
    pub week_workouts: i64,
    pub week_meals: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::range::DateRange;
    use time::macros::date;

    fn summary() -> Summary {
        let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 02));
        let mut day1 = DailyTotals::zero(date!(2024 - 06 - 01));
        day1.calories_consumed = 480;
        day1.protein_g = 33.333;
        day1.carbs_g = 51.06;
        day1.fats_g = 12.04;
        day1.meal_count = 2;
        Summary {
            range,
            total_calories_burned: 0,
            total_calories_consumed: 480,
            total_protein_g: 33.333,
            total_carbs_g: 51.06,
            total_fats_g: 12.04,
            workout_count: 0,
            meal_count: 2,
            daily_series: vec![day1, DailyTotals::zero(date!(2024 - 06 - 02))],
        }
    }

    #[test]
    fn summary_response_rounds_macros_only() {
        let json = serde_json::to_value(SummaryResponse::from(&summary())).unwrap();
        assert_eq!(json["start"], "2024-06-01");
        assert_eq!(json["total_calories_consumed"], 480);
        assert_eq!(json["total_protein"], 33.3);
        assert_eq!(json["total_carbs"], 51.1);
        assert_eq!(json["total_fats"], 12.0);
        assert_eq!(json["daily_series"].as_array().unwrap().len(), 2);
        assert_eq!(json["daily_series"][1]["calories_consumed"], 0);
    }

    #[test]
    fn progress_series_are_parallel() {
        let p = ProgressResponse::from(&summary());
        assert_eq!(p.dates.len(), 2);
        assert_eq!(p.workout_calories, vec![0, 0]);
        assert_eq!(p.meal_calories, vec![480, 0]);
        assert_eq!(p.protein, vec![33.3, 0.0]);
        assert_eq!(p.carbs.len(), p.fats.len());
    }

    #[test]
    fn summary_query_defaults_to_series() {
        let q: SummaryQuery =
            serde_json::from_str(r#"{"start": "2024-01-01", "end": "2024-01-31"}"#).unwrap();
        assert!(q.series);
        assert_eq!(q.end, date!(2024 - 01 - 31));
    }
}

//! Day-level aggregation of vitals logs and meal entries.

use std::collections::BTreeMap;

use healthmate_client::{MealEntry, VitalsLogEntry, WorkoutEntry};

use crate::transforms::{bucket_day, day_in_range};
use crate::types::DailyAggregate;

/// Merge vitals logs and meals into per-day aggregates for the inclusive
/// `[start_day, end_day]` range, ascending by day.
///
/// The vitals history drives which days exist: a day with meals but no
/// vitals log produces no aggregate. When the history carries more than one
/// entry for the same day (the backend upserts, but stale fetches happen)
/// the last entry in fetch order wins. Entries with an unusable date are
/// skipped.
pub fn aggregate_days(
    vitals: &[VitalsLogEntry],
    meals: &[MealEntry],
    start_day: &str,
    end_day: &str,
) -> Vec<DailyAggregate> {
    let mut days: BTreeMap<String, DailyAggregate> = BTreeMap::new();

    for entry in vitals {
        let Some(day) = bucket_day(&entry.date) else {
            continue;
        };
        if !day_in_range(day, start_day, end_day) {
            continue;
        }
        days.insert(
            day.to_string(),
            DailyAggregate {
                date: day.to_string(),
                weight: entry.weight,
                water_intake: entry.water_intake,
                sleep_duration: entry.sleep_duration,
                calories_burned: entry.calories_burned,
                calorie_target: entry.daily_calorie_target,
                water_target: entry.daily_water_target,
                sleep_target: entry.daily_sleep_target,
                ..DailyAggregate::default()
            },
        );
    }

    for meal in meals {
        let Some(day) = bucket_day(&meal.date) else {
            continue;
        };
        let Some(agg) = days.get_mut(day) else {
            continue;
        };
        agg.calories_consumed += meal.calories.unwrap_or(0.0);
        agg.protein_grams += meal.protein_grams.unwrap_or(0.0);
        agg.carbs_grams += meal.carbs_grams.unwrap_or(0.0);
        agg.fats_grams += meal.fats_grams.unwrap_or(0.0);
        agg.meal_count += 1;
    }

    days.into_values().collect()
}

/// Range-filter workouts with the same inclusive day-bucket rule.
///
/// Workouts stay a separate series; they are never folded into the vitals
/// totals.
pub fn workouts_in_range(
    workouts: &[WorkoutEntry],
    start_day: &str,
    end_day: &str,
) -> Vec<WorkoutEntry> {
    workouts
        .iter()
        .filter(|w| {
            bucket_day(&w.date).is_some_and(|day| day_in_range(day, start_day, end_day))
        })
        .cloned()
        .collect()
}

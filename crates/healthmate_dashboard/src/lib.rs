//! Daily-goal aggregation and progress engine for HealthMate data.
//!
//! The `domains` modules are pure functions over in-memory snapshots;
//! [`DashboardService`] fetches those snapshots through the client trait and
//! runs the engine over them. Nothing is cached: every call recomputes from
//! a fresh fetch.

use std::sync::Arc;

use chrono::NaiveDate;
use healthmate_client::{HealthmateClient, HealthmateError, VitalsLogEntry, WorkoutEntry};

pub mod domains;
pub mod error;
pub mod test_utils;
pub mod transforms;
pub mod types;

use crate::domains::{aggregate, goals, plan, series, streak, tips};
use crate::error::DashboardResult;
use crate::types::{ChartSeries, DailyAggregate, GoalReport, TodaySummary};

pub struct DashboardService {
    client: Arc<dyn HealthmateClient>,
}

impl DashboardService {
    pub fn new(client: Arc<dyn HealthmateClient>) -> Self {
        Self { client }
    }

    /// Assemble today's snapshot: the day's aggregate, the logging streak
    /// and the tip of the day.
    ///
    /// Weight falls back from today's log to the most recent log and then
    /// to the profile, so the dashboard always has something to show.
    pub async fn today_summary(&self, today: NaiveDate) -> DashboardResult<TodaySummary> {
        let day_key = today.format("%Y-%m-%d").to_string();
        let history = self.client.get_vitals_history().await?;
        let meals = self.client.get_user_meals().await?;

        let aggregate = aggregate::aggregate_days(&history, &meals, &day_key, &day_key)
            .into_iter()
            .next();
        let streak = streak::current_streak(&history, today);

        let weight = match aggregate.as_ref().and_then(|a| a.weight) {
            Some(w) => Some(w),
            None => match latest_logged_weight(&history) {
                Some(w) => Some(w),
                None => self.client.get_profile().await?.weight,
            },
        };

        // The tip endpoint predates some deployments; fall back to the
        // built-in weekday table when it is absent.
        let tip = match self.client.get_today_tip().await {
            Ok(tip) => tip,
            Err(HealthmateError::NotFound(_)) => tips::tip_for(today),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(day = %day_key, streak, "assembled today summary");

        Ok(TodaySummary {
            date: day_key,
            weight,
            aggregate,
            streak,
            tip,
        })
    }

    /// Goal progress for calorie intake, water and sleep against today's
    /// effective targets.
    pub async fn goal_report(&self, today: NaiveDate) -> DashboardResult<GoalReport> {
        let day_key = today.format("%Y-%m-%d").to_string();
        let history = self.client.get_vitals_history().await?;
        let meals = self.client.get_user_meals().await?;

        // Last fetched entry for the day wins, matching aggregation.
        let today_log = history
            .iter()
            .rev()
            .find(|v| transforms::bucket_day(&v.date) == Some(day_key.as_str()));

        let backend_plan = self.client.get_health_plan().await?;
        let local_plan = match &backend_plan {
            Some(_) => None,
            None => {
                let profile = self.client.get_profile().await?;
                plan::build_plan(&profile)
            }
        };
        let effective_plan = backend_plan.as_ref().or(local_plan.as_ref());

        let targets = goals::effective_targets(today_log, effective_plan);
        // The calorie goal tracks intake: today's summed meal calories
        // against the calorie target.
        let consumed = aggregate::aggregate_days(&history, &meals, &day_key, &day_key)
            .into_iter()
            .next()
            .map(|a| a.calories_consumed)
            .unwrap_or(0.0);
        let water = today_log.and_then(|l| l.water_intake).unwrap_or(0.0);
        let sleep = today_log.and_then(|l| l.sleep_duration).unwrap_or(0.0);

        Ok(GoalReport {
            date: day_key,
            calories: goals::evaluate("calories", consumed, targets.calories),
            water: goals::evaluate("water", water, targets.water),
            sleep: goals::evaluate("sleep", sleep, targets.sleep),
            targets,
        })
    }

    /// Per-day aggregates for an inclusive day range.
    pub async fn aggregate_range(
        &self,
        start_day: &str,
        end_day: &str,
    ) -> DashboardResult<Vec<DailyAggregate>> {
        let history = self.client.get_vitals_history().await?;
        let meals = self.client.get_user_meals().await?;
        Ok(aggregate::aggregate_days(&history, &meals, start_day, end_day))
    }

    /// Workouts in an inclusive day range, kept as their own series.
    pub async fn workouts_in_range(
        &self,
        start_day: &str,
        end_day: &str,
    ) -> DashboardResult<Vec<WorkoutEntry>> {
        let workouts = self.client.get_user_workouts().await?;
        Ok(aggregate::workouts_in_range(&workouts, start_day, end_day))
    }

    /// Chart series over the vitals history for the given metric keys.
    /// With no explicit range, charts the last 7 days through `today`.
    pub async fn metric_series(
        &self,
        metric_keys: &[String],
        range: Option<(&str, &str)>,
        today: NaiveDate,
    ) -> DashboardResult<ChartSeries> {
        let history = self.client.get_vitals_history().await?;
        let records = history
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let default = series::default_range(today);
        let (start, end) = range.unwrap_or((default.0.as_str(), default.1.as_str()));
        Ok(series::build_series(&records, "date", metric_keys, start, end))
    }

    /// Logging streak computed locally from the fetched history.
    pub async fn streak(&self, today: NaiveDate) -> DashboardResult<u32> {
        let history = self.client.get_vitals_history().await?;
        Ok(streak::current_streak(&history, today))
    }
}

fn latest_logged_weight(history: &[VitalsLogEntry]) -> Option<f64> {
    history
        .iter()
        .filter(|v| v.weight.is_some())
        .filter_map(|v| transforms::parse_day(&v.date).map(|d| (d, v)))
        .max_by_key(|(d, _)| *d)
        .and_then(|(_, v)| v.weight)
}

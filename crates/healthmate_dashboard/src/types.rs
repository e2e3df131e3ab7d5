//! Derived types produced by the dashboard engine.

use healthmate_client::DailyTip;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One day of merged vitals and meal totals.
///
/// A day exists only when a vitals log exists for it; meal totals for a day
/// without a log are never surfaced. Vitals fields stay `Option` so "not
/// logged" is distinguishable from an explicit zero, while meal totals sum
/// missing numerics as 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyAggregate {
    /// Day bucket key (`YYYY-MM-DD`).
    pub date: String,
    pub weight: Option<f64>,
    pub water_intake: Option<f64>,
    pub sleep_duration: Option<f64>,
    pub calories_burned: Option<f64>,
    /// Sum of meal calories logged on this day.
    pub calories_consumed: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
    pub meal_count: usize,
    /// Per-day goal overrides carried from the vitals log, if any.
    pub calorie_target: Option<f64>,
    pub water_target: Option<f64>,
    pub sleep_target: Option<f64>,
}

/// Resolved daily goal targets after override resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyTargets {
    pub calories: Option<f64>,
    pub water: Option<f64>,
    pub sleep: Option<f64>,
}

/// Coarse feedback band for a goal, first match wins on percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FeedbackTier {
    /// Percent reached 100.
    Achieved,
    /// Percent at least 80.
    Close,
    Behind,
    /// No usable target was set for the metric.
    NoGoal,
}

/// Progress against one metric's daily target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GoalProgress {
    pub metric: String,
    pub actual: f64,
    pub target: Option<f64>,
    /// Completion percent, rounded and capped at 100.
    pub percent: u32,
    pub tier: FeedbackTier,
}

/// Index-aligned values for one charted metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricSeries {
    pub metric: String,
    pub values: Vec<f64>,
}

/// Chart-ready output: one label per record, one value row per metric.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartSeries {
    /// Short human labels ("Feb 3" style), ascending by date.
    pub labels: Vec<String>,
    pub series: Vec<MetricSeries>,
}

/// Snapshot of today assembled by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TodaySummary {
    pub date: String,
    /// Today's logged weight, falling back to the latest log and then the
    /// profile weight.
    pub weight: Option<f64>,
    pub aggregate: Option<DailyAggregate>,
    pub streak: u32,
    pub tip: DailyTip,
}

/// Goal progress for the three tracked daily metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GoalReport {
    pub date: String,
    pub targets: DailyTargets,
    pub calories: GoalProgress,
    pub water: GoalProgress,
    pub sleep: GoalProgress,
}

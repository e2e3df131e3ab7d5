//! `HealthmateClient` trait, wire models and a reqwest-based implementation
//! for the HealthMate backend REST API.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod retry;

#[derive(Debug, Error)]
pub enum HealthmateError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl HealthmateError {
    /// Whether a retry could plausibly succeed: transport failures and
    /// server-side errors only. Auth, validation and 404s are final.
    pub fn is_transient(&self) -> bool {
        match self {
            HealthmateError::Http(_) => true,
            HealthmateError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// The authenticated user's profile as stored by the backend.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    /// Height in centimeters.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub health_goal: Option<String>,
}

/// One vitals log per user per calendar day. The backend upserts on
/// (user, date); the `date` field stays a raw string so day bucketing on the
/// consumer side is a literal prefix operation, tolerant of both
/// `YYYY-MM-DD` and full timestamp forms.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalsLogEntry {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub weight: Option<f64>,
    /// Liters.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub water_intake: Option<f64>,
    /// Hours.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub sleep_duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
    /// Per-day goal overrides; the backend serializes 0 for "unset".
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub daily_calorie_target: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub daily_water_target: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub daily_sleep_target: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    pub meal_type: MealType,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub calories: Option<f64>,
    #[serde(default, rename = "protein", deserialize_with = "deserialize_opt_f64")]
    pub protein_grams: Option<f64>,
    #[serde(default, rename = "carbs", deserialize_with = "deserialize_opt_f64")]
    pub carbs_grams: Option<f64>,
    #[serde(default, rename = "fats", deserialize_with = "deserialize_opt_f64")]
    pub fats_grams: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Cardio,
    Strength,
    Yoga,
    Sports,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    pub exercise_type: ExerciseType,
    /// Minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub calories_burned: Option<f64>,
    pub notes: Option<String>,
}

/// Backend-generated health plan. Water and sleep recommendations arrive as
/// descriptive strings ("2.5 Liters", "7-8 Hours"); consumers that need a
/// number run them through a tolerant normalizer first.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthPlan {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub calculated_bmi: Option<f64>,
    pub bmi_category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub daily_calories: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub protein_grams: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub carbs_grams: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub fats_grams: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub daily_water_intake: Option<String>,
    pub sleep_recommendation: Option<String>,
    /// Exercise recommendations; older backend payloads call this `exercisePlan`.
    #[serde(default, alias = "exercisePlan")]
    pub recommendations: Vec<String>,
    /// Diet suggestions; older backend payloads call this `dietPlan`.
    #[serde(default, alias = "dietPlan")]
    pub meal_suggestions: Vec<String>,
    pub goal: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct BmiStatus {
    pub bmi: f64,
    pub category: String,
}

/// Daily insight served by the backend tip endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub struct DailyTip {
    pub title: String,
    pub tip: String,
    pub icon: String,
    pub color: String,
}

/// Upsert payload for `POST /api/analytics/log`. One entry per calendar day;
/// re-posting the same date overwrites that day's log.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsRequest {
    pub date: String,
    pub weight: Option<f64>,
    pub calories_burned: Option<f64>,
    pub water_intake: Option<f64>,
    pub sleep_duration: Option<f64>,
    pub notes: Option<String>,
    pub daily_calorie_target: Option<f64>,
    pub daily_water_target: Option<f64>,
    pub daily_sleep_target: Option<f64>,
}

/// Payload for `POST /api/user/update-metrics`; the backend regenerates the
/// health plan as a side effect.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub health_goal: Option<String>,
}

fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string().into()),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Tolerant numeric field: accepts a JSON number, a numeric string, or null.
/// Anything else is a deserialization error.
fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}")))
        }
        Some(other) => Err(D::Error::custom(format!(
            "expected number or numeric string, got {other}"
        ))),
    }
}

#[async_trait]
pub trait HealthmateClient: Send + Sync + 'static {
    async fn get_profile(&self) -> Result<UserProfile, HealthmateError>;
    async fn update_metrics(&self, update: &MetricsUpdate) -> Result<(), HealthmateError>;

    /// `None` until the user has completed their profile and the backend has
    /// generated a plan.
    async fn get_health_plan(&self) -> Result<Option<HealthPlan>, HealthmateError>;
    async fn get_bmi_status(&self) -> Result<BmiStatus, HealthmateError>;

    async fn get_vitals_history(&self) -> Result<Vec<VitalsLogEntry>, HealthmateError>;
    async fn log_daily_stats(&self, stats: &DailyStatsRequest) -> Result<(), HealthmateError>;
    async fn get_streak(&self) -> Result<u32, HealthmateError>;

    async fn get_user_meals(&self) -> Result<Vec<MealEntry>, HealthmateError>;
    async fn add_meal(&self, meal: &MealEntry) -> Result<MealEntry, HealthmateError>;
    async fn delete_meal(&self, meal_id: &str) -> Result<(), HealthmateError>;

    async fn get_user_workouts(&self) -> Result<Vec<WorkoutEntry>, HealthmateError>;
    async fn add_workout(&self, workout: &WorkoutEntry) -> Result<WorkoutEntry, HealthmateError>;
    async fn delete_workout(&self, workout_id: &str) -> Result<(), HealthmateError>;

    async fn get_today_tip(&self) -> Result<DailyTip, HealthmateError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn vitals_entry_accepts_numeric_strings() {
        let payload = json!({
            "id": 42,
            "date": "2026-02-01",
            "weight": "70.5",
            "waterIntake": 2.5,
            "sleepDuration": null,
            "dailyCalorieTarget": 2000
        });
        let entry: super::VitalsLogEntry =
            serde_json::from_value(payload).expect("deserialize vitals entry");
        assert_eq!(entry.id.as_deref(), Some("42"));
        assert_eq!(entry.weight, Some(70.5));
        assert_eq!(entry.water_intake, Some(2.5));
        assert_eq!(entry.sleep_duration, None);
        assert_eq!(entry.daily_calorie_target, Some(2000.0));
    }

    #[test]
    fn vitals_entry_rejects_non_numeric_weight() {
        let payload = json!({"date": "2026-02-01", "weight": {"kg": 70}});
        let res: Result<super::VitalsLogEntry, _> = serde_json::from_value(payload);
        assert!(res.is_err());
    }

    #[test]
    fn meal_type_unknown_maps_to_unknown() {
        let payload = json!({"date": "2026-02-01", "mealType": "Brunch", "calories": 400});
        let meal: super::MealEntry = serde_json::from_value(payload).expect("deserialize meal");
        assert_eq!(meal.meal_type, super::MealType::Unknown);
        assert_eq!(meal.calories, Some(400.0));
    }

    #[test]
    fn exercise_type_is_lowercase_on_the_wire() {
        let payload = json!({"date": "2026-02-01", "exerciseType": "cardio", "duration": 30});
        let w: super::WorkoutEntry = serde_json::from_value(payload).expect("deserialize workout");
        assert_eq!(w.exercise_type, super::ExerciseType::Cardio);
        assert_eq!(w.duration_minutes, 30);
    }

    #[test]
    fn health_plan_accepts_legacy_field_names() {
        let payload = json!({
            "calculatedBmi": 23.1,
            "bmiCategory": "Normal",
            "dailyCalories": 2000,
            "dailyWaterIntake": "2.5 Liters",
            "sleepRecommendation": "7-8 Hours",
            "dietPlan": ["Breakfast: Oatmeal with Berries"],
            "exercisePlan": ["Daily 30 min brisk walk"]
        });
        let plan: super::HealthPlan = serde_json::from_value(payload).expect("deserialize plan");
        assert_eq!(plan.daily_calories, Some(2000.0));
        assert_eq!(plan.meal_suggestions.len(), 1);
        assert_eq!(plan.recommendations.len(), 1);
        assert_eq!(plan.daily_water_intake.as_deref(), Some("2.5 Liters"));
    }

    #[test]
    fn transient_errors_are_classified() {
        let api = super::HealthmateError::Api {
            status: 503,
            body: "unavailable".into(),
        };
        assert!(api.is_transient());
        let auth = super::HealthmateError::Auth("expired token".into());
        assert!(!auth.is_transient());
    }
}

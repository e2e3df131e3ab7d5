//! In-memory mock client for service tests.

use async_trait::async_trait;
use healthmate_client::{
    BmiStatus, DailyStatsRequest, DailyTip, HealthPlan, HealthmateClient, HealthmateError,
    MealEntry, MetricsUpdate, UserProfile, VitalsLogEntry, WorkoutEntry,
};

/// Canned-fixture implementation of [`HealthmateClient`]. Populate the
/// public fields and hand it to the service under test.
#[derive(Clone, Debug, Default)]
pub struct MockHealthmateClient {
    pub profile: UserProfile,
    pub plan: Option<HealthPlan>,
    pub vitals: Vec<VitalsLogEntry>,
    pub meals: Vec<MealEntry>,
    pub workouts: Vec<WorkoutEntry>,
    pub streak: u32,
    pub tip: Option<DailyTip>,
    pub bmi: Option<BmiStatus>,
}

#[async_trait]
impl HealthmateClient for MockHealthmateClient {
    async fn get_profile(&self) -> Result<UserProfile, HealthmateError> {
        Ok(self.profile.clone())
    }

    async fn update_metrics(&self, _update: &MetricsUpdate) -> Result<(), HealthmateError> {
        Ok(())
    }

    async fn get_health_plan(&self) -> Result<Option<HealthPlan>, HealthmateError> {
        Ok(self.plan.clone())
    }

    async fn get_bmi_status(&self) -> Result<BmiStatus, HealthmateError> {
        self.bmi
            .clone()
            .ok_or_else(|| HealthmateError::NotFound("no bmi status".into()))
    }

    async fn get_vitals_history(&self) -> Result<Vec<VitalsLogEntry>, HealthmateError> {
        Ok(self.vitals.clone())
    }

    async fn log_daily_stats(&self, _stats: &DailyStatsRequest) -> Result<(), HealthmateError> {
        Ok(())
    }

    async fn get_streak(&self) -> Result<u32, HealthmateError> {
        Ok(self.streak)
    }

    async fn get_user_meals(&self) -> Result<Vec<MealEntry>, HealthmateError> {
        Ok(self.meals.clone())
    }

    async fn add_meal(&self, meal: &MealEntry) -> Result<MealEntry, HealthmateError> {
        Ok(meal.clone())
    }

    async fn delete_meal(&self, _meal_id: &str) -> Result<(), HealthmateError> {
        Ok(())
    }

    async fn get_user_workouts(&self) -> Result<Vec<WorkoutEntry>, HealthmateError> {
        Ok(self.workouts.clone())
    }

    async fn add_workout(&self, workout: &WorkoutEntry) -> Result<WorkoutEntry, HealthmateError> {
        Ok(workout.clone())
    }

    async fn delete_workout(&self, _workout_id: &str) -> Result<(), HealthmateError> {
        Ok(())
    }

    async fn get_today_tip(&self) -> Result<DailyTip, HealthmateError> {
        self.tip
            .clone()
            .ok_or_else(|| HealthmateError::NotFound("no tip configured".into()))
    }
}

/// Vitals log with just the fields most tests care about.
pub fn vitals_entry(date: &str) -> VitalsLogEntry {
    VitalsLogEntry {
        date: date.to_string(),
        ..VitalsLogEntry::default()
    }
}

pub fn meal_entry(date: &str, calories: f64) -> MealEntry {
    MealEntry {
        id: None,
        date: date.to_string(),
        meal_type: healthmate_client::MealType::Lunch,
        calories: Some(calories),
        protein_grams: None,
        carbs_grams: None,
        fats_grams: None,
        notes: None,
    }
}

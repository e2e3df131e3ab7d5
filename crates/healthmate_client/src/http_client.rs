//! HTTP client implementation for the HealthMate backend API.
//!
//! This module provides a reqwest-based implementation of the [`HealthmateClient`](crate::HealthmateClient) trait.

use crate::retry::RetryPolicy;
use crate::{
    BmiStatus, DailyStatsRequest, DailyTip, HealthPlan, HealthmateClient, HealthmateError,
    MealEntry, MetricsUpdate, UserProfile, VitalsLogEntry, WorkoutEntry,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the HealthMate backend API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestHealthmateClient {
    base_url: String,
    api_token: SecretString,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestHealthmateClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the HealthMate backend (e.g., "http://localhost:8080")
    /// * `api_token` - The bearer token obtained from the auth endpoints
    pub fn new(base_url: &str, api_token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
            retry: RetryPolicy::default(),
        }
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        metrics::counter!("healthmate_client_requests_total", "method" => "GET").increment(1);
        self.client
            .get(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    /// Build an authenticated POST request.
    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        metrics::counter!("healthmate_client_requests_total", "method" => "POST").increment(1);
        self.client
            .post(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    /// Build an authenticated DELETE request.
    fn delete_request(&self, url: &str) -> reqwest::RequestBuilder {
        metrics::counter!("healthmate_client_requests_total", "method" => "DELETE").increment(1);
        self.client
            .delete(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HealthmateError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), HealthmateError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(())
    }

    /// GET a JSON payload, retrying transient failures with backoff.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, HealthmateError> {
        self.retry
            .retry_async_when(
                || async move { self.execute_json(self.get_request(url)).await },
                HealthmateError::is_transient,
            )
            .await
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> HealthmateError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            404 => HealthmateError::NotFound(body_snippet),
            401 | 403 => HealthmateError::Auth(body_snippet),
            400 | 422 => HealthmateError::InvalidInput(body_snippet),
            _ => HealthmateError::Api {
                status,
                body: body_snippet,
            },
        }
    }

    /// Normalize a log date to `YYYY-MM-DD`: accepts a plain day, an RFC3339
    /// timestamp, or a naive datetime, and keeps the day part only.
    fn normalize_log_date(s: &str) -> Option<String> {
        if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
            return Some(s.to_string());
        }
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive().format("%Y-%m-%d").to_string());
        }
        if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Some(ndt.date().format("%Y-%m-%d").to_string());
        }
        None
    }

    fn require_day(s: &str) -> Result<String, HealthmateError> {
        Self::normalize_log_date(s)
            .ok_or_else(|| HealthmateError::InvalidInput(format!("invalid date: {s}")))
    }
}

#[async_trait]
impl HealthmateClient for ReqwestHealthmateClient {
    async fn get_profile(&self) -> Result<UserProfile, HealthmateError> {
        let url = format!("{}/api/user/profile", self.base_url);
        self.get_json(&url).await
    }

    async fn update_metrics(&self, update: &MetricsUpdate) -> Result<(), HealthmateError> {
        let url = format!("{}/api/user/update-metrics", self.base_url);
        self.execute_empty(self.post_request(&url).json(update))
            .await
    }

    async fn get_health_plan(&self) -> Result<Option<HealthPlan>, HealthmateError> {
        let url = format!("{}/api/user/plan", self.base_url);
        match self.get_json::<HealthPlan>(&url).await {
            Ok(plan) => Ok(Some(plan)),
            // Plan does not exist until the profile is complete.
            Err(HealthmateError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_bmi_status(&self) -> Result<BmiStatus, HealthmateError> {
        let url = format!("{}/api/user/bmi-status", self.base_url);
        self.get_json(&url).await
    }

    async fn get_vitals_history(&self) -> Result<Vec<VitalsLogEntry>, HealthmateError> {
        let url = format!("{}/api/analytics/history", self.base_url);
        self.get_json(&url).await
    }

    async fn log_daily_stats(&self, stats: &DailyStatsRequest) -> Result<(), HealthmateError> {
        let url = format!("{}/api/analytics/log", self.base_url);
        let mut payload = stats.clone();
        payload.date = Self::require_day(&payload.date)?;
        self.execute_empty(self.post_request(&url).json(&payload))
            .await
    }

    async fn get_streak(&self) -> Result<u32, HealthmateError> {
        let url = format!("{}/api/analytics/streak", self.base_url);
        self.get_json(&url).await
    }

    async fn get_user_meals(&self) -> Result<Vec<MealEntry>, HealthmateError> {
        let url = format!("{}/api/meals/user", self.base_url);
        self.get_json(&url).await
    }

    async fn add_meal(&self, meal: &MealEntry) -> Result<MealEntry, HealthmateError> {
        let url = format!("{}/api/meals", self.base_url);
        let mut payload = meal.clone();
        payload.date = Self::require_day(&payload.date)?;
        self.execute_json(self.post_request(&url).json(&payload))
            .await
    }

    async fn delete_meal(&self, meal_id: &str) -> Result<(), HealthmateError> {
        let url = format!("{}/api/meals/{}", self.base_url, meal_id);
        self.execute_empty(self.delete_request(&url)).await
    }

    async fn get_user_workouts(&self) -> Result<Vec<WorkoutEntry>, HealthmateError> {
        let url = format!("{}/api/workouts/user", self.base_url);
        self.get_json(&url).await
    }

    async fn add_workout(&self, workout: &WorkoutEntry) -> Result<WorkoutEntry, HealthmateError> {
        let url = format!("{}/api/workouts/add", self.base_url);
        let mut payload = workout.clone();
        payload.date = Self::require_day(&payload.date)?;
        self.execute_json(self.post_request(&url).json(&payload))
            .await
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<(), HealthmateError> {
        let url = format!("{}/api/workouts/{}", self.base_url, workout_id);
        self.execute_empty(self.delete_request(&url)).await
    }

    async fn get_today_tip(&self) -> Result<DailyTip, HealthmateError> {
        let url = format!("{}/api/tips/today", self.base_url);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_log_date_accepts_day() {
        assert_eq!(
            ReqwestHealthmateClient::normalize_log_date("2026-02-01").as_deref(),
            Some("2026-02-01")
        );
    }

    #[test]
    fn normalize_log_date_truncates_timestamps() {
        assert_eq!(
            ReqwestHealthmateClient::normalize_log_date("2026-02-01T08:30:00").as_deref(),
            Some("2026-02-01")
        );
        assert_eq!(
            ReqwestHealthmateClient::normalize_log_date("2026-02-01T08:30:00Z").as_deref(),
            Some("2026-02-01")
        );
    }

    #[test]
    fn normalize_log_date_rejects_garbage() {
        assert!(ReqwestHealthmateClient::normalize_log_date("not-a-date").is_none());
        assert!(ReqwestHealthmateClient::normalize_log_date("").is_none());
    }
}

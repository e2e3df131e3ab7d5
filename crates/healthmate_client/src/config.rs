use crate::HealthmateError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, HealthmateError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, HealthmateError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("HEALTHMATE_API_TOKEN")
            .ok_or_else(|| HealthmateError::Config("HEALTHMATE_API_TOKEN missing".into()))?;
        let base_url =
            get("HEALTHMATE_BASE_URL").unwrap_or_else(|| "http://localhost:8080".into());
        Ok(Self {
            api_token: SecretString::new(token.into()),
            base_url,
        })
    }
}

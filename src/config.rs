use serde::Deserialize;

use crate::domain::{errors::AppError, theme::Theme};

/// Start-up settings of the dashboard.
///
/// Read from a JSON document; any missing key takes its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Endpoint returning a JSON array of transactions. Without it the
    /// bundled sample data is shown.
    pub transactions_url: Option<String>,
    /// Endpoint returning the revenue chart as JSON
    pub revenue_url: Option<String>,
    /// Re-fetch interval for the HTTP feed; fetch once when unset
    pub refresh_interval_ms: Option<u32>,
    pub initial_theme: Theme,
    pub debug_logging: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            transactions_url: None,
            revenue_url: None,
            refresh_interval_ms: None,
            initial_theme: Theme::Light,
            debug_logging: cfg!(debug_assertions),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("invalid dashboard config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.refresh_interval_ms == Some(0) {
            return Err(AppError::ConfigError(
                "refresh_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.revenue_url.is_some() && self.transactions_url.is_none() {
            return Err(AppError::ConfigError(
                "revenue_url requires transactions_url".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether data should come from the HTTP feed
    pub fn uses_http_feed(&self) -> bool {
        self.transactions_url.is_some()
    }
}

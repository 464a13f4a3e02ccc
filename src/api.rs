//! weatherapi.com forecast client

use std::time::Duration;

use crate::state::WeatherData;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// The screen always shows a one-week outlook.
pub const FORECAST_DAYS: u8 = 7;

/// Forecast error type
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("no weather API key configured (set WEATHER_API_KEY)")]
    MissingApiKey,
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("forecast API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed forecast response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ForecastClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ForecastError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// `.../forecast.json?key=<API_KEY>&q=<lat>,<lon>&days=7`
    pub fn forecast_url(&self, lat: f64, lon: f64) -> Result<String, ForecastError> {
        let key = self.api_key.as_deref().ok_or(ForecastError::MissingApiKey)?;
        Ok(format!(
            "{}/forecast.json?key={}&q={},{}&days={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(key),
            lat,
            lon,
            FORECAST_DAYS
        ))
    }

    /// Fetch the forecast payload for the given coordinates
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<WeatherData, ForecastError> {
        let url = self.forecast_url(lat, lon)?;
        tracing::debug!(lat, lon, days = FORECAST_DAYS, "requesting forecast");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "forecast request rejected");
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

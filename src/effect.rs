//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::ForecastClient;
use crate::location::LocationProvider;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read the device coordinates once
    AcquireLocation,
    /// Fetch the 7-day forecast for the given coordinates
    FetchForecast { lat: f64, lon: f64 },
}

/// External dependencies the effects run against
pub struct Services {
    pub forecast: ForecastClient,
    pub locator: Box<dyn LocationProvider>,
}

impl Services {
    pub fn new(forecast: ForecastClient, locator: Box<dyn LocationProvider>) -> Self {
        Self { forecast, locator }
    }

    /// Execute an effect and turn its outcome into the result action.
    pub async fn run(&self, effect: Effect) -> Action {
        match effect {
            Effect::AcquireLocation => match self.locator.current_position().await {
                Ok(coords) => {
                    tracing::info!(lat = coords.lat, lon = coords.lon, "location acquired");
                    Action::LocationDidAcquire(coords)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error getting location");
                    Action::LocationDidError(e.to_string())
                }
            },
            Effect::FetchForecast { lat, lon } => {
                match self.forecast.fetch_forecast(lat, lon).await {
                    Ok(data) => {
                        tracing::info!(
                            location = %data.location.name,
                            days = data.forecast.forecastday.len(),
                            "forecast loaded"
                        );
                        Action::ForecastDidLoad(data)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching weather data");
                        Action::ForecastDidError(e.to_string())
                    }
                }
            }
        }
    }
}

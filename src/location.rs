//! Device location lookup
//!
//! A terminal has no GPS, so the "device location" is either resolved from
//! the public IP address or pinned to fixed coordinates from the config.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::state::Coordinates;

pub const DEFAULT_LOOKUP_URL: &str = "http://ip-api.com/json/";

#[derive(thiserror::Error, Debug)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("location lookup failed: {0}")]
    Lookup(String),
    #[error("malformed location response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single on-demand read of the current coordinates
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Pick the provider: fixed coordinates win over the IP lookup.
pub fn locator_for(
    fixed: Option<Coordinates>,
    lookup_url: &str,
    timeout: Duration,
) -> Result<Box<dyn LocationProvider>, LocationError> {
    match fixed {
        Some(coords) => Ok(Box::new(FixedLocation(coords))),
        None => Ok(Box::new(IpLocator::new(lookup_url, timeout)?)),
    }
}

// ============================================================================
// Fixed coordinates
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

// ============================================================================
// IP geolocation
// ============================================================================

/// ip-api.com style response
#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: Option<String>,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct IpLocator {
    http: reqwest::Client,
    url: String,
}

impl IpLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LocationError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl LocationProvider for IpLocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Lookup(format!("HTTP {}", status.as_u16())));
        }

        let body = response.text().await?;
        let data: IpLookupResponse = serde_json::from_str(&body)?;
        if let Some(status) = data.status.as_deref() {
            if status != "success" {
                let reason = data.message.unwrap_or_else(|| status.to_string());
                return Err(LocationError::Lookup(reason));
            }
        }

        match (data.lat, data.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
            _ => Err(LocationError::Lookup("response carried no coordinates".into())),
        }
    }
}

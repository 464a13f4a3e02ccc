//! Actions for the weather screen

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, WeatherData};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Permission category =====
    /// Intent: screen mounted, ask for location access (once)
    PermissionRequest,

    /// User allowed location access
    PermissionGrant,

    /// User refused location access
    PermissionDeny,

    // ===== Location category =====
    /// Result: coordinates read from the location provider
    LocationDidAcquire(Coordinates),

    /// Result: location read failed
    LocationDidError(String),

    // ===== Forecast category =====
    /// Result: forecast payload fetched and parsed
    ForecastDidLoad(WeatherData),

    /// Result: forecast request failed (network, status or parse)
    ForecastDidError(String),

    // ===== UI category =====
    /// Toggle between Fahrenheit and Celsius
    UiToggleUnits,

    /// Scroll the hourly strip by the given number of items
    UiScrollHourly(i32),

    // ===== Uncategorized (global) =====
    /// Force a re-render (theme follows the wall clock)
    Render,

    /// Spinner frame
    Tick,

    /// Exit the application
    Quit,
}

//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Forecast payload (weatherapi.com `forecast.json`)
// ============================================================================

/// Root payload from the forecast API. Never mutated after it lands in state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherData {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    #[serde(default)]
    pub localtime_epoch: i64,
    #[serde(default)]
    pub localtime: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative icon path, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`
    pub icon: String,
    pub code: u16,
}

impl Condition {
    /// The icon path encodes day/night variants.
    pub fn is_night_icon(&self) -> bool {
        self.icon.contains("/night/")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub condition: Condition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub date_epoch: i64,
    pub day: Day,
    #[serde(default)]
    pub hour: Vec<Hour>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Day {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Hour {
    pub time_epoch: i64,
    /// Location-local `YYYY-MM-DD HH:MM`
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
}

/// Device coordinates as read from the location provider
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

// ============================================================================
// Preferences
// ============================================================================

/// Temperature unit preference
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Fahrenheit => TempUnit::Celsius,
            TempUnit::Celsius => TempUnit::Fahrenheit,
        }
    }

    /// Select the raw reading for this unit from a `(celsius, fahrenheit)` pair.
    pub fn pick(&self, celsius: f64, fahrenheit: f64) -> f64 {
        match self {
            TempUnit::Fahrenheit => fahrenheit,
            TempUnit::Celsius => celsius,
        }
    }

    /// Convert a reading in this unit to celsius (for colour grading).
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TempUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TempUnit::Celsius => value,
        }
    }
}

/// How the weekly summary names its days
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLabels {
    /// Weekday of the forecast date
    Calendar,
    /// Sunday-based day index looked up in a Monday-first table, so every
    /// name comes out one day late
    #[default]
    Legacy,
}

/// Answer to the location permission question, decided ahead of time or asked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PermissionPolicy {
    #[default]
    Prompt,
    Granted,
    Denied,
}

// ============================================================================
// Screen lifecycle
// ============================================================================

pub const PERMISSION_DENIED_MESSAGE: &str = "Permission to access location was denied";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching weather data";
pub const LOCATION_ERROR_MESSAGE: &str = "Error getting location";

/// Root screen lifecycle. Only moves forward within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ScreenPhase {
    #[default]
    Init,
    RequestingPermission,
    PermissionDenied,
    /// Permission granted, waiting on the single coordinate read
    LocationAcquired,
    LocationError,
    FetchingForecast,
    FetchError,
    Loaded,
}

impl ScreenPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScreenPhase::PermissionDenied
                | ScreenPhase::LocationError
                | ScreenPhase::FetchError
                | ScreenPhase::Loaded
        )
    }

    /// Whether something is in flight (drives the spinner)
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ScreenPhase::LocationAcquired | ScreenPhase::FetchingForecast
        )
    }
}

/// Spinner timing
pub const LOADING_ANIM_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Screen", label = "Phase", debug_fmt)]
    pub phase: ScreenPhase,

    #[debug(section = "Screen", label = "Permission", debug_fmt)]
    pub permission: PermissionPolicy,

    #[debug(section = "Screen", label = "Error", debug_fmt)]
    pub error: Option<String>,

    #[debug(section = "Location", label = "Coordinates", debug_fmt)]
    pub coordinates: Option<Coordinates>,

    /// Forecast payload, present only after a successful fetch
    #[debug(section = "Weather", label = "Payload", debug_fmt)]
    pub weather: Option<WeatherData>,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    #[debug(section = "Weather", label = "Weekdays", debug_fmt)]
    pub weekday_labels: WeekdayLabels,

    /// First visible hourly item
    #[debug(skip)]
    pub hourly_offset: usize,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(permission: PermissionPolicy, unit: TempUnit, weekday_labels: WeekdayLabels) -> Self {
        Self {
            phase: ScreenPhase::Init,
            permission,
            error: None,
            coordinates: None,
            weather: None,
            unit,
            weekday_labels,
            hourly_offset: 0,
            tick_count: 0,
        }
    }

    /// Number of hourly samples in the first forecast day
    pub fn hourly_len(&self) -> usize {
        self.weather
            .as_ref()
            .and_then(|w| w.forecast.forecastday.first())
            .map(|day| day.hour.len())
            .unwrap_or(0)
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.tick_count as usize) % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            PermissionPolicy::default(),
            TempUnit::default(),
            WeekdayLabels::default(),
        )
    }
}

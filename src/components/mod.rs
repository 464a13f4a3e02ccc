pub mod current_conditions;
pub mod hourly_strip;
pub mod permission_prompt;
pub mod primary_display;
pub mod weather_screen;
pub mod weekly_summary;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use hourly_strip::{HourlyStrip, HourlyStripProps};
pub use permission_prompt::{PermissionPrompt, PermissionPromptProps};
pub use primary_display::{PrimaryDisplay, PrimaryDisplayProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};
pub use weekly_summary::{WeeklySummary, WeeklySummaryProps};

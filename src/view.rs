//! View models derived from the forecast payload
//!
//! Everything the components draw is computed here from a borrowed
//! [`WeatherData`]; the payload itself is never modified.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Weekday};
use ratatui::style::Color;

use crate::conditions::condition_glyph;
use crate::state::{Forecast, ForecastDay, Hour, TempUnit, WeatherData, WeekdayLabels};
use crate::theme::{Rgba, Theme};

/// Displayed temperatures always round up.
pub fn ceil_temp(value: f64) -> i32 {
    // `-0.0` casts to plain 0, so "-0°" never shows up
    value.ceil() as i32
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrentView {
    pub location_name: String,
    pub temperature: i32,
    /// Raw reading in the display unit, for colour grading
    pub raw_temperature: f64,
    pub feels_like: i32,
    /// Today's high/low, absent if the forecast carried no days
    pub high_low: Option<(i32, i32)>,
    pub condition: String,
    pub glyph: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyItem {
    /// Epoch seconds of the sample
    pub key: i64,
    pub label: String,
    pub glyph: &'static str,
    pub temperature: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyRow {
    /// Forecast date (`YYYY-MM-DD`)
    pub key: String,
    pub weekday: String,
    pub glyph: &'static str,
    pub high: i32,
    pub low: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryView<'a> {
    Loading,
    Ready {
        current: CurrentView,
        hourly: Vec<HourlyItem>,
        forecast: &'a Forecast,
        overlay: Rgba,
        text: Color,
    },
}

/// Current conditions plus the first day's hourly strip.
pub fn primary_view(weather: Option<&WeatherData>, is_night: bool, unit: TempUnit) -> PrimaryView<'_> {
    let Some(weather) = weather else {
        return PrimaryView::Loading;
    };
    let theme = Theme::for_night(is_night);
    let today = weather.forecast.forecastday.first();

    let raw_temperature = unit.pick(weather.current.temp_c, weather.current.temp_f);
    let current = CurrentView {
        location_name: weather.location.name.clone(),
        temperature: ceil_temp(raw_temperature),
        raw_temperature,
        feels_like: ceil_temp(unit.pick(weather.current.feelslike_c, weather.current.feelslike_f)),
        high_low: today.map(|day| {
            (
                ceil_temp(unit.pick(day.day.maxtemp_c, day.day.maxtemp_f)),
                ceil_temp(unit.pick(day.day.mintemp_c, day.day.mintemp_f)),
            )
        }),
        condition: weather.current.condition.text.trim().to_string(),
        glyph: condition_glyph(&weather.current.condition),
    };

    let hourly = today
        .map(|day| day.hour.iter().map(|hour| hourly_item(hour, unit)).collect())
        .unwrap_or_default();

    PrimaryView::Ready {
        current,
        hourly,
        forecast: &weather.forecast,
        overlay: theme.overlay,
        text: theme.text,
    }
}

fn hourly_item(hour: &Hour, unit: TempUnit) -> HourlyItem {
    HourlyItem {
        key: hour.time_epoch,
        label: format!("{}:00", hour_of(hour)),
        glyph: condition_glyph(&hour.condition),
        temperature: ceil_temp(unit.pick(hour.temp_c, hour.temp_f)),
    }
}

/// Hour of day at the forecast location; falls back to the local clock.
fn hour_of(hour: &Hour) -> u32 {
    match NaiveDateTime::parse_from_str(&hour.time, "%Y-%m-%d %H:%M") {
        Ok(time) => time.hour(),
        Err(_) => DateTime::from_timestamp(hour.time_epoch, 0)
            .map(|utc| utc.with_timezone(&Local).hour())
            .unwrap_or(0),
    }
}

/// One row per forecast day, in the order the API returned them.
pub fn weekly_rows<F>(forecast: &Forecast, day_of_week: F, unit: TempUnit) -> Vec<DailyRow>
where
    F: Fn(&ForecastDay) -> String,
{
    forecast
        .forecastday
        .iter()
        .map(|day| DailyRow {
            key: day.date.clone(),
            weekday: day_of_week(day),
            glyph: condition_glyph(&day.day.condition),
            high: ceil_temp(unit.pick(day.day.maxtemp_c, day.day.maxtemp_f)),
            low: ceil_temp(unit.pick(day.day.mintemp_c, day.day.mintemp_f)),
        })
        .collect()
}

// ============================================================================
// Weekday naming
// ============================================================================

const LEGACY_DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday of the forecast date itself.
pub fn calendar_day_name(day: &ForecastDay) -> String {
    let weekday = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::from_timestamp(day.date_epoch, 0).map(|utc| utc.date_naive()))
        .map(|date| date.weekday());
    weekday.map(weekday_name).unwrap_or_default().to_string()
}

/// Sunday-based day index of the epoch in `tz`, read from a Monday-first
/// table. Sunday comes out as "Monday", Monday as "Tuesday", and so on.
pub fn legacy_day_name<Tz: TimeZone>(date_epoch: i64, tz: &Tz) -> &'static str {
    DateTime::from_timestamp_millis(date_epoch.saturating_mul(1000))
        .map(|utc| utc.with_timezone(tz).weekday().num_days_from_sunday() as usize)
        .map(|index| LEGACY_DAY_NAMES[index])
        .unwrap_or_default()
}

impl WeekdayLabels {
    pub fn day_name(&self, day: &ForecastDay) -> String {
        match self {
            WeekdayLabels::Calendar => calendar_day_name(day),
            WeekdayLabels::Legacy => legacy_day_name(day.date_epoch, &Local).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use crate::state::{Condition, Current, Day, Location};

    fn condition(code: u16) -> Condition {
        Condition {
            text: "Sunny".into(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
            code,
        }
    }

    fn hour(epoch: i64, time: &str, temp_f: f64) -> Hour {
        Hour {
            time_epoch: epoch,
            time: time.into(),
            temp_c: (temp_f - 32.0) * 5.0 / 9.0,
            temp_f,
            condition: condition(1000),
        }
    }

    fn day(date: &str, epoch: i64, max_f: f64, min_f: f64, hours: Vec<Hour>) -> ForecastDay {
        ForecastDay {
            date: date.into(),
            date_epoch: epoch,
            day: Day {
                maxtemp_c: 24.1,
                maxtemp_f: max_f,
                mintemp_c: 14.6,
                mintemp_f: min_f,
                condition: condition(1000),
            },
            hour: hours,
        }
    }

    fn sample() -> WeatherData {
        WeatherData {
            location: Location {
                name: "Kyiv".into(),
                ..Default::default()
            },
            current: Current {
                temp_c: 21.8,
                temp_f: 71.2,
                feelslike_c: 21.2,
                feelslike_f: 70.1,
                condition: condition(1003),
            },
            forecast: Forecast {
                forecastday: vec![
                    day(
                        "2024-06-01",
                        1_717_200_000,
                        75.4,
                        58.3,
                        vec![
                            hour(1_717_196_400, "2024-06-01 02:00", 58.5),
                            hour(1_717_189_200, "2024-06-01 00:00", 60.1),
                            hour(1_717_189_200, "2024-06-01 00:00", 60.1),
                        ],
                    ),
                    day("2024-06-02", 1_717_286_400, 80.6, 62.2, vec![]),
                ],
            },
        }
    }

    #[test]
    fn test_ceil_temp() {
        assert_eq!(ceil_temp(71.2), 72);
        assert_eq!(ceil_temp(71.0), 71);
        assert_eq!(ceil_temp(-3.7), -3);
        assert_eq!(ceil_temp(-0.4), 0);
    }

    #[test]
    fn test_primary_view_loading_without_payload() {
        assert_eq!(
            primary_view(None, false, TempUnit::Fahrenheit),
            PrimaryView::Loading
        );
    }

    #[test]
    fn test_primary_view_ceils_everything() {
        let weather = sample();
        let PrimaryView::Ready { current, hourly, .. } =
            primary_view(Some(&weather), false, TempUnit::Fahrenheit)
        else {
            panic!("expected ready view");
        };

        assert_eq!(current.temperature, 72);
        assert_eq!(current.feels_like, 71);
        assert_eq!(current.high_low, Some((76, 59)));
        assert_eq!(
            hourly.iter().map(|h| h.temperature).collect::<Vec<_>>(),
            vec![59, 61, 61]
        );
    }

    #[test]
    fn test_primary_view_celsius() {
        let weather = sample();
        let PrimaryView::Ready { current, .. } =
            primary_view(Some(&weather), false, TempUnit::Celsius)
        else {
            panic!("expected ready view");
        };

        assert_eq!(current.temperature, 22);
        assert_eq!(current.feels_like, 22);
        assert_eq!(current.high_low, Some((25, 15)));
    }

    #[test]
    fn test_hourly_keeps_api_order_and_duplicates() {
        let weather = sample();
        let PrimaryView::Ready { hourly, .. } =
            primary_view(Some(&weather), true, TempUnit::Fahrenheit)
        else {
            panic!("expected ready view");
        };

        let keys: Vec<i64> = hourly.iter().map(|h| h.key).collect();
        assert_eq!(keys, vec![1_717_196_400, 1_717_189_200, 1_717_189_200]);
        assert_eq!(hourly[0].label, "2:00");
        assert_eq!(hourly[1].label, "0:00");
    }

    #[test]
    fn test_overlay_follows_night_flag() {
        let weather = sample();

        let PrimaryView::Ready { overlay, text, .. } =
            primary_view(Some(&weather), true, TempUnit::Fahrenheit)
        else {
            panic!("expected ready view");
        };
        assert_eq!(overlay, Rgba::new(0, 0, 0, 0.5));
        assert_eq!(text, Color::Gray);

        let PrimaryView::Ready { overlay, text, .. } =
            primary_view(Some(&weather), false, TempUnit::Fahrenheit)
        else {
            panic!("expected ready view");
        };
        assert_eq!(overlay, Rgba::new(42, 133, 218, 0.5));
        assert_eq!(text, Color::White);
    }

    #[test]
    fn test_empty_forecast_has_no_high_low() {
        let mut weather = sample();
        weather.forecast.forecastday.clear();

        let PrimaryView::Ready { current, hourly, .. } =
            primary_view(Some(&weather), false, TempUnit::Fahrenheit)
        else {
            panic!("expected ready view");
        };
        assert_eq!(current.high_low, None);
        assert!(hourly.is_empty());
    }

    #[test]
    fn test_weekly_rows_one_per_day_in_order() {
        let weather = sample();
        let rows = weekly_rows(&weather.forecast, calendar_day_name, TempUnit::Fahrenheit);

        assert_eq!(
            rows,
            vec![
                DailyRow {
                    key: "2024-06-01".into(),
                    weekday: "Saturday".into(),
                    glyph: "\u{2600}\u{fe0f}",
                    high: 76,
                    low: 59,
                },
                DailyRow {
                    key: "2024-06-02".into(),
                    weekday: "Sunday".into(),
                    glyph: "\u{2600}\u{fe0f}",
                    high: 81,
                    low: 63,
                },
            ]
        );
    }

    #[test]
    fn test_weekly_rows_use_supplied_formatter() {
        let weather = sample();
        let rows = weekly_rows(
            &weather.forecast,
            |day| format!("d{}", day.date_epoch),
            TempUnit::Fahrenheit,
        );
        assert_eq!(rows[0].weekday, "d1717200000");
        assert_eq!(rows[1].weekday, "d1717286400");
    }

    #[test]
    fn test_legacy_day_name_is_shifted() {
        // 2024-06-01 is a Saturday, 2024-06-02 a Sunday
        assert_eq!(legacy_day_name(1_717_200_000, &Utc), "Sunday");
        assert_eq!(legacy_day_name(1_717_286_400, &Utc), "Monday");
    }

    #[test]
    fn test_default_labels_use_shifted_table() {
        // Local noon on a Sunday reads as "Monday"
        let sunday = Local
            .with_ymd_and_hms(2024, 6, 2, 12, 0, 0)
            .single()
            .unwrap()
            .timestamp();
        let d = day("2024-06-02", sunday, 0.0, 0.0, vec![]);

        assert_eq!(WeekdayLabels::default(), WeekdayLabels::Legacy);
        assert_eq!(WeekdayLabels::default().day_name(&d), "Monday");
        assert_eq!(WeekdayLabels::Calendar.day_name(&d), "Sunday");
    }

    #[test]
    fn test_hour_label_falls_back_to_local_epoch() {
        let epoch = 1_717_196_400;
        let expected = format!(
            "{}:00",
            DateTime::from_timestamp(epoch, 0)
                .unwrap()
                .with_timezone(&Local)
                .hour()
        );

        let item = hourly_item(&hour(epoch, "garbled", 50.0), TempUnit::Fahrenheit);
        assert_eq!(item.label, expected);
    }

    #[test]
    fn test_calendar_day_name_falls_back_to_epoch() {
        let mut d = day("not-a-date", 1_717_286_400, 0.0, 0.0, vec![]);
        assert_eq!(calendar_day_name(&d), "Sunday");
        d.date = "2024-06-03".into();
        assert_eq!(calendar_day_name(&d), "Monday");
    }
}

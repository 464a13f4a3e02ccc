//! Condition glyphs
//!
//! weatherapi.com condition codes grouped into a handful of categories, each
//! rendered as a single emoji in place of the provider's icon image.

use crate::state::Condition;

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a weatherapi.com condition code to a category
    pub fn from_code(code: u16) -> Self {
        match code {
            1000 => WeatherCondition::ClearSky,
            1003 => WeatherCondition::PartlyCloudy,
            1006 | 1009 => WeatherCondition::Cloudy,
            1030 | 1135 | 1147 => WeatherCondition::Fog,
            1063 | 1150 | 1153 | 1168 | 1171 | 1180 | 1183 | 1198 | 1240 => {
                WeatherCondition::Drizzle
            }
            1186 | 1189 | 1192 | 1195 | 1201 | 1243 | 1246 => WeatherCondition::Rain,
            1066 | 1069 | 1072 | 1114 | 1117 | 1204..=1237 | 1249..=1264 => {
                WeatherCondition::Snow
            }
            1087 | 1273..=1282 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    /// Emoji representation
    pub fn emoji(self, is_night: bool) -> &'static str {
        match self {
            WeatherCondition::ClearSky if is_night => "\u{1f319}",
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy if is_night => "\u{2601}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Fog => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}

/// Glyph for a payload condition, honouring its day/night icon variant.
pub fn condition_glyph(condition: &Condition) -> &'static str {
    WeatherCondition::from_code(condition.code).emoji(condition.is_night_icon())
}

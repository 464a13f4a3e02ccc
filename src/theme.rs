//! Day/night theme
//!
//! The night flag is derived from the local hour every time a frame is
//! drawn; nothing here is cached for the lifetime of the process.

use chrono::{Local, Timelike};
use ratatui::style::Color;

/// Evening starts at 18:00, morning at 06:00.
pub fn is_night_time(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

/// A translucent colour, composited onto the background in the terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha-blend over an opaque background.
    pub fn over(self, background: (u8, u8, u8)) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Color::Rgb(
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

pub const NIGHT_OVERLAY: Rgba = Rgba::new(0, 0, 0, 0.5);
pub const DAY_OVERLAY: Rgba = Rgba::new(42, 133, 218, 0.5);

const NIGHT_BACKGROUND: (u8, u8, u8) = (16, 24, 52);
const DAY_BACKGROUND: (u8, u8, u8) = (112, 172, 232);

/// Status bar content style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusContent {
    Light,
    Dark,
}

impl StatusContent {
    pub fn fg(self) -> Color {
        match self {
            StatusContent::Light => Color::White,
            StatusContent::Dark => Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub is_night: bool,
    pub background: (u8, u8, u8),
    pub overlay: Rgba,
    pub text: Color,
    pub status: StatusContent,
}

impl Theme {
    pub fn for_night(is_night: bool) -> Self {
        if is_night {
            Self {
                is_night,
                background: NIGHT_BACKGROUND,
                overlay: NIGHT_OVERLAY,
                text: Color::Gray,
                status: StatusContent::Light,
            }
        } else {
            Self {
                is_night,
                background: DAY_BACKGROUND,
                overlay: DAY_OVERLAY,
                text: Color::White,
                status: StatusContent::Dark,
            }
        }
    }

    pub fn for_hour(hour: u32) -> Self {
        Self::for_night(is_night_time(hour))
    }

    /// Theme for the current local wall-clock hour
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::Rgb(r, g, b)
    }
}

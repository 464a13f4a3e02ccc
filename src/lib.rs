//! Weather screen - current conditions, hourly strip and 7-day outlook
//!
//! The library exposes the screen's modules for the binary and for tests.

pub mod action;
pub mod api;
pub mod components;
pub mod conditions;
pub mod config;
pub mod effect;
pub mod location;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod theme;
pub mod view;

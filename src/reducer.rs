//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{
    AppState, FETCH_ERROR_MESSAGE, LOCATION_ERROR_MESSAGE, PERMISSION_DENIED_MESSAGE,
    PermissionPolicy, ScreenPhase,
};

/// The reducer handles all state transitions.
///
/// The screen lifecycle only moves forward: results that arrive in the wrong
/// phase are dropped.
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Permission actions =====
        Action::PermissionRequest => {
            if state.phase != ScreenPhase::Init {
                return DispatchResult::unchanged();
            }
            match state.permission {
                PermissionPolicy::Prompt => {
                    state.phase = ScreenPhase::RequestingPermission;
                    DispatchResult::changed()
                }
                PermissionPolicy::Granted => grant(state),
                PermissionPolicy::Denied => deny(state),
            }
        }

        Action::PermissionGrant => {
            if state.phase != ScreenPhase::RequestingPermission {
                return DispatchResult::unchanged();
            }
            grant(state)
        }

        Action::PermissionDeny => {
            if state.phase != ScreenPhase::RequestingPermission {
                return DispatchResult::unchanged();
            }
            deny(state)
        }

        // ===== Location actions =====
        Action::LocationDidAcquire(coords) => {
            if state.phase != ScreenPhase::LocationAcquired {
                return DispatchResult::unchanged();
            }
            state.coordinates = Some(coords);
            state.phase = ScreenPhase::FetchingForecast;
            DispatchResult::changed_with(Effect::FetchForecast {
                lat: coords.lat,
                lon: coords.lon,
            })
        }

        Action::LocationDidError(_) => {
            if state.phase != ScreenPhase::LocationAcquired {
                return DispatchResult::unchanged();
            }
            state.phase = ScreenPhase::LocationError;
            state.error = Some(LOCATION_ERROR_MESSAGE.to_string());
            DispatchResult::changed()
        }

        // ===== Forecast actions =====
        Action::ForecastDidLoad(data) => {
            if state.phase != ScreenPhase::FetchingForecast {
                return DispatchResult::unchanged();
            }
            state.weather = Some(data);
            state.hourly_offset = 0;
            state.phase = ScreenPhase::Loaded;
            DispatchResult::changed()
        }

        Action::ForecastDidError(_) => {
            if state.phase != ScreenPhase::FetchingForecast {
                return DispatchResult::unchanged();
            }
            state.phase = ScreenPhase::FetchError;
            state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiScrollHourly(delta) => {
            let last = state.hourly_len().saturating_sub(1);
            let next = if delta < 0 {
                state.hourly_offset.saturating_sub(delta.unsigned_abs() as usize)
            } else {
                state.hourly_offset.saturating_add(delta as usize).min(last)
            };
            if next == state.hourly_offset {
                DispatchResult::unchanged()
            } else {
                state.hourly_offset = next;
                DispatchResult::changed()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.phase.is_pending() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn grant(state: &mut AppState) -> DispatchResult<Effect> {
    tracing::info!(policy = ?state.permission, "location permission granted");
    state.phase = ScreenPhase::LocationAcquired;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::AcquireLocation)
}

fn deny(state: &mut AppState) -> DispatchResult<Effect> {
    tracing::warn!(policy = ?state.permission, "{}", PERMISSION_DENIED_MESSAGE);
    state.phase = ScreenPhase::PermissionDenied;
    state.error = Some(PERMISSION_DENIED_MESSAGE.to_string());
    DispatchResult::changed()
}

//! Action and state tests using TestHarness

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId};
use weather_screen::{
    action::Action,
    components::{
        Component, PermissionPrompt, PermissionPromptProps, WeatherScreen, WeatherScreenProps,
    },
    effect::Effect,
    reducer::reducer,
    state::{
        AppState, Coordinates, PERMISSION_DENIED_MESSAGE, PermissionPolicy, ScreenPhase,
        TempUnit, WeatherData, WeekdayLabels,
    },
    theme::Theme,
};

#[test]
fn test_reducer_permission_request_prompts() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::PermissionRequest);
    assert!(result.changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().phase, ScreenPhase::RequestingPermission);
}

#[test]
fn test_reducer_permission_denied_emits_nothing() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::PermissionRequest);
    let result = store.dispatch(Action::PermissionDeny);

    assert!(result.changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().phase, ScreenPhase::PermissionDenied);
    assert_eq!(
        store.state().error.as_deref(),
        Some(PERMISSION_DENIED_MESSAGE)
    );
}

#[test]
fn test_reducer_pre_granted_acquires_location() {
    let state = AppState::new(
        PermissionPolicy::Granted,
        TempUnit::Fahrenheit,
        WeekdayLabels::Calendar,
    );
    let mut store = EffectStore::new(state, reducer);

    let result = store.dispatch(Action::PermissionRequest);
    assert_eq!(result.effects, vec![Effect::AcquireLocation]);
    assert_eq!(store.state().phase, ScreenPhase::LocationAcquired);
}

#[test]
fn test_reducer_permission_asked_once() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::PermissionRequest);
    store.dispatch(Action::PermissionGrant);
    let again = store.dispatch(Action::PermissionRequest);

    assert!(!again.changed);
    assert!(again.effects.is_empty());
    assert_eq!(store.state().phase, ScreenPhase::LocationAcquired);
}

#[test]
fn test_reducer_location_starts_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let coords = Coordinates {
        lat: 50.45,
        lon: 30.52,
    };

    store.dispatch(Action::PermissionRequest);
    store.dispatch(Action::PermissionGrant);
    let result = store.dispatch(Action::LocationDidAcquire(coords));

    assert_eq!(
        result.effects,
        vec![Effect::FetchForecast {
            lat: 50.45,
            lon: 30.52
        }]
    );
    assert_eq!(store.state().coordinates, Some(coords));
}

#[test]
fn test_reducer_toggle_units() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().unit, TempUnit::Fahrenheit);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Celsius);
    store.dispatch(Action::UiToggleUnits);
    assert_eq!(store.state().unit, TempUnit::Fahrenheit);
}

#[test]
fn test_screen_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherScreen;

    let actions = harness.send_keys::<NumericComponentId, _, _>("u l h q", |state, event| {
        let props = WeatherScreenProps {
            state,
            theme: Theme::for_night(false),
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(4);
    actions.assert_first(Action::UiToggleUnits);
    assert_eq!(
        actions,
        vec![
            Action::UiToggleUnits,
            Action::UiScrollHourly(1),
            Action::UiScrollHourly(-1),
            Action::Quit,
        ]
    );
}

#[test]
fn test_prompt_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut prompt = PermissionPrompt::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("x y", |_state, event| {
        prompt
            .handle_event(&event.kind, PermissionPromptProps { is_focused: true })
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::PermissionGrant);
}

#[test]
fn test_screen_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherScreen;

    let actions = harness.send_keys::<NumericComponentId, _, _>("u q l", |state, event| {
        let props = WeatherScreenProps {
            state,
            theme: Theme::for_night(true),
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_prompt_denial_reaches_terminal_state() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut prompt = PermissionPrompt::new();
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::PermissionRequest);

    let actions = harness.send_keys::<NumericComponentId, _, _>("n", |_state, event| {
        prompt
            .handle_event(&event.kind, PermissionPromptProps { is_focused: true })
            .into_iter()
            .collect::<Vec<_>>()
    });

    let mut effects = Vec::new();
    for action in actions {
        effects.extend(store.dispatch(action).effects);
    }

    assert!(effects.is_empty(), "Denial must not start a location read");
    assert_eq!(store.state().phase, ScreenPhase::PermissionDenied);
    assert_eq!(
        store.state().error.as_deref(),
        Some(PERMISSION_DENIED_MESSAGE)
    );
}

#[test]
fn test_unit_preference_survives_load() {
    let state = AppState::new(
        PermissionPolicy::Granted,
        TempUnit::Celsius,
        WeekdayLabels::Calendar,
    );
    let mut store = EffectStore::new(state, reducer);

    store.dispatch(Action::PermissionRequest);
    store.dispatch(Action::LocationDidAcquire(Coordinates { lat: 1.0, lon: 2.0 }));
    store.dispatch(Action::ForecastDidLoad(WeatherData::default()));

    assert_eq!(store.state().phase, ScreenPhase::Loaded);
    assert_eq!(store.state().unit, TempUnit::Celsius);
    assert_eq!(store.state().weekday_labels, WeekdayLabels::Calendar);
}

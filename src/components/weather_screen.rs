use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;

use super::{Component, PrimaryDisplay, PrimaryDisplayProps};
use crate::action::Action;
use crate::state::{AppState, ScreenPhase};
use crate::theme::Theme;

/// Props for WeatherScreen - read-only view of state
pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    /// Derived from the wall clock by the caller, once per frame
    pub theme: Theme,
    pub is_focused: bool,
}

/// The root screen: themed background, phase-dependent body, status bar
#[derive(Default)]
pub struct WeatherScreen;

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::UiScrollHourly(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::UiScrollHourly(1)),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherScreenProps<'_>) {
        let theme = props.theme;
        let state = props.state;

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background_color())),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        match state.phase {
            ScreenPhase::Init | ScreenPhase::RequestingPermission => {
                render_waiting(frame, chunks[0], &theme);
            }
            ScreenPhase::PermissionDenied | ScreenPhase::LocationError | ScreenPhase::FetchError => {
                render_error(frame, chunks[0], state.error.as_deref().unwrap_or_default());
            }
            ScreenPhase::LocationAcquired | ScreenPhase::FetchingForecast | ScreenPhase::Loaded => {
                let mut display = PrimaryDisplay;
                display.render(
                    frame,
                    chunks[0],
                    PrimaryDisplayProps {
                        weather: state.weather.as_ref(),
                        theme: &theme,
                        unit: state.unit,
                        weekday_labels: state.weekday_labels,
                        hourly_offset: state.hourly_offset,
                        spinner: state.spinner_frame(),
                    },
                );
            }
        }

        render_status_bar(frame, chunks[1], state, &theme);
    }
}

fn render_waiting(frame: &mut Frame, area: Rect, theme: &Theme) {
    let [_, line] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let msg = Line::from(Span::styled(
        "Waiting for location permission...",
        Style::default().fg(theme.text),
    ))
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let [_, line] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let msg = Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints: &[(&str, &str)] = match state.phase {
        ScreenPhase::Init | ScreenPhase::RequestingPermission => {
            &[("y", "allow"), ("n", "deny"), ("q", "quit")]
        }
        ScreenPhase::Loaded => &[("u", "units"), ("←/→", "hourly"), ("q", "quit")],
        _ => &[("q", "quit")],
    };

    let fg = theme.status.fg();
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(fg)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

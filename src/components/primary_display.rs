use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{
    Component, CurrentConditions, CurrentConditionsProps, HourlyStrip, HourlyStripProps,
    WeeklySummary, WeeklySummaryProps,
};
use super::hourly_strip::STRIP_HEIGHT;
use crate::action::Action;
use crate::state::{TempUnit, WeatherData, WeekdayLabels};
use crate::theme::Theme;
use crate::view::{self, PrimaryView};

/// Current conditions, hourly strip and the weekly summary.
///
/// Renders a loading placeholder until the payload is present.
pub struct PrimaryDisplay;

pub struct PrimaryDisplayProps<'a> {
    pub weather: Option<&'a WeatherData>,
    pub theme: &'a Theme,
    pub unit: TempUnit,
    pub weekday_labels: WeekdayLabels,
    pub hourly_offset: usize,
    /// Spinner frame shown next to the loading message
    pub spinner: &'a str,
}

impl Component<Action> for PrimaryDisplay {
    type Props<'a> = PrimaryDisplayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let view = view::primary_view(props.weather, props.theme.is_night, props.unit);

        let PrimaryView::Ready {
            current,
            hourly,
            forecast,
            overlay,
            text,
        } = view
        else {
            render_loading(frame, area, props.theme, props.spinner);
            return;
        };

        let labels = props.weekday_labels;
        let rows = view::weekly_rows(forecast, |day| labels.day_name(day), props.unit);
        let panel = overlay.over(props.theme.background);

        let chunks = Layout::vertical([
            Constraint::Min(5),               // Current conditions
            Constraint::Length(1),            // Spacer
            Constraint::Length(STRIP_HEIGHT), // Hourly
            Constraint::Length(1),            // Spacer
            Constraint::Length(WeeklySummary::height_for(rows.len())),
        ])
        .split(area);

        let mut conditions = CurrentConditions;
        conditions.render(
            frame,
            chunks[0],
            CurrentConditionsProps {
                current: &current,
                unit: props.unit,
                text,
            },
        );

        let mut strip = HourlyStrip;
        strip.render(
            frame,
            chunks[2],
            HourlyStripProps {
                items: &hourly,
                offset: props.hourly_offset,
                panel,
            },
        );

        let [weekly] = Layout::horizontal([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(chunks[4]);
        let mut summary = WeeklySummary;
        summary.render(
            frame,
            weekly,
            WeeklySummaryProps {
                rows: &rows,
                panel,
            },
        );
    }
}

fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme, spinner: &str) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let msg = Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled("Loading...", Style::default().fg(theme.text)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

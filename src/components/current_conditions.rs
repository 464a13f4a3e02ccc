use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::TempUnit;
use crate::view::CurrentView;

/// Location name, big temperature, feels-like and today's high/low
pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub current: &'a CurrentView,
    pub unit: TempUnit,
    /// Secondary text colour from the theme
    pub text: Color,
}

/// terminus is 6 rows tall, miniwi 4; artbox drops to plain text below that.
const TEMPERATURE_CAP: u16 = 6;

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1),            // Location name
            Constraint::Max(TEMPERATURE_CAP), // FIGlet temperature
            Constraint::Length(1),            // Condition
            Constraint::Length(1),            // Feels like
            Constraint::Length(1),            // High / low
        ])
        .flex(Flex::Center)
        .split(area);

        let current = props.current;

        let title = Line::from(Span::styled(
            current.location_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(
                props.unit.to_celsius(current.raw_temperature),
            ));
        let temp_text = format!("{}°", current.temperature);
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[1]);

        let condition = Line::from(vec![
            Span::raw(current.glyph),
            Span::raw(" "),
            Span::styled(current.condition.clone(), Style::default().fg(Color::White)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(condition), chunks[2]);

        let secondary = Style::default().fg(props.text);
        let feels_like = Line::from(Span::styled(
            format!("Feels like: {}°", current.feels_like),
            secondary,
        ))
        .centered();
        frame.render_widget(Paragraph::new(feels_like), chunks[3]);

        if let Some((high, low)) = current.high_low {
            let high_low =
                Line::from(Span::styled(format!("H:{}° L:{}°", high, low), secondary)).centered();
            frame.render_widget(Paragraph::new(high_low), chunks[4]);
        }
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

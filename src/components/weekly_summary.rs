use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::view::DailyRow;

/// One row per forecast day: weekday, glyph, high/low
pub struct WeeklySummary;

pub struct WeeklySummaryProps<'a> {
    pub rows: &'a [DailyRow],
    pub panel: Color,
}

impl WeeklySummary {
    /// Rows plus the title line
    pub fn height_for(rows: usize) -> u16 {
        rows as u16 + 1
    }
}

impl Component<Action> for WeeklySummary {
    type Props<'a> = WeeklySummaryProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .title(
                Line::from(Span::styled(
                    "DAILY FORECAST",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .left_aligned(),
            )
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(props.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Layout::vertical(props.rows.iter().map(|_| Constraint::Length(1))).split(inner);

        let style = Style::default().fg(Color::White);
        for (row, line_area) in props.rows.iter().zip(lines.iter()) {
            let [day, glyph, temps] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(4),
                Constraint::Length(16),
            ])
            .areas(*line_area);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(row.weekday.clone(), style))),
                day,
            );
            frame.render_widget(Paragraph::new(Line::from(row.glyph).centered()), glyph);
            frame.render_widget(
                Paragraph::new(
                    Line::from(Span::styled(
                        format!("H: {}° L: {}°", row.high, row.low),
                        style,
                    ))
                    .right_aligned(),
                ),
                temps,
            );
        }
    }
}

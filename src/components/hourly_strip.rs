use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Padding, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::view::HourlyItem;

/// Horizontal strip of hourly samples, left to right in API order
pub struct HourlyStrip;

pub struct HourlyStripProps<'a> {
    pub items: &'a [HourlyItem],
    /// Index of the first visible item
    pub offset: usize,
    /// Overlay colour blended onto the background
    pub panel: Color,
}

/// Columns per item: "23:00" plus breathing room
pub const ITEM_WIDTH: u16 = 7;

/// Title + label + glyph + temperature
pub const STRIP_HEIGHT: u16 = 4;

impl Component<Action> for HourlyStrip {
    type Props<'a> = HourlyStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .title(
                Line::from(Span::styled(
                    "HOURLY FORECAST",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .left_aligned(),
            )
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(props.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < ITEM_WIDTH + 2 || inner.height < 3 || props.items.is_empty() {
            return;
        }

        // One column on each side for the scroll markers
        let [left, strip, right] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Min(ITEM_WIDTH),
            Constraint::Length(1),
        ])
        .areas(inner);

        let offset = props.offset.min(props.items.len() - 1);
        let capacity = (strip.width / ITEM_WIDTH).max(1) as usize;
        let visible = &props.items[offset..props.items.len().min(offset + capacity)];

        let marker = Style::default().fg(Color::White);
        if offset > 0 {
            frame.render_widget(Paragraph::new(Span::styled("‹", marker)), left);
        }
        if offset + visible.len() < props.items.len() {
            frame.render_widget(Paragraph::new(Span::styled("›", marker)), right);
        }

        let columns = Layout::horizontal(
            visible.iter().map(|_| Constraint::Length(ITEM_WIDTH)),
        )
        .split(strip);

        for (item, column) in visible.iter().zip(columns.iter()) {
            let style = Style::default().fg(Color::White);
            let text = Text::from(vec![
                Line::from(Span::styled(item.label.clone(), style)).centered(),
                Line::from(item.glyph).centered(),
                Line::from(Span::styled(format!("{}°", item.temperature), style)).centered(),
            ]);
            frame.render_widget(Paragraph::new(text), *column);
        }
    }
}

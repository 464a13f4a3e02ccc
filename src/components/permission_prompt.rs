use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::Component;
use crate::action::Action;

pub const PROMPT_WIDTH: u16 = 52;
pub const PROMPT_HEIGHT: u16 = 9;

/// One-time location permission question
pub struct PermissionPrompt {
    modal: Modal,
}

impl Default for PermissionPrompt {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

pub struct PermissionPromptProps {
    pub is_focused: bool,
}

impl PermissionPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    fn body() -> Text<'static> {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::Gray);
        Text::from(vec![
            Line::from(Span::styled(
                "Location access",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled("Allow weather-screen to look up", dim)).centered(),
            Line::from(Span::styled("your location for the local forecast?", dim)).centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("y", key),
                Span::styled(" allow    ", dim),
                Span::styled("n", key),
                Span::styled(" deny", dim),
            ])
            .centered(),
        ])
    }
}

impl Component<Action> for PermissionPrompt {
    type Props<'a> = PermissionPromptProps;

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
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(Action::PermissionGrant)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::PermissionDeny)
                }
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < PROMPT_HEIGHT {
            return;
        }

        let modal_area = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            frame.render_widget(Paragraph::new(Self::body()), content_area);
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::PermissionDeny,
                render_content: &mut render_content,
            },
        );
    }
}

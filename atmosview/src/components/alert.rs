//! Blocking error modal shown after a failed fetch

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{ModalStyle, centered_rect, render_modal};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "⚠️";
pub const ALERT_HEADLINE: &str = "Failed to fetch weather. Please try again.";

pub struct AlertModal;

pub struct AlertModalProps<'a> {
    pub message: &'a str,
}

impl Component<Action> for AlertModal {
    type Props<'a> = AlertModalProps<'a>;

    fn handle_event(&mut self, event: &EventKind, _props: Self::Props<'_>) -> Vec<Action> {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => vec![Action::AlertDismiss],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let modal_area = centered_rect(56, 8, area);
        render_modal(
            frame,
            modal_area,
            &ModalStyle::with_bg(Color::Rgb(45, 25, 30)),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(255, 110, 110)))
            .title(format!(" {} Error ", ERROR_ICON))
            .title_style(Style::default().fg(Color::Rgb(255, 140, 140)).bold());

        let text = Text::from(vec![
            Line::from(Span::styled(
                ALERT_HEADLINE,
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                props.message,
                Style::default().fg(Color::Rgb(220, 180, 180)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "press enter to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ]);

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .centered()
                .wrap(Wrap { trim: true }),
            modal_area,
        );
    }
}

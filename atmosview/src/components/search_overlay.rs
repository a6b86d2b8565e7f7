use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    ModalStyle, TextInput, TextInputProps, centered_rect, render_modal,
};

use super::Component;
use crate::action::Action;

const PLACEHOLDER: &str = "City name or lat,lon...";

pub struct SearchOverlay {
    input: TextInput,
    was_open: bool,
}

pub struct SearchOverlayProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_query_submit: fn(String) -> Action,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            was_open: false,
        }
    }
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cursor each time the overlay opens
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }

    fn input_props<'a>(props: &SearchOverlayProps<'a>, bg: Option<Color>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            show_border: false,
            bg_color: bg,
            padding_x: 1,
            padding_y: 1,
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
        }
    }
}

impl Component<Action> for SearchOverlay {
    type Props<'a> = SearchOverlayProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if matches!(event, EventKind::Key(key) if key.code == KeyCode::Esc) {
            return vec![Action::SearchClose];
        }

        // Everything else, Enter included, goes to the input
        self.input
            .handle_event(event, Self::input_props(&props, None))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 7 {
            return;
        }

        let modal_area = centered_rect(50, 5, area);
        render_modal(
            frame,
            modal_area,
            &ModalStyle::with_bg(Color::Rgb(35, 35, 45)),
        );

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Min(0),
        ])
        .split(modal_area);

        let title = Line::from(vec![
            Span::styled(" Search location ", Style::default().fg(Color::White).bold()),
            Span::styled("(esc to cancel)", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let input_props = Self::input_props(&props, Some(Color::Rgb(50, 50, 60)));
        self.input.render(frame, chunks[1], input_props);
    }
}

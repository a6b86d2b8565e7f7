use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Mode;

pub struct HelpBar;

pub struct HelpBarProps {
    pub mode: Mode,
}

impl HelpBar {
    fn hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
        match mode {
            Mode::Landing => &[("enter", "forecast"), ("/", "search"), ("q", "quit")],
            Mode::Dashboard => &[
                ("←/→", "hour"),
                ("/", "search"),
                ("r", "refresh"),
                ("u", "units"),
                ("q", "quit"),
            ],
        }
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for (key, label) in Self::hints(props.mode) {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

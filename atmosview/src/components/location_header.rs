use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const LOCATION_ICON: &str = "📍 ";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a str,
    pub is_loading: bool,
    pub tick: u32,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let mut spans = vec![
            Span::styled(LOCATION_ICON, Style::default()),
            Span::styled(props.location, Style::default().fg(Color::White).bold()),
        ];
        if props.is_loading {
            let spinner = SPINNERS[(props.tick as usize / 2) % SPINNERS.len()];
            spans.push(Span::styled(
                format!(" {}", spinner),
                Style::default().fg(Color::Cyan),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), chunks[0]);

        let attribution = Line::from(Span::styled(
            "Weather data by Open-Meteo",
            Style::default().fg(Color::Rgb(190, 195, 210)).italic(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(attribution), chunks[1]);
    }
}

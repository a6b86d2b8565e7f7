//! Feifei, the weather mascot
//!
//! Face is picked from the mood, the prop above the head from the condition.
//! The whole figure bobs by one row every few ticks.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::selectors::Mood;
use crate::state::WeatherCondition;

pub const MASCOT_NAME: &str = "Feifei";

pub struct Mascot;

pub struct MascotProps {
    pub condition: WeatherCondition,
    pub mood: Mood,
    pub tick: u32,
    /// Show the "Feifei is ..." caption
    pub caption: bool,
}

impl Mascot {
    /// Six art rows, one bob row, one caption row
    pub const HEIGHT: u16 = 8;
    pub const WIDTH: u16 = 18;
}

impl Component<Action> for Mascot {
    type Props<'a> = MascotProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bob = (props.tick / 4) % 2 == 1;
        let mut lines = Vec::with_capacity(Self::HEIGHT as usize);
        if !bob {
            lines.push(Line::from(""));
        }
        lines.extend(figure(props.condition, props.mood));
        if bob {
            lines.push(Line::from(""));
        }
        if props.caption {
            lines.push(Line::from(vec![
                Span::styled(MASCOT_NAME, Style::default().fg(Color::White).bold()),
                Span::styled(
                    format!(" is {}", props.mood.label()),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        }
        frame.render_widget(
            Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
            area,
        );
    }
}

fn figure(condition: WeatherCondition, mood: Mood) -> Vec<Line<'static>> {
    let body = Style::default().fg(body_color(mood));
    let face = Style::default().fg(Color::Rgb(40, 40, 60)).bg(body_color(mood));
    let (eyes, mouth) = face_parts(mood);
    let (prop, prop_color) = prop_for(condition);

    vec![
        Line::from(Span::styled(prop, Style::default().fg(prop_color).bold())),
        Line::from(Span::styled("  .-\"\"\"\"-.  ", body)),
        Line::from(vec![
            Span::styled(" /", body),
            Span::styled(format!(" {} ", eyes), face),
            Span::styled("\\ ", body),
        ]),
        Line::from(vec![
            Span::styled("|", body),
            Span::styled(format!("   {}   ", mouth), face),
            Span::styled("|", body),
        ]),
        Line::from(Span::styled(" \\________/ ", body)),
        Line::from(Span::styled("   \"    \"   ", body)),
    ]
}

/// Eyes are 6 columns wide, mouths 4
fn face_parts(mood: Mood) -> (&'static str, &'static str) {
    match mood {
        Mood::Happy => ("o    o", "\\__/"),
        Mood::Excited => ("^    ^", "\\OO/"),
        Mood::Sad => ("T    T", " /\\ "),
        Mood::Sleepy => ("-    -", " zZ "),
    }
}

fn prop_for(condition: WeatherCondition) -> (&'static str, Color) {
    match condition {
        WeatherCondition::Sunny => ("\\ ☀ /", Color::Rgb(255, 210, 80)),
        WeatherCondition::Clear => ("☾", Color::Rgb(230, 230, 170)),
        WeatherCondition::Cloudy => ("☁", Color::Rgb(200, 200, 210)),
        WeatherCondition::Rainy => ("☂", Color::Rgb(120, 170, 255)),
        WeatherCondition::Snowy => ("❄ ❄", Color::Rgb(220, 240, 255)),
        WeatherCondition::Stormy => ("ϟ ϟ", Color::Rgb(255, 240, 120)),
    }
}

fn body_color(mood: Mood) -> Color {
    match mood {
        Mood::Happy => Color::Rgb(255, 200, 150),
        Mood::Excited => Color::Rgb(255, 180, 120),
        Mood::Sad => Color::Rgb(170, 180, 210),
        Mood::Sleepy => Color::Rgb(210, 190, 230),
    }
}

//! Landing screen: title, mascot and the "Check Forecast" button
//!
//! Clicking the mascot or the button starts the forecast, same as Enter.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::{Component, HelpBar, HelpBarProps, Mascot, MascotProps, SPINNERS};
use crate::action::Action;
use crate::selectors::Mood;
use crate::state::{Mode, WeatherCondition};

pub const APP_TITLE: &str = "AtmosView";
pub const START_HINT: &str = "Click Feifei or the button to start (or press enter)";

pub struct LandingProps {
    pub is_loading: bool,
    pub is_focused: bool,
    pub tick: u32,
}

/// Clickable regions from the last render
#[derive(Clone, Copy, Debug, Default)]
struct Targets {
    mascot: Rect,
    button: Rect,
}

#[derive(Default)]
pub struct Landing {
    targets: Option<Targets>,
}

impl Landing {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_target(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.targets.is_some_and(|targets| {
            targets.mascot.contains(position) || targets.button.contains(position)
        })
    }
}

/// `width` columns centered horizontally in `area`
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

impl Component<Action> for Landing {
    type Props<'a> = LandingProps;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Action::AppStart],
                KeyCode::Char('/') => vec![Action::SearchOpen],
                KeyCode::Char('q') => vec![Action::Quit],
                _ => vec![],
            },
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if self.is_target(mouse.column, mouse.row) =>
                {
                    vec![Action::AppStart]
                }
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let outer = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        let [title, _, mascot, _, button, _, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(Mascot::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(outer[0]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::White).bold(),
            )))
            .centered(),
            title,
        );

        Mascot.render(
            frame,
            mascot,
            MascotProps {
                condition: WeatherCondition::Sunny,
                mood: Mood::Excited,
                tick: props.tick,
                caption: false,
            },
        );

        let label = if props.is_loading {
            let spinner = SPINNERS[(props.tick as usize / 2) % SPINNERS.len()];
            Span::styled(
                format!(" {} Forecasting... ", spinner),
                Style::default().fg(Color::Rgb(60, 60, 80)).bg(Color::Rgb(200, 200, 210)),
            )
        } else {
            Span::styled(
                " ▶ Check Forecast ",
                Style::default()
                    .fg(Color::Rgb(20, 30, 50))
                    .bg(Color::Rgb(255, 220, 120))
                    .bold(),
            )
        };
        let label_width = label.width() as u16;
        frame.render_widget(Paragraph::new(Line::from(label)).centered(), button);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                START_HINT,
                Style::default().fg(Color::Rgb(220, 230, 245)).italic(),
            )))
            .centered(),
            hint,
        );

        self.targets = Some(Targets {
            mascot: centered_width(mascot, Mascot::WIDTH),
            button: centered_width(button, label_width),
        });

        HelpBar.render(
            frame,
            outer[1],
            HelpBarProps {
                mode: Mode::Landing,
            },
        );
    }
}

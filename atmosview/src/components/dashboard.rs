//! Dashboard: everything shown once a forecast is loaded
//!
//! The selected hour drives the mascot, the data panel and (via the scene
//! rendered underneath) the sky. Hour keys are delegated to the timeline.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::{
    Component, DataPanel, DataPanelProps, HelpBar, HelpBarProps, LocationHeader,
    LocationHeaderProps, Mascot, MascotProps, Timeline, TimelineProps,
};
use crate::action::Action;
use crate::state::{AppState, Mode, Source};

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct Dashboard {
    timeline: Timeline,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn timeline_props(state: &AppState, is_focused: bool) -> TimelineProps<'_> {
        TimelineProps {
            hours: state
                .weather
                .as_ref()
                .map(|weather| weather.hourly.as_slice())
                .unwrap_or(&[]),
            selected: state.selected_hour,
            unit: state.unit,
            is_focused,
            on_select: Action::HourSelect,
        }
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let state = props.state;

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Char('/') => return vec![Action::SearchOpen],
                KeyCode::Char('u') => return vec![Action::UiToggleUnits],
                KeyCode::Char('r') | KeyCode::F(5) => {
                    return state
                        .last_query
                        .clone()
                        .map(Action::WeatherSearch)
                        .into_iter()
                        .collect();
                }
                KeyCode::Char('q') => return vec![Action::Quit],
                _ => {}
            }
        }

        self.timeline
            .handle_event(event, Self::timeline_props(state, true))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let Some(weather) = state.weather.as_ref() else {
            return;
        };
        let Some(active) = state.active_forecast() else {
            return;
        };

        let [header, _, middle, _, timeline, sources, help] = Layout::vertical([
            Constraint::Length(LocationHeader::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(Mascot::HEIGHT.max(DataPanel::HEIGHT)),
            Constraint::Min(0),
            Constraint::Length(Timeline::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        LocationHeader.render(
            frame,
            header,
            LocationHeaderProps {
                location: &weather.location,
                is_loading: state.is_loading,
                tick: state.tick_count,
            },
        );

        let [mascot, panel] = Layout::horizontal([
            Constraint::Length(Mascot::WIDTH + 4),
            Constraint::Length(DataPanel::WIDTH),
        ])
        .flex(Flex::Center)
        .areas(middle);

        Mascot.render(
            frame,
            mascot,
            MascotProps {
                condition: active.condition,
                mood: state.mascot_mood(),
                tick: state.tick_count,
                caption: true,
            },
        );
        DataPanel.render(
            frame,
            panel,
            DataPanelProps {
                hour: active,
                unit: state.unit,
                is_day: state.is_daytime(),
            },
        );

        self.timeline
            .render(frame, timeline, Self::timeline_props(state, props.is_focused));

        // Drop the URIs when the full line would be clipped
        let mut footer = sources_line(&weather.sources, true);
        if footer.width() > sources.width as usize {
            footer = sources_line(&weather.sources, false);
        }
        frame.render_widget(Paragraph::new(footer).centered(), sources);

        HelpBar.render(
            frame,
            help,
            HelpBarProps {
                mode: Mode::Dashboard,
            },
        );
    }
}

fn sources_line(sources: &[Source], with_uri: bool) -> Line<'_> {
    let label = Style::default().fg(Color::Rgb(190, 195, 210));
    if sources.is_empty() {
        return Line::from(Span::styled("Sources: none listed", label));
    }
    let mut spans = vec![Span::styled("Sources: ", label)];
    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", label));
        }
        spans.push(Span::styled(
            source.title.as_str(),
            Style::default().fg(Color::White).underlined(),
        ));
        if with_uri {
            spans.push(Span::styled(format!(" ({})", source.uri), label));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherCondition;
    use crate::state::fixtures::weather;
    use tui_dispatch::testing::*;

    fn loaded(condition: WeatherCondition) -> AppState {
        AppState {
            mode: Mode::Dashboard,
            weather: Some(weather("Oslo, Norway", condition)),
            last_query: Some("Oslo".into()),
            ..Default::default()
        }
    }

    fn props(state: &AppState) -> DashboardProps<'_> {
        DashboardProps {
            state,
            is_focused: true,
        }
    }

    #[test]
    fn test_handle_event_keys() {
        let state = loaded(WeatherCondition::Cloudy);
        let mut dashboard = Dashboard::new();

        dashboard
            .handle_event(&EventKind::Key(key("u")), props(&state))
            .assert_first(Action::UiToggleUnits);
        dashboard
            .handle_event(&EventKind::Key(key("/")), props(&state))
            .assert_first(Action::SearchOpen);
        dashboard
            .handle_event(&EventKind::Key(key("r")), props(&state))
            .assert_first(Action::WeatherSearch("Oslo".into()));
        dashboard
            .handle_event(&EventKind::Key(key("q")), props(&state))
            .assert_first(Action::Quit);
        dashboard
            .handle_event(&EventKind::Key(key("esc")), props(&state))
            .assert_empty();
    }

    #[test]
    fn test_hour_keys_reach_timeline() {
        let mut state = loaded(WeatherCondition::Cloudy);
        state.selected_hour = 3;
        let mut dashboard = Dashboard::new();

        dashboard
            .handle_event(&EventKind::Key(key("right")), props(&state))
            .assert_first(Action::HourSelect(4));
        dashboard
            .handle_event(&EventKind::Key(key("home")), props(&state))
            .assert_first(Action::HourSelect(0));
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = loaded(WeatherCondition::Cloudy);
        let mut dashboard = Dashboard::new();
        dashboard
            .handle_event(
                &EventKind::Key(key("u")),
                DashboardProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .assert_empty();
    }

    #[test]
    fn test_render_selected_hour_drives_panel_and_mascot() {
        let mut state = loaded(WeatherCondition::Rainy);
        state.selected_hour = 14;
        let mut dashboard = Dashboard::new();
        let mut render = RenderHarness::new(80, 24);

        let output = render.render_to_string_plain(|frame| {
            dashboard.render(frame, frame.area(), props(&state));
        });

        assert!(output.contains("Oslo, Norway"));
        assert!(output.contains("14:00 day"));
        assert!(output.contains("14.0°C"));
        assert!(output.contains("Feifei is sad"));
        assert!(output.contains("Sources: Open-Meteo"));
    }

    #[test]
    fn test_sources_line_without_sources() {
        let line = sources_line(&[], true);
        assert_eq!(line.to_string(), "Sources: none listed");
    }

    #[test]
    fn test_sources_line_formats() {
        let sources = [
            Source::new("Open-Meteo", "https://open-meteo.com/"),
            Source::new("Geocoding", "https://geocoding-api.open-meteo.com/"),
        ];
        assert_eq!(
            sources_line(&sources, true).to_string(),
            "Sources: Open-Meteo (https://open-meteo.com/) · Geocoding (https://geocoding-api.open-meteo.com/)"
        );
        assert_eq!(
            sources_line(&sources, false).to_string(),
            "Sources: Open-Meteo · Geocoding"
        );
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;
use super::timeline::condition_glyph;
use crate::action::Action;
use crate::state::{HourlyForecast, TempUnit};

pub struct DataPanel;

pub struct DataPanelProps<'a> {
    pub hour: &'a HourlyForecast,
    pub unit: TempUnit,
    pub is_day: bool,
}

impl DataPanel {
    pub const HEIGHT: u16 = 8;
    pub const WIDTH: u16 = 30;
}

impl Component<Action> for DataPanel {
    type Props<'a> = DataPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hour = props.hour;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(200, 205, 220)))
            .style(Style::default().bg(Color::Rgb(25, 30, 45)))
            .title(format!(" {} {} ", hour.time, if props.is_day { "day" } else { "night" }))
            .title_style(Style::default().fg(Color::White).bold())
            .title_alignment(Alignment::Center);

        let label = Style::default().fg(Color::Rgb(150, 155, 170));
        let value = Style::default().fg(Color::White);

        let text = Text::from(vec![
            Line::from(Span::styled(
                props.unit.format(hour.temp),
                Style::default().fg(temp_to_color(hour.temp)).bold(),
            ))
            .centered(),
            Line::from(vec![
                Span::styled(format!("{} ", condition_glyph(hour.condition)), value),
                Span::styled(hour.description.clone(), Style::default().fg(Color::Gray)),
            ])
            .centered(),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Humidity  ", label),
                Span::styled(format!("{}%", hour.humidity), value),
            ]),
            Line::from(vec![
                Span::styled(" Wind      ", label),
                Span::styled(format!("{:.1} km/h", hour.wind_speed), value),
            ]),
            Line::from(vec![
                Span::styled(" Sky       ", label),
                Span::styled(hour.condition.label(), value),
            ]),
        ]);

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

/// Get temperature-based color
fn temp_to_color(celsius: f32) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherCondition;
    use crate::state::fixtures::hour;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_reading() {
        let reading = HourlyForecast {
            temp: 22.5,
            humidity: 71,
            wind_speed: 9.25,
            description: "Partly cloudy".into(),
            ..hour("15:00", WeatherCondition::Cloudy)
        };
        let mut render = RenderHarness::new(DataPanel::WIDTH, DataPanel::HEIGHT);

        let output = render.render_to_string_plain(|frame| {
            DataPanel.render(
                frame,
                frame.area(),
                DataPanelProps {
                    hour: &reading,
                    unit: TempUnit::Celsius,
                    is_day: true,
                },
            );
        });

        assert!(output.contains("15:00 day"));
        assert!(output.contains("22.5°C"));
        assert!(output.contains("Partly cloudy"));
        assert!(output.contains("71%"));
        assert!(output.contains("9.2 km/h") || output.contains("9.3 km/h"));
        assert!(output.contains("Cloudy"));
    }

    #[test]
    fn test_render_fahrenheit_at_night() {
        let reading = HourlyForecast {
            temp: 0.0,
            ..hour("23:00", WeatherCondition::Clear)
        };
        let mut render = RenderHarness::new(DataPanel::WIDTH, DataPanel::HEIGHT);

        let output = render.render_to_string_plain(|frame| {
            DataPanel.render(
                frame,
                frame.area(),
                DataPanelProps {
                    hour: &reading,
                    unit: TempUnit::Fahrenheit,
                    is_day: false,
                },
            );
        });

        assert!(output.contains("23:00 night"));
        assert!(output.contains("32.0°F"));
    }
}

//! Background scene: sky color from condition x day/night, plus particles
//!
//! Particles are a pure function of (cell, tick) so the scene animates without
//! any state of its own.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherCondition;

pub struct Scene;

pub struct SceneProps {
    pub condition: WeatherCondition,
    pub is_day: bool,
    pub tick: u32,
}

impl Component<Action> for Scene {
    type Props<'a> = SceneProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let flash = props.condition == WeatherCondition::Stormy && props.tick % 29 < 2;
        let bg = if flash {
            Color::Rgb(150, 150, 175)
        } else {
            sky_color(props.condition, props.is_day)
        };
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let rel = ((x - area.x) as u32, (y - area.y) as u32);
                if let Some((symbol, fg)) = particle(&props, rel) {
                    let cell = &mut buf[(x, y)];
                    cell.set_char(symbol);
                    cell.set_fg(fg);
                }
            }
        }
    }
}

pub fn sky_color(condition: WeatherCondition, is_day: bool) -> Color {
    match (condition, is_day) {
        (WeatherCondition::Sunny, true) => Color::Rgb(70, 145, 225),
        (WeatherCondition::Clear, true) => Color::Rgb(90, 160, 230),
        (WeatherCondition::Cloudy, true) => Color::Rgb(115, 130, 150),
        (WeatherCondition::Rainy, true) => Color::Rgb(70, 85, 105),
        (WeatherCondition::Snowy, true) => Color::Rgb(150, 165, 185),
        (WeatherCondition::Stormy, true) => Color::Rgb(50, 55, 70),
        (WeatherCondition::Sunny | WeatherCondition::Clear, false) => Color::Rgb(15, 20, 45),
        (WeatherCondition::Cloudy, false) => Color::Rgb(35, 40, 55),
        (WeatherCondition::Rainy, false) => Color::Rgb(25, 30, 45),
        (WeatherCondition::Snowy, false) => Color::Rgb(45, 50, 70),
        (WeatherCondition::Stormy, false) => Color::Rgb(15, 15, 25),
    }
}

/// Cheap spatial hash so particles don't line up in rows
fn scatter(x: u32, y: u32) -> u32 {
    let mut h = x.wrapping_mul(374_761_393) ^ y.wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^ (h >> 16)
}

fn particle(props: &SceneProps, (x, y): (u32, u32)) -> Option<(char, Color)> {
    let t = props.tick;
    match props.condition {
        WeatherCondition::Rainy | WeatherCondition::Stormy => {
            // Columns of drops falling one row per tick
            (x % 3 == 0 && y.wrapping_sub(t).wrapping_add(scatter(x, 0)) % 7 == 0)
                .then_some(('╎', Color::Rgb(140, 170, 220)))
        }
        WeatherCondition::Snowy => {
            // Slower fall with a sideways drift
            let drift = x.wrapping_add(t / 6);
            (drift % 5 == 0 && y.wrapping_sub(t / 2).wrapping_add(scatter(drift, 1)) % 6 == 0)
                .then_some(('*', Color::Rgb(240, 245, 255)))
        }
        WeatherCondition::Cloudy => {
            // Wisps drifting right
            let shifted = x.wrapping_sub(t / 3);
            (y % 4 == 1 && scatter(shifted / 6, y) % 5 == 0)
                .then_some(('~', Color::Rgb(185, 190, 200)))
        }
        WeatherCondition::Sunny | WeatherCondition::Clear if !props.is_day => {
            // Twinkling stars
            let h = scatter(x, y);
            (h % 53 == 0).then(|| {
                let symbol = if (h / 53).wrapping_add(t / 5) % 3 == 0 { '✦' } else { '·' };
                (symbol, Color::Rgb(230, 230, 200))
            })
        }
        WeatherCondition::Sunny | WeatherCondition::Clear => {
            // Sparse glints near the top of the sky
            (y < 3 && scatter(x, y.wrapping_add(t / 8)) % 41 == 0)
                .then_some(('·', Color::Rgb(255, 240, 180)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn render(condition: WeatherCondition, is_day: bool, tick: u32) -> String {
        let mut render = RenderHarness::new(60, 20);
        render.render_to_string_plain(|frame| {
            Scene.render(
                frame,
                frame.area(),
                SceneProps {
                    condition,
                    is_day,
                    tick,
                },
            );
        })
    }

    #[test]
    fn test_rain_draws_drops() {
        assert!(render(WeatherCondition::Rainy, true, 0).contains('╎'));
    }

    #[test]
    fn test_rain_falls_with_ticks() {
        assert_ne!(
            render(WeatherCondition::Rainy, true, 0),
            render(WeatherCondition::Rainy, true, 1)
        );
    }

    #[test]
    fn test_snow_draws_flakes() {
        assert!(render(WeatherCondition::Snowy, false, 3).contains('*'));
    }

    #[test]
    fn test_night_sky_is_darker() {
        for condition in [
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
        ] {
            let (Color::Rgb(dr, dg, db), Color::Rgb(nr, ng, nb)) =
                (sky_color(condition, true), sky_color(condition, false))
            else {
                panic!("sky colors are rgb");
            };
            assert!(nr as u32 + ng as u32 + nb as u32 < dr as u32 + dg as u32 + db as u32);
        }
    }
}

//! Derived view values
//!
//! Pure functions of a single [`HourlyForecast`]. They are recomputed on every
//! render from the selected hour; nothing here is cached in state.

use crate::state::{HourlyForecast, WeatherCondition};

/// Mascot expression
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Sleepy,
    Excited,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Sleepy => "sleepy",
            Mood::Excited => "excited",
        }
    }
}

/// Hour of day from an "HH:MM" label
pub fn hour_of(time: &str) -> Option<u8> {
    let hour = time.split(':').next()?.trim().parse::<u8>().ok()?;
    (hour < 24).then_some(hour)
}

/// Weather beats the clock: rain and storms are sad, sun is exciting at any
/// hour, and only otherwise do late/early hours make the mascot sleepy.
pub fn mood(hour: &HourlyForecast) -> Mood {
    match hour.condition {
        WeatherCondition::Rainy | WeatherCondition::Stormy => Mood::Sad,
        WeatherCondition::Sunny => Mood::Excited,
        _ => match hour_of(&hour.time) {
            Some(h) if h >= 22 || h <= 6 => Mood::Sleepy,
            _ => Mood::Happy,
        },
    }
}

/// Daytime is [06:00, 20:00)
pub fn is_day(hour: &HourlyForecast) -> bool {
    matches!(hour_of(&hour.time), Some(6..=19))
}

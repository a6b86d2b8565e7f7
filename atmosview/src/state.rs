//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and only the reducer mutates it.
//! Derived values (active hour, mascot mood, day/night) are computed on
//! demand by the selectors in [`crate::selectors`].

use tui_dispatch::debug::{DebugSection, DebugState};

use crate::selectors::{self, Mood};

/// Animation tick interval (scene particles, loading spinner)
pub const ANIM_TICK_MS: u64 = 120;

/// Location used when geolocation is unavailable
pub const DEFAULT_FALLBACK_LOCATION: &str = "London";

/// Number of hourly entries in a forecast
pub const FORECAST_HOURS: usize = 24;

/// Closed set of conditions the scene and mascot know how to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Clear,
}

impl WeatherCondition {
    /// Map a WMO weather code to a condition.
    ///
    /// Codes 0 and 1 (clear / mainly clear) split into Sunny and Clear
    /// depending on whether the sun is up.
    pub fn from_wmo(code: u8, is_day: bool) -> Self {
        match code {
            0 | 1 if is_day => WeatherCondition::Sunny,
            0 | 1 => WeatherCondition::Clear,
            2 | 3 | 45 | 48 => WeatherCondition::Cloudy,
            51..=67 | 80..=82 => WeatherCondition::Rainy,
            71..=77 | 85 | 86 => WeatherCondition::Snowy,
            95..=99 => WeatherCondition::Stormy,
            _ => WeatherCondition::Cloudy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Snowy => "Snowy",
            WeatherCondition::Stormy => "Stormy",
            WeatherCondition::Clear => "Clear",
        }
    }
}

/// One hour's reading
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyForecast {
    /// Wall-clock label, e.g. "14:00"
    pub time: String,
    /// Celsius
    pub temp: f32,
    pub condition: WeatherCondition,
    /// Relative humidity in percent
    pub humidity: u8,
    /// km/h
    pub wind_speed: f32,
    pub description: String,
}

/// Attribution for the data shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

impl Source {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Normalized forecast for one location
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherData {
    pub location: String,
    pub current: HourlyForecast,
    /// Chronological, `FORECAST_HOURS` entries
    pub hourly: Vec<HourlyForecast>,
    pub sources: Vec<Source>,
}

/// Top-level screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Landing,
    Dashboard,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn format(&self, celsius: f32) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", celsius),
            TempUnit::Fahrenheit => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
        }
    }

    /// Whole-degree form used in the timeline cells
    pub fn format_short(&self, celsius: f32) -> String {
        match self {
            TempUnit::Celsius => format!("{:.0}°", celsius),
            TempUnit::Fahrenheit => format!("{:.0}°", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}

/// Location search overlay
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub is_open: bool,
    pub query: String,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: Mode,

    /// True while a locate or forecast task is outstanding
    pub is_loading: bool,

    /// A geolocation lookup is pending and no search was issued since
    pub is_locating: bool,

    /// Last successful forecast (None before the first fetch)
    pub weather: Option<WeatherData>,

    /// Index into `weather.hourly`
    pub selected_hour: usize,

    /// Searched when geolocation fails
    pub fallback_location: String,

    pub unit: TempUnit,

    pub search: SearchState,

    /// Most recently issued location query, re-run by refresh
    pub last_query: Option<String>,

    /// Blocking message shown after a failed fetch
    pub alert: Option<String>,

    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(fallback_location: impl Into<String>) -> Self {
        Self {
            mode: Mode::Landing,
            is_loading: false,
            is_locating: false,
            weather: None,
            selected_hour: 0,
            fallback_location: fallback_location.into(),
            unit: TempUnit::default(),
            search: SearchState::default(),
            last_query: None,
            alert: None,
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }

    pub fn is_landing(&self) -> bool {
        self.mode == Mode::Landing
    }

    /// Forecast for the selected hour
    pub fn active_forecast(&self) -> Option<&HourlyForecast> {
        self.weather
            .as_ref()
            .and_then(|weather| weather.hourly.get(self.selected_hour))
    }

    /// Number of selectable hours (0 before the first fetch)
    pub fn hour_count(&self) -> usize {
        self.weather
            .as_ref()
            .map(|weather| weather.hourly.len())
            .unwrap_or(0)
    }

    pub fn mascot_mood(&self) -> Mood {
        self.active_forecast()
            .map(selectors::mood)
            .unwrap_or(Mood::Happy)
    }

    pub fn is_daytime(&self) -> bool {
        self.active_forecast().map(selectors::is_day).unwrap_or(true)
    }

    /// Condition driving the scene; Sunny until there is data
    pub fn scene_condition(&self) -> WeatherCondition {
        self.active_forecast()
            .map(|hour| hour.condition)
            .unwrap_or(WeatherCondition::Sunny)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let weather = self.weather.as_ref();
        vec![
            DebugSection::new("App")
                .entry("mode", format!("{:?}", self.mode))
                .entry("loading", self.is_loading.to_string())
                .entry("locating", self.is_locating.to_string())
                .entry("selected_hour", self.selected_hour.to_string())
                .entry("last_query", self.last_query.as_deref().unwrap_or("(none)")),
            DebugSection::new("Forecast")
                .entry(
                    "location",
                    weather.map(|w| w.location.as_str()).unwrap_or("(none)"),
                )
                .entry("hours", self.hour_count().to_string())
                .entry("mood", format!("{:?}", self.mascot_mood()))
                .entry("is_day", self.is_daytime().to_string()),
            DebugSection::new("UI")
                .entry("unit", format!("{:?}", self.unit))
                .entry("search_open", self.search.is_open.to_string())
                .entry("alert", self.alert.as_deref().unwrap_or("(none)"))
                .entry("tick", self.tick_count.to_string()),
        ]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_LOCATION)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn hour(time: &str, condition: WeatherCondition) -> HourlyForecast {
        HourlyForecast {
            time: time.into(),
            temp: 18.0,
            condition,
            humidity: 60,
            wind_speed: 12.0,
            description: condition.label().into(),
        }
    }

    /// 24 hours starting at 00:00; every hour uses `condition`
    pub fn weather(location: &str, condition: WeatherCondition) -> WeatherData {
        let hourly: Vec<HourlyForecast> = (0..FORECAST_HOURS)
            .map(|h| HourlyForecast {
                temp: h as f32,
                ..hour(&format!("{:02}:00", h), condition)
            })
            .collect();
        WeatherData {
            location: location.into(),
            current: hourly[0].clone(),
            hourly,
            sources: vec![Source::new("Open-Meteo", "https://open-meteo.com/")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_wmo_mapping() {
        assert_eq!(WeatherCondition::from_wmo(0, true), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_wmo(1, false), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo(3, true), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo(45, true), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo(61, true), WeatherCondition::Rainy);
        assert_eq!(WeatherCondition::from_wmo(81, false), WeatherCondition::Rainy);
        assert_eq!(WeatherCondition::from_wmo(73, true), WeatherCondition::Snowy);
        assert_eq!(WeatherCondition::from_wmo(95, true), WeatherCondition::Stormy);
        assert_eq!(WeatherCondition::from_wmo(200, true), WeatherCondition::Cloudy);
    }

    #[test]
    fn test_active_forecast_follows_selection() {
        let mut state = AppState {
            weather: Some(weather("Oslo", WeatherCondition::Cloudy)),
            mode: Mode::Dashboard,
            ..Default::default()
        };

        for i in [0, 7, 23] {
            state.selected_hour = i;
            let active = state.active_forecast().cloned();
            assert_eq!(active, state.weather.as_ref().map(|w| w.hourly[i].clone()));
        }
    }

    #[test]
    fn test_defaults_without_weather() {
        let state = AppState::default();
        assert!(state.is_landing());
        assert_eq!(state.active_forecast(), None);
        assert_eq!(state.mascot_mood(), Mood::Happy);
        assert!(state.is_daytime());
        assert_eq!(state.scene_condition(), WeatherCondition::Sunny);
        assert_eq!(state.hour_count(), 0);
    }

    #[test]
    fn test_temp_unit_format() {
        assert_eq!(TempUnit::Celsius.format(21.04), "21.0°C");
        assert_eq!(TempUnit::Fahrenheit.format(0.0), "32.0°F");
        assert_eq!(TempUnit::Celsius.toggle(), TempUnit::Fahrenheit);
        assert_eq!(TempUnit::Fahrenheit.format_short(100.0), "212°");
    }
}

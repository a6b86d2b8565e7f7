//! Actions
//!
//! The prefix determines the inferred category (`WeatherSearch`,
//! `WeatherDidLoad` -> "weather"); `Did` marks the result of an async task.

use crate::api::Coordinates;
use crate::state::WeatherData;
use tui_dispatch::ActionSummary;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== App category =====
    /// Landing screen "Check Forecast": geolocate, then search
    AppStart,

    // ===== Locate category =====
    /// Geolocation produced coordinates
    LocateDidResolve(Coordinates),

    /// Geolocation failed or is disabled; search the fallback location
    LocateDidFail(String),

    // ===== Weather category =====
    /// Fetch the forecast for a place name or "lat,lon"
    WeatherSearch(String),

    /// Forecast loaded; replaces the previous one
    WeatherDidLoad(Box<WeatherData>),

    /// Forecast fetch failed
    WeatherDidError(String),

    // ===== Hour category =====
    /// Scrub the timeline; clamped to the available hours
    HourSelect(usize),

    // ===== Search category =====
    SearchOpen,
    SearchClose,
    SearchQueryChange(String),
    SearchQuerySubmit(String),

    // ===== Alert category =====
    AlertDismiss,

    // ===== UI category =====
    UiToggleUnits,
    UiTerminalResize(u16, u16),

    // ===== Uncategorized =====
    /// Animation tick
    Tick,

    Quit,
}

/// Concise summaries for the action log
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(data) => format!(
                "WeatherDidLoad {{ location: {:?}, hours: {}, now: {:.1}°C }}",
                data.location,
                data.hourly.len(),
                data.current.temp
            ),
            Action::WeatherDidError(e) | Action::LocateDidFail(e) => {
                let msg = if e.len() > 40 {
                    format!("{}...", &e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("{}({:?})", tui_dispatch::Action::name(self), msg)
            }
            _ => format!("{:?}", self),
        }
    }
}

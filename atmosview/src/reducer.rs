//! Reducer - (state, action) -> DispatchResult<Effect>
//!
//! All state transitions live here. Async work is requested by returning
//! effects, never performed inline.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::WeatherError;
use crate::state::{AppState, FORECAST_HOURS, Mode};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== App =====
        Action::AppStart => {
            if state.is_loading {
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            state.is_locating = true;
            DispatchResult::changed_with(Effect::Locate)
        }

        // ===== Locate =====
        // A search issued while locating takes precedence over the lookup
        Action::LocateDidResolve(_) | Action::LocateDidFail(_) if !state.is_locating => {
            DispatchResult::unchanged()
        }

        Action::LocateDidResolve(coords) => start_search(state, &coords.to_string()),

        Action::LocateDidFail(_) => {
            let fallback = state.fallback_location.clone();
            start_search(state, &fallback)
        }

        // ===== Weather =====
        Action::WeatherSearch(location) => start_search(state, &location),

        Action::WeatherDidLoad(data) => {
            state.is_loading = false;
            if data.hourly.is_empty() {
                let error = WeatherError::Incomplete {
                    expected: FORECAST_HOURS,
                    got: 0,
                };
                state.alert = Some(error.to_string());
                return DispatchResult::changed();
            }
            state.weather = Some(*data);
            state.selected_hour = 0;
            state.mode = Mode::Dashboard;
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            // Previous forecast and mode stay as they were
            state.is_loading = false;
            state.alert = Some(msg);
            DispatchResult::changed()
        }

        // ===== Hour =====
        Action::HourSelect(index) => select_hour(state, index),

        // ===== Search =====
        Action::SearchOpen => {
            state.search.is_open = true;
            state.search.query.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            if !state.search.is_open {
                return DispatchResult::unchanged();
            }
            state.search.is_open = false;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search.query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            if query.trim().is_empty() {
                return DispatchResult::unchanged();
            }
            state.search.is_open = false;
            state.search.query = query;
            let location = state.search.query.clone();
            start_search(state, &location).mark_changed()
        }

        // ===== Alert =====
        Action::AlertDismiss => {
            if state.alert.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Scene particles and the mascot animate continuously
            DispatchResult::changed()
        }

        // Handled by the runtime's quit predicate
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_search(state: &mut AppState, location: &str) -> DispatchResult<Effect> {
    let location = location.trim();
    if location.is_empty() {
        return DispatchResult::unchanged();
    }
    state.is_loading = true;
    state.is_locating = false;
    state.last_query = Some(location.to_string());
    DispatchResult::changed_with(Effect::FetchWeather {
        location: location.to_string(),
    })
}

/// Clamp to the hourly bounds; no-op before the first forecast
fn select_hour(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    let count = state.hour_count();
    if count == 0 {
        return DispatchResult::unchanged();
    }
    let index = index.min(count - 1);
    if index == state.selected_hour {
        return DispatchResult::unchanged();
    }
    state.selected_hour = index;
    DispatchResult::changed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Coordinates;
    use crate::state::WeatherCondition;
    use crate::state::fixtures::weather;

    fn dashboard(location: &str) -> AppState {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::WeatherDidLoad(Box::new(weather(location, WeatherCondition::Cloudy))),
        );
        state
    }

    #[test]
    fn test_start_sets_loading_and_locates() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::AppStart);

        assert!(result.changed);
        assert!(state.is_loading);
        assert_eq!(result.effects, vec![Effect::Locate]);
    }

    #[test]
    fn test_start_while_loading_is_ignored() {
        let mut state = AppState {
            is_loading: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::AppStart);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_locate_resolve_searches_coordinates() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        let coords = Coordinates::new(51.5, -0.12).unwrap();

        let result = reducer(&mut state, Action::LocateDidResolve(coords));

        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                location: "51.5000,-0.1200".into()
            }]
        );
        assert!(state.is_loading);
    }

    #[test]
    fn test_locate_failure_falls_back() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);

        let result = reducer(&mut state, Action::LocateDidFail("denied".into()));

        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                location: "London".into()
            }]
        );
        assert!(state.alert.is_none());

        let mut state = AppState::new("Reykjavik");
        reducer(&mut state, Action::AppStart);
        let result = reducer(&mut state, Action::LocateDidFail("denied".into()));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                location: "Reykjavik".into()
            }]
        );
    }

    #[test]
    fn test_search_while_locating_wins_over_location() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQuerySubmit("Kyoto".into()));

        let coords = Coordinates::new(51.5, -0.12).unwrap();
        let result = reducer(&mut state, Action::LocateDidResolve(coords));
        assert!(!result.changed);
        assert!(result.effects.is_empty());

        let result = reducer(&mut state, Action::LocateDidFail("late".into()));
        assert!(!result.changed);
        assert!(state.is_loading);
        assert_eq!(state.last_query.as_deref(), Some("Kyoto"));
    }

    #[test]
    fn test_locate_result_without_start_is_ignored() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::LocateDidFail("denied".into()));
        assert!(!result.changed);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_search_sets_loading() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::WeatherSearch("  Tokyo ".into()));

        assert!(result.changed);
        assert!(state.is_loading);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                location: "Tokyo".into()
            }]
        );
        assert_eq!(state.last_query.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WeatherSearch("   ".into()));
        assert!(!result.changed);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_successful_search_enters_dashboard_at_hour_zero() {
        let mut state = dashboard("Oslo");
        state.selected_hour = 17;
        state.is_loading = true;

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad(Box::new(weather("Lima", WeatherCondition::Sunny))),
        );

        assert!(result.changed);
        assert_eq!(state.mode, Mode::Dashboard);
        assert_eq!(state.selected_hour, 0);
        assert!(!state.is_loading);
        assert_eq!(state.weather.as_ref().map(|w| w.location.as_str()), Some("Lima"));
    }

    #[test]
    fn test_failed_search_keeps_previous_state() {
        let mut state = dashboard("Oslo");
        state.selected_hour = 5;
        let before = state.weather.clone();

        reducer(&mut state, Action::WeatherSearch("Atlantis".into()));
        assert!(state.is_loading);

        let result = reducer(
            &mut state,
            Action::WeatherDidError("location not found: Atlantis".into()),
        );

        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(state.weather, before);
        assert_eq!(state.mode, Mode::Dashboard);
        assert_eq!(state.selected_hour, 5);
        assert_eq!(state.alert.as_deref(), Some("location not found: Atlantis"));
    }

    #[test]
    fn test_empty_forecast_keeps_previous_state() {
        let mut state = dashboard("Oslo");
        state.selected_hour = 5;
        let before = state.weather.clone();
        reducer(&mut state, Action::WeatherSearch("Nowhere".into()));

        let mut empty = weather("Nowhere", WeatherCondition::Sunny);
        empty.hourly.clear();
        let result = reducer(&mut state, Action::WeatherDidLoad(Box::new(empty)));

        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(state.weather, before);
        assert_eq!(state.mode, Mode::Dashboard);
        assert_eq!(state.selected_hour, 5);
        assert_eq!(
            state.alert.as_deref(),
            Some("forecast incomplete: expected 24 hours, got 0")
        );
    }

    #[test]
    fn test_failed_first_search_stays_on_landing() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        reducer(&mut state, Action::LocateDidFail("no network".into()));
        reducer(&mut state, Action::WeatherDidError("timeout".into()));

        assert!(state.is_landing());
        assert!(state.weather.is_none());
        assert!(!state.is_loading);
        assert!(state.alert.is_some());
    }

    #[test]
    fn test_hour_select_clamps() {
        let mut state = dashboard("Oslo");

        reducer(&mut state, Action::HourSelect(9));
        assert_eq!(state.selected_hour, 9);
        assert_eq!(state.active_forecast().map(|h| h.time.as_str()), Some("09:00"));

        reducer(&mut state, Action::HourSelect(99));
        assert_eq!(state.selected_hour, 23);
    }

    #[test]
    fn test_hour_select_same_index_is_unchanged() {
        let mut state = dashboard("Oslo");
        assert!(!reducer(&mut state, Action::HourSelect(0)).changed);
        assert!(reducer(&mut state, Action::HourSelect(usize::MAX)).changed);
        assert_eq!(state.selected_hour, 23);
        assert!(!reducer(&mut state, Action::HourSelect(23)).changed);
    }

    #[test]
    fn test_hour_select_without_weather_is_noop() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::HourSelect(3));
        assert!(!result.changed);
        assert_eq!(state.selected_hour, 0);
    }

    #[test]
    fn test_search_overlay_submit() {
        let mut state = dashboard("Oslo");

        reducer(&mut state, Action::SearchOpen);
        assert!(state.search.is_open);

        reducer(&mut state, Action::SearchQueryChange("Par".into()));
        assert_eq!(state.search.query, "Par");

        let result = reducer(&mut state, Action::SearchQuerySubmit("Paris".into()));
        assert!(!state.search.is_open);
        assert!(state.is_loading);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                location: "Paris".into()
            }]
        );
    }

    #[test]
    fn test_search_overlay_blank_submit_keeps_open() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);

        let result = reducer(&mut state, Action::SearchQuerySubmit(" ".into()));
        assert!(!result.changed);
        assert!(state.search.is_open);
    }

    #[test]
    fn test_alert_dismiss() {
        let mut state = AppState {
            alert: Some("boom".into()),
            ..Default::default()
        };

        assert!(reducer(&mut state, Action::AlertDismiss).changed);
        assert!(state.alert.is_none());
        assert!(!reducer(&mut state, Action::AlertDismiss).changed);
    }

    #[test]
    fn test_toggle_units() {
        let mut state = AppState::default();
        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, crate::state::TempUnit::Fahrenheit);
        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, crate::state::TempUnit::Celsius);
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert_eq!(state.terminal_size, (100, 40));
        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }

    #[test]
    fn test_tick_advances() {
        let mut state = AppState {
            tick_count: u32::MAX,
            ..Default::default()
        };
        reducer(&mut state, Action::Tick);
        assert_eq!(state.tick_count, 0);
    }
}

//! AtmosView - terminal weather visualizer
//!
//! A 24-hour forecast rendered as an animated sky with a mascot whose mood
//! follows the selected hour. Built on the tui-dispatch store/effect loop:
//! components emit actions, the reducer updates [`state::AppState`] and
//! returns [`effect::Effect`]s that the binary turns into async tasks.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod error;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod ui;

//! Screen composition and event routing
//!
//! Layers, bottom to top: scene, landing or dashboard, search overlay,
//! alert. Input goes to the topmost layer that is open.

use ratatui::{Frame, layout::Rect};
use tui_dispatch::{EventKind, EventOutcome, RenderContext};

use crate::action::Action;
use crate::components::{
    AlertModal, AlertModalProps, Component, Dashboard, DashboardProps, Landing, LandingProps,
    Scene, SceneProps, SearchOverlay, SearchOverlayProps,
};
use crate::state::{AppState, Mode};

pub struct AppUi {
    landing: Landing,
    dashboard: Dashboard,
    search: SearchOverlay,
    alert: AlertModal,
}

impl Default for AppUi {
    fn default() -> Self {
        Self::new()
    }
}

impl AppUi {
    pub fn new() -> Self {
        Self {
            landing: Landing::new(),
            dashboard: Dashboard::new(),
            search: SearchOverlay::new(),
            alert: AlertModal,
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchOverlayProps<'_> {
        SearchOverlayProps {
            query: &state.search.query,
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
    ) {
        let is_focused =
            render_ctx.is_focused() && !state.search.is_open && state.alert.is_none();

        Scene.render(
            frame,
            area,
            SceneProps {
                condition: state.scene_condition(),
                is_day: state.is_daytime(),
                tick: state.tick_count,
            },
        );

        match state.mode {
            Mode::Landing => self.landing.render(
                frame,
                area,
                LandingProps {
                    is_loading: state.is_loading,
                    is_focused,
                    tick: state.tick_count,
                },
            ),
            Mode::Dashboard => self
                .dashboard
                .render(frame, area, DashboardProps { state, is_focused }),
        }

        self.search.set_open(state.search.is_open);
        if state.search.is_open {
            let props = Self::search_props(state, render_ctx.is_focused() && state.alert.is_none());
            self.search.render(frame, area, props);
        }

        if let Some(message) = state.alert.as_deref() {
            self.alert.render(frame, area, AlertModalProps { message });
        }
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
        }

        // The alert blocks everything underneath it
        if let Some(message) = state.alert.as_deref() {
            return EventOutcome::from_actions(
                self.alert.handle_event(event, AlertModalProps { message }),
            );
        }

        if state.search.is_open {
            return EventOutcome::from_actions(
                self.search.handle_event(event, Self::search_props(state, true)),
            );
        }

        match state.mode {
            Mode::Landing => EventOutcome::from_actions(self.landing.handle_event(
                event,
                LandingProps {
                    is_loading: state.is_loading,
                    is_focused: true,
                    tick: state.tick_count,
                },
            )),
            Mode::Dashboard => EventOutcome::from_actions(
                self.dashboard
                    .handle_event(event, DashboardProps { state, is_focused: true }),
            ),
        }
    }
}

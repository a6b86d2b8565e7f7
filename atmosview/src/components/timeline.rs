//! Hourly timeline scrubber
//!
//! A strip of hour cells over a slider track. Keyboard, wheel and mouse all
//! resolve to a single `on_select(index)` callback; the reducer clamps.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;
use crate::state::{HourlyForecast, TempUnit, WeatherCondition};

/// Columns per hour cell ("14:00" plus a gap)
const CELL_WIDTH: u16 = 6;

pub struct TimelineProps<'a> {
    pub hours: &'a [HourlyForecast],
    pub selected: usize,
    pub unit: TempUnit,
    pub is_focused: bool,
    pub on_select: fn(usize) -> Action,
}

/// Geometry of the last render, for mapping mouse positions back to hours
#[derive(Clone, Copy, Debug, Default)]
struct Layout {
    inner: Rect,
    first_visible: usize,
}

#[derive(Default)]
pub struct Timeline {
    layout: Option<Layout>,
}

impl Timeline {
    /// Border + time, glyph, temperature rows + track row
    pub const HEIGHT: u16 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    fn index_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let layout = self.layout?;
        let inner = layout.inner;
        if len == 0 || !inner.contains((column, row).into()) {
            return None;
        }
        let track_row = inner.y + inner.height.saturating_sub(1);
        if row == track_row {
            Some(track_index(column - inner.x, inner.width, len))
        } else {
            let offset = ((column - inner.x) / CELL_WIDTH) as usize;
            Some((layout.first_visible + offset).min(len - 1))
        }
    }
}

impl Component<Action> for Timeline {
    type Props<'a> = TimelineProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        let len = props.hours.len();
        if !props.is_focused || len == 0 {
            return vec![];
        }
        let last = len - 1;
        let target = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => props.selected.checked_sub(1),
                KeyCode::Right | KeyCode::Char('l') => {
                    (props.selected < last).then(|| props.selected + 1)
                }
                KeyCode::Home | KeyCode::Char('g') => Some(0),
                KeyCode::End | KeyCode::Char('G') => Some(last),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                if *delta > 0 {
                    (props.selected < last).then(|| props.selected + 1)
                } else {
                    props.selected.checked_sub(1)
                }
            }
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                    self.index_at(mouse.column, mouse.row, len)
                }
                _ => None,
            },
            _ => None,
        };

        match target {
            Some(index) if index != props.selected => vec![(props.on_select)(index)],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(160, 170, 190)))
            .title(" Next 24 hours ")
            .title_style(Style::default().fg(Color::White).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let len = props.hours.len();
        if len == 0 || inner.height < 4 || inner.width < CELL_WIDTH {
            self.layout = None;
            return;
        }

        let visible = ((inner.width / CELL_WIDTH) as usize).min(len);
        let first_visible = props
            .selected
            .saturating_sub(visible / 2)
            .min(len - visible);
        self.layout = Some(Layout {
            inner,
            first_visible,
        });

        let buf = frame.buffer_mut();
        for (slot, index) in (first_visible..first_visible + visible).enumerate() {
            let hour = &props.hours[index];
            let x = inner.x + slot as u16 * CELL_WIDTH;
            let cell = Rect::new(x, inner.y, CELL_WIDTH.min(inner.right() - x), 3);
            render_cell(buf, cell, hour, props.unit, index == props.selected);
        }

        let track = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let knob = track_position(props.selected, len, inner.width);
        let line: String = (0..inner.width)
            .map(|col| if col == knob { '●' } else { '─' })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                line,
                Style::default().fg(Color::Rgb(200, 210, 230)),
            ))),
            track,
        );
    }
}

fn render_cell(buf: &mut Buffer, area: Rect, hour: &HourlyForecast, unit: TempUnit, selected: bool) {
    let style = if selected {
        Style::default()
            .fg(Color::Rgb(20, 30, 50))
            .bg(Color::Rgb(255, 220, 120))
            .bold()
    } else {
        Style::default().fg(Color::White)
    };
    let rows = [
        hour.time.clone(),
        condition_glyph(hour.condition).to_string(),
        unit.format_short(hour.temp),
    ];
    for (i, text) in rows.into_iter().enumerate() {
        let row = Rect::new(area.x, area.y + i as u16, area.width.saturating_sub(1), 1);
        if selected {
            buf.set_style(row, style);
        }
        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

pub fn condition_glyph(condition: WeatherCondition) -> char {
    match condition {
        WeatherCondition::Sunny => '☀',
        WeatherCondition::Clear => '☾',
        WeatherCondition::Cloudy => '☁',
        WeatherCondition::Rainy => '☂',
        WeatherCondition::Snowy => '❄',
        WeatherCondition::Stormy => 'ϟ',
    }
}

/// Column of the slider knob for `index` on a track `width` wide
fn track_position(index: usize, len: usize, width: u16) -> u16 {
    if len <= 1 || width <= 1 {
        return 0;
    }
    ((index.min(len - 1) * (width as usize - 1)) / (len - 1)) as u16
}

/// Inverse of `track_position`, rounding to the nearest hour
fn track_index(column: u16, width: u16, len: usize) -> usize {
    if len <= 1 || width <= 1 {
        return 0;
    }
    let span = width as usize - 1;
    ((column as usize * (len - 1) + span / 2) / span).min(len - 1)
}

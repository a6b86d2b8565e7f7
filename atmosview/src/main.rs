//! AtmosView - terminal weather visualizer
//!
//! 1. Event (keyboard/mouse) -> AppUi.map_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects become keyed tasks (geolocation, forecast fetch)
//! 5. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! # Start on the landing screen
//! cargo run -p atmosview
//!
//! # Jump straight to a forecast, logging to a file
//! cargo run -p atmosview -- --location Tokyo --log-file atmosview.log
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;
use tui_dispatch::debug::DebugLayer;
use tui_dispatch::{EffectContext, EffectRuntime, EffectStoreWithMiddleware};

use atmosview::action::Action;
use atmosview::api::{ClientConfig, WeatherClient};
use atmosview::effect::Effect;
use atmosview::reducer::reducer;
use atmosview::state::{ANIM_TICK_MS, AppState, DEFAULT_FALLBACK_LOCATION, TempUnit};
use atmosview::ui::AppUi;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Units {
    Celsius,
    Fahrenheit,
}

impl From<Units> for TempUnit {
    fn from(units: Units) -> Self {
        match units {
            Units::Celsius => TempUnit::Celsius,
            Units::Fahrenheit => TempUnit::Fahrenheit,
        }
    }
}

/// Terminal weather visualizer with an animated mascot and hourly timeline
#[derive(Parser, Debug)]
#[command(name = "atmosview")]
#[command(about = "Hourly forecast as an animated terminal sky")]
struct Args {
    /// Skip the landing screen and search this place name or "lat,lon"
    #[arg(long, short)]
    location: Option<String>,

    /// Location searched when geolocation is unavailable
    #[arg(long, default_value = DEFAULT_FALLBACK_LOCATION)]
    fallback: String,

    /// Don't look up the current location; always use the fallback
    #[arg(long)]
    no_locate: bool,

    /// Temperature units
    #[arg(long, value_enum, default_value_t = Units::Celsius)]
    units: Units,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Enable debug mode (F12 to toggle overlay)
    #[arg(long)]
    debug: bool,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let client = WeatherClient::new(ClientConfig {
        timeout: Duration::from_secs(args.timeout),
        ..Default::default()
    })
    .map_err(io::Error::other)?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app and capture result
    let result = run_app(&mut terminal, client, args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "runtime exited with error");
    }
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atmosview=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: WeatherClient,
    args: Args,
) -> io::Result<()> {
    let mut state = AppState::new(args.fallback);
    state.unit = args.units.into();

    let store = EffectStoreWithMiddleware::new(state, reducer, tui_dispatch::NoopMiddleware);

    // Debug layer for inspection (F12) - only active when --debug
    let debug = DebugLayer::simple().active(args.debug);

    let mut runtime = EffectRuntime::from_store(store).with_debug(debug);

    // Tick timer for scene and mascot animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(ANIM_TICK_MS), || Action::Tick);

    if let Some(location) = args.location {
        runtime.enqueue(Action::WeatherSearch(location));
    }

    let ui = RefCell::new(AppUi::new());
    let locate = !args.no_locate;

    runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx, &client, locate),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    client: &WeatherClient,
    locate: bool,
) {
    match effect {
        Effect::Locate => {
            if !locate {
                ctx.tasks().spawn("locate", async {
                    Action::LocateDidFail("geolocation disabled".into())
                });
                return;
            }
            let client = client.clone();
            ctx.tasks().spawn("locate", async move {
                match client.locate().await {
                    Ok(coords) => {
                        tracing::info!(%coords, "located");
                        Action::LocateDidResolve(coords)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "geolocation failed, using fallback location");
                        Action::LocateDidFail(e.to_string())
                    }
                }
            });
        }
        Effect::FetchWeather { location } => {
            tracing::info!(%location, "fetching forecast");
            let client = client.clone();
            // Same key: a newer search aborts the one in flight
            ctx.tasks().spawn("weather", async move {
                match client.fetch_weather(&location).await {
                    Ok(data) => {
                        tracing::info!(location = %data.location, hours = data.hourly.len(), "forecast loaded");
                        Action::WeatherDidLoad(Box::new(data))
                    }
                    Err(e) => {
                        tracing::warn!(%location, error = %e, "forecast fetch failed");
                        Action::WeatherDidError(e.to_string())
                    }
                }
            });
        }
    }
}

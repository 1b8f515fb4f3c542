mod app;
mod domain;
mod fetch;
mod input;
mod snapshot;
mod ticker;
mod ui;

use anyhow::{bail, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch::{FetchEvent, SourceConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use reqwest::blocking::Client;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use ticker::Ticker;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dockwatch")]
#[command(about = "Terminal dashboard for warehouse outbound deliveries", long_about = None)]
struct Cli {
    /// Base URL of the data source (serves data/VL06F.json and
    /// data/statistics.json below it)
    #[arg(short, long, env = "DOCKWATCH_SOURCE", conflicts_with = "github")]
    source: Option<String>,

    /// GitHub shorthand resolved to the raw-content base URL
    #[arg(long, value_name = "USER/REPO[@BRANCH]")]
    github: Option<String>,

    /// Seconds between data refreshes
    #[arg(long, default_value_t = ticker::DEFAULT_REFRESH.as_secs())]
    refresh_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once and print the grouped delivery table without the TUI
    Snapshot {
        /// Show the tomorrow window instead of today
        #[arg(long)]
        tomorrow: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = resolve_source(&cli)?;

    match cli.command {
        Some(Commands::Snapshot { tomorrow }) => snapshot::run(source, tomorrow),
        None => {
            // Keep the appender worker alive for the whole session
            let _log_guard = init_logging()?;
            let refresh = Duration::from_secs(cli.refresh_secs.max(1));
            run_tui(source, refresh)
        }
    }
}

fn resolve_source(cli: &Cli) -> Result<SourceConfig> {
    if let Some(base_url) = &cli.source {
        return Ok(SourceConfig::new(base_url.clone()));
    }
    if let Some(slug) = &cli.github {
        return match SourceConfig::from_github_slug(slug) {
            Some(source) => Ok(source),
            None => bail!("invalid GitHub shorthand {slug:?}, expected user/repo[@branch]"),
        };
    }
    bail!("no data source configured: pass --source <URL> or --github <USER/REPO>")
}

/// Route logs to a file; the terminal belongs to the dashboard
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("dockwatch");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(&log_dir, "dockwatch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run_tui(source: SourceConfig, refresh_period: Duration) -> Result<()> {
    let client = fetch::build_client()?;
    let (tx, rx) = mpsc::channel();

    let mut app = AppState::new();

    // Initial load of both documents
    fetch::spawn_refresh(client.clone(), source.clone(), tx.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(
        &mut terminal,
        &mut app,
        &client,
        &source,
        &tx,
        &rx,
        refresh_period,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[allow(clippy::too_many_arguments)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    client: &Client,
    source: &SourceConfig,
    tx: &Sender<FetchEvent>,
    rx: &Receiver<FetchEvent>,
    refresh_period: Duration,
) -> Result<()> {
    // The two dashboard timers; dropping them on exit is their teardown
    let mut countdown_tick = Ticker::new(ticker::COUNTDOWN_TICK);
    let mut refresh_tick = Ticker::new(refresh_period);
    let mut resize_deadline: Option<Instant> = None;
    let mut redraw = true;

    loop {
        // Scheduled refresh, plus manual refreshes requested from input.
        // A manual refresh restarts the scheduled period.
        if app.take_refresh_request() {
            refresh_tick.reset();
            app.mark_loading();
            fetch::spawn_refresh(client.clone(), source.clone(), tx.clone());
            redraw = true;
        } else if refresh_tick.due() {
            app.mark_loading();
            fetch::spawn_refresh(client.clone(), source.clone(), tx.clone());
            redraw = true;
        }

        // Drain fetch completions; racing refreshes resolve
        // last-writer-wins here
        while let Ok(fetch_event) = rx.try_recv() {
            app.apply_fetch_event(fetch_event);
            redraw = true;
        }

        // The countdown tick only re-renders: tiers are recomputed from
        // the clock during the draw, filtering/grouping stay untouched
        if countdown_tick.due() {
            redraw = true;
        }

        // Debounced resize re-render, no refetch
        if let Some(deadline) = resize_deadline {
            if Instant::now() >= deadline {
                resize_deadline = None;
                redraw = true;
            }
        }

        if redraw {
            terminal.draw(|f| ui::render(f, app))?;
            redraw = false;
        }

        // Handle events with timeout so the timers keep firing
        if event::poll(ticker::POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key)? {
                        return Ok(());
                    }
                    redraw = true;
                }
                Event::Resize(_, _) => {
                    // Single-flight: a new resize resets the deadline
                    resize_deadline = Some(Instant::now() + ticker::RESIZE_DEBOUNCE);
                }
                _ => {}
            }
        }
    }
}

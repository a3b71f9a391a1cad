mod app;
mod config;
mod domain;
mod error;
mod input;
mod logging;
mod monitor;
mod notifications;
mod session;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Args, Parser, Subcommand};
use config::{config_file, ensure_isostudy_dir, init_local_dir, load_config, save_config, AppConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Hms, SuppressedAppSet, TaskList, DEFAULT_SUPPRESSED_APPS};
use monitor::{SuppressionMonitor, SystemProcesses};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "isostudy")]
#[command(about = "Timed study sessions that keep distracting apps closed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .isostudy directory with a default config.json
    Init,
    /// Start a session right away, skipping the setup screen
    Start {
        /// Hours (0-23)
        #[arg(short = 'H', long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=23))]
        hours: u32,
        /// Minutes (0-59)
        #[arg(short = 'M', long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=59))]
        minutes: u32,
        /// Seconds (0-59)
        #[arg(short = 'S', long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=59))]
        seconds: u32,
        #[command(flatten)]
        apps: AppArgs,
        /// Task to add to the checklist (repeatable)
        #[arg(short, long = "task")]
        tasks: Vec<String>,
    },
    /// List running processes that would be silenced, without closing anything
    Scan {
        #[command(flatten)]
        apps: AppArgs,
    },
}

#[derive(Args)]
struct AppArgs {
    /// Application name to silence (repeatable, substring match)
    #[arg(short, long = "app")]
    apps: Vec<String>,
    /// Also silence the configured preset apps
    #[arg(short, long)]
    preset: bool,
}

impl AppArgs {
    fn to_set(&self, config: &AppConfig) -> SuppressedAppSet {
        let mut names: Vec<&str> = Vec::new();
        if self.preset && config.preset_apps.is_empty() {
            names.extend(DEFAULT_SUPPRESSED_APPS);
        } else if self.preset {
            names.extend(config.preset_apps.iter().map(String::as_str));
        }
        names.extend(self.apps.iter().map(String::as_str));
        SuppressedAppSet::from_names(names)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_dir(&current_dir)?;
            save_config(config_file(&dir), &AppConfig::default())?;
            println!("Initialized isostudy directory: {}", dir.display());
            println!("Edit {} to change the preset apps and defaults.", config_file(&dir).display());
            Ok(())
        }
        Some(Commands::Scan { apps }) => {
            let config = load_settings()?;
            let set = apps.to_set(&config);
            if set.is_empty() {
                anyhow::bail!("Nothing to scan for. Pass --app NAME or --preset.");
            }

            let mut monitor = SuppressionMonitor::new(SystemProcesses::new(), config.tick_interval());
            let matches = monitor.scan(&set)?;
            if matches.is_empty() {
                println!("No running processes match {}.", set.names().join(", "));
            }
            for m in matches {
                println!("{:<16} {}", m.suppressed, m.process_name);
            }
            Ok(())
        }
        Some(Commands::Start {
            hours,
            minutes,
            seconds,
            apps,
            tasks,
        }) => {
            let config = load_settings()?;
            let mut app = AppState::new(&config, Box::new(SystemProcesses::new()));
            app.session.apps = apps.to_set(&config);
            app.session.tasks = TaskList::from_titles(&tasks);

            // Reject a bad duration before touching the terminal
            let duration = Hms::new(hours, minutes, seconds);
            if !app.start_session_with(duration) {
                let message = app.error_message.take().unwrap_or_default();
                anyhow::bail!("{}", message);
            }
            run_tui(app)
        }
        None => {
            let config = load_settings()?;
            let app = AppState::new(&config, Box::new(SystemProcesses::new()));
            run_tui(app)
        }
    }
}

/// Set up file logging and read config.json
fn load_settings() -> Result<AppConfig> {
    let dir = ensure_isostudy_dir()?;
    if let Err(e) = logging::init_logging(&dir) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    load_config(config_file(&dir))
}

fn run_tui(mut app: AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Leaving mid-session counts as ending it early
    if app.session.force_quit() {
        eprintln!("Session ended early with {} remaining.", app.session.remaining());
    }

    if let Err(err) = &result {
        tracing::error!("TUI error: {:#}", err);
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Tick session
        app.tick(Instant::now());
    }
}

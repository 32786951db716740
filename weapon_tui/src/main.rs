//! weapon_tui - Interactive terminal shell for rolling weapon damage

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use weapon_core::config::{load_session_config, LoggingConfig};
use weapon_core::{default_session_config, ConfigError, SessionConfig};

/// Environment variable naming an alternative session config file
const CONFIG_ENV_VAR: &str = "WEAPON_DAMAGE_CONFIG";

fn main() -> io::Result<()> {
    let (config, config_error) = load_config();

    // Guard must outlive the event loop or buffered log lines are dropped
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!(
                "Logging disabled, could not open {}: {}",
                config.logging.directory.join(&config.logging.file_name).display(),
                err
            );
            None
        }
    };
    if let Some((path, err)) = config_error {
        tracing::warn!("Falling back to default config, could not load {}: {}", path, err);
    }
    tracing::info!(seed = ?config.seed, "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.seed);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!("Event loop failed: {}", err);
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (key.code, key.modifiers) {
                (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
                (KeyCode::Char(c), _) => app.on_char(c),
                _ => app.on_other_key(),
            }
        }
    }

    Ok(())
}

/// Load the session config named by `WEAPON_DAMAGE_CONFIG`, or the bundled default
///
/// A failed load is returned alongside the default so it can be logged once
/// logging is up.
fn load_config() -> (SessionConfig, Option<(String, ConfigError)>) {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => match load_session_config(Path::new(&path)) {
            Ok(config) => (config, None),
            Err(err) => (default_session_config(), Some((path, err))),
        },
        Err(_) => (default_session_config(), None),
    }
}

/// Log to a file; stdout is owned by the terminal UI
///
/// Nothing is installed when the log file cannot be opened.
fn init_logging(logging: &LoggingConfig) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(&logging.directory)?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .filename_prefix(&logging.file_name)
        .build(&logging.directory)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the configured level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(
        "Logging initialized: {}",
        logging.directory.join(&logging.file_name).display()
    );

    Ok(guard)
}

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Deserialize;

use remind_core::app::{AppOptions, AppState, DEFAULT_MINUTE_STEP, DEFAULT_TIME_FORMAT};
use remind_core::key_event::{AppKeyCode, AppKeyEvent};
use remind_core::ui;
use remind_core::utils::is_valid_time_format;

// ── Key event conversion ─────────────────────────────────────────────────

fn convert_key(key: crossterm::event::KeyEvent) -> AppKeyEvent {
    let code = match key.code {
        KeyCode::Char(c) => AppKeyCode::Char(c),
        KeyCode::Backspace => AppKeyCode::Backspace,
        KeyCode::Enter => AppKeyCode::Enter,
        KeyCode::Left => AppKeyCode::Left,
        KeyCode::Right => AppKeyCode::Right,
        KeyCode::Up => AppKeyCode::Up,
        KeyCode::Down => AppKeyCode::Down,
        KeyCode::Tab => AppKeyCode::Tab,
        KeyCode::BackTab => AppKeyCode::BackTab,
        KeyCode::Delete => AppKeyCode::Delete,
        KeyCode::Home => AppKeyCode::Home,
        KeyCode::End => AppKeyCode::End,
        KeyCode::Esc => AppKeyCode::Esc,
        _ => AppKeyCode::Other,
    };
    AppKeyEvent {
        code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

// ── Config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct CliConfig {
    time_format: String,
    minute_step: u32,
    log_file: Option<PathBuf>,
    log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            minute_step: DEFAULT_MINUTE_STEP,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    fn app_options(&self) -> Result<AppOptions> {
        if !is_valid_time_format(&self.time_format) {
            bail!("Invalid time_format '{}' in config", self.time_format);
        }
        Ok(AppOptions {
            time_format: self.time_format.clone(),
            minute_step: self.minute_step.clamp(1, 60),
        })
    }
}

fn config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME not set; please set HOME")?;
    Ok(Path::new(&home).join(".config/remind-cli/config.json"))
}

fn read_config(path: &Path) -> Result<CliConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// An explicit path must exist; the default location is optional.
fn load_config(explicit: Option<&Path>) -> Result<CliConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = config_path()?;
    if path.exists() {
        read_config(&path)
    } else {
        Ok(CliConfig::default())
    }
}

// ── Logging ──────────────────────────────────────────────────────────────

/// The terminal belongs to the UI, so logs only go to a file.
fn init_logging(log_file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialised")?;
    Ok(())
}

// ── Main ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "remind-cli")]
#[command(about = "Terminal reminder list", long_about = None)]
struct Args {
    /// Config file (default: ~/.config/remind-cli/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let options = config.app_options()?;
    let log_file = args.log_file.or(config.log_file);
    init_logging(log_file.as_deref(), &config.log_level)?;

    log::info!("Starting remind-cli");
    let mut app = AppState::new(options);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        SetCursorStyle::SteadyBlock
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        terminal::LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Exiting with error: {err:#}");
        eprintln!("Error: {err}");
    }
    log::info!("Session ended with {} reminder(s)", app.store.len());
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(convert_key(key)) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

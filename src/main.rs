// src/main.rs

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use color_eyre::eyre::Result;
use ratatui::prelude::*;
use std::io::stdout;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use cia_scanner::core::models::AnalysisReport;
use cia_scanner::{logging, server, Assessor, HttpProber, Settings};

mod app;
mod ui;

use app::{App, AppState};

type SharedAssessor = Arc<Assessor<HttpProber>>;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Tui,
    Serve { addr: Option<String> },
    Check { url: String, test_type: String },
    Help,
    Version,
}

/// Why a command line was refused; printed before the usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsageError {
    MissingCheckUrl,
    UnknownCommand(String),
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::MissingCheckUrl => write!(f, "Usage: cia-scanner check <URL> [TEST_TYPE]"),
            UsageError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
        }
    }
}

/// Parses the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Tui),
        Some("serve") => Ok(Command::Serve { addr: args.get(1).cloned() }),
        Some("check") => {
            let url = args.get(1).cloned().ok_or(UsageError::MissingCheckUrl)?;
            let test_type = args.get(2).cloned().unwrap_or_else(|| "cia".to_string());
            Ok(Command::Check { url, test_type })
        }
        Some("--help" | "-h" | "help") => Ok(Command::Help),
        Some("--version" | "-V" | "version") => Ok(Command::Version),
        Some(cmd) => Err(UsageError::UnknownCommand(cmd.to_string())),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Failed to install error reporting: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    let outcome = match command {
        Command::Tui => run_tui().await,
        Command::Serve { addr } => run_server(addr.as_deref()).await,
        Command::Check { url, test_type } => run_check(&url, &test_type).await,
        Command::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("cia-scanner {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error.");
            eprintln!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

const USAGE: &str = r#"CIA Scanner - heuristic confidentiality, integrity and availability scoring

USAGE:
    cia-scanner                          Interactive terminal UI
    cia-scanner serve [ADDR]             HTTP service (POST /analyze)
    cia-scanner check <URL> [TEST_TYPE]  One assessment, JSON to stdout

TEST_TYPE:
    confidentiality | integrity | availability | cia (default)

ENVIRONMENT:
    CIA_SCANNER_ADDR        Bind address for `serve` (default 0.0.0.0:5000)
    CIA_SCANNER_USER_AGENT  User-Agent sent with every probe
    CIA_SCANNER_LOGLEVEL    Log filter when RUST_LOG is unset"#;

async fn run_server(addr: Option<&str>) -> Result<()> {
    logging::initialize_console_logging()?;
    let mut settings = Settings::from_env()?;
    if let Some(addr) = addr {
        settings = settings.with_bind_addr(addr)?;
    }
    server::run(&settings).await?;
    Ok(())
}

async fn run_check(url: &str, test_type: &str) -> Result<()> {
    logging::initialize_console_logging()?;
    let settings = Settings::from_env()?;
    let assessor = Assessor::new(HttpProber::new(&settings)?);
    let report = assessor.assess_raw(url, test_type).await;
    info!(summary = %report, "Assessment complete.");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_tui() -> Result<()> {
    logging::initialize_logging()?;
    let settings = Settings::from_env()?;
    let assessor: SharedAssessor = Arc::new(Assessor::new(HttpProber::new(&settings)?));
    info!("Starting terminal UI.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, assessor).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    assessor: SharedAssessor,
) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &assessor)?;
        }

        if let Ok(report) = rx.try_recv() {
            app.finish(report);
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<AnalysisReport>, assessor: &SharedAssessor) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if app.show_disclaimer {
            match key.code {
                KeyCode::Enter => app.show_disclaimer = false,
                KeyCode::Esc => app.quit(),
                _ => {}
            }
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key.code, tx, assessor),
            AppState::Finished => handle_finished_input(app, key.code),
            AppState::Scanning => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) { app.quit(); }
            }
        }
    }
    Ok(())
}

/// Handles keys while the user is typing a target.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<AnalysisReport>, assessor: &SharedAssessor) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.cycle_test_type(),
        KeyCode::F(2) => app.toggle_logs(),
        KeyCode::Char(c) => {
            app.input.push(c);
            app.input_error = None;
        }
        KeyCode::Backspace => { app.input.pop(); },
        KeyCode::Enter => {
            let Some((url, test_type)) = app.submit() else { return };
            let tx_clone = tx.clone();
            let assessor = Arc::clone(assessor);

            tokio::spawn(async move {
                let report = assessor.assess(&url, test_type).await;
                if tx_clone.send(report).await.is_err() {
                    error!("UI closed before the assessment finished.");
                }
            });
        }
        _ => {}
    }
}

/// Handles keys while a report is displayed.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Left => app.scroll_logs_left(),
        KeyCode::Right => app.scroll_logs_right(),
        _ => {}
    }
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, ConfigSource};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(rows) = self.rows {
            config.board.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.board.columns = columns;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Load the config file, apply CLI overrides, and validate the result.
fn resolve_config(cli: &Cli) -> Result<(AppConfig, ConfigSource)> {
    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;
    Ok((config, source))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = resolve_config(&cli)?;

    // Printed before the alternate screen so it stays visible after exit
    let notice = source.fallback_notice();
    if let Some(notice) = &notice {
        eprintln!("{notice}");
    }

    connect_four::logging::init(&config.logging)?;
    if let Some(notice) = &notice {
        warn!("{notice}");
    }
    info!(
        rows = config.board.rows,
        columns = config.board.columns,
        "starting game"
    );

    let mut app = App::new(config.board);
    run_terminal(&mut app).context("terminal UI failed")
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

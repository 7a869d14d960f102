use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, ConfigSource};
use connect_four::headless;
use connect_four::logging::{self, LogSink};
use connect_four::ui::App;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Play these 0-based columns headlessly instead of opening the UI
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    moves: Option<Vec<usize>>,

    /// Print the headless result as JSON
    #[arg(long, requires = "moves")]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let headless = cli.moves.is_some();
    let sink = LogSink::select(&config.logging, headless);
    logging::init(&config.logging, &sink).context("setting up logging")?;
    if source == ConfigSource::Defaults {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.moves {
        Some(moves) => run_headless(&moves, cli.json),
        None => run_tui(config),
    }
}

fn run_headless(moves: &[usize], json: bool) -> Result<()> {
    let report = headless::run(moves).context("playing move script")?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let mouse = config.ui.mouse;

    enable_raw_mode()?;

    // Any setup failure still falls through to the restore below
    let res = setup_terminal(mouse).and_then(|mut terminal| {
        let mut app = App::new(config.ui);
        app.run(&mut terminal)
    });

    restore_terminal(mouse);

    res.context("running terminal UI")
}

fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo everything `setup_terminal` may have done. Each step is best-effort.
fn restore_terminal(mouse: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

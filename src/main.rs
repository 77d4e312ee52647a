use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_four::config::AppConfig;
use connect_four::console::{AnsiRenderer, ConsoleInput};
use connect_four::game::{Match, MatchResult};
use connect_four::ui::App;

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of line prompts
    #[arg(long)]
    tui: bool,

    /// Disable ANSI colours on the console board
    #[arg(long)]
    no_color: bool,

    /// Print a configuration file with every default value and exit
    #[arg(long)]
    print_default_config: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.no_color {
        config.display.color = false;
    }

    if cli.tui {
        run_tui(config)
    } else {
        run_console(config)
    }
}

fn run_console(config: AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let players = input
        .read_players(&config.players)
        .context("reading player names")?;

    let mut game = Match::new(players, config.rules());
    let mut renderer = AnsiRenderer::new(io::stdout(), config.display.clone());
    match game.run(&mut input, &mut renderer).context("playing match")? {
        MatchResult::Winner(player) => tracing::info!(winner = %player.name, "finished"),
        MatchResult::Draw => tracing::info!("finished in a draw"),
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let players = [
        config.players.player_one.clone(),
        config.players.player_two.clone(),
    ];

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, players);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

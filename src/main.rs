use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use connect_four::config::AppConfig;
use connect_four::game::{BlockReason, GameOutcome, GameTimeline, PlayOutcome, Player};
use connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the line length needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Override turn order, e.g. R,Y,B
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<Player>>,

    /// Keep accepting moves after a player has won
    #[arg(long)]
    no_lock_after_win: bool,

    /// Play these columns (0-based, comma separated) and print the result
    /// instead of starting the terminal UI
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if let Some(players) = cli.players.clone() {
        config.players = players;
    }
    if cli.no_lock_after_win {
        config.lock_after_win = false;
    }

    let timeline = config.new_timeline().context("invalid game settings")?;

    match &cli.moves {
        Some(moves) => replay(timeline, moves),
        None => run_tui(timeline).context("terminal UI failed"),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Headless mode: play the given columns in order and print the final board.
fn replay(mut timeline: GameTimeline<Player>, moves: &[usize]) -> Result<()> {
    for (i, &column) in moves.iter().enumerate() {
        match timeline
            .play(column)
            .with_context(|| format!("move {} (column {column})", i + 1))?
        {
            PlayOutcome::Placed { .. } => {}
            PlayOutcome::Blocked(BlockReason::ColumnFull) => {
                bail!("move {} (column {column}): column is full", i + 1)
            }
            PlayOutcome::Blocked(BlockReason::GameDecided) => {
                bail!("move {} (column {column}): game is already decided", i + 1)
            }
        }
    }

    print!("{}", timeline.current_board());
    match timeline.outcome() {
        Some(GameOutcome::Winner(player)) => println!("Winner: {}", player.name()),
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("Next player: {}", timeline.current_player().name()),
    }
    Ok(())
}

fn run_tui(timeline: GameTimeline<Player>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(timeline);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

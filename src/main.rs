use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use connect_four::config::{AppConfig, GameMode};
use connect_four::history::HistoryStore;
use connect_four::session::Session;
use connect_four::ui;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsComputer => GameMode::VsComputer,
        }
    }
}

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a friend or the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Skip the mode menu
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed the computer's random fallback for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer move first when playing against it
    #[arg(long)]
    computer_first: bool,

    /// Override the results file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not read or write the results file
    #[arg(long, conflicts_with = "history")]
    no_history: bool,

    /// Print the recorded results and exit
    #[arg(long)]
    stats: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = Some(mode.into());
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if cli.computer_first {
        config.game.computer_first = true;
    }
    if let Some(path) = cli.history {
        config.history.path = path;
    }
    if cli.no_history {
        config.history.enabled = false;
    }
    config.validate().context("validating configuration")?;

    let history = HistoryStore::from_config(&config.history).with_context(|| {
        format!("loading results from {}", config.history.path.display())
    })?;

    if cli.stats {
        print!("{}", ui::render_summary(&history.summary()));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config.game, history);
    let rounds = session.run().context("running game session")?;
    log::info!("session ended after {} rounds", rounds);
    Ok(())
}

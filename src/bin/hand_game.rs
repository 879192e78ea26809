use std::process::ExitCode;

use clap::Parser;
use hand_game::{GameConfig, GameEngine, GameError, LineConsole, RunOutcome};
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Play rock-paper-scissors with a sudden-death advantage round.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the computer's hands (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// End-of-input reads tolerated before giving up
    #[arg(long, default_value_t = 1)]
    closed_input_limit: u32,

    /// Do not keep a per-round history
    #[arg(long)]
    no_history: bool,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_closed_input_limit(self.closed_input_limit)
            .with_history(!self.no_history);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn play(config: GameConfig) -> Result<RunOutcome, GameError> {
    let mut engine = GameEngine::new(config)?;
    let mut console = LineConsole::stdio();
    engine.run(&mut console)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the game on stdout
    if let Err(err) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logging: {}", err);
    }

    let config = args.config();
    info!("{:?}", config);

    match play(config) {
        Ok(outcome) => {
            info!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

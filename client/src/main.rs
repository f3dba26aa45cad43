mod config;
mod offline;
mod prompt;

use clap::Parser;
use common::games::tictactoe::GameState;
use common::games::{ConsoleOutput, OutputSink, ThreadSleepPacing};
use common::{log, logger};
use std::path::PathBuf;

use config::{get_config_manager, Config};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Watch two heuristic bots play tic-tac-toe")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Delay between moves in milliseconds; zero or less means the 1000 ms default
    #[arg(long, allow_negative_numbers = true)]
    sleep_ms: Option<i64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Play this many games without asking to play again
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    games: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let config_manager = get_config_manager(args.config.clone());

    let mut config = match config_manager.load_config()? {
        Some(config) => config,
        None => {
            let config = Config::default();
            if let Err(err) = config_manager.set_config(&config) {
                log!("Could not save default config: {}", err);
            }
            config
        }
    };

    if let Some(sleep_ms) = args.sleep_ms {
        config.pacing_ms = sleep_ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "Game".to_string());
        logger::init_logger(prefix);
    }

    let config = load_config(&args)?;
    log!(
        "Config loaded: {} vs {}, pacing {} ms",
        config.players[0].name,
        config.players[1].name,
        config.pacing_ms
    );

    let mut output = ConsoleOutput::stdout();
    output.output("Welcome to TTT!", true);
    output.output("", true);

    let mut input = std::io::stdin().lock();
    let mut games_played = 0u64;
    let mut wins = 0u64;

    loop {
        let state = run_tictactoe_game(&config, games_played, &mut output, ThreadSleepPacing)?;
        games_played += 1;
        if let GameState::Won(_) = state {
            wins += 1;
        }

        let play_again = match args.games {
            Some(games) => games_played < games,
            None => prompt::ask_play_again(&mut output, &mut input)?,
        };
        if !play_again {
            break;
        }
    }

    log!("Played {} games, {} won, {} tied", games_played, wins, games_played - wins);

    output.output("", true);
    output.output("Goodbye!", true);
    Ok(())
}

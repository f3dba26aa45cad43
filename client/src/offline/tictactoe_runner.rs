use common::games::tictactoe::{Board, Game, GameError, GameState, Player};
use common::games::{OutputSink, PacingService, SessionRng};
use common::log;

use crate::config::Config;

/// Seeded sessions give game `n` the seed `seed + n`, so a whole session replays identically.
fn session_rng(config: &Config, game_index: u64) -> SessionRng {
    match config.seed {
        Some(seed) => SessionRng::new(seed.wrapping_add(game_index)),
        None => SessionRng::from_random(),
    }
}

fn build_board(config: &Config, game_index: u64) -> Result<Board, GameError> {
    let [first, second] = &config.players;
    let player1 = Player::new(&first.name, 1, &first.token)?;
    let player2 = Player::new(&second.name, -1, &second.token)?;
    Board::with_rng(Some(player1), Some(player2), session_rng(config, game_index))
}

pub fn run_tictactoe_game<O: OutputSink, P: PacingService>(
    config: &Config,
    game_index: u64,
    output: O,
    pacing: P,
) -> Result<GameState, GameError> {
    let board = build_board(config, game_index)?;
    log!("Starting game {} with seed {}", game_index + 1, board.seed());

    let mut game = Game::new(board, output, pacing);
    game.play_turn_loop(config.pacing_ms)
}

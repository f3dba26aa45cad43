mod board;
mod bot_controller;
mod error;
mod game;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, FREE_TOKEN};
pub use bot_controller::{decide_move, other_player};
pub use error::GameError;
pub use game::Game;
pub use game_state::GameState;
pub use types::{Mark, Player};
pub use win_detector::{WIN_LINES, WinLine, is_tied, is_win, winning_move};

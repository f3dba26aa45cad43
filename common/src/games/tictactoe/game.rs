use crate::games::{OutputSink, PacingService};
use crate::log;

use super::bot_controller;
use super::win_detector::{self, WIN_LINES, WinLine};
use super::{Board, GameError, GameState, Mark, Player};

/// Drives one game between the two players registered on the board.
pub struct Game<O: OutputSink, P: PacingService> {
    board: Board,
    output: O,
    pacing: P,
    current: Mark,
    round: u32,
    state: GameState,
}

impl<O: OutputSink, P: PacingService> Game<O, P> {
    pub fn new(board: Board, output: O, pacing: P) -> Self {
        Self {
            board,
            output,
            pacing,
            current: Mark::Empty,
            round: 0,
            state: GameState::NotStarted,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn pacing(&self) -> &P {
        &self.pacing
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.board.player_for(self.current)
    }

    pub fn win_lines(&self) -> &'static [WinLine] {
        &WIN_LINES
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        win_detector::is_win(self.board.cells(), mark)
    }

    pub fn is_tied(&self) -> bool {
        win_detector::is_tied(self.board.cells())
    }

    pub fn winning_move(&self, mark: Mark) -> Option<usize> {
        win_detector::winning_move(self.board.cells(), mark)
    }

    pub fn decide_move(&self, mark: Mark) -> Option<usize> {
        bot_controller::decide_move(self.board.cells(), mark)
    }

    pub fn other_player(&self, mark: Mark) -> Mark {
        bot_controller::other_player(mark)
    }

    /// Writes `mark` at `index`, or at a random empty cell when `index` is `None`.
    pub fn apply_move(&mut self, mark: Mark, index: Option<usize>) -> Result<usize, GameError> {
        let index = match index {
            Some(index) => index,
            None => self.board.random_empty_cell()?,
        };

        self.board.set(index, mark);
        Ok(index)
    }

    /// Plays turns until a player wins or the board is full, waiting `pacing_ms` between turns.
    pub fn play_turn_loop(&mut self, pacing_ms: i64) -> Result<GameState, GameError> {
        let [first, second] = self.board.players();
        self.output.output(
            &format!("Hi! {} and {} will play TTT today!", first.name(), second.name()),
            true,
        );
        self.output.output("", true);
        log!(
            "Game started: {} ({}) vs {} ({}), seed {}",
            first.name(),
            first.token(),
            second.name(),
            second.token(),
            self.board.seed()
        );

        self.current = first.mark();
        self.round = 0;
        self.state = GameState::InProgress;

        loop {
            self.round += 1;

            let player = self.require_player(self.current)?;
            let target = self.decide_move(player.mark());
            let index = self.apply_move(player.mark(), target)?;

            self.output.output(
                &format!("{} (sign {}) moves to position {}", player.name(), player.token(), index),
                true,
            );
            self.board.draw(&mut self.output);
            log!(
                "Round {}: {} moved to {} ({})",
                self.round,
                player.name(),
                index,
                if target.is_some() { "heuristic" } else { "random" }
            );

            if self.is_win(player.mark()) {
                self.output.output(&format!("{} wins the game!", player.name()), true);
                log!("{} won after {} rounds", player.name(), self.round);
                self.state = GameState::Won(player);
                break;
            }

            if self.is_tied() {
                self.output.output("The game goes tie!", true);
                log!("Tie after {} rounds", self.round);
                self.state = GameState::Tied;
                break;
            }

            self.pacing.wait(pacing_ms);
            self.current = self.other_player(player.mark());
        }

        Ok(self.state.clone())
    }

    fn require_player(&self, mark: Mark) -> Result<Player, GameError> {
        self.board.player_for(mark).cloned().ok_or_else(|| {
            GameError::InvalidOperation(format!("no player registered for code {}", mark.code()))
        })
    }
}

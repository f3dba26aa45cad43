use std::fmt;

use crate::games::{OutputSink, SessionRng};

use super::{GameError, Mark, Player};

pub const CELL_COUNT: usize = 9;

/// Token shown for a cell nobody occupies.
pub const FREE_TOKEN: &str = "-";

const BOARD_SEPARATION: &str = "---|---|---";

/// The 3x3 grid, indexed 0..9 in row-major order, plus the two registered players.
pub struct Board {
    cells: [Mark; CELL_COUNT],
    players: [Player; 2],
    rng: SessionRng,
}

impl Board {
    pub fn new(player1: Option<Player>, player2: Option<Player>) -> Result<Self, GameError> {
        Self::with_rng(player1, player2, SessionRng::from_random())
    }

    pub fn with_rng(
        player1: Option<Player>,
        player2: Option<Player>,
        rng: SessionRng,
    ) -> Result<Self, GameError> {
        let players = require_players(player1, player2)?;
        Ok(Self {
            cells: [Mark::Empty; CELL_COUNT],
            players,
            rng,
        })
    }

    /// Clears every cell and registers a new pair of players.
    pub fn initialize(&mut self, player1: Option<Player>, player2: Option<Player>) -> Result<(), GameError> {
        self.players = require_players(player1, player2)?;
        self.reset_empty();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Fills every cell with `fill`. Anything other than `Mark::Empty` is only useful for fixtures.
    pub fn reset(&mut self, fill: Mark) {
        self.cells = [fill; CELL_COUNT];
    }

    pub fn reset_empty(&mut self) {
        self.reset(Mark::Empty);
    }

    pub fn player_for(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|player| player.mark() == mark)
    }

    pub fn token_for(&self, mark: Mark) -> &str {
        self.player_for(mark).map_or(FREE_TOKEN, Player::token)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    /// Uniformly random empty cell. Asking on a full board is a caller error.
    pub fn random_empty_cell(&mut self) -> Result<usize, GameError> {
        let empty_cells = self.empty_cells();
        self.rng.pick(&empty_cells).ok_or_else(|| {
            GameError::InvalidOperation("no empty cell left on the board".to_string())
        })
    }

    pub fn draw(&self, output: &mut impl OutputSink) {
        output.output(&self.to_string(), true);
    }
}

fn require_players(player1: Option<Player>, player2: Option<Player>) -> Result<[Player; 2], GameError> {
    let player1 = player1.ok_or_else(|| GameError::InvalidArgument("player1 is required".to_string()))?;
    let player2 = player2.ok_or_else(|| GameError::InvalidArgument("player2 is required".to_string()))?;

    if player1 == player2 {
        return Err(GameError::InvalidArgument(format!(
            "players must use different codes, both use {}",
            player1.code()
        )));
    }

    Ok([player1, player2])
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "{}", BOARD_SEPARATION)?;
            }
            writeln!(
                f,
                " {} | {} | {}",
                self.token_for(cells[0]),
                self.token_for(cells[1]),
                self.token_for(cells[2])
            )?;
        }
        Ok(())
    }
}

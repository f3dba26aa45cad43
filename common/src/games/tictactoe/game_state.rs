use super::Player;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Won(Player),
    Tied,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Won(_) | GameState::Tied)
    }

    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameState::Won(player) => Some(player),
            _ => None,
        }
    }
}

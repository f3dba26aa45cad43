use std::fmt;
use std::hash::{Hash, Hasher};

use super::GameError;

/// Content of a cell. Occupied cells carry the player code `+1` or `-1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Positive,
    Negative,
}

impl Mark {
    pub const fn code(self) -> i32 {
        match self {
            Mark::Empty => 0,
            Mark::Positive => 1,
            Mark::Negative => -1,
        }
    }

    pub fn from_code(code: i32) -> Option<Mark> {
        match code {
            0 => Some(Mark::Empty),
            1 => Some(Mark::Positive),
            -1 => Some(Mark::Negative),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// A seat at the board. Two players are the same player iff their codes match.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    mark: Mark,
    token: String,
}

impl Player {
    pub fn new(name: impl Into<String>, code: i32, token: impl Into<String>) -> Result<Self, GameError> {
        let mark = match Mark::from_code(code) {
            Some(mark) if !mark.is_empty() => mark,
            _ => {
                return Err(GameError::InvalidArgument(format!(
                    "player code must be 1 or -1, got {}",
                    code
                )));
            }
        };

        Ok(Self {
            name: name.into(),
            mark,
            token: token.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn code(&self) -> i32 {
        self.mark.code()
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.mark == other.mark
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

use common::config::Validate;
use common::games::tictactoe::FREE_TOKEN;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub token: String,
}

impl PlayerConfig {
    pub fn new(name: &str, token: &str) -> Self {
        Self {
            name: name.to_string(),
            token: token.to_string(),
        }
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("player name must not be empty".to_string());
        }
        if self.token.trim().is_empty() {
            return Err(format!("token for {} must not be empty", self.name));
        }
        if self.token == FREE_TOKEN {
            return Err(format!(
                "token for {} must differ from the free cell marker '{}'",
                self.name, FREE_TOKEN
            ));
        }
        Ok(())
    }
}

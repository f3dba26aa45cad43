mod config;
mod player_config;

pub use config::{get_config_manager, Config};
pub use player_config::PlayerConfig;

pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, GameConfig};
pub use error::{GameError, Result};
pub use types::Vec2;

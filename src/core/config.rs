//! Rules configuration.
//!
//! The board itself is fixed (5x5, three mountains in the middle row).
//! What may vary between games is who moves first and how many pieces
//! each player starts with in reserve.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Player;

/// Largest reserve a player can hold.
pub const MAX_BULLPEN: u8 = 5;

/// Rules configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Player to move on turn 0.
    pub first_player: Player,

    /// Pieces each player starts with in their bullpen (1..=5).
    pub bullpen_size: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_player: Player::A,
            bullpen_size: MAX_BULLPEN,
        }
    }
}

impl RulesConfig {
    /// Create a new config with a custom first player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Create a new config with a custom bullpen size.
    #[must_use]
    pub fn with_bullpen_size(mut self, size: u8) -> Self {
        self.bullpen_size = size;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bullpen_size == 0 || self.bullpen_size > MAX_BULLPEN {
            return Err(ConfigError::Validation(format!(
                "bullpen_size must be in 1..={MAX_BULLPEN}, got {}",
                self.bullpen_size
            )));
        }
        Ok(())
    }
}

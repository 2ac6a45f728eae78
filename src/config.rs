use anyhow::{ensure, Result};
use std::time::Duration;

pub const BOARD_WIDTH: usize = 14;
pub const BOARD_HEIGHT: usize = 16;
pub const INITIAL_SNAKE_LENGTH: u32 = 7;
pub const INITIAL_INTERVAL_MS: u64 = 500;
/// Subtracted from the tick interval every time food is eaten.
pub const SPEED_STEP_MS: u64 = 3;

/// Board geometry and pacing for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub initial_length: u32,
    pub initial_interval_ms: u64,
    pub speed_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_length: INITIAL_SNAKE_LENGTH,
            initial_interval_ms: INITIAL_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,
        }
    }
}

impl GameConfig {
    /// Custom board size with the default pacing.
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        let config = GameConfig { width, height, ..Default::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "board must be at least 1x1, got {}x{}", self.width, self.height);
        ensure!(self.initial_length > 0, "initial snake length must be positive");
        // The head occupies one cell and the first food needs another.
        ensure!(self.width * self.height >= 2, "board has no room for food");
        Ok(())
    }

    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 14);
        assert_eq!(config.height, 16);
        assert_eq!(config.initial_length, 7);
        assert_eq!(config.initial_interval(), Duration::from_millis(500));
        assert_eq!(config.speed_step_ms, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_boards() {
        assert!(GameConfig::with_size(0, 5).is_err());
        assert!(GameConfig::with_size(1, 1).is_err());
        assert!(GameConfig::with_size(2, 1).is_ok());

        let config = GameConfig { initial_length: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}

//! Session configuration
//!
//! Starting maze size ranges, difficulty growth, movement debounce and the
//! viewport the frames are laid out for. Everything has a default matching
//! the badge build, so a config file only needs the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DIFFICULTY_SCALE, MAX_MAZE_HEIGHT, MAX_MAZE_WIDTH, MIN_MAZE_HEIGHT, MIN_MAZE_WIDTH,
    MOVE_INTERVAL, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::error::{ConfigError, Dimension};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Smallest base width in cells (inclusive)
    pub min_width: usize,
    /// Largest base width in cells (exclusive)
    pub max_width: usize,
    pub min_height: usize,
    pub max_height: usize,
    /// Cells added per level: `trunc(level * difficulty_scale)`
    pub difficulty_scale: f32,
    /// Minimum ticks between accepted moves
    pub move_interval: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_MAZE_WIDTH,
            max_width: MAX_MAZE_WIDTH,
            min_height: MIN_MAZE_HEIGHT,
            max_height: MAX_MAZE_HEIGHT,
            difficulty_scale: DIFFICULTY_SCALE,
            move_interval: MOVE_INTERVAL,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl MazeConfig {
    /// Check that every maze this config can produce has positive dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(Dimension::Width, self.min_width, self.max_width)?;
        check_range(Dimension::Height, self.min_height, self.max_height)?;

        if !self.difficulty_scale.is_finite() || self.difficulty_scale < 0.0 {
            return Err(ConfigError::InvalidScale(self.difficulty_scale));
        }
        if self.move_interval == 0 {
            return Err(ConfigError::ZeroMoveInterval);
        }
        Ok(())
    }

    /// Extra cells added to both dimensions at the given level
    pub fn difficulty(&self, level: u32) -> usize {
        (level as f32 * self.difficulty_scale) as usize
    }

    /// Parse a JSON config and validate it
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MazeConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }
}

fn check_range(dimension: Dimension, min: usize, max: usize) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroMinimum { dimension });
    }
    if max <= min {
        return Err(ConfigError::EmptyRange { dimension, min, max });
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub grid_width: usize,
    /// Height of the grid in cells
    pub grid_height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
        }
    }

    /// Create a small grid, handy for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: the toroidal grid, the snake and food entities, the
//! per-tick engine, and the length-driven tick rate.

pub mod config;
pub mod direction;
pub mod engine;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, TickEvent};
pub use state::{Food, GameState, Position, Snake};

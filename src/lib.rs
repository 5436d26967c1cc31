//! Torus Snake - a single-player snake game on a toroidal grid
//!
//! This library provides:
//! - Core game rules with no I/O dependencies (game module)
//! - The terminal game loop (app module)
//! - TUI rendering (render module)
//! - Keyboard input translation (input module)
//! - In-memory session metrics (metrics module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;

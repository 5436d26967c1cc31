pub mod renderer;

pub use renderer::{CellSprite, Renderer};

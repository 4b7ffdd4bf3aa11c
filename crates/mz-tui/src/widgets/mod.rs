//! Ratatui widgets for the maze screen

mod maze;
mod status;

pub use maze::{CELL_WIDTH, MazeWidget, scroll_for, sprite_glyph, viewport_for};
pub use status::StatusWidget;

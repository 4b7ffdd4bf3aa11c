//! Maze construction and the packed wall grid
//!
//! The builder carves a spanning tree over a grid of [`Cell`]s with a
//! randomized depth-first walk, then lowers it into a [`WallGrid`] of packed
//! [`Tile`]s at twice the resolution plus a boundary ring.

mod builder;
mod cell;
mod grid;
mod tile;

pub use builder::MazeBuilder;
pub use cell::Cell;
pub use grid::{Position, WallGrid};
pub use tile::{Direction, Directions, Tile};

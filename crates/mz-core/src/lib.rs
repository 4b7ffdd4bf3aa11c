//! mz-core: Core logic for the amazed maze game
//!
//! This crate contains the maze generator, the packed wall-grid encoding,
//! sprite selection, movement validation and the frame-stepped session.
//! It performs no I/O of its own and is designed to be pure and testable.
//!
//! Supports `no_std` environments (badge firmware) by disabling the default
//! `std` feature. Config file loading is gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::borrow::ToOwned;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod error;
pub mod input;
pub mod maze;
pub mod player;
pub mod render;
pub mod session;

mod consts;
mod rng;

pub use config::MazeConfig;
pub use consts::*;
pub use error::{ConfigError, Dimension, MazeError};
pub use input::{Buttons, FrameInput};
pub use maze::{Direction, Directions, MazeBuilder, Position, Tile, WallGrid};
pub use player::Player;
pub use render::{DrawCommand, Frame, Layout, Rect, SpriteBank, SpriteRef};
pub use rng::GameRng;
pub use session::{Phase, Session};

//! mz-tui: Terminal UI layer using ratatui
//!
//! Drives the maze session from the keyboard and draws its frames as text.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::KeyAction;
pub use theme::Theme;

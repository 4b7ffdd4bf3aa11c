//! Game constants shared across the crate

/// Bit position where wall-link flags start inside a packed tile.
/// Bits below it hold the trail left by the player on passable tiles.
pub const WALL_BITSHIFT: u8 = 4;

/// Any packed tile value at or above this is a wall.
pub const WALL_THRESHOLD: u8 = 1 << WALL_BITSHIFT;

/// Mask for the trail nibble.
pub const TRAIL_MASK: u8 = WALL_THRESHOLD - 1;

/// Gap in pixels between the goal/player sprite and the tile it sits on
pub const WALL_GAP: u32 = 1;

/// Default logical maze size range (half-open, like `randrange`)
pub const MIN_MAZE_WIDTH: usize = 2;
pub const MAX_MAZE_WIDTH: usize = 5;
pub const MIN_MAZE_HEIGHT: usize = 2;
pub const MAX_MAZE_HEIGHT: usize = 5;

/// How much each completed level grows the maze
pub const DIFFICULTY_SCALE: f32 = 0.5;

/// Minimum ticks (ms) between two accepted moves
pub const MOVE_INTERVAL: u64 = 20;

/// Tufty 2350 hi-res screen
pub const VIEWPORT_WIDTH: u32 = 320;
pub const VIEWPORT_HEIGHT: u32 = 240;

/// Frames in each directional bee animation
pub const ANIMATION_FRAMES: u32 = 4;

/// Ticks per animation frame
pub const ANIMATION_FRAME_TICKS: u64 = 100;

/// Ticks per on/off phase of blinking prompts
pub const BLINK_TICKS: u64 = 500;

pub const TITLE_TEXT: &str = "Bee a-maze'd!";
pub const START_PROMPT: &str = "Press B to start";
pub const CONTINUE_PROMPT: &str = "Press B to continue";

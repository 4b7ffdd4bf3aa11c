//! Render output: sprite selection, screen layout and draw commands
//!
//! The core never draws. Each frame it emits an ordered list of
//! [`DrawCommand`]s that a device or terminal back end turns into pixels.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::consts::{ANIMATION_FRAMES, ANIMATION_FRAME_TICKS, WALL_GAP};
use crate::maze::{Direction, Position, WallGrid};

/// Which half of the hedge spritesheet a tile comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteBank {
    /// Walls, indexed by the set of neighbouring walls
    Hedge,
    /// Floor, indexed by the trail left through it
    Floor,
}

impl SpriteBank {
    /// Column of this bank on the 2 x 16 hedge spritesheet
    pub const fn column(self) -> u8 {
        match self {
            SpriteBank::Hedge => 0,
            SpriteBank::Floor => 1,
        }
    }
}

/// A sprite on the hedge sheet: `bank` picks the column, `index` (0..16)
/// the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRef {
    pub bank: SpriteBank,
    pub index: u8,
}

/// Screen-space rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Mapping from wall-grid positions to screen rectangles.
///
/// Tiles are square, as large as fits, and the grid is centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Pixel pitch between tiles
    pub separation: u32,
    /// Size of the goal and player sprites
    pub sprite_size: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Layout {
    pub fn fit(viewport_width: u32, viewport_height: u32, columns: usize, rows: usize) -> Self {
        let columns = columns.max(1) as u32;
        let rows = rows.max(1) as u32;
        // Never collapse to 0: an oversized grid overflows and gets clipped
        let separation = (viewport_height / rows).min(viewport_width / columns).max(1);

        let offset_x =
            (viewport_width as i32 - (columns * separation) as i32 + WALL_GAP as i32) / 2;
        let offset_y =
            (viewport_height as i32 - (rows * separation) as i32 + WALL_GAP as i32) / 2;

        Self {
            separation,
            sprite_size: separation.saturating_sub(WALL_GAP),
            offset_x,
            offset_y,
        }
    }

    pub fn for_grid(viewport_width: u32, viewport_height: u32, grid: &WallGrid) -> Self {
        Self::fit(viewport_width, viewport_height, grid.columns(), grid.rows())
    }

    /// Largest maze, in cells, whose tiles still fit the viewport at a
    /// one-unit pitch
    pub fn max_cells(viewport_width: u32, viewport_height: u32) -> (usize, usize) {
        let fit = |extent: u32| ((extent as usize).saturating_sub(1) / 2).max(1);
        (fit(viewport_width), fit(viewport_height))
    }

    fn origin(&self, pos: Position) -> (i32, i32) {
        (
            pos.x as i32 * self.separation as i32 + self.offset_x,
            pos.y as i32 * self.separation as i32 + self.offset_y,
        )
    }

    /// Full-pitch rectangle for a maze tile
    pub fn tile_rect(&self, pos: Position) -> Rect {
        let (x, y) = self.origin(pos);
        Rect {
            x,
            y,
            width: self.separation,
            height: self.separation,
        }
    }

    /// Inset rectangle for the goal marker and the player
    pub fn sprite_rect(&self, pos: Position) -> Rect {
        let (x, y) = self.origin(pos);
        Rect {
            x,
            y,
            width: self.sprite_size,
            height: self.sprite_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Blit the background image over the whole screen
    Background,
    Tile { rect: Rect, sprite: SpriteRef },
    /// The flower marking the goal
    Goal { rect: Rect },
    Player {
        rect: Rect,
        facing: Direction,
        frame: u32,
    },
    /// Large bee shown on the intro screen
    Mascot { facing: Direction, frame: u32 },
    /// Centred title in the large font
    Title(&'static str),
    /// Centred hint in the small font
    Prompt(&'static str),
    /// Rounded window across the middle of the screen
    Banner {
        heading: String,
        prompt: &'static str,
    },
}

/// Everything to draw for one tick, back to front
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Draw every tile of the maze, then the goal on top
    pub fn draw_maze(&mut self, grid: &WallGrid, layout: &Layout) {
        self.commands.reserve(grid.columns() * grid.rows() + 2);
        for (pos, tile) in grid.iter() {
            self.push(DrawCommand::Tile {
                rect: layout.tile_rect(pos),
                sprite: tile.sprite(),
            });
        }
        self.push(DrawCommand::Goal {
            rect: layout.sprite_rect(grid.goal()),
        });
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Animation frame for a tick count: `round(ticks / 100) % 4`
pub fn animation_frame(ticks: u64) -> u32 {
    (((ticks + ANIMATION_FRAME_TICKS / 2) / ANIMATION_FRAME_TICKS) % ANIMATION_FRAMES as u64) as u32
}

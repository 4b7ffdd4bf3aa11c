//! The dense wall grid produced by [`super::MazeBuilder`]

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::tile::{Direction, Directions, Tile};

/// Wall-grid coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Row-major matrix of packed tiles, `(width * 2 + 1) x (height * 2 + 1)`.
///
/// Odd column/odd row positions are the logical cells; the others are wall
/// segments, pillars and the boundary ring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WallGrid {
    columns: usize,
    rows: usize,
    tiles: Vec<Tile>,
}

impl WallGrid {
    pub(crate) fn from_tiles(columns: usize, rows: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), columns * rows, "tile count mismatch");
        Self {
            columns,
            rows,
            tiles,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Logical maze width in cells
    pub fn cell_width(&self) -> usize {
        self.columns / 2
    }

    /// Logical maze height in cells
    pub fn cell_height(&self) -> usize {
        self.rows / 2
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.x < self.columns && pos.y < self.rows {
            Some(self.tiles[pos.y * self.columns + pos.x])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if pos.x < self.columns && pos.y < self.rows {
            Some(&mut self.tiles[pos.y * self.columns + pos.x])
        } else {
            None
        }
    }

    /// Neighbouring position in `direction`, if it lies inside the grid
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        (x < self.columns && y < self.rows).then_some(Position { x, y })
    }

    /// All tiles with their positions, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let columns = self.columns;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            (
                Position {
                    x: i % columns,
                    y: i / columns,
                },
                *tile,
            )
        })
    }

    /// One tile row, for renderers that draw line by line
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        (y < self.rows).then(|| &self.tiles[y * self.columns..(y + 1) * self.columns])
    }

    pub fn is_boundary(&self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x + 1 == self.columns || pos.y + 1 == self.rows
    }

    /// Is this position one of the logical cells?
    pub fn is_cell(&self, pos: Position) -> bool {
        pos.x % 2 == 1 && pos.y % 2 == 1 && pos.x < self.columns && pos.y < self.rows
    }

    /// Player start: the bottom-left cell
    pub fn start(&self) -> Position {
        Position {
            x: 1,
            y: self.rows.saturating_sub(2),
        }
    }

    /// Goal: the top-right cell
    pub fn goal(&self) -> Position {
        Position {
            x: self.columns.saturating_sub(2),
            y: 1,
        }
    }

    /// Directions in which the neighbouring tile is passable
    pub fn open_sides(&self, pos: Position) -> Directions {
        let mut open = Directions::empty();
        for dir in Direction::iter() {
            let passable = self
                .neighbor(pos, dir)
                .and_then(|n| self.get(n))
                .is_some_and(Tile::is_passable);
            if passable {
                open |= dir.bit();
            }
        }
        open
    }

    /// Number of carved edges between logical cells
    pub fn open_edge_count(&self) -> usize {
        self.iter()
            .filter(|(pos, tile)| {
                tile.is_passable() && !self.is_cell(*pos) && (pos.x + pos.y) % 2 == 1
            })
            .count()
    }

    /// Number of logical cells reachable from `from` through passable tiles
    pub fn reachable_cells(&self, from: Position) -> usize {
        if !self.get(from).is_some_and(Tile::is_passable) {
            return 0;
        }

        let mut seen = vec![false; self.tiles.len()];
        let mut stack = vec![from];
        seen[from.y * self.columns + from.x] = true;
        let mut cells = 0;

        while let Some(pos) = stack.pop() {
            if self.is_cell(pos) {
                cells += 1;
            }
            for dir in Direction::iter() {
                let Some(next) = self.neighbor(pos, dir) else {
                    continue;
                };
                let index = next.y * self.columns + next.x;
                if !seen[index] && self.tiles[index].is_passable() {
                    seen[index] = true;
                    stack.push(next);
                }
            }
        }

        cells
    }

    /// Wipe every trail mark, leaving the maze as freshly built
    pub fn clear_trail(&mut self) {
        for tile in &mut self.tiles {
            if tile.is_passable() {
                *tile = Tile::FLOOR;
            }
        }
    }
}

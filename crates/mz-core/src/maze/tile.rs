//! Packed wall-grid tiles and compass directions

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::consts::{TRAIL_MASK, WALL_BITSHIFT, WALL_THRESHOLD};
use crate::render::{SpriteBank, SpriteRef};

/// One of the four axis-aligned moves through the wall grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction; y grows downwards
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub const fn bit(self) -> Directions {
        match self {
            Direction::North => Directions::N,
            Direction::South => Directions::S,
            Direction::East => Directions::E,
            Direction::West => Directions::W,
        }
    }
}

bitflags! {
    /// Set of directions, using the badge's N/S/E/W bit values
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        const N = 1;
        const S = 2;
        const E = 4;
        const W = 8;
    }
}

/// A packed wall-grid entry.
///
/// Wall tiles keep the set of neighbouring walls in the high nibble, which is
/// what hedge sprites are picked by. Passable tiles keep the player's trail
/// in the low nibble. A tile is passable iff its value is below
/// [`WALL_THRESHOLD`], so the trail can never turn a floor into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(u8);

impl Tile {
    /// Untouched floor
    pub const FLOOR: Tile = Tile(0);

    pub const fn from_bits(bits: u8) -> Self {
        Tile(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// A wall tile connected to the given neighbouring walls.
    ///
    /// Walls always touch at least one other wall in a built maze; an empty
    /// link set would read back as floor.
    pub const fn wall(links: Directions) -> Self {
        Tile(links.bits() << WALL_BITSHIFT)
    }

    pub const fn is_wall(self) -> bool {
        self.0 >= WALL_THRESHOLD
    }

    pub const fn is_passable(self) -> bool {
        !self.is_wall()
    }

    pub const fn wall_links(self) -> Directions {
        Directions::from_bits_truncate(self.0 >> WALL_BITSHIFT)
    }

    /// Does this wall continue into the neighbouring wall in `direction`?
    pub const fn links_toward(self, direction: Direction) -> bool {
        self.wall_links().contains(direction.bit())
    }

    pub const fn trail(self) -> Directions {
        if self.is_wall() {
            return Directions::empty();
        }
        Directions::from_bits_truncate(self.0 & TRAIL_MASK)
    }

    pub const fn has_trail(self, direction: Direction) -> bool {
        self.trail().contains(direction.bit())
    }

    /// Record that the player left or entered through `direction`.
    /// Walls carry no trail and are left untouched.
    pub fn mark_trail(&mut self, direction: Direction) {
        if self.is_passable() {
            self.0 |= direction.bit().bits();
        }
    }

    pub(crate) fn link(&mut self, direction: Direction) {
        self.0 |= direction.bit().bits() << WALL_BITSHIFT;
    }

    /// Sprite to draw for this tile: hedge art by wall links, floor art by trail
    pub const fn sprite(self) -> SpriteRef {
        if self.is_wall() {
            SpriteRef {
                bank: SpriteBank::Hedge,
                index: self.wall_links().bits(),
            }
        } else {
            SpriteRef {
                bank: SpriteBank::Floor,
                index: self.trail().bits(),
            }
        }
    }
}

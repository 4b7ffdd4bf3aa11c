//! The bee: cursor position, facing and debounced movement

use crate::input::Buttons;
use crate::maze::{Direction, Position, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    /// Which directional animation to show
    pub facing: Direction,
    /// Tick of the last accepted move
    last_move: u64,
}

impl Player {
    pub fn new(pos: Position, now: u64) -> Self {
        Self {
            pos,
            facing: Direction::East,
            last_move: now,
        }
    }

    /// Teleport to a new position, e.g. the start of the next maze
    pub fn position(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn last_move(&self) -> u64 {
        self.last_move
    }

    /// Step one tile if the neighbour in `direction` exists and is passable.
    ///
    /// Leaves a trail: the tile left gets the direction bit, the tile entered
    /// gets the opposite one. Returns whether the player moved.
    pub fn try_move(&mut self, grid: &mut WallGrid, direction: Direction) -> bool {
        let Some(target) = grid.neighbor(self.pos, direction) else {
            return false;
        };
        if !grid.get(target).is_some_and(|t| t.is_passable()) {
            return false;
        }

        if let Some(tile) = grid.get_mut(self.pos) {
            tile.mark_trail(direction);
        }
        self.pos = target;
        if let Some(tile) = grid.get_mut(target) {
            tile.mark_trail(direction.opposite());
        }
        self.facing = direction;
        true
    }

    /// Apply held direction buttons, at most one move per `interval` ticks.
    ///
    /// Buttons are tried in [`Buttons::MOVES`] order; the first one that
    /// leads somewhere passable wins.
    pub fn update(
        &mut self,
        grid: &mut WallGrid,
        held: Buttons,
        now: u64,
        interval: u64,
    ) -> Option<Direction> {
        if now.saturating_sub(self.last_move) <= interval {
            return None;
        }

        for (button, direction) in Buttons::MOVES {
            if held.contains(button) && self.try_move(grid, direction) {
                self.last_move = now;
                return Some(direction);
            }
        }
        None
    }
}

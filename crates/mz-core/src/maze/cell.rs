//! Logical maze cells used while carving the spanning tree

/// A node of the logical maze grid.
///
/// Each shared edge is stored once: the cell to the west owns the east-west
/// edge (`right`) and the cell to the north owns the north-south edge
/// (`bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    /// Wall on the south edge
    pub bottom: bool,
    /// Wall on the east edge
    pub right: bool,
    pub visited: bool,
}

impl Cell {
    /// A fully walled, unvisited cell
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            bottom: true,
            right: true,
            visited: false,
        }
    }

    /// Open the edge between two orthogonally adjacent cells.
    ///
    /// The flag is cleared on whichever of the two owns the edge.
    pub fn remove_walls(current: &mut Cell, next: &mut Cell) {
        let dx = current.x as isize - next.x as isize;
        let dy = current.y as isize - next.y as isize;
        debug_assert!(dx.abs() + dy.abs() == 1, "cells are not adjacent");

        match (dx, dy) {
            (1, 0) => next.right = false,
            (-1, 0) => current.right = false,
            (0, 1) => next.bottom = false,
            (0, -1) => current.bottom = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed() {
        let cell = Cell::new(3, 4);
        assert!(cell.bottom && cell.right);
        assert!(!cell.visited);
    }

    #[test]
    fn test_remove_walls_east() {
        let mut a = Cell::new(0, 0);
        let mut b = Cell::new(1, 0);
        Cell::remove_walls(&mut a, &mut b);
        assert!(!a.right);
        assert!(b.right);
        assert!(a.bottom && b.bottom);
    }

    #[test]
    fn test_remove_walls_west() {
        let mut a = Cell::new(1, 0);
        let mut b = Cell::new(0, 0);
        Cell::remove_walls(&mut a, &mut b);
        assert!(a.right);
        assert!(!b.right);
    }

    #[test]
    fn test_remove_walls_vertical() {
        let mut top = Cell::new(2, 2);
        let mut below = Cell::new(2, 3);
        Cell::remove_walls(&mut below, &mut top);
        assert!(!top.bottom);
        assert!(below.bottom);

        let mut top = Cell::new(2, 2);
        let mut below = Cell::new(2, 3);
        Cell::remove_walls(&mut top, &mut below);
        assert!(!top.bottom);
        assert!(below.bottom);
    }
}

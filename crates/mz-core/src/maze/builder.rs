//! Maze generation: randomized depth-first walk and wall-grid lowering

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::error::{Dimension, MazeError};
use crate::rng::GameRng;

use super::cell::Cell;
use super::grid::WallGrid;
use super::tile::{Direction, Tile};

/// Builds perfect mazes (spanning trees) over a `width x height` cell grid.
///
/// The builder can be reused; each [`MazeBuilder::build`] fully replaces the
/// previous maze.
#[derive(Debug, Clone, Default)]
pub struct MazeBuilder {
    width: usize,
    height: usize,
    /// Addressed `[x][y]`; only populated while a build is running
    cell_grid: Vec<Vec<Cell>>,
    maze: WallGrid,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carve a new maze and lower it into the wall grid.
    pub fn build(
        &mut self,
        width: usize,
        height: usize,
        rng: &mut GameRng,
    ) -> Result<&WallGrid, MazeError> {
        if width == 0 {
            return Err(MazeError::InvalidArgument {
                dimension: Dimension::Width,
                value: width,
            });
        }
        if height == 0 {
            return Err(MazeError::InvalidArgument {
                dimension: Dimension::Height,
                value: height,
            });
        }

        let too_large = || MazeError::TooLarge { width, height };
        let columns = width
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .ok_or_else(too_large)?;
        let rows = height
            .checked_mul(2)
            .and_then(|r| r.checked_add(1))
            .ok_or_else(too_large)?;
        columns.checked_mul(rows).ok_or_else(too_large)?;

        self.width = width;
        self.height = height;
        self.cell_grid = (0..width)
            .map(|x| (0..height).map(|y| Cell::new(x, y)).collect())
            .collect();

        self.carve(rng);
        let walls = self.project_walls();
        // Cells are only needed for carving
        self.cell_grid = Vec::new();
        self.maze = self.pack(&walls);

        Ok(&self.maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid_columns(&self) -> usize {
        self.width * 2 + 1
    }

    pub fn grid_rows(&self) -> usize {
        self.height * 2 + 1
    }

    /// The last built wall grid
    pub fn maze(&self) -> &WallGrid {
        &self.maze
    }

    /// Take ownership of the last built wall grid, leaving an empty one
    pub fn take_maze(&mut self) -> WallGrid {
        core::mem::take(&mut self.maze)
    }

    /// Randomized iterative depth-first walk from the centre cell.
    fn carve(&mut self, rng: &mut GameRng) {
        let mut current = ((self.width - 1) / 2, (self.height - 1) / 2);
        self.cell_grid[current.0][current.1].visited = true;
        let mut stack = Vec::with_capacity(self.width * self.height);

        loop {
            if let Some(next) = self.choose_neighbour(current, rng) {
                self.cell_grid[next.0][next.1].visited = true;
                stack.push(current);
                self.remove_walls_between(current, next);
                current = next;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }
    }

    /// Pick an unvisited orthogonal neighbour uniformly at random.
    /// Candidates are gathered x-1, x+1, y-1, y+1.
    fn choose_neighbour(
        &self,
        (x, y): (usize, usize),
        rng: &mut GameRng,
    ) -> Option<(usize, usize)> {
        let mut unvisited = [(0, 0); 4];
        let mut count = 0;

        for dir in [
            Direction::West,
            Direction::East,
            Direction::North,
            Direction::South,
        ] {
            let (dx, dy) = dir.delta();
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
            else {
                continue;
            };
            if nx < self.width && ny < self.height && !self.cell_grid[nx][ny].visited {
                unvisited[count] = (nx, ny);
                count += 1;
            }
        }

        rng.choose(&unvisited[..count]).copied()
    }

    fn remove_walls_between(&mut self, a: (usize, usize), b: (usize, usize)) {
        let mut current = self.cell_grid[a.0][a.1];
        let mut next = self.cell_grid[b.0][b.1];
        Cell::remove_walls(&mut current, &mut next);
        self.cell_grid[a.0][a.1] = current;
        self.cell_grid[b.0][b.1] = next;
    }

    /// Lower the cell flags into a row-major wall mask at double resolution.
    ///
    /// Row 0 is solid; each logical row then emits a cell row
    /// `[wall, floor, right, floor, right, ...]` and a wall row
    /// `[wall, bottom, wall, bottom, wall, ...]`.
    fn project_walls(&self) -> Vec<bool> {
        let columns = self.grid_columns();
        let mut walls = Vec::with_capacity(columns * self.grid_rows());

        walls.extend(core::iter::repeat_n(true, columns));
        for y in 0..self.height {
            walls.push(true);
            for x in 0..self.width {
                walls.push(false);
                walls.push(self.cell_grid[x][y].right);
            }

            walls.push(true);
            for x in 0..self.width {
                walls.push(self.cell_grid[x][y].bottom);
                walls.push(true);
            }
        }

        walls
    }

    /// Link every wall to its wall neighbours to the east and south, and
    /// the neighbour back, so each wall tile knows its hedge shape.
    fn pack(&self, walls: &[bool]) -> WallGrid {
        let columns = self.grid_columns();
        let rows = self.grid_rows();
        let mut tiles = vec![Tile::FLOOR; walls.len()];

        for y in 0..rows {
            for x in 0..columns {
                let i = y * columns + x;
                if !walls[i] {
                    continue;
                }
                if x + 1 < columns && walls[i + 1] {
                    tiles[i].link(Direction::East);
                    tiles[i + 1].link(Direction::West);
                }
                if y + 1 < rows && walls[i + columns] {
                    tiles[i].link(Direction::South);
                    tiles[i + columns].link(Direction::North);
                }
            }
        }

        WallGrid::from_tiles(columns, rows, tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Directions, Position};

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(1);

        assert_eq!(
            builder.build(0, 3, &mut rng).unwrap_err(),
            MazeError::InvalidArgument {
                dimension: Dimension::Width,
                value: 0
            }
        );
        assert_eq!(
            builder.build(3, 0, &mut rng).unwrap_err(),
            MazeError::InvalidArgument {
                dimension: Dimension::Height,
                value: 0
            }
        );
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(1);
        builder.build(2, 2, &mut rng).unwrap();
        let before = builder.maze().clone();

        assert_eq!(
            builder.build(usize::MAX, 2, &mut rng).unwrap_err(),
            MazeError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        );
        assert!(builder.build(usize::MAX / 4, usize::MAX / 4, &mut rng).is_err());
        assert_eq!(builder.maze(), &before);
        assert_eq!(builder.width(), 2);
    }

    #[test]
    fn test_single_cell_maze() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(1);
        let grid = builder.build(1, 1, &mut rng).unwrap();

        assert_eq!((grid.columns(), grid.rows()), (3, 3));
        let passable: Vec<_> = grid.iter().filter(|(_, t)| t.is_passable()).collect();
        assert_eq!(passable, vec![(Position::new(1, 1), Tile::FLOOR)]);
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(grid.start(), grid.goal());

        // Ring corners and edges link around the centre
        assert_eq!(
            grid.get(Position::new(0, 0)).unwrap().wall_links(),
            Directions::E | Directions::S
        );
        assert_eq!(
            grid.get(Position::new(1, 0)).unwrap().wall_links(),
            Directions::E | Directions::W
        );
        assert_eq!(
            grid.get(Position::new(2, 1)).unwrap().wall_links(),
            Directions::N | Directions::S
        );
    }

    #[test]
    fn test_two_by_two_maze() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(5);
        let grid = builder.build(2, 2, &mut rng).unwrap();

        assert_eq!((grid.columns(), grid.rows()), (5, 5));
        assert_eq!(grid.open_edge_count(), 3);
        assert_eq!(grid.reachable_cells(grid.start()), 4);
        // Centre pillar is always wall
        assert!(grid.get(Position::new(2, 2)).unwrap().is_wall());
    }

    #[test]
    fn test_cell_grid_dropped_after_build() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(3);
        builder.build(4, 3, &mut rng).unwrap();
        assert!(builder.cell_grid.is_empty());
        assert_eq!(builder.grid_columns(), 9);
        assert_eq!(builder.grid_rows(), 7);
    }

    #[test]
    fn test_rebuild_replaces_state() {
        let mut builder = MazeBuilder::new();
        let mut rng = GameRng::new(11);
        builder.build(6, 6, &mut rng).unwrap();

        let grid = builder.build(2, 3, &mut rng).unwrap();
        assert_eq!((grid.columns(), grid.rows()), (5, 7));
        assert_eq!(grid.open_edge_count(), 5);
        assert_eq!(grid.reachable_cells(grid.start()), 6);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = MazeBuilder::new();
        let mut b = MazeBuilder::new();
        let grid_a = a.build(7, 5, &mut GameRng::new(2026)).unwrap().clone();
        let grid_b = b.build(7, 5, &mut GameRng::new(2026)).unwrap().clone();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_take_maze() {
        let mut builder = MazeBuilder::new();
        builder.build(3, 3, &mut GameRng::new(8)).unwrap();
        let grid = builder.take_maze();
        assert_eq!(grid.columns(), 7);
        assert_eq!(builder.maze().columns(), 0);
    }
}

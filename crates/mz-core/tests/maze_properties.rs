//! Structural properties every generated maze must satisfy

use mz_core::{Direction, GameRng, MazeBuilder, MazeError, Player, Position, WallGrid};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn build(width: usize, height: usize, seed: u64) -> WallGrid {
    let mut builder = MazeBuilder::new();
    builder
        .build(width, height, &mut GameRng::new(seed))
        .expect("positive dimensions");
    builder.take_maze()
}

fn cells(grid: &WallGrid) -> impl Iterator<Item = Position> + '_ {
    grid.iter().map(|(pos, _)| pos).filter(|pos| grid.is_cell(*pos))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_cell_is_reachable(width in 1usize..12, height in 1usize..12, seed: u64) {
        let grid = build(width, height, seed);
        prop_assert_eq!(grid.columns(), width * 2 + 1);
        prop_assert_eq!(grid.rows(), height * 2 + 1);

        for from in [grid.start(), grid.goal()] {
            prop_assert_eq!(grid.reachable_cells(from), width * height);
        }
        for pos in cells(&grid) {
            prop_assert!(grid.get(pos).unwrap().is_passable());
        }
    }

    #[test]
    fn open_edges_form_a_tree(width in 1usize..12, height in 1usize..12, seed: u64) {
        let grid = build(width, height, seed);
        prop_assert_eq!(grid.open_edge_count(), width * height - 1);
    }

    #[test]
    fn ring_is_solid(width in 1usize..10, height in 1usize..10, seed: u64) {
        let grid = build(width, height, seed);
        for (pos, tile) in grid.iter().filter(|(pos, _)| grid.is_boundary(*pos)) {
            prop_assert!(tile.is_wall(), "ring tile {:?} is passable", pos);
            prop_assert!(tile.trail().is_empty());
            for dir in Direction::iter() {
                if tile.links_toward(dir) {
                    prop_assert!(grid.neighbor(pos, dir).is_some(), "{:?} links off the grid", pos);
                }
            }
        }
    }

    #[test]
    fn wall_links_are_symmetric(width in 1usize..10, height in 1usize..10, seed: u64) {
        let grid = build(width, height, seed);
        for (pos, tile) in grid.iter() {
            for dir in Direction::iter() {
                let Some(next) = grid.neighbor(pos, dir) else { continue };
                let other = grid.get(next).unwrap();

                let both_walls = tile.is_wall() && other.is_wall();
                prop_assert_eq!(tile.links_toward(dir), both_walls);
                prop_assert_eq!(tile.links_toward(dir), other.links_toward(dir.opposite()));
            }
        }
    }

    #[test]
    fn cells_have_an_open_side(width in 1usize..10, height in 1usize..10, seed: u64) {
        prop_assume!(width * height > 1);
        let grid = build(width, height, seed);
        for pos in cells(&grid) {
            prop_assert!(!grid.open_sides(pos).is_empty(), "cell {:?} is sealed", pos);
        }
    }

    #[test]
    fn fresh_maze_has_no_trail(width in 1usize..8, height in 1usize..8, seed: u64) {
        let grid = build(width, height, seed);
        for (_, tile) in grid.iter() {
            prop_assert!(tile.trail().is_empty());
            prop_assert!(tile.is_passable() || !tile.wall_links().is_empty());
        }
    }

    #[test]
    fn move_succeeds_iff_target_is_passable(
        width in 1usize..8,
        height in 1usize..8,
        seed: u64,
        x in 0usize..17,
        y in 0usize..17,
        dir_index in 0usize..4,
    ) {
        let mut grid = build(width, height, seed);
        let from = Position::new(x % grid.columns(), y % grid.rows());
        let dir = Direction::iter().nth(dir_index).unwrap();

        let expected = grid
            .neighbor(from, dir)
            .and_then(|next| grid.get(next))
            .is_some_and(|tile| tile.is_passable());
        let before = grid.clone();
        let mut player = Player::new(from, 0);

        prop_assert_eq!(player.try_move(&mut grid, dir), expected);
        if expected {
            prop_assert_eq!(Some(player.pos), before.neighbor(from, dir));
            prop_assert_eq!(player.facing, dir);
        } else {
            prop_assert_eq!(player.pos, from);
            prop_assert_eq!(player.facing, Direction::East);
            prop_assert_eq!(&grid, &before);
        }
    }

    #[test]
    fn same_seed_same_grid(width in 1usize..10, height in 1usize..10, seed: u64) {
        prop_assert_eq!(build(width, height, seed), build(width, height, seed));
    }

    #[test]
    fn rebuild_matches_fresh_builder(
        first in (1usize..8, 1usize..8),
        second in (1usize..8, 1usize..8),
        seed: u64,
    ) {
        let mut reused = MazeBuilder::new();
        reused.build(first.0, first.1, &mut GameRng::new(seed ^ 0xA5)).unwrap();
        let rebuilt = reused.build(second.0, second.1, &mut GameRng::new(seed)).unwrap().clone();

        prop_assert_eq!(rebuilt, build(second.0, second.1, seed));
    }
}

#[test]
fn zero_dimensions_are_errors() {
    let mut builder = MazeBuilder::new();
    let mut rng = GameRng::new(0);
    assert!(matches!(
        builder.build(0, 0, &mut rng),
        Err(MazeError::InvalidArgument { .. })
    ));
    assert!(builder.build(0, 4, &mut rng).is_err());
    assert!(builder.build(4, 0, &mut rng).is_err());
}

#[test]
fn two_by_two_scenario() {
    for seed in 0..32 {
        let grid = build(2, 2, seed);
        assert_eq!((grid.columns(), grid.rows()), (5, 5));
        assert_eq!(grid.open_edge_count(), 3);
        assert_eq!(grid.reachable_cells(Position::new(1, 1)), 4);
    }
}

#[test]
fn one_by_one_scenario() {
    let grid = build(1, 1, 99);
    assert_eq!((grid.columns(), grid.rows()), (3, 3));
    assert_eq!(grid.iter().filter(|(_, t)| t.is_passable()).count(), 1);
    assert_eq!(grid.open_edge_count(), 0);
    assert_eq!(grid.start(), grid.goal());
    assert_eq!(grid.start(), Position::new(1, 1));
}

/*
tests.rs

Copyright 2025 Hervé Quatremain

This file is part of Pipes.

Pipes is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pipes is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pipes. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Whole-game scenarios: generation, scrambling, playing, saving, and restoring.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashSet, VecDeque};

use crate::errors::GameError;
use crate::game::Game;
use crate::generator::maze::MazeGenerator;
use crate::generator::scrambler::scramble_pipes;
use crate::grid::Grid;
use crate::grid::direction::Direction;
use crate::grid::pipe::{Connectors, Pipe};
use crate::snapshot;
use crate::solver::check_pipes;

use Direction::{Down as D, Left as L, Right as R, Up as U};

/// Breadth-first search of the pipes reachable from the center through facing open connectors.
fn reachable_from_center(grid: &Grid) -> HashSet<(usize, usize)> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    seen.insert(grid.center());
    queue.push_back(grid.center());
    while let Some((row, col)) = queue.pop_front() {
        let pipe = grid.get_pipe(row, col).unwrap();
        for d in Direction::ALL {
            if !pipe.has_connection(d) {
                continue;
            }
            if let Some(n) = grid.neighbor(row, col, d) {
                if n.has_connection(d.opposite()) && seen.insert(n.position()) {
                    queue.push_back(n.position());
                }
            }
        }
    }
    seen
}

fn active_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.pipes()
        .iter()
        .filter(|p| p.is_active())
        .map(|p| p.position())
        .collect()
}

/// A 3x3 tree: the center has all four connectors, the corners hang from the middle of the
/// left and right columns, and the top and bottom pipes are dead ends.
fn star_grid() -> Grid {
    let cells: [&[Direction]; 9] = [
        &[D],
        &[D],
        &[D],
        &[U, R, D],
        &[U, R, D, L],
        &[U, D, L],
        &[U],
        &[U],
        &[U],
    ];
    let pipes: Vec<Pipe> = cells
        .iter()
        .enumerate()
        .map(|(i, dirs)| {
            Pipe::with_connectors(i / 3 + 1, i % 3 + 1, Connectors::from_directions(dirs))
        })
        .collect();
    Grid::from_pipes(3, pipes).unwrap()
}

#[test]
fn generated_tree_is_solved_before_scrambling() {
    for (seed, size) in [(10, 1), (11, 3), (12, 5), (13, 11), (14, 21)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(size).unwrap();
        MazeGenerator::new().generate(&mut grid, &mut rng);
        let c = check_pipes(&mut grid);
        assert!(c.is_solved(), "size {size} is not solved");
        assert_eq!(grid.num_open_edges(), size * size - 1);
    }
}

#[test]
fn solver_marks_exactly_the_reachable_pipes() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(7).unwrap();
        MazeGenerator::new().generate(&mut grid, &mut rng);
        scramble_pipes(&mut grid, &mut rng);
        let c = check_pipes(&mut grid);

        let expected = reachable_from_center(&grid);
        assert_eq!(active_set(&grid), expected);
        assert_eq!(c.active, expected.len());
        assert!(c.active <= c.total);
        assert_eq!(c.is_solved(), expected.len() == 49);
    }
}

#[test]
fn init_rejects_even_size() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        Game::new_with_rng(4, &mut rng),
        Err(GameError::InvalidConfiguration(4))
    );
}

#[test]
fn rotating_the_pipe_above_the_center_breaks_the_tree() {
    let mut game = Game::from(star_grid());
    assert!(game.is_solved());
    assert_eq!(game.grid().center(), (2, 2));

    game.rotate(1, 2);
    game.rotate(1, 2);
    assert!(game.grid().get_pipe(1, 2).unwrap().has_connection(U));
    assert_eq!(game.connectivity().active, 8);
    assert!(!game.is_solved());
    assert!(!game.grid().get_pipe(1, 2).unwrap().is_active());

    game.rotate(1, 2);
    game.rotate(1, 2);
    assert!(game.is_solved());
}

#[test]
fn rotating_a_branch_cuts_off_one_corner() {
    let mut game = Game::from(star_grid());
    // A cross is the same after any rotation
    game.rotate(2, 2);
    assert!(game.is_solved());

    // The middle left pipe goes from up/right/down to right/down/left: it still faces the
    // center, but no longer the top left corner
    game.rotate(2, 1);
    let active = active_set(game.grid());
    assert!(active.contains(&(2, 1)));
    assert!(active.contains(&(3, 1)));
    assert!(!active.contains(&(1, 1)));
    assert_eq!(game.connectivity().active, 8);
}

#[test]
fn snapshot_round_trip() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = Game::new_with_rng(5, &mut rng).unwrap();
    game.rotate(1, 5);
    game.rotate(3, 2);

    let json: String = snapshot::dump(&game).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["size"], 5);
    assert_eq!(value["pipes"].as_array().unwrap().len(), 25);
    assert_eq!(value["pipes"][0]["connectors"].as_array().unwrap().len(), 4);

    let restored: Game = snapshot::load(&json).unwrap().unwrap();
    assert_eq!(restored.grid().pipes().len(), 25);
    assert_eq!(restored.grid().size(), 5);
    for (a, b) in game.grid().pipes().iter().zip(restored.grid().pipes()) {
        assert_eq!(a.position(), b.position());
        assert_eq!(a.connectors(), b.connectors());
    }
    assert_eq!(active_set(restored.grid()), active_set(game.grid()));
    assert_eq!(restored.connectivity(), game.connectivity());
}

#[test]
fn active_flags_are_recomputed_on_load() {
    let game = Game::from(star_grid());
    let mut value: serde_json::Value = serde_json::to_value(&game).unwrap();
    for pipe in value["pipes"].as_array_mut().unwrap() {
        pipe["active"] = serde_json::Value::Bool(false);
    }
    let restored: Game = serde_json::from_value(value).unwrap();
    assert!(restored.is_solved());
    assert_eq!(restored.grid().num_active(), 9);
}

#[test]
fn load_legacy_save() {
    // Saves written by the first version of the game use x/y coordinates and 0/1 flags
    let json = r#"{"size": 3, "pipes": [
        {"x": 1, "y": 1, "connections": [0, 0, 1, 0], "active": 0},
        {"x": 1, "y": 2, "connections": [0, 0, 1, 0], "active": 0},
        {"x": 1, "y": 3, "connections": [0, 0, 1, 0], "active": 0},
        {"x": 2, "y": 1, "connections": [1, 1, 1, 0], "active": 0},
        {"x": 2, "y": 2, "connections": [1, 1, 1, 1], "active": 1},
        {"x": 2, "y": 3, "connections": [1, 0, 1, 1], "active": 0},
        {"x": 3, "y": 1, "connections": [1, 0, 0, 0], "active": 0},
        {"x": 3, "y": 2, "connections": [1, 0, 0, 0], "active": 0},
        {"x": 3, "y": 3, "connections": [1, 0, 0, 0], "active": 0}
    ]}"#;
    let game: Game = snapshot::load(json).unwrap().unwrap();
    assert_eq!(game.grid(), Game::from(star_grid()).grid());
    assert!(game.is_solved());
}

#[test]
fn load_rejects_duplicated_pipes() {
    let game = Game::from(star_grid());
    let mut value: serde_json::Value = serde_json::to_value(&game).unwrap();
    value["pipes"][1]["col"] = serde_json::Value::from(1);
    let json: String = value.to_string();
    assert!(matches!(
        snapshot::load(&json),
        Err(GameError::InvalidSnapshot(_))
    ));
}

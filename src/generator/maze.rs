/*
maze.rs

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

//! Open the connectors of a grid along a random spanning tree.

use log::debug;
use rand::Rng;
use std::time::Instant;

use crate::grid::Grid;
use crate::grid::direction::Direction;

/// [`MazeGenerator`] object.
///
/// The tree grows from the center of the grid.
/// On each iteration, a pipe already in the tree and a direction are picked at random.
/// If the neighbor in that direction is not in the tree yet, then the connector between the
/// two pipes is opened and the neighbor joins the tree.
/// Otherwise the iteration does nothing.
///
/// There is no limit on the number of iterations: as the tree fills the grid, more and more
/// iterations pick a neighbor that is already in the tree.
/// For the grid sizes a player can solve, this stays fast.
pub struct MazeGenerator {
    /// Number of iterations it took to generate the last tree.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last tree.
    pub duration: f32,

    /// Time when the generation started. Used to compute the [`MazeGenerator::duration`].
    start: Instant,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new() -> Self {
        Self {
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Replace the connectors of all the pipes in `grid` by a random spanning tree.
    pub fn generate<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        grid.clear_connectors();

        let total_pipes: usize = grid.num_pipes();
        let mut in_tree: Vec<bool> = vec![false; total_pipes];
        let mut connected_pipes: Vec<(usize, usize)> = Vec::with_capacity(total_pipes);

        let (row, col) = grid.center();
        if let Some(i) = grid.index(row, col) {
            in_tree[i] = true;
            connected_pipes.push((row, col));
        }
        debug!("Starting pipe = ({row}, {col})  Number of pipes = {total_pipes}");

        while connected_pipes.len() < total_pipes {
            self.iteration += 1;

            // Get a pipe in the tree and a direction
            let (row, col) = connected_pipes[rng.random_range(0..connected_pipes.len())];
            let direction: Direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];

            let Some((r, c)) = grid.neighbor_position(row, col, direction) else {
                continue;
            };
            let Some(i) = grid.index(r, c) else {
                continue;
            };
            if in_tree[i] {
                continue;
            }

            grid.connect(row, col, direction);
            in_tree[i] = true;
            connected_pipes.push((r, c));
        }

        self.duration = self.start.elapsed().as_secs_f32();
        let dead_ends: usize = grid
            .pipes()
            .iter()
            .filter(|p| p.connectors().count() == 1)
            .count();
        debug!(
            "Iterations = {}  Duration = {}  Open edges = {}  Dead ends = {dead_ends}",
            self.iteration,
            self.duration,
            grid.num_open_edges()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Count the pipes reachable from the center through open edges, without revisiting a pipe.
    /// Return None if a cycle is found.
    fn reachable_without_cycle(grid: &Grid) -> Option<usize> {
        let mut seen: Vec<bool> = vec![false; grid.num_pipes()];
        let center = grid.center();
        let mut stack: Vec<((usize, usize), Option<Direction>)> = vec![(center, None)];
        seen[grid.index(center.0, center.1).unwrap()] = true;
        let mut count: usize = 1;

        while let Some(((row, col), from)) = stack.pop() {
            let pipe = grid.get_pipe(row, col).unwrap();
            for d in pipe.connectors().open_directions() {
                if Some(d) == from {
                    continue;
                }
                let n = grid.neighbor(row, col, d)?;
                if !n.has_connection(d.opposite()) {
                    return None;
                }
                let i = grid.index(n.row(), n.col()).unwrap();
                if seen[i] {
                    return None;
                }
                seen[i] = true;
                count += 1;
                stack.push((n.position(), Some(d.opposite())));
            }
        }
        Some(count)
    }

    #[test]
    fn generates_a_spanning_tree() {
        for (seed, size) in [(1, 1), (2, 3), (3, 5), (4, 7), (5, 9), (6, 15)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(size).unwrap();
            MazeGenerator::new().generate(&mut grid, &mut rng);

            assert_eq!(grid.num_open_edges(), size * size - 1);
            assert_eq!(reachable_without_cycle(&grid), Some(size * size));
        }
    }

    #[test]
    fn every_pipe_has_a_connector() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(5).unwrap();
        MazeGenerator::new().generate(&mut grid, &mut rng);
        assert!(grid.pipes().iter().all(|p| !p.connectors().is_empty()));
    }

    #[test]
    fn no_connector_leaves_the_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(7).unwrap();
        MazeGenerator::new().generate(&mut grid, &mut rng);
        for pipe in grid.pipes() {
            for d in pipe.connectors().open_directions() {
                assert!(grid.neighbor(pipe.row(), pipe.col(), d).is_some());
            }
        }
    }

    #[test]
    fn regenerating_replaces_the_previous_tree() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(5).unwrap();
        let mut generator = MazeGenerator::new();
        generator.generate(&mut grid, &mut rng);
        generator.generate(&mut grid, &mut rng);
        assert_eq!(grid.num_open_edges(), 24);
        assert_eq!(reachable_without_cycle(&grid), Some(25));
        assert!(generator.iteration >= 24);
    }

    #[test]
    fn same_seed_same_tree() {
        let mut a = Grid::new(5).unwrap();
        let mut b = Grid::new(5).unwrap();
        MazeGenerator::new().generate(&mut a, &mut StdRng::seed_from_u64(11));
        MazeGenerator::new().generate(&mut b, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}

/*
solver.rs

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

//! Compute which pipes are connected to the center of the grid.
//!
//! Two adjacent pipes are connected when both have their connector facing the other one open.
//! The puzzle is solved when every pipe is connected to the center pipe.

use log::{debug, info};

use crate::grid::Grid;
use crate::grid::direction::Direction;

/// Result of a connectivity check.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Connectivity {
    /// Number of pipes connected to the center (including the center pipe itself).
    pub active: usize,

    /// Number of pipes in the grid.
    pub total: usize,
}

impl Connectivity {
    /// Whether all the pipes are connected.
    pub fn is_solved(&self) -> bool {
        self.active == self.total
    }
}

/// Set the active status of all the pipes by flood filling the grid from its center.
///
/// The whole grid is recomputed on each call.
pub fn check_pipes(grid: &mut Grid) -> Connectivity {
    for pipe in grid.pipes_mut() {
        pipe.set_active(false);
    }

    let (center_row, center_col) = grid.center();
    let mut pipes_to_check: Vec<(usize, usize)> = Vec::with_capacity(grid.num_pipes());
    let mut active: usize = 0;
    if let Some(center) = grid.get_pipe_mut(center_row, center_col) {
        center.set_active(true);
        pipes_to_check.push((center_row, center_col));
        active += 1;
    }

    while let Some((row, col)) = pipes_to_check.pop() {
        let connectors = match grid.get_pipe(row, col) {
            Some(p) => p.connectors(),
            None => continue,
        };
        for direction in connectors.open_directions() {
            let Some((r, c)) = grid.neighbor_position(row, col, direction) else {
                continue;
            };
            if let Some(neighbor) = grid.get_pipe_mut(r, c) {
                if !neighbor.is_active() && neighbor.has_connection(direction.opposite()) {
                    neighbor.set_active(true);
                    pipes_to_check.push((r, c));
                    active += 1;
                }
            }
        }
    }

    let connectivity = Connectivity {
        active,
        total: grid.num_pipes(),
    };
    debug!(
        "{} of {} pipes connected to the center",
        connectivity.active, connectivity.total
    );
    if connectivity.is_solved() {
        info!("Winner");
    }
    connectivity
}

/// Whether the pipe at the given position is connected to its neighbor in `direction`.
pub fn is_linked(grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    grid.get_pipe(row, col)
        .is_some_and(|p| p.has_connection(direction))
        && grid
            .neighbor(row, col, direction)
            .is_some_and(|n| n.has_connection(direction.opposite()))
}

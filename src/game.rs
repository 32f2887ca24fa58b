/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] owns the [`Grid`] being played.
//! After the grid is set up, the only way to change it is to rotate a pipe with a
//! [`RotateCommand`].

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::generator::maze::MazeGenerator;
use crate::generator::scrambler;
use crate::grid::Grid;
use crate::solver::{self, Connectivity};

/// Rotate one pipe a quarter-turn clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotateCommand {
    pub row: usize,
    pub col: usize,
}

impl RotateCommand {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Rotate the pipe and recompute the active pipes of the grid.
    ///
    /// Return None, and leave the grid untouched, if there is no pipe at the command position.
    pub fn apply(&self, grid: &mut Grid) -> Option<Connectivity> {
        match grid.get_pipe_mut(self.row, self.col) {
            Some(pipe) => pipe.rotate(),
            None => {
                debug!("No pipe at ({}, {}): ignoring rotation", self.row, self.col);
                return None;
            }
        }
        Some(solver::check_pipes(grid))
    }
}

/// Manage the status of the game in progress.
///
/// The game is saved as its grid. When a game is restored, the active pipes are recomputed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "Grid", into = "Grid")]
pub struct Game {
    /// Pipes of the puzzle.
    grid: Grid,

    /// Connectivity computed after the last change to the grid.
    connectivity: Connectivity,
}

impl From<Grid> for Game {
    fn from(mut grid: Grid) -> Self {
        let connectivity: Connectivity = solver::check_pipes(&mut grid);
        Self { grid, connectivity }
    }
}

impl From<Game> for Grid {
    fn from(game: Game) -> Self {
        game.grid
    }
}

impl Game {
    /// Create a new random puzzle by using the given random number generator.
    ///
    /// # Errors
    ///
    /// Return [`GameError::InvalidConfiguration`] if `size` is even, zero, or too large.
    pub fn new_with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GameError> {
        let mut grid: Grid = Grid::new(size)?;
        MazeGenerator::new().generate(&mut grid, rng);
        scrambler::scramble_pipes(&mut grid, rng);
        Ok(Self::from(grid))
    }

    /// Return the grid being played.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rotate the pipe at the given position.
    ///
    /// Return whether a pipe was rotated. Positions out of the grid are ignored.
    pub fn rotate(&mut self, row: usize, col: usize) -> bool {
        self.apply(&RotateCommand::new(row, col))
    }

    /// Apply a [`RotateCommand`] and return whether a pipe was rotated.
    pub fn apply(&mut self, command: &RotateCommand) -> bool {
        match command.apply(&mut self.grid) {
            Some(c) => {
                self.connectivity = c;
                true
            }
            None => false,
        }
    }

    /// Number of connected and total pipes.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.connectivity.is_solved()
    }
}

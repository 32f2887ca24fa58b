/*
grid.rs

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

//! The square grid of pipes.
//!
//! A [`Grid`] stores `size × size` [`pipe::Pipe`] objects, addressed by 1-based row and column.
//! The size is always odd so that the grid has a center cell, from which the
//! [`crate::solver`] propagates the active status.
//!
//! Lookups outside the grid return [`None`]: this is how the pipes on the edges find out that
//! they have no neighbor in some directions.

pub mod direction;
pub mod pipe;

use serde::{Deserialize, Serialize};

use crate::config::MAX_SIZE;
use crate::errors::GameError;
use crate::snapshot::GridSnapshot;
use direction::Direction;
use pipe::Pipe;

/// Grid object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "GridSnapshot", into = "GridSnapshot")]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Pipes in row-major order.
    pipes: Vec<Pipe>,
}

impl Grid {
    /// Create a grid of pipes without any open connector.
    ///
    /// # Errors
    ///
    /// Return [`GameError::InvalidConfiguration`] if `size` is even, zero, or larger than
    /// [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::check_size(size)?;
        let mut pipes: Vec<Pipe> = Vec::with_capacity(size * size);
        for row in 1..=size {
            for col in 1..=size {
                pipes.push(Pipe::new(row, col));
            }
        }
        Ok(Self { size, pipes })
    }

    /// Build a grid from a list of pipes in any order.
    ///
    /// # Errors
    ///
    /// Return [`GameError::InvalidSnapshot`] if the size is not valid, or if the pipes do not
    /// cover the grid exactly once.
    pub(crate) fn from_pipes(size: usize, pipes: Vec<Pipe>) -> Result<Self, GameError> {
        if Self::check_size(size).is_err() {
            return Err(GameError::InvalidSnapshot(format!(
                "the grid size ({size}) must be a positive odd number up to {MAX_SIZE}"
            )));
        }
        let count: usize = size.checked_mul(size).ok_or_else(|| {
            GameError::InvalidSnapshot(format!("the grid size ({size}) is too large"))
        })?;
        if pipes.len() != count {
            return Err(GameError::InvalidSnapshot(format!(
                "{} pipes for a {size}x{size} grid",
                pipes.len()
            )));
        }

        let mut slots: Vec<Option<Pipe>> = vec![None; count];
        for pipe in pipes {
            let (row, col) = pipe.position();
            let index: usize = Self::index_in(size, row, col).ok_or_else(|| {
                GameError::InvalidSnapshot(format!("pipe ({row}, {col}) is outside the grid"))
            })?;
            if slots[index].is_some() {
                return Err(GameError::InvalidSnapshot(format!(
                    "pipe ({row}, {col}) is defined twice"
                )));
            }
            slots[index] = Some(pipe);
        }

        // All the pipes are in range and not duplicated, and there are exactly size² of them,
        // so every slot is filled.
        let pipes: Vec<Pipe> = slots.into_iter().flatten().collect();
        Ok(Self { size, pipes })
    }

    fn check_size(size: usize) -> Result<(), GameError> {
        if size % 2 == 0 || size > MAX_SIZE {
            return Err(GameError::InvalidConfiguration(size));
        }
        Ok(())
    }

    fn index_in(size: usize, row: usize, col: usize) -> Option<usize> {
        if row == 0 || col == 0 || row > size || col > size {
            None
        } else {
            Some((row - 1) * size + (col - 1))
        }
    }

    /// Position of the pipe in the row-major storage, or None if out of the grid.
    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        Self::index_in(self.size, row, col)
    }

    /// Number of rows (and columns) in the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of pipes.
    pub fn num_pipes(&self) -> usize {
        self.pipes.len()
    }

    /// Row and column of the center pipe.
    pub fn center(&self) -> (usize, usize) {
        let c: usize = self.size.div_ceil(2);
        (c, c)
    }

    /// Return the pipe at the given row and column, or None if out of the grid.
    pub fn get_pipe(&self, row: usize, col: usize) -> Option<&Pipe> {
        self.index(row, col).map(|i| &self.pipes[i])
    }

    pub(crate) fn get_pipe_mut(&mut self, row: usize, col: usize) -> Option<&mut Pipe> {
        match self.index(row, col) {
            Some(i) => Some(&mut self.pipes[i]),
            None => None,
        }
    }

    /// Return all the pipes, row by row.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub(crate) fn pipes_mut(&mut self) -> impl Iterator<Item = &mut Pipe> {
        self.pipes.iter_mut()
    }

    /// Coordinates of the adjacent cell in the given direction, or None if out of the grid.
    pub fn neighbor_position(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r: usize = row.checked_add_signed(dr)?;
        let c: usize = col.checked_add_signed(dc)?;
        self.index(r, c).map(|_| (r, c))
    }

    /// Return the adjacent pipe in the given direction, or None if out of the grid.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<&Pipe> {
        let (r, c) = self.neighbor_position(row, col, direction)?;
        self.get_pipe(r, c)
    }

    /// Open the connector between the pipe and its neighbor in the given direction, on both
    /// sides.
    ///
    /// Return the coordinates of the neighbor, or None (and change nothing) if there is no
    /// neighbor in that direction.
    pub(crate) fn connect(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (r, c) = self.neighbor_position(row, col, direction)?;
        self.get_pipe_mut(row, col)?.open(direction);
        self.get_pipe_mut(r, c)?.open(direction.opposite());
        Some((r, c))
    }

    /// Close all the connectors of all the pipes.
    pub(crate) fn clear_connectors(&mut self) {
        for pipe in self.pipes_mut() {
            pipe.clear_connectors();
        }
    }

    /// Number of pairs of adjacent pipes with facing connectors both open.
    pub fn num_open_edges(&self) -> usize {
        self.pipes
            .iter()
            .map(|pipe| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|d| pipe.has_connection(*d))
                    .filter(|d| {
                        self.neighbor(pipe.row(), pipe.col(), *d)
                            .is_some_and(|n| n.has_connection(d.opposite()))
                    })
                    .count()
            })
            .sum()
    }

    /// Number of pipes connected to the center, as computed by the last
    /// [`crate::solver::check_pipes`] call.
    pub fn num_active(&self) -> usize {
        self.pipes.iter().filter(|p| p.is_active()).count()
    }
}

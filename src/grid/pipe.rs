/*
pipe.rs

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

//! Pipes, the cells of the grid.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::direction::Direction;
use crate::snapshot::flag;

/// Open connectors of a pipe, one slot per [`Direction`].
///
/// Serialized as a sequence of four booleans in the [`Direction::ALL`] order.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Connectors([bool; 4]);

impl Connectors {
    /// Create the connectors from the open status of each slot.
    pub fn new(open: [bool; 4]) -> Self {
        Self(open)
    }

    /// Create the connectors with only the given directions open.
    #[cfg(test)]
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut connectors: Connectors = Connectors::default();
        for d in directions {
            connectors.open(*d);
        }
        connectors
    }

    /// Whether the connector facing `direction` is open.
    pub fn is_open(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    /// Open the connector facing `direction`.
    pub fn open(&mut self, direction: Direction) {
        self.0[direction.index()] = true;
    }

    /// Whether all the connectors are closed.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|c| *c)
    }

    /// Number of open connectors.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }

    /// Iterate over the directions of the open connectors, in clockwise order.
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .filter_map(|(i, _)| Direction::from_repr(i))
    }

    /// Shift every connector one slot clockwise: up becomes right, right becomes down...
    pub fn rotate(&mut self) {
        self.0.rotate_right(1);
    }

    /// Return the open status of each slot.
    #[cfg(test)]
    pub fn as_array(&self) -> [bool; 4] {
        self.0
    }
}

impl Index<Direction> for Connectors {
    type Output = bool;

    fn index(&self, direction: Direction) -> &bool {
        &self.0[direction.index()]
    }
}

/// A cell of the grid.
///
/// The coordinates start at 1 and never change once the pipe is created.
/// The active status is computed by [`crate::solver::check_pipes`]: it is not trusted when the
/// pipe is read from a saved game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Row, from 1 (top) to the grid size.
    #[serde(alias = "x")]
    row: usize,

    /// Column, from 1 (left) to the grid size.
    #[serde(alias = "y")]
    col: usize,

    /// Open connectors.
    #[serde(alias = "connections")]
    connectors: Connectors,

    /// Whether the pipe is connected to the center of the grid.
    #[serde(default, deserialize_with = "flag::deserialize")]
    active: bool,
}

impl Pipe {
    /// Create a pipe with no open connectors.
    pub fn new(row: usize, col: usize) -> Self {
        Self::with_connectors(row, col, Connectors::default())
    }

    /// Create a pipe with the given connectors.
    pub fn with_connectors(row: usize, col: usize, connectors: Connectors) -> Self {
        Self {
            row,
            col,
            connectors,
            active: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row and column of the pipe.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn connectors(&self) -> Connectors {
        self.connectors
    }

    /// Whether the pipe has an open connector facing `direction`.
    pub fn has_connection(&self, direction: Direction) -> bool {
        self.connectors.is_open(direction)
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.connectors.open(direction);
    }

    pub(crate) fn clear_connectors(&mut self) {
        self.connectors = Connectors::default();
    }

    /// Rotate the pipe a quarter-turn clockwise.
    pub fn rotate(&mut self) {
        self.connectors.rotate();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

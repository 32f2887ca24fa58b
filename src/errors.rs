/*
errors.rs

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

//! Errors reported by the puzzle engine.

use std::error::Error;
use std::fmt;

use crate::config::MAX_SIZE;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// The requested grid size is even, zero, or too large. The value is the rejected size.
    InvalidConfiguration(usize),

    /// A saved grid is structurally wrong (missing fields, wrong number of pipes, duplicated
    /// coordinates...). The value describes the problem.
    InvalidSnapshot(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration(size) => write!(
                f,
                "Cannot create grid with {size} rows/columns: the size must be a positive odd number up to {MAX_SIZE}"
            ),
            GameError::InvalidSnapshot(msg) => write!(f, "Invalid saved game: {msg}"),
        }
    }
}

impl Error for GameError {}

/*
scrambler.rs

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

//! Hide the solution by rotating the pipes.

use log::debug;
use rand::Rng;

use crate::grid::Grid;

/// Rotate every pipe between zero and three quarter-turns.
///
/// The shape of each pipe (its number of open connectors and their relative layout) does not
/// change, only the direction it faces.
pub fn scramble_pipes<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let mut rotations: usize = 0;
    for pipe in grid.pipes_mut() {
        let turns: usize = rng.random_range(0..4);
        for _ in 0..turns {
            pipe.rotate();
        }
        rotations += turns;
    }
    debug!("Scrambled the grid with {rotations} rotations");
}

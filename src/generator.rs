/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is created in two steps:
//!
//! * The [`maze::MazeGenerator`] object opens connectors between the pipes so that they form a
//!   random spanning tree rooted at the center of the grid.
//!   Every pipe is then connected to the center through exactly one path: this is the
//!   solution.
//!
//! * The [`scrambler::scramble_pipes`] function rotates every pipe a random number of times to
//!   hide that solution.
//!
//! Both steps take the random number generator as a parameter, so that puzzles can be
//! reproduced from a seed.

pub mod maze;
pub mod scrambler;

/*
config.rs

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

//! Build-time defaults. The command-line options override some of them.

/// Number of rows and columns of a new puzzle when `--size` is not given.
pub const DEFAULT_SIZE: usize = 5;

/// Largest number of rows and columns of a puzzle.
pub const MAX_SIZE: usize = 99;

/// Name of the directory, under the user data directory, where the game is saved.
pub const APP_DIR_NAME: &str = "pipes";

/// Name of the file that stores the game in progress.
pub const SAVE_FILE_NAME: &str = "savegame.json";

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

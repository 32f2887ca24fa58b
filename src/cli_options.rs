/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Continue the saved game, or start a 5x5 puzzle if there is none:
//!
//! ```
//! $ pipes
//! ```
//!
//! Start a new 9x9 puzzle that can be replayed later with the same seed:
//!
//! ```
//! $ pipes --new --size 9 --seed 1234
//! ```

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::{APP_DIR_NAME, COPYRIGHT_NOTICE, DEFAULT_SIZE, MAX_SIZE};

/// Rotate the pipes until they all connect to the center of the grid.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Options {
    /// Number of rows and columns of a new puzzle (positive odd number, up to 99)
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SIZE as u64)
    )]
    pub size: Option<usize>,

    /// Start a new puzzle instead of continuing the saved game
    #[arg(short, long, default_value_t = false)]
    pub new: bool,

    /// Seed for the random generator, to replay the same puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory where the game in progress is saved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Options {
    /// Size of new puzzles.
    pub fn grid_size(&self) -> usize {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    /// Directory where the game is saved: the `--data-dir` option, or a directory under the
    /// user data directory.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME),
        }
    }
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Options {
    let options: Options = Options::parse();

    if options.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{options:?}");
    options
}

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

//! Save and restore the game in progress when quitting or starting Pipes.
//!
//! When a game is in progress and the user quits Pipes, the grid is saved in the
//! `savegame.json` file.
//! When Pipes is restarted, the saved game is loaded, and the user can continue the puzzle.
//!
//! The file format is described in the [`crate::snapshot`] module.

use log::debug;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::SAVE_FILE_NAME;
use crate::game::Game;
use crate::snapshot;

/// Object to save and restore a puzzle in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the puzzle must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE_NAME);
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`Game`] object for the saved puzzle.
    ///
    /// Return the [`Game`] object or None if there is no saved puzzle, or if the file is not
    /// readable JSON.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read, or if it describes an incomplete
    /// grid ([`crate::errors::GameError::InvalidSnapshot`]).
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let contents: String = match fs::read_to_string(&self.save_file) {
            Ok(s) => s,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        Ok(snapshot::load(&contents)?)
    }

    /// Save the provided [`Game`] object.
    ///
    /// The data directory is created if it does not exist.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(snapshot::dump(game)?.as_bytes())?;
        writer.flush()?;
        debug!("Game saved in {:?}", self.save_file);
        Ok(())
    }

    /// Delete the saved game.
    ///
    /// A missing file is not an error. Other failures are logged and ignored.
    pub fn delete_save(&self) {
        match remove_file(&self.save_file) {
            Ok(()) => debug!("Saved game {:?} deleted", self.save_file),
            Err(error) if error.kind() == ErrorKind::NotFound => (),
            Err(error) => debug!("Cannot delete {:?}: {error}", self.save_file),
        }
    }
}

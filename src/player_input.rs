/*
player_input.rs

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

//! Translate the lines typed by the player into commands.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::game::RotateCommand;

pub const HELP: &str = "Commands:
  <row> <col>   rotate the pipe at that position (for example: 2 3)
  s             save the game
  n             start a new puzzle
  h             show this help
  q             save and quit";

/// Player command.
#[derive(Debug, PartialEq)]
pub enum Command {
    Rotate(RotateCommand),
    Save,
    New,
    Help,
    Quit,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum InputError {
    /// Nothing was typed.
    Empty,

    /// The line is not a command.
    Unknown(String),

    /// The line cannot be read, for example because it is not valid UTF-8.
    Unreadable(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "No command"),
            InputError::Unknown(line) => write!(f, "Unknown command: {line}"),
            InputError::Unreadable(msg) => write!(f, "Cannot read the command: {msg}"),
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line: &str = line.trim();
        if line.is_empty() {
            return Err(InputError::Empty);
        }

        match line.to_lowercase().as_str() {
            "s" | "save" => return Ok(Command::Save),
            "n" | "new" => return Ok(Command::New),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => (),
        }

        // Coordinates can be separated by spaces or by a comma
        let coords: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if let [row, col] = coords.as_slice() {
            if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
                return Ok(Command::Rotate(RotateCommand::new(row, col)));
            }
        }
        Err(InputError::Unknown(line.to_string()))
    }
}

/// Parse a line read from the player.
///
/// A read error only rejects that line: the game goes on with the next one.
pub fn read_command(line: io::Result<String>) -> Result<Command, InputError> {
    match line {
        Ok(l) => l.parse::<Command>(),
        Err(e) => Err(InputError::Unreadable(e.to_string())),
    }
}

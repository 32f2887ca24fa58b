/*
main.rs

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

mod cli_options;
mod config;
mod draw;
mod errors;
mod game;
mod generator;
mod grid;
mod player_input;
mod saver;
mod snapshot;
mod solver;
#[cfg(test)]
mod tests;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cli_options::Options;
use game::Game;
use player_input::{Command, HELP, InputError};
use saver::game::SaverGame;

fn main() -> ExitCode {
    let options: Options = cli_options::parse();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Restore the saved game if there is one and if it matches the requested size.
fn restore_game(options: &Options, saver: &SaverGame) -> Option<Game> {
    if options.new {
        return None;
    }
    match saver.get_game() {
        Ok(Some(game)) => {
            if options
                .size
                .is_some_and(|size| size != game.grid().size())
            {
                info!("The saved game does not have the requested size: starting a new game");
                return None;
            }
            info!("Restored the saved game from {:?}", saver.path());
            Some(game)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Cannot restore the saved game: {e}");
            None
        }
    }
}

/// Play until the player quits or the standard input is closed.
fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let saver: SaverGame = SaverGame::new(options.data_dir());

    let mut game: Game = match restore_game(options, &saver) {
        Some(g) => g,
        None => Game::new_with_rng(options.grid_size(), &mut rng)?,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut show_grid: bool = true;
    loop {
        if show_grid {
            print!("\n{}", draw::render(game.grid()));
            let c = game.connectivity();
            println!("Connected pipes: {}/{}", c.active, c.total);
            if game.is_solved() {
                println!("Solved! Type n for a new puzzle or q to quit.");
            }
        }
        show_grid = true;
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match player_input::read_command(line) {
            Ok(Command::Rotate(command)) => {
                if !game.rotate(command.row, command.col) {
                    println!("There is no pipe at row {} column {}", command.row, command.col);
                    show_grid = false;
                } else if game.is_solved() {
                    saver.delete_save();
                }
            }
            Ok(Command::Save) => {
                saver.save_game(&game)?;
                println!("Game saved");
                show_grid = false;
            }
            Ok(Command::New) => {
                game = Game::new_with_rng(game.grid().size(), &mut rng)?;
            }
            Ok(Command::Help) => {
                println!("{HELP}");
                show_grid = false;
            }
            Ok(Command::Quit) => break,
            Err(InputError::Empty) => show_grid = false,
            Err(e) => {
                println!("{e}. Type h for help.");
                show_grid = false;
            }
        }
    }

    if game.is_solved() {
        saver.delete_save();
    } else {
        saver.save_game(&game)?;
    }
    Ok(())
}

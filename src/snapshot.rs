/*
snapshot.rs

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

//! Serializable form of a grid.
//!
//! A grid is saved as an object with the grid size and the list of its pipes:
//!
//! ```json
//! {
//!   "size": 3,
//!   "pipes": [
//!     {"row": 1, "col": 1, "connectors": [false, true, false, false], "active": false},
//!     ...
//!   ]
//! }
//! ```
//!
//! Connector and active flags are written as booleans, but `0` and `1` are also accepted.
//! The `x`, `y`, and `connections` field names are accepted as aliases for `row`, `col`, and
//! `connectors`.
//!
//! The active flags are not trusted: [`crate::game::Game`] recomputes them after loading.

use log::{debug, warn};
use serde::Serialize;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use std::fmt;

use crate::errors::GameError;
use crate::game::Game;
use crate::grid::Grid;
use crate::grid::pipe::{Connectors, Pipe};

/// Deserialize a boolean flag written either as a boolean or as the `0` and `1` integers.
pub mod flag {
    use serde::Deserializer;
    use serde::de::{self, Visitor};
    use std::fmt;

    pub(crate) struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, 0, or 1")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Unsigned(value),
                    &self,
                )),
            }
        }

        fn visit_i64<E>(self, value: i64) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(de::Error::invalid_value(de::Unexpected::Signed(value), &self)),
            }
        }
    }

    /// Deserialize a flag.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagVisitor)
    }
}

/// One connector flag inside a connector sequence.
struct Flag(bool);

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        flag::deserialize(deserializer).map(Flag)
    }
}

/// Deserialize a [`Connectors`] object from a sequence of exactly four flags.
impl<'de> Deserialize<'de> for Connectors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConnectorsVisitor;

        impl<'de> Visitor<'de> for ConnectorsVisitor {
            type Value = Connectors;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of 4 connector flags (up, right, down, left)")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Connectors, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut open: [bool; 4] = [false; 4];
                for (i, slot) in open.iter_mut().enumerate() {
                    let f: Flag = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    *slot = f.0;
                }
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(5, &self));
                }
                Ok(Connectors::new(open))
            }
        }

        deserializer.deserialize_seq(ConnectorsVisitor)
    }
}

/// Serialized form of a [`Grid`].
#[derive(Serialize, serde::Deserialize, Debug, Clone)]
pub struct GridSnapshot {
    /// Number of rows and columns.
    pub size: usize,

    /// All the pipes, in any order.
    pub pipes: Vec<Pipe>,
}

impl From<Grid> for GridSnapshot {
    fn from(grid: Grid) -> Self {
        Self {
            size: grid.size(),
            pipes: grid.pipes().to_vec(),
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = GameError;

    fn try_from(snapshot: GridSnapshot) -> Result<Self, Self::Error> {
        Grid::from_pipes(snapshot.size, snapshot.pipes)
    }
}

/// Rebuild a game from its JSON form.
///
/// Return None when there is nothing to load: the input is empty, is `null`, or is not JSON at
/// all. The caller is expected to start a new game in that case.
///
/// # Errors
///
/// Return [`GameError::InvalidSnapshot`] if the input is JSON but does not describe a complete
/// grid (missing fields, wrong number of pipes, pipes outside the grid...).
pub fn load(json: &str) -> Result<Option<Game>, GameError> {
    match serde_json::from_str::<Option<Game>>(json) {
        Ok(game) => {
            if let Some(g) = &game {
                debug!(
                    "Loaded a {}x{} grid ({} pipes connected)",
                    g.grid().size(),
                    g.grid().size(),
                    g.grid().num_active()
                );
            }
            Ok(game)
        }
        Err(e) if e.is_syntax() || e.is_eof() => {
            warn!("Ignoring unreadable saved game: {e}");
            Ok(None)
        }
        Err(e) => Err(GameError::InvalidSnapshot(e.to_string())),
    }
}

/// Return the JSON form of a game.
pub fn dump(game: &Game) -> Result<String, GameError> {
    serde_json::to_string(game).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
}

/*
draw.rs

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

//! Draw the grid with box-drawing characters.
//!
//! Each pipe is a glyph with a stroke toward each open connector. Pipes connected to the
//! center are drawn with heavy strokes, the others with light strokes.
//! Row and column numbers are printed around the grid so that the player can type the
//! coordinates of the pipe to rotate.

use crate::grid::Grid;
use crate::grid::direction::Direction;
use crate::grid::pipe::Pipe;
use crate::solver;

// Glyphs indexed by the connector mask: up = 1, right = 2, down = 4, left = 8.
const LIGHT: [char; 16] = [
    '·', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];
const HEAVY: [char; 16] = [
    '•', '╹', '╺', '┗', '╻', '┃', '┏', '┣', '╸', '┛', '━', '┻', '┓', '┫', '┳', '╋',
];

/// Return the glyph for the pipe.
pub fn glyph(pipe: &Pipe) -> char {
    let mask: usize = pipe
        .connectors()
        .open_directions()
        .map(|d| 1 << d.index())
        .sum();
    if pipe.is_active() {
        HEAVY[mask]
    } else {
        LIGHT[mask]
    }
}

/// Draw the grid, with a line of column numbers on top and the row numbers on the left.
pub fn render(grid: &Grid) -> String {
    let width: usize = grid.size().to_string().len();
    let mut out: String = String::new();

    // Column numbers
    out.push_str(&" ".repeat(width + 1));
    let header: Vec<String> = (1..=grid.size())
        .map(|col| format!("{col:<width$}"))
        .collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');

    for row in 1..=grid.size() {
        out.push_str(&format!("{row:>width$} "));
        for col in 1..=grid.size() {
            let Some(pipe) = grid.get_pipe(row, col) else {
                continue;
            };
            out.push(glyph(pipe));
            if col == grid.size() {
                break;
            }
            // Fill the gap up to the next pipe
            let fill: char = if !solver::is_linked(grid, row, col, Direction::Right) {
                ' '
            } else if pipe.is_active() {
                '━'
            } else {
                '─'
            };
            for _ in 0..width {
                out.push(fill);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::pipe::Connectors;
    use Direction::{Down as D, Left as L, Right as R, Up as U};

    fn grid_from(cells: [&[Direction]; 9]) -> Grid {
        let pipes: Vec<Pipe> = cells
            .iter()
            .enumerate()
            .map(|(i, dirs)| {
                Pipe::with_connectors(i / 3 + 1, i % 3 + 1, Connectors::from_directions(dirs))
            })
            .collect();
        Grid::from_pipes(3, pipes).unwrap()
    }

    fn solved_grid() -> Grid {
        let mut grid = grid_from([
            &[R],
            &[L, R, D],
            &[L],
            &[R],
            &[U, R, D, L],
            &[L],
            &[R],
            &[L, U, R],
            &[L],
        ]);
        solver::check_pipes(&mut grid);
        grid
    }

    #[test]
    fn draw_solved_grid() {
        assert_eq!(
            render(&solved_grid()),
            "  1 2 3
1 ╺━┳━╸
2 ╺━╋━╸
3 ╺━┻━╸
"
        );
    }

    #[test]
    fn draw_disconnected_pipes_with_light_strokes() {
        let mut grid = solved_grid();
        grid.get_pipe_mut(1, 1).unwrap().rotate();
        solver::check_pipes(&mut grid);
        assert_eq!(
            render(&grid),
            "  1 2 3
1 ╷ ┳━╸
2 ╺━╋━╸
3 ╺━┻━╸
"
        );
    }

    #[test]
    fn glyphs_follow_the_connectors() {
        let mut pipe = Pipe::with_connectors(1, 1, Connectors::from_directions(&[U, D]));
        assert_eq!(glyph(&pipe), '│');
        pipe.rotate();
        assert_eq!(glyph(&pipe), '─');
        pipe.set_active(true);
        assert_eq!(glyph(&pipe), '━');
    }

    #[test]
    fn wide_grids_align_the_columns() {
        let grid = Grid::new(11).unwrap();
        let text = render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("   1  2  3"));
        assert!(lines[0].ends_with("10 11"));
        assert!(lines[1].starts_with(" 1 ·  ·"));
        assert!(lines[11].starts_with("11 ·"));
    }
}

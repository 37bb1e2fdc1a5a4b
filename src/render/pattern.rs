// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Direction, InterferencePattern, Point};

use super::corner::corner_char;
use super::{UNICODE_BOX_HORIZONTAL, UNICODE_BOX_VERTICAL};

const NORTH_SOUTH: Direction = Direction::NORTH.union(Direction::SOUTH);
const EAST_WEST: Direction = Direction::EAST.union(Direction::WEST);
const EAST_SOUTH: Direction = Direction::EAST.union(Direction::SOUTH);
const NORTH_WEST: Direction = Direction::NORTH.union(Direction::WEST);

/// Deterministic Unicode rendering of an Interference Pattern.
///
/// Each cell becomes a 2×2 block: intersection glyph and top wall on the first line, left wall and
/// content on the second. A closing border row and column follow, so a `w × h` pattern yields
/// `2h + 1` lines of `2w + 1` characters, each terminated by `\n`.
pub fn render_pattern_unicode(pattern: &InterferencePattern) -> String {
    let width = pattern.width();
    let height = pattern.height();
    let grid = pattern.grid();

    let line_len = (2 * width) + 1;
    // Box-drawing glyphs and arrows are 3 bytes in UTF-8.
    let mut out = String::with_capacity(((2 * height) + 1) * ((line_len * 3) + 1));
    let mut row_top = String::with_capacity(line_len * 3);
    let mut row_mid = String::with_capacity(line_len * 3);

    for y in 0..height {
        row_top.clear();
        row_mid.clear();

        for x in 0..width {
            let this_cell = grid.get(x, y);
            let prev_row_prev_cell = match (x, y) {
                (0, 0) => EAST_SOUTH,
                (_, 0) => EAST_WEST,
                (0, _) => NORTH_SOUTH,
                _ => grid.get(x - 1, y - 1),
            };

            row_top.push(corner_char(prev_row_prev_cell, this_cell));
            row_top.push(top_wall_char(this_cell));

            row_mid.push(left_wall_char(this_cell));
            row_mid.push(pattern.content_char_at(Point::new(x, y)));
        }

        let above_last_cell = if y > 0 { grid.get(width - 1, y - 1) } else { EAST_WEST };
        row_top.push(corner_char(above_last_cell, NORTH_SOUTH));
        row_mid.push(left_wall_char(NORTH_SOUTH));

        push_line(&mut out, &row_top);
        push_line(&mut out, &row_mid);
    }

    row_top.clear();
    let last_row = height - 1;
    for x in 0..width {
        let prev_cell = if x > 0 { grid.get(x - 1, last_row) } else { NORTH_SOUTH };
        row_top.push(corner_char(prev_cell, EAST_WEST));
        row_top.push(top_wall_char(EAST_WEST));
    }
    row_top.push(corner_char(Direction::NONE, NORTH_WEST));
    push_line(&mut out, &row_top);

    out
}

/// Wall segment to the right of an intersection, i.e. along the top of `cell`.
fn top_wall_char(cell: Direction) -> char {
    if cell.contains(Direction::NORTH) {
        ' '
    } else {
        UNICODE_BOX_HORIZONTAL
    }
}

/// Wall segment below an intersection, i.e. along the left side of `cell`.
fn left_wall_char(cell: Direction) -> char {
    if cell.contains(Direction::WEST) {
        ' '
    } else {
        UNICODE_BOX_VERTICAL
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid-line intersection glyphs.
//!
//! An intersection sits between four cells but only two are consulted: the cell above-left
//! (`top_left`, its `EAST` and `SOUTH` flags) and the cell below-right (`bottom_right`, its `WEST`
//! and `NORTH` flags). The full 16×16 input space is tabulated once at compile time.

use crate::model::Direction;

use super::{
    UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_CROSS, UNICODE_BOX_HORIZONTAL,
    UNICODE_BOX_TEE_DOWN, UNICODE_BOX_TEE_LEFT, UNICODE_BOX_TEE_RIGHT, UNICODE_BOX_TEE_UP,
    UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

const FLAG_SETS: usize = 16;

/// Every `(top_left, bottom_right)` combination, indexed by `top_left.bits() << 4 | bottom_right.bits()`.
static CORNER_TABLE: [char; FLAG_SETS * FLAG_SETS] = build_corner_table();

/// The glyph drawn at the intersection above-left of `bottom_right`.
pub fn corner_char(top_left: Direction, bottom_right: Direction) -> char {
    CORNER_TABLE[table_index(top_left, bottom_right)]
}

const fn table_index(top_left: Direction, bottom_right: Direction) -> usize {
    ((top_left.bits() as usize) << 4) | bottom_right.bits() as usize
}

const fn build_corner_table() -> [char; FLAG_SETS * FLAG_SETS] {
    let mut table = [' '; FLAG_SETS * FLAG_SETS];
    let mut tl = 0;
    while tl < FLAG_SETS {
        let mut br = 0;
        while br < FLAG_SETS {
            let top_left = Direction::from_bits(tl as u8);
            let bottom_right = Direction::from_bits(br as u8);
            table[table_index(top_left, bottom_right)] = corner_rule(top_left, bottom_right);
            br += 1;
        }
        tl += 1;
    }
    table
}

// With `EAST` open and `SOUTH` closed, `WEST` alone selects `─`.
const fn corner_rule(top_left: Direction, bottom_right: Direction) -> char {
    let west = bottom_right.contains(Direction::WEST);
    let north = bottom_right.contains(Direction::NORTH);

    if top_left.contains(Direction::EAST) {
        if top_left.contains(Direction::SOUTH) {
            if west {
                if north {
                    ' '
                } else {
                    UNICODE_BOX_HORIZONTAL
                }
            } else if north {
                UNICODE_BOX_VERTICAL
            } else {
                UNICODE_BOX_TOP_LEFT
            }
        } else if west {
            UNICODE_BOX_HORIZONTAL
        } else if north {
            UNICODE_BOX_TOP_RIGHT
        } else {
            UNICODE_BOX_TEE_DOWN
        }
    } else if top_left.contains(Direction::SOUTH) {
        if west {
            if north {
                UNICODE_BOX_VERTICAL
            } else {
                UNICODE_BOX_BOTTOM_LEFT
            }
        } else if north {
            UNICODE_BOX_VERTICAL
        } else {
            UNICODE_BOX_TEE_RIGHT
        }
    } else if west {
        if north {
            UNICODE_BOX_BOTTOM_RIGHT
        } else {
            UNICODE_BOX_TEE_UP
        }
    } else if north {
        UNICODE_BOX_TEE_LEFT
    } else {
        UNICODE_BOX_CROSS
    }
}

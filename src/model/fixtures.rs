// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::builder::PatternBuilder;
use super::direction::{Direction, Heading};
use super::grid::Point;
use super::pattern::InterferencePattern;

fn p(x: usize, y: usize) -> Point {
    Point::new(x, y)
}

/// Two cells joined east-west, marker `A` on the left one.
pub(crate) fn pattern_two_by_one() -> InterferencePattern {
    let mut builder = PatternBuilder::new(2, 1).expect("builder");
    builder.set(0, 0, Direction::EAST);
    builder.set(1, 0, Direction::WEST);
    builder.add_marker(p(0, 0)).expect("marker");
    builder.build()
}

/// A 4×3 spanning-tree maze with three markers, one arrow and solving order `B A C`.
pub(crate) fn pattern_four_by_three() -> InterferencePattern {
    let mut builder = PatternBuilder::new(4, 3).expect("builder");

    for (from, heading) in [
        (p(0, 0), Heading::East),
        (p(1, 0), Heading::East),
        (p(2, 0), Heading::East),
        (p(3, 0), Heading::South),
        (p(3, 1), Heading::South),
        (p(0, 0), Heading::South),
        (p(0, 1), Heading::East),
        (p(0, 1), Heading::South),
        (p(0, 2), Heading::East),
        (p(1, 2), Heading::East),
        (p(2, 2), Heading::North),
    ] {
        builder.connect(from, heading).expect("in-bounds edge");
    }

    builder.add_marker(p(0, 0)).expect("marker");
    builder.add_marker(p(2, 1)).expect("marker");
    builder.add_marker(p(3, 2)).expect("marker");
    builder.add_arrow(p(1, 1), Heading::East).expect("arrow");

    for index in [1, 0, 2] {
        builder.push_sequence(index).expect("sequence");
    }

    builder.build()
}

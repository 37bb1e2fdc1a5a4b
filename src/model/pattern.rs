// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::direction::{Direction, Heading};
use super::grid::{ConnectionGrid, Point};

/// Markers are lettered `A..=Z`, so a pattern holds at most this many.
pub const MAX_MARKERS: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidDimensions { width: usize, height: usize },
    OutOfBounds { point: Point, width: usize, height: usize },
    MarkerLimit { max: usize },
    DuplicateMarker { point: Point, existing: usize },
    UnknownMarker { index: usize, count: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height} (both must be at least 1)")
            }
            Self::OutOfBounds { point, width, height } => {
                write!(f, "point {point} is outside the {width}x{height} grid")
            }
            Self::MarkerLimit { max } => write!(f, "too many markers (max {max})"),
            Self::DuplicateMarker { point, existing } => {
                write!(f, "point {point} already holds marker {}", marker_letter(*existing))
            }
            Self::UnknownMarker { index, count } => {
                write!(f, "marker index {index} out of range ({count} markers)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A directional glyph placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Arrow {
    pub point: Point,
    pub heading: Heading,
}

/// An edge that is open on one side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorMismatch {
    /// Cell whose flag is set.
    pub point: Point,
    /// The open side of `point`.
    pub heading: Heading,
    /// The neighbour that lacks the opposite flag, or `None` if the edge leads off the grid.
    pub neighbor: Option<Point>,
}

/// The Interference Pattern puzzle: a connection grid annotated with lettered markers and arrows,
/// plus the order in which the markers must be visited.
///
/// Instances are produced by [`PatternBuilder`](super::builder::PatternBuilder) and are immutable
/// afterwards; every read below is total for a built pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterferencePattern {
    pub(super) grid: ConnectionGrid,
    pub(super) markers: Vec<Point>,
    pub(super) arrows: Vec<Arrow>,
    pub(super) marker_sequence: Vec<usize>,
}

impl InterferencePattern {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &ConnectionGrid {
        &self.grid
    }

    pub fn connections(&self, x: usize, y: usize) -> Direction {
        self.grid.get(x, y)
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn marker_sequence(&self) -> &[usize] {
        &self.marker_sequence
    }

    /// The letter shown for the marker at `index` (`0 -> 'A'`).
    pub fn display_letter_for(&self, index: usize) -> Result<char, PatternError> {
        if index >= self.markers.len() {
            return Err(PatternError::UnknownMarker { index, count: self.markers.len() });
        }
        Ok(marker_letter(index))
    }

    /// The character drawn inside the cell at `point`.
    ///
    /// Markers take precedence over arrows; within each list the earliest entry wins.
    pub fn content_char_at(&self, point: Point) -> char {
        if let Some(index) = self.markers.iter().position(|&marker| marker == point) {
            return marker_letter(index);
        }

        match self.arrows.iter().find(|arrow| arrow.point == point) {
            Some(arrow) => arrow_glyph(arrow.heading),
            None => ' ',
        }
    }

    /// Content characters for every cell, indexed `[y][x]`.
    pub fn cell_contents(&self) -> Vec<Vec<char>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.content_char_at(Point::new(x, y))).collect())
            .collect()
    }

    /// The marker sequence as display letters, recomputed on every call.
    pub fn solution_sequence(&self) -> Vec<String> {
        self.marker_sequence.iter().map(|&index| marker_letter(index).to_string()).collect()
    }

    /// Edges opened on one side without the mirrored flag on the other.
    ///
    /// Rendering never consults this; it exists for generators and tooling that want to check
    /// their output.
    pub fn mirror_mismatches(&self) -> Vec<MirrorMismatch> {
        let mut out = Vec::new();
        for point in self.grid.points() {
            let flags = self.grid.get(point.x, point.y);
            for heading in flags.iter() {
                match self.grid.neighbor(point, heading) {
                    Some(next) => {
                        let back = self.grid.get(next.x, next.y);
                        if !back.contains(heading.opposite().flag()) {
                            out.push(MirrorMismatch { point, heading, neighbor: Some(next) });
                        }
                    }
                    None => out.push(MirrorMismatch { point, heading, neighbor: None }),
                }
            }
        }
        out
    }
}

impl fmt::Display for InterferencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_pattern_unicode(self))
    }
}

pub(crate) fn marker_letter(index: usize) -> char {
    debug_assert!(index < MAX_MARKERS);
    char::from(b'A' + (index % MAX_MARKERS) as u8)
}

pub fn arrow_glyph(heading: Heading) -> char {
    match heading {
        Heading::North => '↑',
        Heading::South => '↓',
        Heading::East => '→',
        Heading::West => '←',
    }
}

#[cfg(test)]
mod tests {
    use super::{arrow_glyph, MirrorMismatch, PatternError};
    use crate::model::builder::PatternBuilder;
    use crate::model::direction::{Direction, Heading};
    use crate::model::grid::Point;

    #[test]
    fn letters_follow_insertion_order() {
        let mut builder = PatternBuilder::new(4, 1).expect("builder");
        for x in 0..4 {
            builder.add_marker(Point::new(x, 0)).expect("marker");
        }
        let pattern = builder.build();

        assert_eq!(pattern.display_letter_for(0), Ok('A'));
        assert_eq!(pattern.display_letter_for(3), Ok('D'));
        assert_eq!(
            pattern.display_letter_for(4),
            Err(PatternError::UnknownMarker { index: 4, count: 4 })
        );
    }

    #[test]
    fn marker_beats_arrow_on_shared_cell() {
        let mut builder = PatternBuilder::new(2, 1).expect("builder");
        builder.add_arrow(Point::new(0, 0), Heading::East).expect("arrow");
        builder.add_marker(Point::new(0, 0)).expect("marker");
        builder.add_arrow(Point::new(1, 0), Heading::South).expect("arrow");
        let pattern = builder.build();

        assert_eq!(pattern.content_char_at(Point::new(0, 0)), 'A');
        assert_eq!(pattern.content_char_at(Point::new(1, 0)), '↓');
    }

    #[test]
    fn first_arrow_wins_on_shared_cell() {
        let mut builder = PatternBuilder::new(1, 1).expect("builder");
        builder.add_arrow(Point::new(0, 0), Heading::West).expect("arrow");
        builder.add_arrow(Point::new(0, 0), Heading::North).expect("arrow");
        let pattern = builder.build();

        assert_eq!(pattern.content_char_at(Point::new(0, 0)), arrow_glyph(Heading::West));
    }

    #[test]
    fn cell_contents_are_row_major() {
        let mut builder = PatternBuilder::new(2, 2).expect("builder");
        builder.add_marker(Point::new(1, 0)).expect("marker");
        builder.add_arrow(Point::new(0, 1), Heading::North).expect("arrow");
        let pattern = builder.build();

        assert_eq!(pattern.cell_contents(), vec![vec![' ', 'A'], vec!['↑', ' ']]);
    }

    #[test]
    fn solution_sequence_projects_marker_sequence() {
        let mut builder = PatternBuilder::new(3, 1).expect("builder");
        for x in 0..3 {
            builder.add_marker(Point::new(x, 0)).expect("marker");
        }
        for index in [2, 0, 2] {
            builder.push_sequence(index).expect("sequence");
        }
        let pattern = builder.build();

        let solution = pattern.solution_sequence();
        assert_eq!(solution, vec!["C", "A", "C"]);
        assert_eq!(solution.len(), pattern.marker_sequence().len());
        for (letter, &index) in solution.iter().zip(pattern.marker_sequence()) {
            let expected = pattern.display_letter_for(index).expect("letter");
            assert_eq!(letter, &expected.to_string());
        }
    }

    #[test]
    fn mirror_mismatches_report_one_sided_edges() {
        let mut builder = PatternBuilder::new(2, 1).expect("builder");
        builder.set(0, 0, Direction::EAST | Direction::NORTH);
        let pattern = builder.build();

        assert_eq!(
            pattern.mirror_mismatches(),
            vec![
                MirrorMismatch { point: Point::new(0, 0), heading: Heading::North, neighbor: None },
                MirrorMismatch {
                    point: Point::new(0, 0),
                    heading: Heading::East,
                    neighbor: Some(Point::new(1, 0)),
                },
            ]
        );
    }

    #[test]
    fn connected_grid_has_no_mismatches() {
        let mut builder = PatternBuilder::new(2, 2).expect("builder");
        builder.connect(Point::new(0, 0), Heading::East);
        builder.connect(Point::new(1, 0), Heading::South);
        let pattern = builder.build();

        assert!(pattern.mirror_mismatches().is_empty());
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::direction::{Direction, Heading};
use super::grid::{ConnectionGrid, Point};
use super::pattern::{Arrow, InterferencePattern, PatternError, MAX_MARKERS};

/// Assembles an [`InterferencePattern`].
///
/// Every input is validated as it is added, so [`PatternBuilder::build`] cannot fail and the
/// resulting pattern never needs re-checking.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    grid: ConnectionGrid,
    markers: Vec<Point>,
    arrows: Vec<Arrow>,
    marker_sequence: Vec<usize>,
}

impl PatternBuilder {
    pub fn new(width: usize, height: usize) -> Result<Self, PatternError> {
        Ok(Self {
            grid: ConnectionGrid::new(width, height)?,
            markers: Vec::new(),
            arrows: Vec::new(),
            marker_sequence: Vec::new(),
        })
    }

    pub fn grid(&self) -> &ConnectionGrid {
        &self.grid
    }

    /// Replaces the flags of one cell. Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, flags: Direction) -> &mut Self {
        self.grid.set(x, y, flags);
        self
    }

    /// Like [`PatternBuilder::set`], but reports out-of-range cells as an error.
    pub fn try_set(&mut self, point: Point, flags: Direction) -> Result<&mut Self, PatternError> {
        self.check_bounds(point)?;
        self.grid.set(point.x, point.y, flags);
        Ok(self)
    }

    /// Opens the edge between `point` and its neighbour on both cells.
    pub fn connect(&mut self, point: Point, heading: Heading) -> Option<Point> {
        self.grid.connect(point, heading)
    }

    /// Appends a marker and returns its index (and thus its letter).
    pub fn add_marker(&mut self, point: Point) -> Result<usize, PatternError> {
        self.check_bounds(point)?;
        if let Some(existing) = self.markers.iter().position(|&marker| marker == point) {
            return Err(PatternError::DuplicateMarker { point, existing });
        }
        if self.markers.len() >= MAX_MARKERS {
            return Err(PatternError::MarkerLimit { max: MAX_MARKERS });
        }

        self.markers.push(point);
        Ok(self.markers.len() - 1)
    }

    pub fn add_arrow(&mut self, point: Point, heading: Heading) -> Result<(), PatternError> {
        self.check_bounds(point)?;
        self.arrows.push(Arrow { point, heading });
        Ok(())
    }

    /// Appends a marker index to the solving order. Repeats and omissions are allowed.
    pub fn push_sequence(&mut self, index: usize) -> Result<(), PatternError> {
        if index >= self.markers.len() {
            return Err(PatternError::UnknownMarker { index, count: self.markers.len() });
        }
        self.marker_sequence.push(index);
        Ok(())
    }

    pub fn build(self) -> InterferencePattern {
        InterferencePattern {
            grid: self.grid,
            markers: self.markers,
            arrows: self.arrows,
            marker_sequence: self.marker_sequence,
        }
    }

    fn check_bounds(&self, point: Point) -> Result<(), PatternError> {
        if self.grid.in_bounds(point) {
            return Ok(());
        }
        Err(PatternError::OutOfBounds {
            point,
            width: self.grid.width(),
            height: self.grid.height(),
        })
    }
}

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
use super::pattern::PatternError;

/// Zero-based cell coordinate. `x` grows eastwards, `y` grows southwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A fixed `width × height` table of per-cell connection flags.
///
/// Flags are stored independently per cell: opening the east edge of one cell says nothing about
/// the west edge of its neighbour unless the caller uses [`ConnectionGrid::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGrid {
    width: usize,
    height: usize,
    cells: Vec<Direction>,
}

impl ConnectionGrid {
    /// Creates a grid with every edge closed.
    pub fn new(width: usize, height: usize) -> Result<Self, PatternError> {
        if width == 0 || height == 0 {
            return Err(PatternError::InvalidDimensions { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(PatternError::InvalidDimensions { width, height })?;

        Ok(Self { width, height, cells: vec![Direction::NONE; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Returns the flags of the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Direction {
        self.cells[self.index_of(x, y)]
    }

    /// Replaces the flags of the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, flags: Direction) {
        let idx = self.index_of(x, y);
        self.cells[idx] = flags;
    }

    /// Adds `flags` to the cell at `(x, y)` without clearing what is already open.
    pub fn open(&mut self, x: usize, y: usize, flags: Direction) {
        let idx = self.index_of(x, y);
        self.cells[idx] |= flags;
    }

    /// Opens the edge between `point` and its neighbour towards `heading` on both cells.
    ///
    /// Returns the neighbour, or `None` (leaving the grid untouched) if it would fall off the grid.
    pub fn connect(&mut self, point: Point, heading: Heading) -> Option<Point> {
        let next = self.neighbor(point, heading)?;
        self.open(point.x, point.y, heading.flag());
        self.open(next.x, next.y, heading.opposite().flag());
        Some(next)
    }

    /// The in-bounds neighbour of `point` towards `heading`.
    pub fn neighbor(&self, point: Point, heading: Heading) -> Option<Point> {
        let (dx, dy) = heading.offset();
        let x = point.x.checked_add_signed(dx)?;
        let y = point.y.checked_add_signed(dy)?;
        let next = Point::new(x, y);
        self.in_bounds(next).then_some(next)
    }

    /// All cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        (y * self.width) + x
    }
}

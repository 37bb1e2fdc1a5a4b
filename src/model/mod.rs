// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Puzzle data model.
//!
//! A pattern is a connection grid plus lettered markers, arrows and the marker solving order.
//! Patterns are assembled with [`PatternBuilder`] and are read-only once built.

pub mod builder;
pub mod direction;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod pattern;

pub use builder::PatternBuilder;
pub use direction::{Direction, Heading, ParseHeadingError};
pub use grid::{ConnectionGrid, Point};
pub use pattern::{
    arrow_glyph, Arrow, InterferencePattern, MirrorMismatch, PatternError, MAX_MARKERS,
};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Random pattern generation.
//!
//! The maze is a spanning tree carved by randomized depth-first search, so every cell is reachable
//! from every other and all connections are mirrored. Output is deterministic for a given RNG
//! state.
//!
//! ```
//! use interference::generate::{generate, GenerateParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let pattern = generate(&mut rng, &GenerateParams::default()).expect("generate");
//! assert!(pattern.mirror_mismatches().is_empty());
//! ```

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::model::{
    Heading, InterferencePattern, PatternBuilder, PatternError, Point, MAX_MARKERS,
};

/// Knobs for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateParams {
    pub width: usize,
    pub height: usize,
    pub markers: usize,
    pub arrows: usize,
    /// Length of the solving order. `None` visits every marker exactly once in random order.
    pub sequence_len: Option<usize>,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self { width: 8, height: 6, markers: 4, arrows: 3, sequence_len: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Pattern(PatternError),
    NotEnoughCells { requested: usize, available: usize },
    SequenceWithoutMarkers { sequence_len: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "pattern error: {err}"),
            Self::NotEnoughCells { requested, available } => {
                write!(f, "cannot place {requested} markers and arrows on {available} cells")
            }
            Self::SequenceWithoutMarkers { sequence_len } => {
                write!(f, "cannot build a sequence of length {sequence_len} without markers")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::NotEnoughCells { .. } | Self::SequenceWithoutMarkers { .. } => None,
        }
    }
}

impl From<PatternError> for GenerateError {
    fn from(value: PatternError) -> Self {
        Self::Pattern(value)
    }
}

/// Generates a pattern with a fully connected maze, distinct marker and arrow cells, and a solving
/// order over the markers.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerateParams,
) -> Result<InterferencePattern, GenerateError> {
    let mut builder = PatternBuilder::new(params.width, params.height)?;

    if params.markers > MAX_MARKERS {
        return Err(PatternError::MarkerLimit { max: MAX_MARKERS }.into());
    }
    let available = builder.grid().width() * builder.grid().height();
    let requested = params.markers.saturating_add(params.arrows);
    if requested > available {
        return Err(GenerateError::NotEnoughCells { requested, available });
    }
    if params.markers == 0 {
        if let Some(sequence_len) = params.sequence_len.filter(|&len| len > 0) {
            return Err(GenerateError::SequenceWithoutMarkers { sequence_len });
        }
    }

    carve_maze(&mut builder, rng);

    let mut cells = builder.grid().points().collect::<Vec<_>>();
    cells.shuffle(rng);
    let (marker_cells, rest) = cells.split_at(params.markers);

    for &point in marker_cells {
        builder.add_marker(point)?;
    }

    for &point in &rest[..params.arrows] {
        let heading = pick_arrow_heading(&builder, point, rng);
        builder.add_arrow(point, heading)?;
    }

    match params.sequence_len {
        None => {
            let mut order = (0..params.markers).collect::<Vec<_>>();
            order.shuffle(rng);
            for index in order {
                builder.push_sequence(index)?;
            }
        }
        Some(len) => {
            for _ in 0..len {
                builder.push_sequence(rng.random_range(0..params.markers))?;
            }
        }
    }

    Ok(builder.build())
}

fn carve_maze<R: Rng + ?Sized>(builder: &mut PatternBuilder, rng: &mut R) {
    let width = builder.grid().width();
    let height = builder.grid().height();
    let mut visited = vec![false; width * height];

    let start = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    visited[(start.y * width) + start.x] = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let unvisited = Heading::ALL
            .into_iter()
            .filter(|&heading| {
                builder
                    .grid()
                    .neighbor(current, heading)
                    .is_some_and(|next| !visited[(next.y * width) + next.x])
            })
            .collect::<SmallVec<[Heading; 4]>>();

        if unvisited.is_empty() {
            stack.pop();
            continue;
        }

        let heading = unvisited[rng.random_range(0..unvisited.len())];
        if let Some(next) = builder.connect(current, heading) {
            visited[(next.y * width) + next.x] = true;
            stack.push(next);
        }
    }
}

/// Arrows point down an open corridor when the cell has one.
fn pick_arrow_heading<R: Rng + ?Sized>(
    builder: &PatternBuilder,
    point: Point,
    rng: &mut R,
) -> Heading {
    let open = builder.grid().get(point.x, point.y).iter().collect::<SmallVec<[Heading; 4]>>();
    if open.is_empty() {
        return Heading::ALL[rng.random_range(0..Heading::ALL.len())];
    }
    open[rng.random_range(0..open.len())]
}

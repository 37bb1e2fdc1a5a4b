// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    Arrow, Direction, Heading, InterferencePattern, PatternBuilder, PatternError, Point,
};
use crate::render::render_pattern_unicode;

/// Open sides of one cell, e.g. `["north", "east"]`.
pub type CellFlags = Vec<Heading>;

/// Pattern input as handed over by a generator or stored on disk.
///
/// `connections` is row-major: `connections[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternDocument {
    pub width: usize,
    pub height: usize,
    pub connections: Vec<Vec<CellFlags>>,
    #[serde(default)]
    pub markers: Vec<Point>,
    #[serde(default)]
    pub arrows: Vec<Arrow>,
    #[serde(default)]
    pub marker_sequence: Vec<usize>,
}

/// Everything the Suspect-facing client and the interview logic need from a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternView {
    pub width: usize,
    pub height: usize,
    pub connections: Vec<Vec<CellFlags>>,
    pub markers: Vec<Point>,
    pub arrows: Vec<Arrow>,
    pub marker_sequence: Vec<usize>,
    pub solution_sequence: Vec<String>,
    /// One string per row, one character per cell.
    pub cell_contents: Vec<String>,
    pub rendered: String,
}

#[derive(Debug)]
pub enum DocumentError {
    Io { path: PathBuf, source: io::Error },
    Json { source: serde_json::Error },
    RowCount { expected: usize, found: usize },
    RowWidth { row: usize, expected: usize, found: usize },
    Pattern(PatternError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Json { source } => write!(f, "invalid pattern json: {source}"),
            Self::RowCount { expected, found } => {
                write!(f, "connections has {found} rows, expected {expected}")
            }
            Self::RowWidth { row, expected, found } => {
                write!(f, "connections row {row} has {found} cells, expected {expected}")
            }
            Self::Pattern(err) => write!(f, "invalid pattern: {err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            Self::RowCount { .. } | Self::RowWidth { .. } => None,
            Self::Pattern(err) => Some(err),
        }
    }
}

impl From<PatternError> for DocumentError {
    fn from(value: PatternError) -> Self {
        Self::Pattern(value)
    }
}

impl PatternDocument {
    pub fn from_pattern(pattern: &InterferencePattern) -> Self {
        Self {
            width: pattern.width(),
            height: pattern.height(),
            connections: connection_rows(pattern),
            markers: pattern.markers().to_vec(),
            arrows: pattern.arrows().to_vec(),
            marker_sequence: pattern.marker_sequence().to_vec(),
        }
    }

    /// Validates the document and builds the pattern it describes.
    pub fn into_pattern(self) -> Result<InterferencePattern, DocumentError> {
        if self.width == 0 || self.height == 0 {
            return Err(PatternError::InvalidDimensions { width: self.width, height: self.height }
                .into());
        }

        // Shape is checked against the rows actually present before any grid is allocated.
        if self.connections.len() != self.height {
            return Err(DocumentError::RowCount {
                expected: self.height,
                found: self.connections.len(),
            });
        }

        for (y, row) in self.connections.iter().enumerate() {
            if row.len() != self.width {
                return Err(DocumentError::RowWidth {
                    row: y,
                    expected: self.width,
                    found: row.len(),
                });
            }
        }

        let mut builder = PatternBuilder::new(self.width, self.height)?;
        for (y, row) in self.connections.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let flags = cell.iter().fold(Direction::NONE, |acc, &heading| acc | heading.flag());
                builder.try_set(Point::new(x, y), flags)?;
            }
        }

        for point in self.markers {
            builder.add_marker(point)?;
        }
        for arrow in self.arrows {
            builder.add_arrow(arrow.point, arrow.heading)?;
        }
        for index in self.marker_sequence {
            builder.push_sequence(index)?;
        }

        Ok(builder.build())
    }
}

impl PatternView {
    pub fn from_pattern(pattern: &InterferencePattern) -> Self {
        Self {
            width: pattern.width(),
            height: pattern.height(),
            connections: connection_rows(pattern),
            markers: pattern.markers().to_vec(),
            arrows: pattern.arrows().to_vec(),
            marker_sequence: pattern.marker_sequence().to_vec(),
            solution_sequence: pattern.solution_sequence(),
            cell_contents: pattern
                .cell_contents()
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
            rendered: render_pattern_unicode(pattern),
        }
    }
}

pub fn parse_pattern_document(text: &str) -> Result<InterferencePattern, DocumentError> {
    let document: PatternDocument =
        serde_json::from_str(text).map_err(|source| DocumentError::Json { source })?;
    document.into_pattern()
}

pub fn load_pattern_document(path: &Path) -> Result<InterferencePattern, DocumentError> {
    let text = fs::read_to_string(path)
        .map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
    parse_pattern_document(&text)
}

pub fn export_pattern_document(pattern: &InterferencePattern) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PatternDocument::from_pattern(pattern))
}

pub fn export_pattern_view(pattern: &InterferencePattern) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PatternView::from_pattern(pattern))
}

fn connection_rows(pattern: &InterferencePattern) -> Vec<Vec<CellFlags>> {
    (0..pattern.height())
        .map(|y| (0..pattern.width()).map(|x| pattern.connections(x, y).iter().collect()).collect())
        .collect()
}

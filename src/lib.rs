// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interference Pattern puzzle model for the Suspect role.
//!
//! A pattern is a maze-like grid of cell connections annotated with lettered markers and arrows.
//! The crate derives the marker solving order as letters and renders the whole pattern as a
//! fixed-size box-drawing diagram.

pub mod format;
pub mod generate;
pub mod model;
pub mod render;

pub use model::{InterferencePattern, PatternBuilder, PatternError};
pub use render::render_pattern_unicode;

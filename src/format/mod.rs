// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Interference and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pattern interchange formats.
//!
//! JSON is the only format: a [`json::PatternDocument`] goes in, a [`json::PatternView`] comes out.

pub mod json;

pub use json::{
    export_pattern_document, export_pattern_view, load_pattern_document, parse_pattern_document,
    DocumentError, PatternDocument, PatternView,
};

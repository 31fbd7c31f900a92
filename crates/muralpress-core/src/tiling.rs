// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet-tiling arithmetic — how many A4 sheets cover the mural, and what
// the effective margins are. All operations here are total: malformed or
// degenerate input degrades to documented defaults, it never errors.

use crate::types::{MarginSpec, MuralSpec, SheetFormat, TilingResult};
use crate::units::to_centimeters;

/// Compute the sheet grid needed to cover the mural.
///
/// Width and height are normalized to centimetres, the sheet format is
/// selected by orientation, and each axis is covered by ceiling division.
/// Zero, negative, or non-finite dimensions still yield a 1x1 grid: the
/// system always reports at least one sheet rather than refusing to render
/// a preview.
pub fn compute_tiling(mural: &MuralSpec) -> TilingResult {
    let sheet = SheetFormat::for_orientation(mural.orientation);
    let (width_cm, height_cm) = mural.dimensions_cm();

    TilingResult {
        cols: sheets_for_span(width_cm, sheet.width_cm),
        rows: sheets_for_span(height_cm, sheet.height_cm),
    }
}

/// Resolve a margin spec to effective `(x_cm, y_cm)` values.
///
/// Disabled margins are a strict override: the stored lengths never leak
/// into downstream calculations, the result is exactly `(0.0, 0.0)`.
pub fn resolve_margins(spec: &MarginSpec) -> (f64, f64) {
    if !spec.enabled {
        return (0.0, 0.0);
    }
    (to_centimeters(&spec.x), to_centimeters(&spec.y))
}

/// Number of sheets covering one axis, floored at 1.
fn sheets_for_span(span_cm: f64, sheet_cm: f64) -> u32 {
    let span = if span_cm.is_finite() { span_cm } else { 0.0 };
    let count = (span / sheet_cm).ceil();
    if count >= 1.0 { count as u32 } else { 1 }
}

// -- Tests --------------------------------------------------------------------

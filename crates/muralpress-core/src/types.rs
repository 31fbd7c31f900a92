// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Muralpress stencil engine.

use serde::{Deserialize, Serialize};

/// A physical length entered by the user, tagged with its unit system.
///
/// Feet and inches are carried separately because that is how imperial
/// dimensions are entered (e.g. "3 ft 3 in"); conversion to centimetres
/// happens in one place (`units::to_centimeters`), never ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhysicalLength {
    /// Metric length in centimetres.
    Centimeters(f64),
    /// Imperial length as whole feet plus inches.
    FeetInches { feet: f64, inches: f64 },
}

impl PhysicalLength {
    /// Normalize to centimetres. See `units::to_centimeters`.
    pub fn to_centimeters(&self) -> f64 {
        crate::units::to_centimeters(self)
    }

    /// A zero-length value, the defensive default for absent input.
    pub const ZERO: PhysicalLength = PhysicalLength::Centimeters(0.0);
}

/// Sheet orientation for the tiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Wire keyword used in the document-generation service contract.
    pub fn wire_keyword(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Physical size of one printable sheet, in centimetres, already oriented.
///
/// The sheet is always A4; orientation only flips which axis is the long
/// one. This is a constant of the system, not a user setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetFormat {
    pub width_cm: f64,
    pub height_cm: f64,
}

impl SheetFormat {
    /// A4 in portrait orientation: 21.0 cm x 29.7 cm.
    pub const A4_PORTRAIT: SheetFormat = SheetFormat {
        width_cm: 21.0,
        height_cm: 29.7,
    };

    /// The A4 sheet oriented per the given orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::A4_PORTRAIT,
            Orientation::Landscape => SheetFormat {
                width_cm: Self::A4_PORTRAIT.height_cm,
                height_cm: Self::A4_PORTRAIT.width_cm,
            },
        }
    }
}

/// The full target artwork area at real-world physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuralSpec {
    pub width: PhysicalLength,
    pub height: PhysicalLength,
    pub orientation: Orientation,
}

impl MuralSpec {
    /// Normalized `(width_cm, height_cm)` of the mural.
    pub fn dimensions_cm(&self) -> (f64, f64) {
        (self.width.to_centimeters(), self.height.to_centimeters())
    }
}

/// Optional white margin inset around the artwork.
///
/// When `enabled` is false the stored lengths are ignored entirely: the
/// effective margins are exactly (0, 0). See `tiling::resolve_margins`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginSpec {
    pub enabled: bool,
    pub x: PhysicalLength,
    pub y: PhysicalLength,
}

impl MarginSpec {
    /// Margins switched off; the documented default.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            x: PhysicalLength::ZERO,
            y: PhysicalLength::ZERO,
        }
    }
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self::disabled()
    }
}

/// How many sheets the mural tiles onto, per axis.
///
/// Derived, read-only: recompute via `tiling::compute_tiling` whenever the
/// mural spec or orientation changes. Both counts are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilingResult {
    pub cols: u32,
    pub rows: u32,
}

impl TilingResult {
    /// Total number of sheets in the grid.
    ///
    /// Saturates: absurd spans clamp per axis, and the product clamps too,
    /// so even a degenerate mural reports a count instead of overflowing.
    pub fn sheet_count(&self) -> u32 {
        self.cols.saturating_mul(self.rows)
    }
}

/// Preview filter applied to the source raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Identity transform: the preview is the source image.
    #[serde(rename = "color")]
    Color,
    /// Hard binary threshold on the channel average.
    #[serde(rename = "bw")]
    BlackWhite,
    /// Sobel edge extraction: black lines on a white field.
    #[serde(rename = "outline")]
    Outline,
}

impl FilterKind {
    /// Wire keyword used in the document-generation service contract.
    pub fn wire_keyword(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BlackWhite => "bw",
            Self::Outline => "outline",
        }
    }
}

// -- Tests --------------------------------------------------------------------

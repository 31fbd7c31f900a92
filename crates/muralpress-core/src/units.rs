// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unit normalization — every physical dimension in the system is converted
// to centimetres exactly once, here.

use crate::types::PhysicalLength;

/// Centimetres per foot.
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Normalize a `PhysicalLength` to centimetres.
///
/// `Centimeters` values pass through unchanged; `FeetInches` converts as
/// `feet * 30.48 + inches * 2.54`. Non-finite components (NaN, infinities
/// from malformed numeric entry) contribute zero length rather than
/// poisoning the result — partial input degrades, it never aborts the
/// computation.
pub fn to_centimeters(length: &PhysicalLength) -> f64 {
    match *length {
        PhysicalLength::Centimeters(cm) => finite_or_zero(cm),
        PhysicalLength::FeetInches { feet, inches } => {
            finite_or_zero(feet) * CM_PER_FOOT + finite_or_zero(inches) * CM_PER_INCH
        }
    }
}

/// Parse a form-style numeric field into a non-negative length component.
///
/// Blank, unparsable, negative, and non-finite input all resolve to `0.0`:
/// a missing sub-field contributes zero length. This is the single boundary
/// where text becomes numbers; downstream arithmetic never re-validates.
pub fn parse_length_field(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

// -- Tests --------------------------------------------------------------------

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parameter contract for the external document-generation service.
//
// The service receives the original (unfiltered) image bytes alongside the
// text fields below and renders the tiled stencil PDF. The preview and the
// generated document must be computed from the same normalized numbers, so
// every value here is derived through `units`/`tiling` — never recomputed
// by a caller.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::tiling::resolve_margins;
use crate::types::{FilterKind, MarginSpec, MuralSpec, Orientation};

/// Text fields of the stencil-generation request, using the service's wire
/// names. Transport (multipart upload, download handling) is the host's
/// concern; this type only pins down the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StencilRequest {
    pub target_width_cm: f64,
    pub target_height_cm: f64,
    pub filter_type: FilterKind,
    pub orientation: Orientation,
    pub add_margins: bool,
    pub margin_x_cm: f64,
    pub margin_y_cm: f64,
}

impl StencilRequest {
    /// Build the request from the user-facing specs.
    ///
    /// Dimensions and margins go through the same normalization as the
    /// preview calculations, value-for-value.
    pub fn new(mural: &MuralSpec, filter: FilterKind, margins: &MarginSpec) -> Self {
        let (target_width_cm, target_height_cm) = mural.dimensions_cm();
        let (margin_x_cm, margin_y_cm) = resolve_margins(margins);

        Self {
            target_width_cm,
            target_height_cm,
            filter_type: filter,
            orientation: mural.orientation,
            add_margins: margins.enabled,
            margin_x_cm,
            margin_y_cm,
        }
    }

    /// Render the request as `(field name, value)` pairs ready for a
    /// multipart form, in the order the service documents them.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("target_width_cm", self.target_width_cm.to_string()),
            ("target_height_cm", self.target_height_cm.to_string()),
            ("filter_type", self.filter_type.wire_keyword().to_string()),
            ("orientation", self.orientation.wire_keyword().to_string()),
            ("add_margins", self.add_margins.to_string()),
            ("margin_x_cm", self.margin_x_cm.to_string()),
            ("margin_y_cm", self.margin_y_cm.to_string()),
        ]
    }

    /// Suggested download name for the returned document, timestamped the
    /// way the service names its output: `stencil_YYYYMMDD_HHMMSS.pdf`.
    /// Derived from the clock only, so it is an associated function.
    pub fn suggested_filename() -> String {
        format!("stencil_{}.pdf", Local::now().format("%Y%m%d_%H%M%S"))
    }
}

// -- Tests --------------------------------------------------------------------

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::{FilterKind, MarginSpec, Orientation};

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Endpoint of the external document-generation service.
    pub service_url: String,
    /// Orientation preselected for new murals.
    pub default_orientation: Orientation,
    /// Filter preselected for new murals.
    pub default_filter: FilterKind,
    /// Margin settings preselected for new murals.
    pub default_margins: MarginSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000/generate-stencil/".to_string(),
            default_orientation: Orientation::Portrait,
            default_filter: FilterKind::Color,
            default_margins: MarginSpec::disabled(),
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write settings to a JSON file (pretty-printed, for hand editing).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), raw)?;
        Ok(())
    }
}

// -- Tests --------------------------------------------------------------------

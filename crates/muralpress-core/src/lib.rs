// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Muralpress — core types, unit conversion, and sheet-tiling arithmetic
// shared across all crates.

pub mod config;
pub mod error;
pub mod request;
pub mod tiling;
pub mod types;
pub mod units;

pub use config::AppConfig;
pub use error::MuralpressError;
pub use request::StencilRequest;
pub use tiling::{compute_tiling, resolve_margins};
pub use types::*;
pub use units::{parse_length_field, to_centimeters};

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Muralpress.

use thiserror::Error;

/// Top-level error type for all Muralpress operations.
///
/// The tiling and filter calculations themselves are total — malformed
/// numeric input degrades to documented defaults instead of failing — so
/// errors only arise at the ambient boundaries (configuration IO,
/// serialization).
#[derive(Debug, Error)]
pub enum MuralpressError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MuralpressError>;

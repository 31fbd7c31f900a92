// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Muralpress — raster filter pipeline, sheet pixel layout, and preview
// supersession tracking. Operates on in-memory RGBA images using the
// `image` crate; decoding file bytes is the host's concern.

pub mod filter;
pub mod layout;
pub mod preview;

pub use filter::apply_filter;
pub use layout::{SheetLayout, TileRect, compose, crop_tile, sheet_pixels};
pub use preview::{PreviewTicket, PreviewTracker};

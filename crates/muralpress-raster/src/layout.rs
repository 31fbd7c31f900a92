// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet pixel layout — the 300 DPI geometry the document-generation
// service uses to assemble the tiled stencil, reproduced as pure
// arithmetic so the preview and the generated document agree on scaling,
// centring, and per-sheet crops.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use muralpress_core::{SheetFormat, TilingResult};
use tracing::{debug, instrument};

/// Render resolution of the assembled stencil, dots per inch.
const RENDER_DPI: f64 = 300.0;

const CM_PER_INCH: f64 = 2.54;

/// Pixel size of one sheet at the render resolution (truncating, matching
/// the service's integer conversion). A4 portrait comes out at 2480 x 3507.
pub fn sheet_pixels(sheet: SheetFormat) -> (u32, u32) {
    (cm_to_px(sheet.width_cm), cm_to_px(sheet.height_cm))
}

fn cm_to_px(cm: f64) -> u32 {
    (cm / CM_PER_INCH * RENDER_DPI) as u32
}

/// Crop rectangle of one sheet within the assembled canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pixel geometry of the assembled stencil: total canvas size, the
/// aspect-preserving scale of the source image, and its centred offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_width_px: u32,
    pub sheet_height_px: u32,
    pub total_width_px: u32,
    pub total_height_px: u32,
    pub scaled_width_px: u32,
    pub scaled_height_px: u32,
    pub offset_x_px: u32,
    pub offset_y_px: u32,
    tiling: TilingResult,
}

impl SheetLayout {
    /// Plan the canvas for a source image of `image_width` x `image_height`
    /// pixels tiled across the given grid.
    ///
    /// The source is scaled to fit inside the canvas preserving aspect
    /// ratio — fitted to the canvas width when it is proportionally wider
    /// than the canvas, to the height otherwise — and centred. Upscaling is
    /// allowed. A degenerate (zero-pixel) source fills the whole canvas.
    #[instrument]
    pub fn plan(
        image_width: u32,
        image_height: u32,
        tiling: &TilingResult,
        sheet: SheetFormat,
    ) -> Self {
        let (sheet_width_px, sheet_height_px) = sheet_pixels(sheet);
        // Tiling counts saturate on degenerate murals; the canvas size must
        // clamp too instead of overflowing.
        let total_width_px = tiling.cols.saturating_mul(sheet_width_px);
        let total_height_px = tiling.rows.saturating_mul(sheet_height_px);

        let (scaled_width_px, scaled_height_px) = if image_width == 0 || image_height == 0 {
            (total_width_px, total_height_px)
        } else {
            let image_ratio = f64::from(image_width) / f64::from(image_height);
            let target_ratio = f64::from(total_width_px) / f64::from(total_height_px);
            if image_ratio > target_ratio {
                let scaled_w = total_width_px;
                (scaled_w, (f64::from(scaled_w) / image_ratio) as u32)
            } else {
                let scaled_h = total_height_px;
                ((f64::from(scaled_h) * image_ratio) as u32, scaled_h)
            }
        };

        let layout = Self {
            sheet_width_px,
            sheet_height_px,
            total_width_px,
            total_height_px,
            scaled_width_px,
            scaled_height_px,
            offset_x_px: (total_width_px - scaled_width_px) / 2,
            offset_y_px: (total_height_px - scaled_height_px) / 2,
            tiling: *tiling,
        };
        debug!(?layout, "Sheet layout planned");
        layout
    }

    /// The sheet grid this layout was planned for.
    pub fn tiling(&self) -> TilingResult {
        self.tiling
    }

    /// Crop rectangles for every sheet, row-major (the order sheets are
    /// numbered in the preview and emitted in the generated document).
    pub fn tiles(&self) -> Vec<TileRect> {
        let mut tiles = Vec::with_capacity(self.tiling.sheet_count() as usize);
        for row in 0..self.tiling.rows {
            for col in 0..self.tiling.cols {
                tiles.push(TileRect {
                    x: col.saturating_mul(self.sheet_width_px),
                    y: row.saturating_mul(self.sheet_height_px),
                    width: self.sheet_width_px,
                    height: self.sheet_height_px,
                });
            }
        }
        tiles
    }
}

/// Assemble the full stencil canvas: white background, source scaled with
/// Lanczos3 and pasted centred per the layout.
#[instrument(skip(source, layout), fields(width = source.width(), height = source.height()))]
pub fn compose(source: &RgbaImage, layout: &SheetLayout) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        layout.total_width_px,
        layout.total_height_px,
        Rgba([255, 255, 255, 255]),
    );

    let scaled = imageops::resize(
        source,
        layout.scaled_width_px.max(1),
        layout.scaled_height_px.max(1),
        FilterType::Lanczos3,
    );
    imageops::overlay(
        &mut canvas,
        &scaled,
        i64::from(layout.offset_x_px),
        i64::from(layout.offset_y_px),
    );
    canvas
}

/// Cut one sheet out of the assembled canvas.
pub fn crop_tile(composed: &RgbaImage, tile: &TileRect) -> RgbaImage {
    imageops::crop_imm(composed, tile.x, tile.y, tile.width, tile.height).to_image()
}

// -- Tests --------------------------------------------------------------------

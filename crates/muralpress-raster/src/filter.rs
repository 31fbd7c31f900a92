// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview filter pipeline — identity, hard black/white threshold, and
// Sobel edge outline. Every filter is a pure, deterministic function from
// an RGBA buffer to a new RGBA buffer of identical dimensions; the source
// is never mutated in place.

use image::{Rgba, RgbaImage};
use muralpress_core::FilterKind;
use tracing::{debug, instrument};

/// Channel-average value above which a pixel counts as white.
const BW_THRESHOLD: u8 = 128;

/// Sobel gradient magnitude above which a pixel counts as an edge.
const EDGE_THRESHOLD: f64 = 50.0;

/// Apply a preview filter to an image.
///
/// Grayscale reduction uses the truncating integer average `(r+g+b)/3`
/// throughout; both binary filters force alpha to 255 on the pixels they
/// write.
///
/// - `Color`: pixel-identical copy of the source, alpha included.
/// - `BlackWhite`: hard threshold on the channel average — `avg > 128`
///   becomes white, everything else black. No dithering, no gamma.
/// - `Outline`: Sobel edge extraction; detected edges render as black
///   lines on a white field. The output buffer starts as a copy of the
///   source and only interior pixels are overwritten, so the outermost
///   pixel ring keeps the original values (alpha included). That ring is
///   an inherited quirk of the reference pipeline, reproduced here
///   bit-exactly rather than filled with white.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn apply_filter(image: &RgbaImage, kind: FilterKind) -> RgbaImage {
    match kind {
        FilterKind::Color => image.clone(),
        FilterKind::BlackWhite => threshold_black_white(image),
        FilterKind::Outline => sobel_outline(image),
    }
}

/// Truncating integer channel average, alpha ignored.
fn luma(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

fn threshold_black_white(image: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let value = if luma(image.get_pixel(x, y)) > BW_THRESHOLD {
            255
        } else {
            0
        };
        Rgba([value, value, value, 255])
    })
}

fn sobel_outline(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut output = image.clone();

    // With no interior the 3x3 neighbourhood is undefined everywhere and
    // the output is simply a copy of the input.
    if width < 3 || height < 3 {
        debug!("Image smaller than 3x3, outline is a plain copy");
        return output;
    }

    // Flat grayscale scratch plane, indexed y*width+x.
    let gray: Vec<u8> = image.pixels().map(luma).collect();
    let w = width as usize;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y as usize * w + x as usize;
            let g = |i: usize| i32::from(gray[i]);

            let gx = -g(idx - w - 1) + g(idx - w + 1) - 2 * g(idx - 1) + 2 * g(idx + 1)
                - g(idx + w - 1)
                + g(idx + w + 1);
            let gy = -g(idx - w - 1) - 2 * g(idx - w) - g(idx - w + 1)
                + g(idx + w - 1)
                + 2 * g(idx + w)
                + g(idx + w + 1);

            let edge = f64::from(gx * gx + gy * gy).sqrt();
            let value = if edge > EDGE_THRESHOLD { 0 } else { 255 };
            output.put_pixel(x, y, Rgba([value, value, value, 255]));
        }
    }

    output
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    /// Left half dark, right half bright: one sharp vertical boundary.
    fn split_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn color_is_pixel_identical() {
        let mut img = uniform(4, 3, [10, 20, 30, 200]);
        img.put_pixel(2, 1, Rgba([99, 98, 97, 96]));

        let out = apply_filter(&img, FilterKind::Color);
        assert_eq!(out, img);
    }

    #[test]
    fn filters_never_change_dimensions() {
        let img = uniform(7, 5, [120, 130, 140, 255]);
        for kind in [FilterKind::Color, FilterKind::BlackWhite, FilterKind::Outline] {
            let out = apply_filter(&img, kind);
            assert_eq!(out.dimensions(), (7, 5), "{kind:?}");
        }
    }

    /// avg > 128 is a strict comparison: an average of exactly 128 is black.
    #[test]
    fn black_white_threshold_boundary() {
        let mut img = uniform(3, 1, [0, 0, 0, 255]);
        img.put_pixel(0, 0, Rgba([128, 128, 128, 10]));
        img.put_pixel(1, 0, Rgba([129, 129, 129, 10]));
        img.put_pixel(2, 0, Rgba([255, 130, 0, 10])); // avg = 128 (truncated)

        let out = apply_filter(&img, FilterKind::BlackWhite);
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(2, 0), &Rgba([0, 0, 0, 255]));
    }

    /// Re-thresholding an already binary image changes nothing.
    #[test]
    fn black_white_is_idempotent() {
        let img = split_image(8, 8);
        let once = apply_filter(&img, FilterKind::BlackWhite);
        let twice = apply_filter(&once, FilterKind::BlackWhite);
        assert_eq!(once, twice);
    }

    #[test]
    fn black_white_forces_opaque_alpha() {
        let img = uniform(4, 4, [200, 200, 200, 0]);
        let out = apply_filter(&img, FilterKind::BlackWhite);
        for pixel in out.pixels() {
            assert_eq!(pixel.0[3], 255);
        }
    }

    /// A uniform image has zero gradient everywhere: the whole interior is
    /// white regardless of the uniform colour's value.
    #[test]
    fn outline_uniform_interior_is_white() {
        let img = uniform(6, 5, [37, 141, 208, 255]);
        let out = apply_filter(&img, FilterKind::Outline);

        for y in 1..4 {
            for x in 1..5 {
                assert_eq!(
                    out.get_pixel(x, y),
                    &Rgba([255, 255, 255, 255]),
                    "interior ({x}, {y})"
                );
            }
        }
    }

    /// The outermost ring is never overwritten: it keeps the original
    /// pixels, original alpha included.
    #[test]
    fn outline_border_ring_keeps_source_pixels() {
        let img = uniform(5, 5, [10, 20, 30, 77]);
        let out = apply_filter(&img, FilterKind::Outline);

        for x in 0..5 {
            assert_eq!(out.get_pixel(x, 0), &Rgba([10, 20, 30, 77]));
            assert_eq!(out.get_pixel(x, 4), &Rgba([10, 20, 30, 77]));
        }
        for y in 0..5 {
            assert_eq!(out.get_pixel(0, y), &Rgba([10, 20, 30, 77]));
            assert_eq!(out.get_pixel(4, y), &Rgba([10, 20, 30, 77]));
        }
    }

    /// Checkerboard with 4px blocks: block interiors are flat (white),
    /// block boundaries carry a sharp gradient (black).
    #[test]
    fn outline_checkerboard_marks_block_boundaries() {
        let img = RgbaImage::from_fn(8, 8, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let out = apply_filter(&img, FilterKind::Outline);

        // (1,1) sits inside a flat block: every neighbour is identical.
        assert_eq!(out.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
        // (3,3) touches the boundary between blocks.
        assert_eq!(out.get_pixel(3, 3), &Rgba([0, 0, 0, 255]));
    }

    /// A sharp vertical boundary produces black pixels along it and white
    /// in the flat regions either side.
    #[test]
    fn outline_vertical_edge() {
        let out = apply_filter(&split_image(8, 8), FilterKind::Outline);

        // Columns 3 and 4 straddle the boundary.
        assert_eq!(out.get_pixel(3, 4), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(4, 4), &Rgba([0, 0, 0, 255]));
        // Deep in the flat halves.
        assert_eq!(out.get_pixel(1, 4), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(6, 4), &Rgba([255, 255, 255, 255]));
    }

    /// Below 3x3 there are no interior pixels: the outline is a copy.
    #[test]
    fn outline_tiny_image_is_a_copy() {
        let img = uniform(2, 2, [50, 60, 70, 128]);
        let out = apply_filter(&img, FilterKind::Outline);
        assert_eq!(out, img);

        let one = uniform(1, 1, [0, 0, 0, 0]);
        assert_eq!(apply_filter(&one, FilterKind::Outline), one);
    }

    /// Identical input and kind always produce byte-identical output.
    #[test]
    fn filters_are_deterministic() {
        let img = split_image(16, 16);
        for kind in [FilterKind::BlackWhite, FilterKind::Outline] {
            let a = apply_filter(&img, kind);
            let b = apply_filter(&img, kind);
            assert_eq!(a.as_raw(), b.as_raw(), "{kind:?}");
        }
    }
}

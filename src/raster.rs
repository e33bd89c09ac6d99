//! Construction and validation of raster buffers at the decoder boundary.
//!
//! Decoding image files is outside the scope of this crate; decoders hand
//! over a width, a height and a flat row-major sample buffer, and
//! [`from_raw`] turns that into a validated [`GrayImage`]. Color sources are
//! reduced to a single luminance channel by [`luma_from_rgb`] before any
//! filter sees them.

use image::{GrayImage, Luma, Pixel, Rgb};

use crate::definitions::{Clamp, Image};
use crate::error::{FilterError, Result};
use crate::map::map_colors;

/// Builds a grayscale raster from a flat row-major sample buffer.
///
/// Returns [`FilterError::MalformedRaster`] if either dimension is zero or
/// the buffer length does not equal `width * height`. This is the only
/// place a malformed raster can enter the crate; every buffer downstream
/// satisfies the length invariant by construction.
pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<GrayImage> {
    let actual = pixels.len();
    if width == 0 || height == 0 {
        return Err(FilterError::MalformedRaster {
            width,
            height,
            actual,
        });
    }
    GrayImage::from_raw(width, height, pixels).ok_or(FilterError::MalformedRaster {
        width,
        height,
        actual,
    })
}

/// Converts an RGB image to grayscale using the fixed luminance weights
/// `0.299 R + 0.587 G + 0.114 B`, rounded to the nearest integer.
pub fn luma_from_rgb(image: &Image<Rgb<u8>>) -> GrayImage {
    map_colors(image, |p| {
        let Rgb([r, g, b]) = p;
        let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        Luma([<u8 as Clamp<f32>>::clamp(y)])
    })
}

/// Rejects rasters with a zero dimension at the entry of an operation.
pub(crate) fn ensure_nonempty<P: Pixel>(image: &Image<P>) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::MalformedRaster {
            width,
            height,
            actual: image.len(),
        });
    }
    Ok(())
}

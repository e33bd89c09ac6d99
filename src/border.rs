//! Boundary-mode aware pixel access.
//!
//! Correlation reads pixels at coordinates that may lie outside the raster.
//! [`read`] resolves such reads according to a [`BoundaryMode`], so every
//! mode is a total function over all integer coordinates.

use std::str::FromStr;

use image::{Luma, Primitive};
use num::Zero;

use crate::definitions::Image;
use crate::error::FilterError;

/// Policy for resolving out-of-range pixel reads during correlation.
///
/// Selection by string only happens at an external boundary (e.g. a CLI
/// flag) via [`FromStr`]; everywhere else the closed enum makes an
/// unrecognized mode unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Out-of-range reads yield zero.
    Zero,
    /// Coordinates wrap around the raster, i.e. are reduced modulo the
    /// raster dimensions with a non-negative result.
    Wrap,
    /// Coordinates are clamped to the nearest edge pixel.
    Extend,
}

impl FromStr for BoundaryMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(BoundaryMode::Zero),
            "wrap" => Ok(BoundaryMode::Wrap),
            "extend" => Ok(BoundaryMode::Extend),
            _ => Err(FilterError::InvalidBoundaryMode(s.to_string())),
        }
    }
}

/// Reads the sample at (`row`, `col`), resolving out-of-range coordinates
/// according to `mode`. `row` indexes the vertical axis and `col` the
/// horizontal axis.
///
/// # Panics
///
/// Panics if the raster has a zero dimension, as no mode can resolve a
/// read against it.
pub fn read<T>(image: &Image<Luma<T>>, row: i64, col: i64, mode: BoundaryMode) -> T
where
    T: Primitive + Zero,
{
    let (width, height) = image.dimensions();
    let (width, height) = (width as i64, height as i64);

    let (row, col) = match mode {
        BoundaryMode::Zero => {
            if row < 0 || col < 0 || row >= height || col >= width {
                return T::zero();
            }
            (row, col)
        }
        BoundaryMode::Wrap => (row.rem_euclid(height), col.rem_euclid(width)),
        BoundaryMode::Extend => (row.clamp(0, height - 1), col.clamp(0, width - 1)),
    };

    image.get_pixel(col as u32, row as u32)[0]
}

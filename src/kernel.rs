//! Square correlation kernels and the builders for each filter.

use itertools::Itertools;
use num::Num;

use crate::error::{FilterError, Result};

/// An owned square 2D kernel with an odd side length, used to filter
/// images via correlation.
///
/// Weights are stored in row-major form; kernel rows correspond to vertical
/// offsets and kernel columns to horizontal offsets. The odd side length
/// guarantees a unique midpoint at `(size / 2, size / 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<K> {
    data: Vec<K>,
    size: u32,
}

impl<K: Num + Copy> Kernel<K> {
    /// Constructs a kernel from a row-major slice of weights and its side
    /// length.
    ///
    /// Returns [`FilterError::InvalidKernelSize`] for an even or zero side
    /// length and [`FilterError::MalformedRaster`] when the weight buffer
    /// length is not `size * size`.
    pub fn new(data: Vec<K>, size: u32) -> Result<Kernel<K>> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize { size });
        }
        if data.len() != (size * size) as usize {
            return Err(FilterError::MalformedRaster {
                width: size,
                height: size,
                actual: data.len(),
            });
        }
        Ok(Kernel { data, size })
    }

    /// The side length of the kernel.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The distance from the midpoint to an edge, i.e. `size / 2`.
    pub fn radius(&self) -> u32 {
        self.size / 2
    }

    /// The weight at vertical offset `dy` and horizontal offset `dx` from
    /// the midpoint, each in `[-radius, radius]`.
    #[inline]
    pub fn weight(&self, dy: i64, dx: i64) -> K {
        let m = self.radius() as i64;
        self.data[((dy + m) * self.size as i64 + (dx + m)) as usize]
    }

    /// Enumerates all weights together with their (row, column) positions,
    /// in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((u32, u32), K)> + '_ {
        (0..self.size)
            .cartesian_product(0..self.size)
            .zip(self.data.iter().copied())
    }
}

impl Kernel<f32> {
    /// Builds the `size x size` box blur kernel: every weight is
    /// `1 / size^2`, so correlation takes the unweighted mean of the window.
    ///
    /// `size` must be a positive odd integer; size 1 yields the identity.
    pub fn box_blur(size: u32) -> Result<Kernel<f32>> {
        let weight = 1.0 / (size * size) as f32;
        Kernel::new(vec![weight; (size * size) as usize], size)
    }

    /// Builds the `size x size` unsharp mask kernel, realizing
    /// `2 * Identity - BoxBlur`: every weight is `-1 / size^2` except the
    /// midpoint, which carries an extra `+2`.
    pub fn unsharp_mask(size: u32) -> Result<Kernel<f32>> {
        let weight = -1.0 / (size * size) as f32;
        let midpoint = (size / 2) * size + size / 2;
        let data = (0..size * size)
            .map(|i| if i == midpoint { weight + 2.0 } else { weight })
            .collect();
        Kernel::new(data, size)
    }

    /// The fixed 3x3 Sobel kernel for detecting vertical gradients.
    #[rustfmt::skip]
    pub fn sobel_vertical() -> Kernel<f32> {
        Kernel {
            data: vec![
                -1.0, -2.0, -1.0,
                 0.0,  0.0,  0.0,
                 1.0,  2.0,  1.0,
            ],
            size: 3,
        }
    }

    /// The fixed 3x3 Sobel kernel for detecting horizontal gradients.
    #[rustfmt::skip]
    pub fn sobel_horizontal() -> Kernel<f32> {
        Kernel {
            data: vec![
                -1.0, 0.0, 1.0,
                -2.0, 0.0, 2.0,
                -1.0, 0.0, 1.0,
            ],
            size: 3,
        }
    }
}

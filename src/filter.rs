//! The correlation engine and the filters assembled from it.

use image::{GrayImage, ImageBuffer, Luma, Primitive};
use num::Zero;

use crate::border::{self, BoundaryMode};
use crate::definitions::{Clamp, Image};
use crate::error::Result;
use crate::kernel::Kernel;
use crate::map::{map_colors2, map_subpixels};
use crate::raster::ensure_nonempty;
use crate::utils::cast_f32;

/// Returns the 2d correlation of an image with a kernel, resolving
/// out-of-range reads with the given boundary mode.
///
/// All intermediate calculations are performed at `f32` and returned
/// unclamped; callers map the result back into `[0, 255]` with
/// [`normalize`]. The kernel is not flipped: kernel rows correspond to
/// vertical offsets and kernel columns to horizontal offsets, which is the
/// orientation the Sobel and unsharp mask kernels assume.
///
/// The output is a fresh allocation with the input's dimensions. Returns
/// [`FilterError::MalformedRaster`](crate::error::FilterError::MalformedRaster)
/// for an input with a zero dimension.
pub fn correlate<T>(
    image: &Image<Luma<T>>,
    kernel: &Kernel<f32>,
    mode: BoundaryMode,
) -> Result<Image<Luma<f32>>>
where
    T: Primitive + Zero,
{
    ensure_nonempty(image)?;

    let (width, height) = image.dimensions();
    let mut out: Image<Luma<f32>> = ImageBuffer::new(width, height);
    let m = kernel.radius() as i64;

    for (x, y, out_pixel) in out.enumerate_pixels_mut() {
        let mut acc = 0f32;
        for ((ky, kx), weight) in kernel.enumerate() {
            let row = y as i64 + (ky as i64 - m);
            let col = x as i64 + (kx as i64 - m);
            acc += cast_f32(border::read(image, row, col, mode)) * weight;
        }
        *out_pixel = Luma([acc]);
    }

    Ok(out)
}

/// Rounds each sample to the nearest integer (halves away from zero) and
/// clamps it into `[0, 255]`.
///
/// Normalizing an already normalized image is a no-op.
pub fn normalize<T>(image: &Image<Luma<T>>) -> GrayImage
where
    T: Primitive,
    u8: Clamp<T>,
{
    map_subpixels(image, <u8 as Clamp<T>>::clamp)
}

/// Inverts each sample: `v -> 255 - v`.
///
/// The output is always in range by construction, so no clamping step is
/// required. Applying `invert` twice reproduces the input.
pub fn invert(image: &GrayImage) -> GrayImage {
    map_subpixels(image, |v| 255 - v)
}

/// Blurs an image by correlating it with the uniform `size x size` box
/// kernel, extending edge pixels past the boundary.
///
/// `size` must be a positive odd integer; size 1 is the identity blur.
pub fn box_blur(image: &GrayImage, size: u32) -> Result<GrayImage> {
    let kernel = Kernel::box_blur(size)?;
    let blurred = correlate(image, &kernel, BoundaryMode::Extend)?;
    Ok(normalize(&blurred))
}

/// Sharpens an image with a `size x size` unsharp mask, computed as
/// `2 * original - box_blur(original)` in a single correlation pass.
///
/// `size` must be a positive odd integer.
pub fn sharpen(image: &GrayImage, size: u32) -> Result<GrayImage> {
    let kernel = Kernel::unsharp_mask(size)?;
    let sharpened = correlate(image, &kernel, BoundaryMode::Extend)?;
    Ok(normalize(&sharpened))
}

/// Computes the Sobel gradient magnitude of an image.
///
/// Both Sobel kernels are correlated against the original input with the
/// Extend boundary mode and combined pointwise as `sqrt(gx^2 + gy^2)`
/// before normalization, so strong edges saturate at 255.
pub fn sobel_edges(image: &GrayImage) -> Result<GrayImage> {
    let gy = correlate(image, &Kernel::sobel_vertical(), BoundaryMode::Extend)?;
    let gx = correlate(image, &Kernel::sobel_horizontal(), BoundaryMode::Extend)?;
    let magnitude = map_colors2(&gx, &gy, |h, v| Luma([h[0].hypot(v[0])]));
    Ok(normalize(&magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::property_testing::GrayTestImage;
    use quickcheck::quickcheck;

    fn identity_kernel() -> Kernel<f32> {
        #[rustfmt::skip]
        let data = vec![
            0.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 0.0,
        ];
        Kernel::new(data, 3).unwrap()
    }

    /// An 11x11 black raster with a single bright pixel at (5, 5).
    fn single_bright_pixel() -> GrayImage {
        let mut image = GrayImage::new(11, 11);
        image.put_pixel(5, 5, Luma([255]));
        image
    }

    #[test]
    fn test_correlate_identity_kernel_under_every_mode() {
        let image = gray_image!(
            1,  2,  3;
            4,  5,  6;
            7,  8, 99);

        for mode in [BoundaryMode::Zero, BoundaryMode::Wrap, BoundaryMode::Extend] {
            let out = correlate(&image, &identity_kernel(), mode).unwrap();
            let expected = map_subpixels(&image, |v| v as f32);
            assert_pixels_eq!(out, expected);
        }
    }

    #[test]
    fn test_correlate_orientation_horizontal_sobel() {
        // True correlation, not convolution: the horizontal Sobel kernel
        // must produce a negative gradient for intensities decreasing
        // left to right.
        let image = gray_image!(
            3, 2, 1;
            6, 5, 4;
            9, 8, 7);

        let out = correlate(&image, &Kernel::sobel_horizontal(), BoundaryMode::Extend).unwrap();

        let expected = gray_image!(type: f32,
            -4.0, -8.0, -4.0;
            -4.0, -8.0, -4.0;
            -4.0, -8.0, -4.0);

        assert_pixels_eq!(out, expected);
    }

    #[test]
    fn test_correlate_orientation_vertical_sobel() {
        let image = gray_image!(
            3, 2, 1;
            6, 5, 4;
            9, 8, 7);

        let out = correlate(&image, &Kernel::sobel_vertical(), BoundaryMode::Extend).unwrap();

        let expected = gray_image!(type: f32,
            12.0, 12.0, 12.0;
            24.0, 24.0, 24.0;
            12.0, 12.0, 12.0);

        assert_pixels_eq!(out, expected);
    }

    #[test]
    fn test_correlate_boundary_modes_on_single_pixel_image() {
        let image = gray_image!(10);
        let kernel = Kernel::box_blur(3).unwrap();

        // Zero: only the centre tap reads the pixel.
        let zero = correlate(&image, &kernel, BoundaryMode::Zero).unwrap();
        assert!((zero.get_pixel(0, 0)[0] - 10.0 / 9.0).abs() < 1e-4);

        // Wrap and extend both see the single pixel at every tap.
        for mode in [BoundaryMode::Wrap, BoundaryMode::Extend] {
            let out = correlate(&image, &kernel, mode).unwrap();
            assert!((out.get_pixel(0, 0)[0] - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_correlate_rejects_empty_raster() {
        let image = GrayImage::new(0, 0);
        let result = correlate(&image, &identity_kernel(), BoundaryMode::Zero);
        assert_eq!(
            result,
            Err(FilterError::MalformedRaster {
                width: 0,
                height: 0,
                actual: 0
            })
        );
    }

    #[test]
    fn test_normalize_rounds_and_clamps() {
        let image = gray_image!(type: f32,
            1000.0, -1999.0;
              28.3,   28.5);

        let expected = gray_image!(
            255,  0;
             28, 29);

        assert_pixels_eq!(normalize(&image), expected);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let image = gray_image!(type: f32,
            300.0, -4.5;
             17.2, 255.0);

        let once = normalize(&image);
        let twice = normalize(&once);
        assert_pixels_eq!(twice, once);
    }

    #[test]
    fn test_invert() {
        let image = gray_image!(
              0, 255;
            100, 200);

        let expected = gray_image!(
            255,   0;
            155,  55);

        assert_pixels_eq!(invert(&image), expected);
    }

    #[test]
    fn test_box_blur_size_one_is_identity() {
        let image = gray_image!(
            1, 2, 3;
            4, 5, 6;
            7, 8, 9);

        assert_pixels_eq!(box_blur(&image, 1).unwrap(), image);
    }

    #[test]
    fn test_box_blur_3x3_extend() {
        let image = gray_image!(
            1, 2, 3;
            4, 5, 6;
            7, 8, 9);

        // Means over extend-padded 3x3 windows, rounded to nearest.
        let expected = gray_image!(
            2, 3, 4;
            4, 5, 6;
            6, 7, 8);

        assert_pixels_eq!(box_blur(&image, 3).unwrap(), expected);
    }

    #[test]
    fn test_box_blur_single_bright_pixel() {
        let image = single_bright_pixel();
        let blurred = box_blur(&image, 3).unwrap();

        // 255 / 9 rounds to 28 across the 3x3 window centred on the
        // bright pixel; everything else stays black.
        let expected = GrayImage::from_fn(11, 11, |x, y| {
            if (4..=6).contains(&x) && (4..=6).contains(&y) {
                Luma([28])
            } else {
                Luma([0])
            }
        });

        assert_pixels_eq!(blurred, expected);
    }

    #[test]
    fn test_box_blur_rejects_even_or_zero_size() {
        let image = gray_image!(1, 2; 3, 4);
        assert_eq!(
            box_blur(&image, 2),
            Err(FilterError::InvalidKernelSize { size: 2 })
        );
        assert_eq!(
            box_blur(&image, 0),
            Err(FilterError::InvalidKernelSize { size: 0 })
        );
    }

    #[test]
    fn test_sharpen_leaves_constant_image_unchanged() {
        // 2 * v - blur(v) = v when the image is flat.
        let image = GrayImage::from_pixel(7, 5, Luma([100]));
        assert_pixels_eq!(sharpen(&image, 3).unwrap(), image);
    }

    #[test]
    fn test_sharpen_single_bright_pixel() {
        let image = single_bright_pixel();
        let sharpened = sharpen(&image, 3).unwrap();

        // Centre: 2 * 255 - 255/9 clamps to 255. Neighbours go negative
        // and clamp to zero.
        let expected = GrayImage::from_fn(
            11,
            11,
            |x, y| {
                if (x, y) == (5, 5) {
                    Luma([255])
                } else {
                    Luma([0])
                }
            },
        );

        assert_pixels_eq!(sharpened, expected);
    }

    #[test]
    fn test_sharpen_rejects_even_size() {
        let image = gray_image!(1, 2; 3, 4);
        assert!(sharpen(&image, 4).is_err());
    }

    #[test]
    fn test_sobel_edges_single_bright_pixel() {
        let image = single_bright_pixel();
        let edges = sobel_edges(&image).unwrap();

        // The gradient magnitude saturates at each of the 8 neighbours
        // of the bright pixel; at the pixel itself both Sobel responses
        // are zero.
        let expected = GrayImage::from_fn(11, 11, |x, y| {
            let in_window = (4..=6).contains(&x) && (4..=6).contains(&y);
            if in_window && (x, y) != (5, 5) {
                Luma([255])
            } else {
                Luma([0])
            }
        });

        assert_pixels_eq!(edges, expected);
    }

    #[test]
    fn test_sobel_edges_flat_image_is_black() {
        let image = GrayImage::from_pixel(5, 4, Luma([200]));
        let expected = GrayImage::new(5, 4);
        assert_pixels_eq!(sobel_edges(&image).unwrap(), expected);
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let image = gray_image!(
            1,   2,  3;
            4, 255,  6;
            7,   8,  9);
        let snapshot = image.clone();

        let _ = invert(&image);
        let _ = box_blur(&image, 3).unwrap();
        let _ = sharpen(&image, 3).unwrap();
        let _ = sobel_edges(&image).unwrap();

        assert_pixels_eq!(image, snapshot);
    }

    quickcheck! {
        fn prop_invert_is_an_involution(image: GrayTestImage) -> bool {
            invert(&invert(&image.0)) == image.0
        }

        fn prop_box_blur_preserves_dimensions(image: GrayTestImage) -> bool {
            match box_blur(&image.0, 3) {
                Ok(out) => out.dimensions() == image.0.dimensions(),
                Err(_) => false,
            }
        }

        fn prop_sobel_edges_preserves_dimensions(image: GrayTestImage) -> bool {
            match sobel_edges(&image.0) {
                Ok(out) => out.dimensions() == image.0.dimensions(),
                Err(_) => false,
            }
        }

        fn prop_sharpen_does_not_mutate_input(image: GrayTestImage) -> bool {
            let snapshot = image.0.clone();
            let _ = sharpen(&image.0, 3);
            image.0 == snapshot
        }
    }
}

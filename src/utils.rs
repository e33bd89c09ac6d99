//! Utility macros and helpers, mostly used for testing and benchmarking.

use num::ToPrimitive;

/// Constructs a grayscale image from a 2d array of samples, written
/// row by row with rows separated by semicolons.
///
/// Defaults to `u8` samples; pass `type: f32` (or another `Primitive`
/// type) as the first argument to override.
#[macro_export]
macro_rules! gray_image {
    () => {
        image::ImageBuffer::<image::Luma<u8>, Vec<u8>>::new(0, 0)
    };
    (type: $channel_type:ty) => {
        image::ImageBuffer::<image::Luma<$channel_type>, Vec<$channel_type>>::new(0, 0)
    };
    (type: $channel_type:ty, $( $( $x: expr ),* );*) => {{
        let nested = [ $( [ $($x),* ] ),* ];
        let height = nested.len() as u32;
        let width = nested[0].len() as u32;
        let flat: Vec<$channel_type> = nested.iter().flatten().cloned().collect();
        image::ImageBuffer::<image::Luma<$channel_type>, Vec<$channel_type>>::from_raw(
            width, height, flat,
        )
        .expect("rows must all have the same length")
    }};
    ($( $( $x: expr ),* );*) => {
        $crate::gray_image!(type: u8, $( $( $x ),* );*)
    };
}

/// Panics listing the first differences if any pixels differ between the
/// two input images, or if their dimensions do not match.
#[macro_export]
macro_rules! assert_pixels_eq {
    ($actual:expr, $expected:expr) => {{
        let actual_dim = $actual.dimensions();
        let expected_dim = $expected.dimensions();

        if actual_dim != expected_dim {
            panic!(
                "dimensions do not match. actual: {:?}, expected: {:?}",
                actual_dim, expected_dim
            )
        }

        let diffs = $actual
            .enumerate_pixels()
            .zip($expected.enumerate_pixels())
            .filter(|(p, q)| p != q)
            .take(5)
            .map(|((x, y, p), (_, _, q))| {
                format!("\nlocation: ({}, {}), actual: {:?}, expected: {:?}", x, y, p, q)
            })
            .collect::<Vec<_>>();

        if !diffs.is_empty() {
            panic!("pixels do not match. {}", diffs.join(""))
        }
    }};
}

/// Helper for a numeric widening that we know can't fail.
pub fn cast_f32<T: ToPrimitive>(x: T) -> f32 {
    match x.to_f32() {
        Some(y) => y,
        None => panic!("failed to convert sample to f32"),
    }
}

/// Gray image to use in benchmarks. This is neither noise nor similar to
/// natural images - it's just a convenience method to produce an image
/// that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> image::GrayImage {
    let mut image = image::GrayImage::new(width, height);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let intensity = (x % 7 + y % 6) as u8;
            image.put_pixel(x, y, image::Luma([intensity]));
        }
    }
    image
}

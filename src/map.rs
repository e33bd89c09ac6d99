//! Functions for mapping over pixels and subpixels of images.

use image::{ImageBuffer, Luma, Pixel, Primitive};

use crate::definitions::Image;

/// Applies `f` to each subpixel of a single-channel input image.
pub fn map_subpixels<T, S, F>(image: &Image<Luma<T>>, f: F) -> Image<Luma<S>>
where
    T: Primitive,
    S: Primitive,
    F: Fn(T) -> S,
{
    let (width, height) = image.dimensions();
    let mut out: Image<Luma<S>> = ImageBuffer::new(width, height);

    for (x, y, p) in image.enumerate_pixels() {
        out.put_pixel(x, y, Luma([f(p[0])]));
    }

    out
}

/// Applies `f` to the color of each pixel in the input image.
pub fn map_colors<P, Q, F>(image: &Image<P>, f: F) -> Image<Q>
where
    P: Pixel,
    Q: Pixel,
    F: Fn(P) -> Q,
{
    let (width, height) = image.dimensions();
    let mut out: Image<Q> = ImageBuffer::new(width, height);

    for (x, y, p) in image.enumerate_pixels() {
        out.put_pixel(x, y, f(*p));
    }

    out
}

/// Applies `f` pointwise to the colors of two equally sized input images.
///
/// # Panics
///
/// Panics if `image1` and `image2` do not have the same dimensions.
pub fn map_colors2<P, Q, R, F>(image1: &Image<P>, image2: &Image<Q>, f: F) -> Image<R>
where
    P: Pixel,
    Q: Pixel,
    R: Pixel,
    F: Fn(P, Q) -> R,
{
    assert_eq!(image1.dimensions(), image2.dimensions());

    let (width, height) = image1.dimensions();
    let mut out: Image<R> = ImageBuffer::new(width, height);

    for (x, y, p) in image1.enumerate_pixels() {
        let q = image2.get_pixel(x, y);
        out.put_pixel(x, y, f(*p, *q));
    }

    out
}

//! Utilities to help with writing property-based tests
//! (e.g. [quickcheck] tests) for image processing functions.
//!
//! [quickcheck]: https://github.com/BurntSushi/quickcheck

use image::{GrayImage, Luma};
use quickcheck::{Arbitrary, Gen};
use std::fmt;

/// Wrapper for grayscale image buffers to allow us to write an Arbitrary
/// instance.
///
/// Generated images always have at least one pixel, matching the raster
/// validity contract; shrinking trims rows and columns but never below a
/// 1x1 image.
#[derive(Clone)]
pub struct GrayTestImage(pub GrayImage);

impl Arbitrary for GrayTestImage {
    fn arbitrary(g: &mut Gen) -> Self {
        let (width, height) = small_image_dimensions(g);
        let mut image = GrayImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.put_pixel(x, y, Luma([u8::arbitrary(g)]));
            }
        }
        GrayTestImage(image)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = GrayTestImage>> {
        Box::new(shrink(&self.0).map(GrayTestImage))
    }
}

impl fmt::Debug for GrayTestImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width: {}, height: {}, data: {:?}",
            self.0.width(),
            self.0.height(),
            self.0.as_raw()
        )
    }
}

fn small_image_dimensions(g: &mut Gen) -> (u32, u32) {
    let dims = <(u8, u8)>::arbitrary(g);
    ((dims.0 % 10) as u32 + 1, (dims.1 % 10) as u32 + 1)
}

fn shrink(image: &GrayImage) -> Box<dyn Iterator<Item = GrayImage>> {
    let mut subs = vec![];

    let w = image.width();
    let h = image.height();

    if w > 1 {
        subs.push(copy_sub(image, 0, 0, w - 1, h));
        subs.push(copy_sub(image, 1, 0, w - 1, h));
    }
    if h > 1 {
        subs.push(copy_sub(image, 0, 0, w, h - 1));
        subs.push(copy_sub(image, 0, 1, w, h - 1));
    }

    Box::new(subs.into_iter())
}

fn copy_sub(image: &GrayImage, x: u32, y: u32, width: u32, height: u32) -> GrayImage {
    let mut out = GrayImage::new(width, height);
    for dy in 0..height {
        for dx in 0..width {
            out.put_pixel(dx, dy, *image.get_pixel(x + dx, y + dy));
        }
    }
    out
}

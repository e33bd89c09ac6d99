//! Linear spatial filtering for single-channel raster images.
//!
//! The crate is built around a small 2D correlation engine: a boundary-mode
//! aware pixel accessor ([`border`]), square floating-point kernels
//! ([`kernel`]) and a generic correlator plus the filters assembled from it
//! ([`filter`]). Canonical rasters are 8bpp grayscale [`image::GrayImage`]
//! buffers; intermediate correlation output is carried at `f32` and mapped
//! back into `[0, 255]` by [`filter::normalize`].
//!
//! Every operation allocates and returns a new buffer; inputs are never
//! mutated.
#![deny(missing_docs)]
#![allow(clippy::cast_lossless, clippy::needless_range_loop)]

#[macro_use]
pub mod utils;
pub mod border;
pub mod definitions;
pub mod error;
pub mod filter;
pub mod kernel;
pub mod map;
#[cfg(any(feature = "property-testing", test))]
pub mod property_testing;
pub mod raster;

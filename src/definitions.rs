//! Trait definitions and type aliases.

use image::{ImageBuffer, Pixel};

/// An `ImageBuffer` containing Pixels of type P with storage `Vec<P::Subpixel>`.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// A type to which we can round and clamp a value of type `T`.
///
/// Floating point sources are rounded to the nearest integer, with halves
/// rounded away from zero, before clamping. Implementations are not required
/// to handle NaNs gracefully.
pub trait Clamp<T> {
    /// Clamp `x` into the valid range of `Self`.
    fn clamp(x: T) -> Self;
}

/// Creates an implementation of Clamp<From> for an integer type To.
macro_rules! implement_int_clamp {
    ($from:ty, $to:ty) => {
        impl Clamp<$from> for $to {
            fn clamp(x: $from) -> $to {
                if x > <$to>::MAX as $from {
                    <$to>::MAX
                } else if x < <$to>::MIN as $from {
                    <$to>::MIN
                } else {
                    x as $to
                }
            }
        }
    };
}

/// Creates an implementation of Clamp<From> for an integer type To,
/// rounding half away from zero before clamping.
macro_rules! implement_float_clamp {
    ($from:ty, $to:ty) => {
        impl Clamp<$from> for $to {
            fn clamp(x: $from) -> $to {
                let x = x.round();
                if x > <$to>::MAX as $from {
                    <$to>::MAX
                } else if x < <$to>::MIN as $from {
                    <$to>::MIN
                } else {
                    x as $to
                }
            }
        }
    };
}

implement_float_clamp!(f32, u8);
implement_float_clamp!(f64, u8);
implement_int_clamp!(i32, u8);
implement_int_clamp!(u8, u8);

//! Error types shared by raster, kernel and filter construction.

/// Errors surfaced by raster validation, kernel construction and the
/// external boundary-mode parsing boundary.
///
/// These all signal caller contract violations rather than transient
/// conditions; no operation produces partial output alongside an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A boundary mode string did not name one of the recognized modes.
    #[error("unrecognized boundary mode {0:?}, expected \"zero\", \"wrap\" or \"extend\"")]
    InvalidBoundaryMode(String),

    /// A pixel buffer's length does not match its stated dimensions, or a
    /// dimension is zero.
    #[error("buffer of length {actual} does not form a {width}x{height} raster")]
    MalformedRaster {
        /// Stated width of the raster.
        width: u32,
        /// Stated height of the raster.
        height: u32,
        /// Actual length of the supplied pixel buffer.
        actual: usize,
    },

    /// A kernel side length without a well-defined midpoint.
    #[error("kernel size must be a positive odd integer, got {size}")]
    InvalidKernelSize {
        /// The rejected side length.
        size: u32,
    },
}

/// An alias for results produced by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, FilterError>;

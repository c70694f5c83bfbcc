//! Error type shared by every entry point of the crate.
//!
//! All failures are configuration failures caught before any pixel is read.
//! Gradient computation, clamping, rasterisation and aggregation are total.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrmError {
    /// Lattice spacing must be at least one pixel.
    #[error("step must be >= 1, got {step}")]
    InvalidStep { step: usize },

    #[error("image has no pixels")]
    EmptyImage,

    /// Sample buffer length does not match `width * height`.
    #[error("image buffer of {len} samples does not match {width}x{height}")]
    ShapeMismatch { width: usize, height: usize, len: usize },

    #[error("expected 8 direction weights, got {len}")]
    WeightCount { len: usize },

    #[error("point ({row}, {col}) lies outside a {height}x{width} image")]
    PointOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, TrmError>;

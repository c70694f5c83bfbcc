use serde::{Deserialize, Serialize};

use crate::error::{Result, TrmError};

/// A 2D grayscale intensity field stored as f32 samples, row-major.
/// Statistics derived from it are accumulated in f64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityImage {
    /// Row-major intensity samples.
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl IntensityImage {
    /// Wrap a row-major sample buffer.
    ///
    /// Fails with [`TrmError::EmptyImage`] when either dimension is zero and
    /// [`TrmError::ShapeMismatch`] when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TrmError::EmptyImage);
        }
        if width.checked_mul(height) != Some(data.len()) {
            return Err(TrmError::ShapeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Create an image filled with a single value.
    pub fn filled(width: usize, height: usize, fill: f32) -> Result<Self> {
        let len = width.checked_mul(height).ok_or(TrmError::ShapeMismatch {
            width,
            height,
            len: 0,
        })?;
        Self::new(width, height, vec![fill; len])
    }

    /// Build from an 8-bit luma buffer (e.g. the raw bytes of a decoded gray image).
    pub fn from_luma8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        Self::new(width, height, bytes.iter().map(|&b| b as f32).collect())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// True when `(row, col)` addresses a pixel of this image.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }
}

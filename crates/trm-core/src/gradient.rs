//! Gradient-magnitude field and the global link threshold.
//!
//! Partial derivatives follow the usual finite-difference convention:
//! central difference `(f[i+1] − f[i−1]) / 2` on interior samples, one-sided
//! difference at the two borders, and 0 along an axis of length 1.
//!
//! 3×3 neighbourhood of cell `(r, c)` used by the two partials:
//! ```text
//!             N(r-1, c)
//!   W(r, c-1)     *      E(r, c+1)
//!             S(r+1, c)
//! ```
//!
//! `d/drow = (S − N) / 2`, `d/dcol = (E − W) / 2`, `magnitude = hypot(d/drow, d/dcol)`.
//!
//! Complexity: O(W·H) time and memory.
use serde::Serialize;

use crate::image::IntensityImage;

/// Per-pixel gradient magnitude, same shape as the source image, row-major.
#[derive(Debug, Clone)]
pub struct GradientField {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl GradientField {
    /// Compute the gradient magnitude of every pixel.
    pub fn compute(image: &IntensityImage) -> Self {
        let (w, h) = (image.width(), image.height());
        let mut data = Vec::with_capacity(w * h);

        for r in 0..h {
            for c in 0..w {
                let d_row = axis_derivative(r, h, |i| image.get(i, c) as f64);
                let d_col = axis_derivative(c, w, |i| image.get(r, i) as f64);
                data.push(d_row.hypot(d_col));
            }
        }

        Self { data, width: w, height: h }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

/// Derivative of a 1D profile of length `n` at index `i`.
#[inline]
fn axis_derivative(i: usize, n: usize, f: impl Fn(usize) -> f64) -> f64 {
    if n < 2 {
        0.0
    } else if i == 0 {
        f(1) - f(0)
    } else if i == n - 1 {
        f(n - 1) - f(n - 2)
    } else {
        (f(i + 1) - f(i - 1)) / 2.0
    }
}

/// Image-wide gate separating intact from broken links.
///
/// `value = mean + 2 · std` of the gradient magnitude (population std).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub mean: f64,
    pub std: f64,
    pub value: f64,
}

impl Threshold {
    pub fn from_field(field: &GradientField) -> Self {
        let n = field.data.len() as f64;
        let mean = field.data.iter().sum::<f64>() / n;
        let variance = field
            .data
            .iter()
            .map(|&g| {
                let d = g - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let std = variance.sqrt();
        Self {
            mean,
            std,
            value: mean + 2.0 * std,
        }
    }
}

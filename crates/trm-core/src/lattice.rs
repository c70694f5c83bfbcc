//! Lattice coordinates and sample-grid generation.
//! All coordinates are `(row, col)` pixel indices.
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrmError};

/// Default lattice spacing in pixels.
pub const DEFAULT_STEP: usize = 15;

/// A pixel position, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: usize,
    pub col: usize,
}

impl GridPoint {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridPoint {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Reject a zero lattice spacing.
pub fn validate_step(step: usize) -> Result<()> {
    if step == 0 {
        return Err(TrmError::InvalidStep { step });
    }
    Ok(())
}

/// Lattice points of a `height × width` image at spacing `step`, row-major.
///
/// Rows run `0, step, 2·step, … < height`, columns likewise against `width`.
/// The last row/column is included only when it falls on a multiple of `step`.
/// Downstream results are aligned positionally with this order.
pub fn lattice_points(height: usize, width: usize, step: usize) -> Result<Vec<GridPoint>> {
    validate_step(step)?;
    if height == 0 || width == 0 {
        return Err(TrmError::EmptyImage);
    }
    let points = (0..height)
        .step_by(step)
        .flat_map(|row| (0..width).step_by(step).map(move |col| GridPoint { row, col }))
        .collect();
    Ok(points)
}

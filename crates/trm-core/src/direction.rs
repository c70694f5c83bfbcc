//! The eight compass directions of a lattice point and their complex weights.
//!
//! Direction order, as `(d_row, d_col)` unit offsets:
//! ```text
//!   0 UpLeft(-1,-1)    1 Up(-1, 0)    2 UpRight(-1,+1)
//!   3 Left  ( 0,-1)         *         4 Right  ( 0,+1)
//!   5 DownLeft(+1,-1)  6 Down(+1, 0)  7 DownRight(+1,+1)
//! ```
//!
//! [`DirectionWeights`] is indexed by the same order. The default weight of a
//! direction is `d_col + i·d_row`, which is the 3×3 kernel
//! `[[-1-i, -i, 1-i], [-1, ·, 1], [-1+i, i, 1+i]]` without its centre.
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in weight order.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Directions that enumerate every undirected lattice edge once.
    /// Their opposites (Left, UpRight, Up, UpLeft) are never emitted.
    pub const FORWARD: [Direction; 4] = [
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Position in [`Direction::ALL`] and in [`DirectionWeights`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit offset `(d_row, d_col)`.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Eight complex weights, co-indexed with [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionWeights([Complex64; 8]);

impl DirectionWeights {
    pub const fn new(weights: [Complex64; 8]) -> Self {
        Self(weights)
    }

    /// Take the 8 off-centre cells of a 3×3 kernel laid out like the
    /// direction diagram (row 0 is "up", column 0 is "left").
    pub fn from_kernel(k: [[Complex64; 3]; 3]) -> Self {
        #[rustfmt::skip]
        let weights = [
            k[0][0], k[0][1], k[0][2],
            k[1][0],          k[1][2],
            k[2][0], k[2][1], k[2][2],
        ];
        Self(weights)
    }

    #[inline]
    pub fn get(&self, direction: Direction) -> Complex64 {
        self.0[direction.index()]
    }

    pub fn as_array(&self) -> &[Complex64; 8] {
        &self.0
    }

    pub fn sum(&self) -> Complex64 {
        self.0.iter().sum()
    }
}

impl Default for DirectionWeights {
    fn default() -> Self {
        let mut weights = [Complex64::new(0.0, 0.0); 8];
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            weights[d.index()] = Complex64::new(dc as f64, dr as f64);
        }
        Self(weights)
    }
}

impl TryFrom<&[Complex64]> for DirectionWeights {
    type Error = TrmError;

    fn try_from(weights: &[Complex64]) -> Result<Self> {
        let arr: [Complex64; 8] = weights
            .try_into()
            .map_err(|_| TrmError::WeightCount { len: weights.len() })?;
        Ok(Self(arr))
    }
}

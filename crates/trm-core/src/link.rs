//! Intact/broken classification of a link against the image threshold.
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::gradient::{GradientField, Threshold};
use crate::lattice::GridPoint;
use crate::line::max_along_line;
use crate::neighbors::neighbor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkState {
    /// Every pixel on the path stays below the threshold.
    Intact,
    /// Some pixel on the path reaches the threshold (`>=`).
    Broken,
}

impl LinkState {
    /// Classify a path maximum. Equality is broken.
    #[inline]
    pub fn from_max(max: f64, threshold: f64) -> Self {
        if max >= threshold {
            LinkState::Broken
        } else {
            LinkState::Intact
        }
    }

    #[inline]
    pub fn is_intact(self) -> bool {
        self == LinkState::Intact
    }

    #[inline]
    pub fn is_broken(self) -> bool {
        self == LinkState::Broken
    }

    /// 1 for intact, 0 for broken.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            LinkState::Intact => 1.0,
            LinkState::Broken => 0.0,
        }
    }
}

/// A directed link from a lattice point to one of its clamped neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub from: GridPoint,
    pub to: GridPoint,
    pub direction: Direction,
}

impl Link {
    pub fn new(from: GridPoint, direction: Direction, step: usize, field: &GradientField) -> Self {
        Self {
            from,
            to: neighbor(from, direction, step, field.height(), field.width()),
            direction,
        }
    }

    pub fn classify(&self, field: &GradientField, threshold: &Threshold) -> LinkState {
        classify(field, threshold, self.from, self.to)
    }
}

/// State of the straight path `from → to`.
#[inline]
pub fn classify(field: &GradientField, threshold: &Threshold, from: GridPoint, to: GridPoint) -> LinkState {
    LinkState::from_max(max_along_line(field, from, to), threshold.value)
}

/// States of all eight links of `point`, in [`Direction::ALL`] order.
pub fn link_states(
    field: &GradientField,
    threshold: &Threshold,
    point: GridPoint,
    step: usize,
) -> [LinkState; 8] {
    Direction::ALL.map(|d| Link::new(point, d, step, field).classify(field, threshold))
}

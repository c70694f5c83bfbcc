//! Query API: THI map, link remainder map and single-point THI.
//!
//! [`Analysis`] computes the gradient field and threshold once per image and
//! serves any number of queries against them. The free functions build a
//! one-shot `Analysis` for callers that only need a single result.

use log::debug;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::direction::DirectionWeights;
use crate::error::{Result, TrmError};
use crate::exec::map_points;
use crate::gradient::{GradientField, Threshold};
use crate::image::IntensityImage;
use crate::lattice::{lattice_points, validate_step, GridPoint, DEFAULT_STEP};
use crate::link::{link_states, LinkState};
use crate::neighbors::neighbors;
use crate::remainder::{broken_degrees, forward_edges};
use crate::thi::{directional_index, intact_count, scale_by_mean_gradient};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Options shared by the THI queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Lattice spacing in pixels, >= 1. Default 15.
    pub step: usize,
    /// Complex weight per direction. Default: `d_col + i·d_row`.
    pub weights: DirectionWeights,
    /// Divide THI by the mean gradient magnitude. Default false.
    pub scale: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            weights: DirectionWeights::default(),
            scale: false,
        }
    }
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<()> {
        validate_step(self.step)
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// THI over the whole lattice. All vectors are aligned with `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThiMap {
    pub points: Vec<GridPoint>,
    pub thi: Vec<Complex64>,
    /// Intact links per point, 0–8.
    pub intact_counts: Vec<u8>,
}

/// Broken-edge degree over the whole lattice, aligned with `points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainderMap {
    pub points: Vec<GridPoint>,
    pub counts: Vec<u32>,
}

/// THI at one caller-chosen pixel, with the links it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointThi {
    pub point: GridPoint,
    pub thi: Complex64,
    /// Clamped neighbours in direction order.
    pub neighbors: [GridPoint; 8],
    pub states: [LinkState; 8],
}

// ── Analysis context ──────────────────────────────────────────────────────────

/// Gradient field and threshold of one image.
#[derive(Debug, Clone)]
pub struct Analysis {
    field: GradientField,
    threshold: Threshold,
}

impl Analysis {
    pub fn new(image: &IntensityImage) -> Self {
        let field = GradientField::compute(image);
        let threshold = Threshold::from_field(&field);
        debug!(
            "gradient field {}x{}: mean={:.4} std={:.4} threshold={:.4}",
            field.width(),
            field.height(),
            threshold.mean,
            threshold.std,
            threshold.value
        );
        Self { field, threshold }
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    fn finish_thi(&self, states: &[LinkState; 8], params: &AnalysisParams) -> Complex64 {
        let thi = directional_index(states, &params.weights);
        if params.scale {
            scale_by_mean_gradient(thi, self.threshold.mean)
        } else {
            thi
        }
    }

    /// THI of every lattice point.
    pub fn thi_map(&self, params: &AnalysisParams) -> Result<ThiMap> {
        params.validate()?;
        let points = lattice_points(self.field.height(), self.field.width(), params.step)?;
        debug!("thi: {} lattice points at step {}", points.len(), params.step);

        let per_point = map_points(&points, |p| {
            let states = link_states(&self.field, &self.threshold, p, params.step);
            (self.finish_thi(&states, params), intact_count(&states))
        });
        let (thi, intact_counts): (Vec<_>, Vec<_>) = per_point.into_iter().unzip();

        Ok(ThiMap {
            points,
            thi,
            intact_counts,
        })
    }

    /// Broken-edge degree of every lattice point.
    pub fn link_remainder(&self, step: usize) -> Result<RemainderMap> {
        validate_step(step)?;
        let points = lattice_points(self.field.height(), self.field.width(), step)?;
        let edges = forward_edges(&self.field, &self.threshold, &points, step);
        debug!(
            "link remainder: {} points, {} edges, {} broken",
            points.len(),
            edges.len(),
            edges.iter().filter(|e| e.state.is_broken()).count()
        );
        let counts = broken_degrees(&points, &edges);
        Ok(RemainderMap { points, counts })
    }

    /// THI at `point`, which need not lie on the lattice.
    pub fn single_point(&self, point: GridPoint, params: &AnalysisParams) -> Result<PointThi> {
        params.validate()?;
        let (height, width) = (self.field.height(), self.field.width());
        if point.row >= height || point.col >= width {
            return Err(TrmError::PointOutOfBounds {
                row: point.row,
                col: point.col,
                height,
                width,
            });
        }
        let states = link_states(&self.field, &self.threshold, point, params.step);
        Ok(PointThi {
            point,
            thi: self.finish_thi(&states, params),
            neighbors: neighbors(point, params.step, height, width),
            states,
        })
    }
}

// ── One-shot queries ──────────────────────────────────────────────────────────

/// THI map of `image`. `params` is checked before the gradient field is built.
pub fn compute_thi(image: &IntensityImage, params: &AnalysisParams) -> Result<ThiMap> {
    params.validate()?;
    Analysis::new(image).thi_map(params)
}

/// Link remainder of `image`. `step` is checked before the gradient field is built.
pub fn compute_link_remainder(image: &IntensityImage, step: usize) -> Result<RemainderMap> {
    validate_step(step)?;
    Analysis::new(image).link_remainder(step)
}

/// THI at one pixel. `params` is checked before the gradient field is built.
pub fn compute_single_point_thi(
    image: &IntensityImage,
    point: GridPoint,
    params: &AnalysisParams,
) -> Result<PointThi> {
    params.validate()?;
    Analysis::new(image).single_point(point, params)
}

//! Turbulent region model: lattice link analysis of grayscale images.
//!
//! A regular lattice is laid over the image. Each lattice point is linked to
//! its eight neighbours one step away, and a link is broken when the straight
//! path between the two points crosses a gradient at or above the image-wide
//! threshold `mean + 2·std`. Two summaries are built from the link states:
//!
//! - the THI, a complex weighted sum of the intact links of each point
//!   ([`Analysis::thi_map`], [`Analysis::single_point`]);
//! - the link remainder, the number of broken lattice edges touching each
//!   point ([`Analysis::link_remainder`]).
//!
//! ```
//! use trm_core::{compute_link_remainder, IntensityImage};
//!
//! let img = IntensityImage::filled(30, 30, 100.0).unwrap();
//! let map = compute_link_remainder(&img, 15).unwrap();
//! assert_eq!(map.points.len(), 4);
//! ```
pub mod analysis;
pub mod direction;
pub mod error;
mod exec;
pub mod gradient;
pub mod image;
pub mod lattice;
pub mod line;
pub mod link;
pub mod neighbors;
pub mod remainder;
pub mod thi;

pub use analysis::{
    compute_link_remainder, compute_single_point_thi, compute_thi, Analysis, AnalysisParams,
    PointThi, RemainderMap, ThiMap,
};
pub use direction::{Direction, DirectionWeights};
pub use error::{Result, TrmError};
pub use gradient::{GradientField, Threshold};
pub use image::IntensityImage;
pub use lattice::{lattice_points, GridPoint, DEFAULT_STEP};
pub use link::LinkState;
pub use num_complex::Complex64;

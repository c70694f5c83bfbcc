//! Turbulence Homogeneity Index (THI): the weighted sum of a point's intact links.
//!
//! `THI = Σ_d factor(state_d) · weight_d` over the eight directions, where
//! `factor` is 1 for intact and 0 for broken links. With the default weights
//! the eight directions cancel, so both "all intact" and "all broken" give 0;
//! a partially blocked point points away from its broken links.
use num_complex::Complex64;

use crate::direction::{Direction, DirectionWeights};
use crate::link::LinkState;

/// Added to the mean gradient before scaling so flat images do not divide by zero.
pub const SCALE_EPSILON: f64 = 1e-8;

pub fn directional_index(states: &[LinkState; 8], weights: &DirectionWeights) -> Complex64 {
    Direction::ALL
        .iter()
        .map(|&d| weights.get(d) * states[d.index()].factor())
        .sum()
}

/// Normalise a THI by the image's mean gradient magnitude.
#[inline]
pub fn scale_by_mean_gradient(thi: Complex64, mean_gradient: f64) -> Complex64 {
    thi / (mean_gradient + SCALE_EPSILON)
}

/// Number of intact links among the eight.
pub fn intact_count(states: &[LinkState; 8]) -> u8 {
    states.iter().filter(|s| s.is_intact()).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::link::LinkState::{Broken, Intact};

    #[test]
    fn all_intact_equals_weight_sum() {
        let w = DirectionWeights::default();
        assert_eq!(directional_index(&[Intact; 8], &w), w.sum());

        let custom = DirectionWeights::new([Complex64::new(0.5, 2.0); 8]);
        assert_eq!(directional_index(&[Intact; 8], &custom), Complex64::new(4.0, 16.0));
    }

    #[test]
    fn all_broken_is_exactly_zero() {
        let custom = DirectionWeights::new([Complex64::new(3.0, -7.0); 8]);
        assert_eq!(directional_index(&[Broken; 8], &custom), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn blocked_right_side_points_left() {
        // UpRight, Right and DownRight broken.
        let states = [Intact, Intact, Broken, Intact, Broken, Intact, Intact, Broken];
        let thi = directional_index(&states, &DirectionWeights::default());
        assert_eq!(thi, Complex64::new(-3.0, 0.0));
        assert_eq!(intact_count(&states), 5);
    }

    #[test]
    fn scaling_divides_by_mean_plus_epsilon() {
        let thi = scale_by_mean_gradient(Complex64::new(-3.0, 1.5), 1.5);
        assert_relative_eq!(thi.re, -3.0 / (1.5 + SCALE_EPSILON));
        assert_relative_eq!(thi.im, 1.5 / (1.5 + SCALE_EPSILON));

        let flat = scale_by_mean_gradient(Complex64::new(0.0, 0.0), 0.0);
        assert!(flat.re.is_finite() && flat.im.is_finite());
    }
}

//! Eight-neighbour lookup at lattice spacing, clamped to the image.
use crate::direction::Direction;
use crate::lattice::GridPoint;

/// Neighbour of `point` one lattice step away in `direction`.
///
/// Each coordinate is clamped on its own axis: rows to `[0, height−1]`,
/// columns to `[0, width−1]`. Clamping can fold a neighbour onto the point
/// itself or onto a sibling neighbour; those degenerate links are kept.
/// Offsets saturate, so any `step` lands on the border rather than wrapping.
#[inline]
pub fn neighbor(
    point: GridPoint,
    direction: Direction,
    step: usize,
    height: usize,
    width: usize,
) -> GridPoint {
    let (dr, dc) = direction.offset();
    let step = i64::try_from(step).unwrap_or(i64::MAX);
    GridPoint {
        row: clamp_axis(offset(point.row, dr, step), height),
        col: clamp_axis(offset(point.col, dc, step), width),
    }
}

/// All eight neighbours in [`Direction::ALL`] order.
pub fn neighbors(point: GridPoint, step: usize, height: usize, width: usize) -> [GridPoint; 8] {
    Direction::ALL.map(|d| neighbor(point, d, step, height, width))
}

#[inline]
fn offset(v: usize, unit: i64, step: i64) -> i64 {
    i64::try_from(v)
        .unwrap_or(i64::MAX)
        .saturating_add(unit.saturating_mul(step))
}

#[inline]
fn clamp_axis(v: i64, bound: usize) -> usize {
    v.clamp(0, bound as i64 - 1) as usize
}

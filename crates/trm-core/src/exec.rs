//! Per-point map over the lattice, parallel when the `threading` feature is on.
//! Output order always equals input order.
use crate::lattice::GridPoint;

#[cfg(feature = "threading")]
pub(crate) fn map_points<T, F>(points: &[GridPoint], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(GridPoint) -> T + Sync + Send,
{
    use rayon::prelude::*;
    points.par_iter().map(|&p| f(p)).collect()
}

#[cfg(not(feature = "threading"))]
pub(crate) fn map_points<T, F>(points: &[GridPoint], f: F) -> Vec<T>
where
    F: Fn(GridPoint) -> T,
{
    points.iter().map(|&p| f(p)).collect()
}

//! Discrete line tracing and maximum-gradient sampling along a link.
//!
//! Lines are rasterised with integer Bresenham in all octants. The trace is
//! 8-connected and includes both endpoints, so every pixel the segment
//! passes through contributes to the maximum and no spike between the
//! endpoints is skipped.
use crate::gradient::GradientField;
use crate::lattice::GridPoint;

/// Pixels on the segment `from → to`, in travel order, endpoints included.
pub fn trace_line(from: GridPoint, to: GridPoint) -> Vec<GridPoint> {
    let mut out = Vec::new();
    walk_line(from, to, |p| out.push(p));
    out
}

/// Largest gradient magnitude on the segment `from → to`.
///
/// Both endpoints must lie inside `field`; neighbour clamping guarantees it
/// for every link the lattice produces. Identical endpoints sample one pixel.
pub fn max_along_line(field: &GradientField, from: GridPoint, to: GridPoint) -> f64 {
    let mut max = f64::NEG_INFINITY;
    walk_line(from, to, |p| max = max.max(field.get(p.row, p.col)));
    max
}

fn walk_line(from: GridPoint, to: GridPoint, mut visit: impl FnMut(GridPoint)) {
    let (mut r, mut c) = (from.row as i64, from.col as i64);
    let (r1, c1) = (to.row as i64, to.col as i64);

    let dr = (r1 - r).abs();
    let dc = (c1 - c).abs();
    let sr = if r < r1 { 1 } else { -1 };
    let sc = if c < c1 { 1 } else { -1 };
    let mut err = dc - dr;

    loop {
        visit(GridPoint::new(r as usize, c as usize));
        if r == r1 && c == c1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dr {
            err -= dr;
            c += sc;
        }
        if e2 < dc {
            err += dc;
            r += sr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::IntensityImage;

    fn p(row: usize, col: usize) -> GridPoint {
        GridPoint::new(row, col)
    }

    fn assert_eight_connected(trace: &[GridPoint]) {
        for w in trace.windows(2) {
            let dr = (w[0].row as i64 - w[1].row as i64).abs();
            let dc = (w[0].col as i64 - w[1].col as i64).abs();
            assert!(dr <= 1 && dc <= 1 && dr + dc > 0, "gap between {:?} and {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn degenerate_line_is_one_pixel() {
        assert_eq!(trace_line(p(4, 7), p(4, 7)), vec![p(4, 7)]);
    }

    #[test]
    fn axis_aligned_and_diagonal_traces() {
        assert_eq!(trace_line(p(0, 0), p(0, 3)), vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)]);
        assert_eq!(trace_line(p(3, 0), p(0, 0)), vec![p(3, 0), p(2, 0), p(1, 0), p(0, 0)]);
        assert_eq!(trace_line(p(0, 0), p(2, 2)), vec![p(0, 0), p(1, 1), p(2, 2)]);
    }

    #[test]
    fn traces_cover_every_octant_without_gaps() {
        let centre = p(20, 20);
        let ends = [p(0, 7), p(7, 0), p(0, 33), p(7, 40), p(33, 0), p(40, 7), p(33, 40), p(40, 33)];
        for end in ends {
            let trace = trace_line(centre, end);
            assert_eq!(trace.first(), Some(&centre));
            assert_eq!(trace.last(), Some(&end));
            let dr = (end.row as i64 - 20).unsigned_abs() as usize;
            let dc = (end.col as i64 - 20).unsigned_abs() as usize;
            assert_eq!(trace.len(), dr.max(dc) + 1);
            assert_eight_connected(&trace);
        }
    }

    #[test]
    fn max_finds_single_spike_between_endpoints() {
        let mut data = vec![0.0f32; 20 * 20];
        // A vertical step at column 10 puts its gradient on columns 9 and 10.
        for r in 0..20 {
            for c in 10..20 {
                data[r * 20 + c] = 50.0;
            }
        }
        let img = IntensityImage::new(20, 20, data).unwrap();
        let field = GradientField::compute(&img);

        assert_eq!(max_along_line(&field, p(3, 0), p(17, 5)), 0.0);
        assert_eq!(max_along_line(&field, p(3, 0), p(17, 19)), 25.0);
        assert_eq!(max_along_line(&field, p(5, 12), p(5, 12)), 0.0);
    }
}

//! End-to-end behaviour of the three queries on small synthetic images.

use rand::{rngs::StdRng, Rng, SeedableRng};
use trm_core::{
    compute_link_remainder, compute_single_point_thi, compute_thi, Analysis, AnalysisParams,
    Complex64, Direction, DirectionWeights, GridPoint, IntensityImage, LinkState,
};

fn image_from(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> IntensityImage {
    let data = (0..height)
        .flat_map(|r| (0..width).map(move |c| (r, c)))
        .map(|(r, c)| f(r, c))
        .collect();
    IntensityImage::new(width, height, data).unwrap()
}

fn noise_image(width: usize, height: usize, seed: u64) -> IntensityImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen_range(0..=255u8) as f32).collect();
    IntensityImage::new(width, height, data).unwrap()
}

fn pts(coords: &[(usize, usize)]) -> Vec<GridPoint> {
    coords.iter().map(|&(r, c)| GridPoint::new(r, c)).collect()
}

#[test]
fn uniform_image_breaks_every_link() {
    // Zero field, zero threshold, and `0 >= 0` is broken.
    let img = IntensityImage::filled(30, 30, 100.0).unwrap();
    let analysis = Analysis::new(&img);
    assert_eq!(analysis.threshold().value, 0.0);

    let map = compute_thi(&img, &AnalysisParams::default()).unwrap();
    assert_eq!(map.points, pts(&[(0, 0), (0, 15), (15, 0), (15, 15)]));
    assert!(map.thi.iter().all(|&z| z == Complex64::new(0.0, 0.0)));
    assert!(map.intact_counts.iter().all(|&n| n == 0));

    let single =
        compute_single_point_thi(&img, GridPoint::new(15, 15), &AnalysisParams::default()).unwrap();
    assert!(single.states.iter().all(|&s| s == LinkState::Broken));
}

#[test]
fn uniform_image_remainder_counts() {
    let img = IntensityImage::filled(30, 30, 100.0).unwrap();
    let map = compute_link_remainder(&img, 15).unwrap();
    assert_eq!(map.points, pts(&[(0, 0), (0, 15), (15, 0), (15, 15)]));
    // Each point owns 4 broken forward edges. (15,0) also receives (0,0)'s
    // DownLeft and Down, which clamp onto the same pixel, plus (0,15)'s DownLeft.
    // Clamped targets on row/col 29 are not lattice points and go uncounted.
    assert_eq!(map.counts, vec![4, 5, 7, 7]);
}

#[test]
fn step_edge_breaks_crossing_links_only() {
    let img = image_from(30, 30, |_, c| if c < 15 { 0.0 } else { 255.0 });
    let params = AnalysisParams::default();

    let origin = compute_single_point_thi(&img, GridPoint::new(0, 0), &params).unwrap();
    for d in Direction::ALL {
        let to = origin.neighbors[d.index()];
        let expected = if to.col >= 14 { LinkState::Broken } else { LinkState::Intact };
        assert_eq!(origin.states[d.index()], expected, "direction {d:?} to {to:?}");
    }
    assert_eq!(origin.thi, Complex64::new(-3.0, 0.0));

    let map = compute_link_remainder(&img, 15).unwrap();
    assert_eq!(map.points, pts(&[(0, 0), (0, 15), (15, 0), (15, 15)]));
    assert_eq!(map.counts, vec![2, 5, 3, 7]);

    let near_edge = map.counts[1].min(map.counts[3]);
    let far_from_edge = map.counts[0].max(map.counts[2]);
    assert!(near_edge > far_from_edge);
}

#[test]
fn repeated_queries_are_bit_identical() {
    let img = noise_image(64, 48, 7);
    let params = AnalysisParams {
        step: 6,
        scale: true,
        ..AnalysisParams::default()
    };
    let a = compute_thi(&img, &params).unwrap();
    let b = compute_thi(&img, &params).unwrap();
    assert_eq!(a.points, b.points);
    for (x, y) in a.thi.iter().zip(&b.thi) {
        assert_eq!(x.re.to_bits(), y.re.to_bits());
        assert_eq!(x.im.to_bits(), y.im.to_bits());
    }
    assert_eq!(
        compute_link_remainder(&img, 6).unwrap(),
        compute_link_remainder(&img, 6).unwrap()
    );
}

#[test]
fn threshold_is_mean_plus_two_std_on_noise() {
    let img = noise_image(40, 40, 11);
    let analysis = Analysis::new(&img);
    let data = analysis.field().data();
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let std = (data.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n).sqrt();
    let t = analysis.threshold();
    assert!(t.value >= 0.0);
    assert!((t.mean - mean).abs() < 1e-9);
    assert!((t.value - (mean + 2.0 * std)).abs() < 1e-9);
}

#[test]
fn thi_reflects_link_states_with_custom_weights() {
    let img = noise_image(50, 50, 3);
    let weights = DirectionWeights::new([
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 0.0),
        Complex64::new(4.0, 0.0),
        Complex64::new(8.0, 0.0),
        Complex64::new(16.0, 0.0),
        Complex64::new(32.0, 0.0),
        Complex64::new(64.0, 0.0),
        Complex64::new(128.0, 0.0),
    ]);
    let params = AnalysisParams {
        step: 10,
        weights,
        scale: false,
    };
    let analysis = Analysis::new(&img);
    let map = analysis.thi_map(&params).unwrap();
    for (i, &p) in map.points.iter().enumerate() {
        let single = analysis.single_point(p, &params).unwrap();
        // Bit d of the THI is set exactly when direction d is intact.
        let bits = map.thi[i].re as u32;
        for d in Direction::ALL {
            let intact = bits & (1 << d.index()) != 0;
            assert_eq!(intact, single.states[d.index()].is_intact());
        }
        assert_eq!(bits.count_ones() as u8, map.intact_counts[i]);
    }
}

#[test]
fn non_square_image_keeps_neighbours_inside() {
    let img = noise_image(90, 20, 5);
    let params = AnalysisParams::default();
    let map = compute_thi(&img, &params).unwrap();
    assert_eq!(map.points.len(), 2 * 6);
    for &p in &map.points {
        let single = compute_single_point_thi(&img, p, &params).unwrap();
        for nb in single.neighbors {
            assert!(nb.row < 20 && nb.col < 90, "{nb:?} escaped the image");
        }
    }
    let rem = compute_link_remainder(&img, 15).unwrap();
    assert_eq!(rem.points, map.points);
}

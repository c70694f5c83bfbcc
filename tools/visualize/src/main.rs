//! Overlay renderer: draws link-remainder dots and THI arrows on a copy of the image.
//! Writes `<stem>_link_remainder.png` and `<stem>_thi_directions.png` to the output directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, Rgb, RgbImage};
use log::info;
use trm_core::line::trace_line;
use trm_core::{Analysis, AnalysisParams, GridPoint, IntensityImage};

/// Arrow length per unit of THI magnitude, in pixels.
const ARROW_SCALE: f64 = 5.0;
/// Arrow head length as a fraction of the shaft.
const TIP_FRACTION: f64 = 0.3;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render link remainder and THI overlays for an image")]
struct Args {
    /// Input image (converted to 8-bit gray)
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Lattice spacing in pixels
    #[arg(short, long, default_value_t = trm_core::DEFAULT_STEP)]
    step: usize,

    /// Divide THI by the mean gradient magnitude before drawing arrows
    #[arg(long)]
    scale: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

/// 31 per missing unit below 8, saturating at 255.
fn intensity(count: u32) -> u8 {
    (31 * 8u32.saturating_sub(count)).min(255) as u8
}

fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    let mut out = RgbImage::new(gray.width(), gray.height());
    for (x, y, px) in gray.enumerate_pixels() {
        let v = px.0[0];
        out.put_pixel(x, y, Rgb([v, v, v]));
    }
    out
}

// ── Drawing primitives ────────────────────────────────────────────────────────

fn clamp_point(img: &RgbImage, row: i64, col: i64) -> GridPoint {
    GridPoint::new(
        row.clamp(0, img.height() as i64 - 1) as usize,
        col.clamp(0, img.width() as i64 - 1) as usize,
    )
}

fn fill_disc(img: &mut RgbImage, centre: GridPoint, radius: i64, colour: Rgb<u8>) {
    let (h, w) = (img.height() as i64, img.width() as i64);
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr * dr + dc * dc > radius * radius {
                continue;
            }
            let r = centre.row as i64 + dr;
            let c = centre.col as i64 + dc;
            if r >= 0 && r < h && c >= 0 && c < w {
                img.put_pixel(c as u32, r as u32, colour);
            }
        }
    }
}

fn draw_segment(img: &mut RgbImage, from: GridPoint, to: GridPoint, colour: Rgb<u8>) {
    for p in trace_line(from, to) {
        img.put_pixel(p.col as u32, p.row as u32, colour);
    }
}

/// Shaft from `start` by `(d_row, d_col)` plus two head strokes at ±30°.
fn draw_arrow(img: &mut RgbImage, start: GridPoint, d_row: f64, d_col: f64, colour: Rgb<u8>) {
    let tip_row = start.row as f64 + d_row;
    let tip_col = start.col as f64 + d_col;
    let tip = clamp_point(img, tip_row.round() as i64, tip_col.round() as i64);
    draw_segment(img, start, tip, colour);

    let len = d_row.hypot(d_col);
    if len < 1.0 {
        return;
    }
    let head = len * TIP_FRACTION;
    let back = d_row.atan2(d_col) + std::f64::consts::PI;
    for spread in [-std::f64::consts::FRAC_PI_6, std::f64::consts::FRAC_PI_6] {
        let a = back + spread;
        let end = clamp_point(
            img,
            (tip_row + head * a.sin()).round() as i64,
            (tip_col + head * a.cos()).round() as i64,
        );
        draw_segment(img, tip, end, colour);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let gray = image::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?
        .into_luma8();
    let img = IntensityImage::from_luma8(gray.width() as usize, gray.height() as usize, gray.as_raw())?;
    info!("loaded {} ({}x{})", args.input.display(), img.width(), img.height());

    let params = AnalysisParams {
        step: args.step,
        scale: args.scale,
        ..AnalysisParams::default()
    };
    let analysis = Analysis::new(&img);
    let remainder = analysis.link_remainder(params.step)?;
    let thi = analysis.thi_map(&params)?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    // ── 1. link remainder: red dots, brighter where fewer edges are broken ───
    {
        let mut canvas = gray_to_rgb(&gray);
        for (&p, &count) in remainder.points.iter().zip(&remainder.counts) {
            fill_disc(&mut canvas, p, 3, Rgb([intensity(count), 0, 0]));
        }
        let path = args.output.join(format!("{stem}_link_remainder.png"));
        canvas.save(&path).with_context(|| format!("saving {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    // ── 2. THI directions: blue arrows (re → column, im → row) ───────────────
    {
        let mut canvas = gray_to_rgb(&gray);
        for ((&p, z), &intact) in thi.points.iter().zip(&thi.thi).zip(&thi.intact_counts) {
            let c = intensity(intact as u32);
            draw_arrow(&mut canvas, p, z.im * ARROW_SCALE, z.re * ARROW_SCALE, Rgb([0, 0, c]));
            fill_disc(&mut canvas, p, 2, Rgb([c, 0, 0]));
        }
        let path = args.output.join(format!("{stem}_thi_directions.png"));
        canvas.save(&path).with_context(|| format!("saving {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

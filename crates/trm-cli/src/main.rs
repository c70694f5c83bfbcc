//! Command-line front end for the turbulent region model.
//! Loads a grayscale image, runs one query and writes the result as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use trm_core::{Analysis, AnalysisParams, GridPoint, IntensityImage};

#[derive(Parser, Debug)]
#[command(name = "trm", version, about = "Turbulent region model: lattice link analysis of grayscale images")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// THI at every lattice point
    Thi {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        opts: ThiArgs,
    },

    /// Broken-edge count at every lattice point
    Remainder {
        #[command(flatten)]
        io: IoArgs,

        /// Lattice spacing in pixels
        #[arg(short, long, default_value_t = trm_core::DEFAULT_STEP)]
        step: usize,
    },

    /// THI and link states at a single pixel
    Point {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        opts: ThiArgs,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,
    },
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input image (any format the `image` crate decodes; converted to 8-bit gray)
    input: PathBuf,

    /// Directory for the JSON result; printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ThiArgs {
    /// JSON file with `step`, `weights` and `scale`; flags below override it
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Lattice spacing in pixels
    #[arg(short, long)]
    step: Option<usize>,

    /// Divide THI by the mean gradient magnitude
    #[arg(long)]
    scale: bool,
}

impl ThiArgs {
    fn resolve(&self) -> Result<AnalysisParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading params {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing params {}", path.display()))?
            }
            None => AnalysisParams::default(),
        };
        if let Some(step) = self.step {
            params.step = step;
        }
        params.scale |= self.scale;
        params.validate()?;
        Ok(params)
    }
}

fn load_image(path: &Path) -> Result<IntensityImage> {
    let gray = image::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .into_luma8();
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let img = IntensityImage::from_luma8(w, h, gray.as_raw())?;
    info!("loaded {} ({w}x{h})", path.display());
    Ok(img)
}

/// Write `value` to `<dir>/<stem>_<suffix>.json`, or stdout without a directory.
fn emit<T: Serialize>(value: &T, io: &IoArgs, suffix: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match &io.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let stem = io
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("image");
            let path = dir.join(format!("{stem}_{suffix}.json"));
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Thi { io, opts } => {
            let params = opts.resolve()?;
            let img = load_image(&io.input)?;
            let map = Analysis::new(&img).thi_map(&params)?;
            info!("THI computed at {} lattice points", map.points.len());
            emit(&map, &io, "thi")
        }
        Command::Remainder { io, step } => {
            let img = load_image(&io.input)?;
            let map = Analysis::new(&img).link_remainder(step)?;
            info!("link remainder computed at {} lattice points", map.points.len());
            emit(&map, &io, "link_remainder")
        }
        Command::Point { io, opts, row, col } => {
            let params = opts.resolve()?;
            let img = load_image(&io.input)?;
            let res = Analysis::new(&img).single_point(GridPoint::new(row, col), &params)?;
            emit(&res, &io, &format!("point_{row}_{col}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(cli.command)
}

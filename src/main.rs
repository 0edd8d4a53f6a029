//! K-means dominant colours.
//!
//! Prints the `-n` dominant colours of an image, one `#rrggbb` per line.
use anyhow::Context;
use clap::Parser;
use colorz::*;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "K-means dominant colours", long_about = None)]
struct Args {
    /// The filename of the image
    #[arg(required = true)]
    filename: PathBuf,
    /// Number of dominant colours
    #[arg(short = 'n', default_value_t = KMEANS_CLUSTER_COUNT)]
    n: usize,
    /// Stop once no centroid moves this far in one iteration
    #[arg(long, default_value_t = KMEANS_MIN_DIFF)]
    min_diff: Energy,
    /// Give up on convergence after this many iterations
    #[arg(long, default_value_t = KMEANS_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Seed for the initial centroid sampling
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON array of colours with their centers and weights
    #[arg(long)]
    json: bool,
    /// Log every iteration
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let settings = Settings::new(self.n)
            .with_min_diff(self.min_diff)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        }
    }
}

/// One dominant colour as printed by `--json`.
#[derive(Debug, serde::Serialize)]
struct Swatch {
    hex: Hex,
    center: [Energy; 3],
    weight: Weight,
}

impl From<&Cluster<'_, 3>> for Swatch {
    fn from(cluster: &Cluster<'_, 3>) -> Self {
        Self {
            hex: Hex::from(cluster.center()),
            center: *cluster.center().coords(),
            weight: cluster.weight(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    colorz::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    let pixels = Pixels::open(&args.filename)?;
    log::info!("{:<32}{:<32}", "distinct colours", pixels.len());
    let points = pixels.points();
    let clustering = KMeans::new(&points, args.settings())
        .and_then(|kmeans| kmeans.run())
        .with_context(|| format!("cluster {}", args.filename.display()))?;
    match args.json {
        true => println!(
            "{}",
            serde_json::to_string_pretty(
                &clustering
                    .clusters()
                    .iter()
                    .map(Swatch::from)
                    .collect::<Vec<Swatch>>()
            )?
        ),
        false => clustering
            .centers()
            .iter()
            .map(Hex::from)
            .for_each(|hex| println!("{}", hex)),
    }
    Ok(())
}

//! Dominant colours of an image via weighted k-means clustering.
//!
//! Every distinct colour of a (downsized) image becomes a weighted point in
//! RGB space, weighted by how many pixels carry it. Lloyd's algorithm then
//! partitions those points into `k` clusters whose centroids are the
//! dominant colours.
//!
//! ## Core Types
//!
//! - [`Point`] — Weighted coordinate vector, generic over dimension
//! - [`Cluster`] — Borrowed member list plus weighted centroid
//! - [`Centroid`] — Running weighted mean used by the update step
//! - [`KMeans`] — The clustering engine
//! - [`Clustering`] — Final clusters plus convergence report
//!
//! ## Collaborators
//!
//! - [`Hex`] — `#rrggbb` formatting of cluster centers
//! - `Pixels` — Image decoding and colour counting (feature `cli`)
mod absorb;
mod cluster;
mod config;
mod error;
mod hex;
mod kmeans;
#[cfg(feature = "cli")]
mod pixels;
mod point;

pub use absorb::*;
pub use cluster::*;
pub use config::*;
pub use error::*;
pub use hex::*;
pub use kmeans::*;
#[cfg(feature = "cli")]
pub use pixels::*;
pub use point::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, distances, and convergence thresholds.
pub type Energy = f64;
/// Pixel occurrence counts.
pub type Weight = u64;

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Number of dominant colours when none is requested.
pub const KMEANS_CLUSTER_COUNT: usize = 3;
/// Largest centroid movement that still counts as converged.
pub const KMEANS_MIN_DIFF: Energy = 1.0;
/// Lloyd iterations before giving up on convergence.
pub const KMEANS_MAX_ITERATIONS: usize = 1024;

// ============================================================================
// PIXEL SOURCE
// ============================================================================
/// Images are shrunk to fit within this width before counting colours.
pub const THUMBNAIL_WIDTH: u32 = 200;
/// Images are shrunk to fit within this height before counting colours.
pub const THUMBNAIL_HEIGHT: u32 = 200;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, keeping stdout free for results.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}

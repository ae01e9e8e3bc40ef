//! # Dominant Colors
//!
//! A Rust crate for finding the dominant colors of an RGB dataset with
//! k-means clustering.
//!
//! The pipeline is linear:
//! - Load color samples from a `r,g,b` CSV file (or the pixels of an image)
//! - Partition them into k clusters by Euclidean proximity
//! - Report one centroid color per cluster
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_colors::{find_dominant_colors, ClusterConfig};
//!
//! let outcome = find_dominant_colors(&ClusterConfig::default())?;
//! for center in &outcome.centers {
//!     let [r, g, b] = center.truncated();
//!     println!("{} {} {}", r, g, b);
//! }
//! # Ok::<(), dominant_colors::DataError>(())
//! ```

pub mod clustering;
pub mod color;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod image_loader;
pub mod output;

pub use clustering::{ClusterAssignment, ClusterCenter, ClusterOutcome, ColorClusterer};
pub use config::{ClusterConfig, ClusteringSpace, InputKind};
pub use dataset::{ColorSample, Dataset};
pub use error::{DataError, Result};
pub use output::{DominantColor, OutputFormat};

/// Load the samples named by `config`
///
/// # Errors
///
/// Returns `DataError` if the file is missing, unreadable or malformed.
pub fn load_samples(config: &ClusterConfig) -> Result<Dataset> {
    match config.input_kind {
        InputKind::Csv => dataset::load_dataset(&config.input_path),
        InputKind::Image => image_loader::load_image_samples(&config.input_path),
    }
}

/// Load the configured input and cluster it
///
/// This is the main entry point: it validates `config`, loads the samples
/// and returns exactly `config.cluster_count` centers.
///
/// # Errors
///
/// Returns `DataError` if:
/// - The configuration is out of range
/// - The input cannot be loaded or holds a malformed row
/// - The input has fewer samples than clusters
pub fn find_dominant_colors(config: &ClusterConfig) -> Result<ClusterOutcome> {
    config.validate()?;
    let dataset = load_samples(config)?;
    ColorClusterer::from_config(config).cluster(&dataset)
}

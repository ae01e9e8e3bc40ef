//! Configuration for the dominant color pipeline.
//!
//! All tunable clustering parameters live in [`ClusterConfig`], which can be
//! loaded from a JSON file or constructed programmatically:
//!
//! ```no_run
//! use dominant_colors::ClusterConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ClusterConfig::from_json_file(Path::new("clusters.json"))?;
//!
//! // Or use defaults: ./data.csv, three clusters
//! let config = ClusterConfig::default();
//! # Ok::<(), dominant_colors::DataError>(())
//! ```
//!
//! Missing fields in a JSON file take their default values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{self, kmeans, MAX_CLUSTER_COUNT};
use crate::error::{DataError, Result};

/// Color space the k-means distance is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusteringSpace {
    /// Euclidean distance over (r, g, b)
    #[default]
    Rgb,
    /// Euclidean distance over CIE L*a*b* (perceptual)
    Lab,
}

impl ClusteringSpace {
    /// Convergence threshold used when the configuration leaves it unset
    pub fn default_convergence(&self) -> f32 {
        match self {
            ClusteringSpace::Rgb => kmeans::RGB_CONVERGENCE,
            ClusteringSpace::Lab => kmeans::LAB_CONVERGENCE,
        }
    }
}

/// Where the samples come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Header line followed by `r,g,b` rows
    #[default]
    Csv,
    /// Raster image; every pixel becomes a sample
    Image,
}

/// Complete configuration for one clustering invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Dataset or image path
    pub input_path: PathBuf,

    /// How to read `input_path`
    pub input_kind: InputKind,

    /// Number of dominant colors (k)
    pub cluster_count: usize,

    /// Iteration cap per k-means run
    pub max_iterations: usize,

    /// Convergence threshold; `None` uses the space default
    pub convergence: Option<f32>,

    /// Independent k-means runs, best score kept
    pub runs: usize,

    /// Fixed seed for reproducible output; random when `None`
    pub seed: Option<u64>,

    /// Distance space for clustering
    pub space: ClusteringSpace,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_DATA_PATH),
            input_kind: InputKind::Csv,
            cluster_count: constants::DEFAULT_CLUSTER_COUNT,
            max_iterations: kmeans::MAX_ITERATIONS,
            convergence: None,
            runs: kmeans::RUNS,
            seed: None,
            space: ClusteringSpace::Rgb,
        }
    }
}

impl ClusterConfig {
    /// Effective convergence threshold
    pub fn convergence(&self) -> f32 {
        self.convergence
            .unwrap_or_else(|| self.space.default_convergence())
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 || self.cluster_count > MAX_CLUSTER_COUNT {
            return Err(DataError::invalid_parameter(
                "cluster_count",
                self.cluster_count,
            ));
        }
        if self.max_iterations == 0 {
            return Err(DataError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
            ));
        }
        if self.runs == 0 {
            return Err(DataError::invalid_parameter("runs", self.runs));
        }
        if let Some(convergence) = self.convergence {
            if !convergence.is_finite() || convergence < 0.0 {
                return Err(DataError::invalid_parameter("convergence", convergence));
            }
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DataError::config(format!("Failed to read config: {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DataError::config(format!("Failed to parse config: {}", path.display()), e)
        })?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DataError::config("Failed to serialize config", e))?;
        std::fs::write(path, json).map_err(|e| {
            DataError::config(format!("Failed to write config: {}", path.display()), e)
        })
    }
}

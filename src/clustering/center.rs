//! Cluster centers, per-sample assignments and the clustering outcome

use serde::{Deserialize, Serialize};

use crate::config::ClusteringSpace;
use crate::constants::channel;

/// Centroid of one cluster in 0-255 channel units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterCenter {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ClusterCenter {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_channels(channels: [f64; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels truncated toward zero
    pub fn truncated(&self) -> [i64; 3] {
        self.channels().map(|c| c.trunc() as i64)
    }

    /// Whether every channel lies within [0, 255]
    pub fn is_in_gamut(&self) -> bool {
        self.channels()
            .iter()
            .all(|c| (channel::MIN..=channel::MAX).contains(c))
    }
}

/// Cluster index for every sample position of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterAssignment {
    labels: Vec<usize>,
}

impl ClusterAssignment {
    pub fn new(labels: Vec<usize>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Cluster of the sample at `position`
    pub fn label(&self, position: usize) -> Option<usize> {
        self.labels.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of samples per cluster, for `cluster_count` clusters
    pub fn populations(&self, cluster_count: usize) -> Vec<usize> {
        let mut counts = vec![0; cluster_count];
        for &label in &self.labels {
            if let Some(count) = counts.get_mut(label) {
                *count += 1;
            }
        }
        counts
    }
}

/// Result of clustering one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterOutcome {
    /// One center per cluster, in backend order
    pub centers: Vec<ClusterCenter>,
    /// Cluster index per sample
    pub assignment: ClusterAssignment,
    /// Within-cluster sum of squared distances of the kept run, measured in
    /// the clustering space (unit-scaled sRGB or Lab); lower is tighter
    pub score: f32,
    /// Space the distances were measured in
    pub space: ClusteringSpace,
    /// Seed of the kept run
    pub seed: u64,
}

impl ClusterOutcome {
    pub fn cluster_count(&self) -> usize {
        self.centers.len()
    }

    /// Samples per cluster, aligned with `centers`
    pub fn populations(&self) -> Vec<usize> {
        self.assignment.populations(self.centers.len())
    }
}

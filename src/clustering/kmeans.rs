//! Dominant color extraction with k-means
//!
//! The clustering itself is delegated to `kmeans_colors` (k-means++
//! initialization, nearest-centroid assignment, mean update until the
//! convergence threshold or iteration cap). This module prepares the samples,
//! runs the backend a configurable number of times, keeps the run with the
//! lowest inertia (within-cluster sum of squared distances) and turns its
//! result into [`ClusterCenter`]s in 0-255 channel units.

use kmeans_colors::{get_kmeans, Calculate, Kmeans};
use palette::{Lab, Srgb};
use tracing::{debug, info, warn};

use super::center::{ClusterAssignment, ClusterCenter, ClusterOutcome};
use crate::color::ColorConverter;
use crate::config::{ClusterConfig, ClusteringSpace};
use crate::constants::{kmeans, MAX_CLUSTER_COUNT};
use crate::dataset::{ColorSample, Dataset};
use crate::error::{DataError, Result};

/// Groups color samples into a fixed number of clusters
#[derive(Debug, Clone)]
pub struct ColorClusterer {
    converter: ColorConverter,
    cluster_count: usize,
    max_iterations: usize,
    convergence: f32,
    runs: usize,
    seed: Option<u64>,
    space: ClusteringSpace,
}

impl ColorClusterer {
    /// Create a clusterer for `cluster_count` clusters with default parameters
    pub fn new(cluster_count: usize) -> Self {
        Self {
            converter: ColorConverter::new(),
            cluster_count,
            max_iterations: kmeans::MAX_ITERATIONS,
            convergence: ClusteringSpace::Rgb.default_convergence(),
            runs: kmeans::RUNS,
            seed: None,
            space: ClusteringSpace::Rgb,
        }
    }

    /// Create a clusterer from a pipeline configuration
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            cluster_count: config.cluster_count,
            max_iterations: config.max_iterations,
            convergence: config.convergence(),
            runs: config.runs,
            seed: config.seed,
            space: config.space,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Switch the distance space, resetting the convergence threshold to its default
    pub fn with_space(mut self, space: ClusteringSpace) -> Self {
        self.space = space;
        self.convergence = space.default_convergence();
        self
    }

    /// Cluster a dataset into exactly `cluster_count` centers
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidParameter` for a cluster count of zero or
    /// above 255, or for zero runs or iterations, and
    /// `DataError::InsufficientSamples` when the dataset has fewer samples
    /// than clusters.
    pub fn cluster(&self, dataset: &Dataset) -> Result<ClusterOutcome> {
        self.validate()?;

        if dataset.len() < self.cluster_count {
            return Err(DataError::InsufficientSamples {
                samples: dataset.len(),
                clusters: self.cluster_count,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);

        let distinct = dataset.distinct();
        if distinct.len() <= self.cluster_count {
            return Ok(self.cluster_distinct(dataset, &distinct, seed));
        }

        let outcome = match self.space {
            ClusteringSpace::Rgb => self.cluster_rgb(dataset, seed)?,
            ClusteringSpace::Lab => self.cluster_lab(dataset, seed)?,
        };

        info!(
            samples = dataset.len(),
            clusters = self.cluster_count,
            score = outcome.score,
            seed = outcome.seed,
            "clustered dataset"
        );
        Ok(outcome)
    }

    fn validate(&self) -> Result<()> {
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
        Ok(())
    }

    /// Every distinct color is its own center; repeated to fill `cluster_count`
    fn cluster_distinct(
        &self,
        dataset: &Dataset,
        distinct: &[ColorSample],
        seed: u64,
    ) -> ClusterOutcome {
        if distinct.len() < self.cluster_count {
            warn!(
                distinct = distinct.len(),
                clusters = self.cluster_count,
                "fewer distinct colors than clusters, centers will repeat"
            );
        }

        let centers = distinct
            .iter()
            .cycle()
            .take(self.cluster_count)
            .map(|s| ClusterCenter::new(s.r as f64, s.g as f64, s.b as f64))
            .collect();

        let labels = dataset
            .iter()
            .map(|s| distinct.iter().position(|d| d == s).unwrap_or(0))
            .collect();

        ClusterOutcome {
            centers,
            assignment: ClusterAssignment::new(labels),
            score: 0.0,
            space: self.space,
            seed,
        }
    }

    fn cluster_rgb(&self, dataset: &Dataset, seed: u64) -> Result<ClusterOutcome> {
        let buffer: Vec<Srgb> = dataset
            .iter()
            .map(|s| self.converter.sample_to_srgb(s))
            .collect();

        let (result, inertia, seed) = self.best_run(&buffer, seed)?;
        let labels: Vec<usize> = result.indices.iter().map(|&i| i as usize).collect();

        // Exact means of the integer samples; the backend centroid only
        // stands in for a cluster that ended up empty.
        let means = member_means(dataset, &labels, self.cluster_count);
        let centers = means
            .into_iter()
            .zip(&result.centroids)
            .map(|(mean, centroid)| match mean {
                Some(channels) => ClusterCenter::from_channels(channels),
                None => ClusterCenter::from_channels(self.converter.srgb_to_channels(*centroid)),
            })
            .collect();

        Ok(ClusterOutcome {
            centers,
            assignment: ClusterAssignment::new(labels),
            score: inertia,
            space: ClusteringSpace::Rgb,
            seed,
        })
    }

    fn cluster_lab(&self, dataset: &Dataset, seed: u64) -> Result<ClusterOutcome> {
        let buffer: Vec<Lab> = dataset
            .iter()
            .map(|s| self.converter.sample_to_lab(s))
            .collect();

        let (result, inertia, seed) = self.best_run(&buffer, seed)?;
        let labels = result.indices.iter().map(|&i| i as usize).collect();
        let centers = result
            .centroids
            .iter()
            .map(|lab| ClusterCenter::from_channels(self.converter.lab_to_channels(*lab)))
            .collect();

        Ok(ClusterOutcome {
            centers,
            assignment: ClusterAssignment::new(labels),
            score: inertia,
            space: ClusteringSpace::Lab,
            seed,
        })
    }

    /// Run the backend `runs` times with consecutive seeds, keeping the lowest inertia
    fn best_run<C: Calculate + Clone>(
        &self,
        buffer: &[C],
        seed: u64,
    ) -> Result<(Kmeans<C>, f32, u64)> {
        let mut best: Option<(Kmeans<C>, f32, u64)> = None;

        for run in 0..self.runs {
            let run_seed = seed.wrapping_add(run as u64);
            let result = get_kmeans(
                self.cluster_count,
                self.max_iterations,
                self.convergence,
                false,
                buffer,
                run_seed,
            );
            let run_inertia = inertia(buffer, &result);
            debug!(run, seed = run_seed, inertia = run_inertia, "k-means run finished");

            if best
                .as_ref()
                .map_or(true, |(_, kept, _)| run_inertia < *kept)
            {
                best = Some((result, run_inertia, run_seed));
            }
        }

        best.ok_or_else(|| DataError::invalid_parameter("runs", self.runs))
    }
}

/// Sum of squared distances from every sample to its assigned centroid
///
/// `Kmeans::score` only measures centroid movement on the last iteration,
/// so runs are compared on this instead.
fn inertia<C: Calculate>(buffer: &[C], result: &Kmeans<C>) -> f32 {
    buffer
        .iter()
        .zip(&result.indices)
        .filter_map(|(color, &index)| {
            result
                .centroids
                .get(index as usize)
                .map(|centroid| C::difference(color, centroid) as f64)
        })
        .sum::<f64>() as f32
}

/// Mean channels of the samples assigned to each cluster; `None` if empty
fn member_means(
    dataset: &Dataset,
    labels: &[usize],
    cluster_count: usize,
) -> Vec<Option<[f64; 3]>> {
    let mut sums = vec![[0i128; 3]; cluster_count];
    let mut counts = vec![0usize; cluster_count];

    for (sample, &label) in dataset.iter().zip(labels) {
        if label >= cluster_count {
            continue;
        }
        for (sum, value) in sums[label].iter_mut().zip(sample.channels()) {
            *sum += value as i128;
        }
        counts[label] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| (count > 0).then(|| sum.map(|s| s as f64 / count as f64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(i64, i64, i64)]) -> Dataset {
        rows.iter()
            .map(|&(r, g, b)| ColorSample::new(r, g, b))
            .collect()
    }

    fn sorted_truncated(outcome: &ClusterOutcome) -> Vec<[i64; 3]> {
        let mut centers: Vec<[i64; 3]> = outcome.centers.iter().map(|c| c.truncated()).collect();
        centers.sort();
        centers
    }

    /// Dark, light and mid-grey groups of 20 samples each
    fn three_blobs() -> Dataset {
        let mut rows = Vec::new();
        for i in 0..20 {
            rows.push((i % 3, i % 2, i % 4));
            rows.push((250 + i % 5, 252 + i % 3, 251 + i % 4));
            rows.push((126 + i % 4, 127 + i % 3, 128 + i % 2));
        }
        dataset(&rows)
    }

    #[test]
    fn test_rejects_zero_clusters() {
        let err = ColorClusterer::new(0).cluster(&three_blobs()).unwrap_err();
        assert!(matches!(err, DataError::InvalidParameter { .. }));
    }

    #[test]
    fn test_rejects_too_many_clusters() {
        let err = ColorClusterer::new(256).cluster(&three_blobs()).unwrap_err();
        assert!(matches!(err, DataError::InvalidParameter { .. }));
    }

    #[test]
    fn test_rejects_zero_runs() {
        let err = ColorClusterer::new(3)
            .with_runs(0)
            .cluster(&three_blobs())
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidParameter { .. }));
    }

    #[test]
    fn test_fewer_samples_than_clusters() {
        let err = ColorClusterer::new(3)
            .cluster(&dataset(&[(0, 0, 0), (255, 255, 255)]))
            .unwrap_err();
        match err {
            DataError::InsufficientSamples { samples, clusters } => {
                assert_eq!(samples, 2);
                assert_eq!(clusters, 3);
            }
            other => panic!("Expected InsufficientSamples, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset() {
        let err = ColorClusterer::new(1).cluster(&Dataset::default()).unwrap_err();
        assert!(matches!(err, DataError::InsufficientSamples { samples: 0, .. }));
    }

    #[test]
    fn test_paired_colors_give_exact_centers() {
        let data = dataset(&[
            (0, 0, 0),
            (0, 0, 0),
            (255, 255, 255),
            (255, 255, 255),
            (128, 128, 128),
            (128, 128, 128),
        ]);
        let outcome = ColorClusterer::new(3).with_seed(1).cluster(&data).unwrap();

        assert_eq!(
            sorted_truncated(&outcome),
            vec![[0, 0, 0], [128, 128, 128], [255, 255, 255]]
        );
        assert_eq!(outcome.populations(), vec![2, 2, 2]);
    }

    #[test]
    fn test_fewer_distinct_colors_repeat_centers() {
        let data = dataset(&[(10, 20, 30), (10, 20, 30), (10, 20, 30), (10, 20, 30)]);
        let outcome = ColorClusterer::new(3).with_seed(5).cluster(&data).unwrap();

        assert_eq!(outcome.cluster_count(), 3);
        assert!(outcome.centers.iter().all(|c| c.truncated() == [10, 20, 30]));
        assert_eq!(outcome.assignment.labels(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_three_blobs_rgb() {
        let data = three_blobs();
        let outcome = ColorClusterer::new(3).with_seed(42).cluster(&data).unwrap();

        assert_eq!(outcome.cluster_count(), 3);
        assert_eq!(outcome.assignment.len(), data.len());
        assert!(outcome.centers.iter().all(|c| c.is_in_gamut()));

        let centers = sorted_truncated(&outcome);
        assert!(centers[0].iter().all(|&c| c <= 3));
        assert!(centers[1].iter().all(|&c| (125..=130).contains(&c)));
        assert!(centers[2].iter().all(|&c| c >= 250));

        let mut populations = outcome.populations();
        populations.sort();
        assert_eq!(populations, vec![20, 20, 20]);
    }

    #[test]
    fn test_three_blobs_lab() {
        let outcome = ColorClusterer::new(3)
            .with_space(ClusteringSpace::Lab)
            .with_seed(42)
            .cluster(&three_blobs())
            .unwrap();

        assert_eq!(outcome.space, ClusteringSpace::Lab);
        assert!(outcome.centers.iter().all(|c| c.is_in_gamut()));

        let centers = sorted_truncated(&outcome);
        assert!(centers[0].iter().all(|&c| c <= 5));
        assert!(centers[2].iter().all(|&c| c >= 245));
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let data = three_blobs();
        let clusterer = ColorClusterer::new(3).with_seed(1234);

        let first = clusterer.cluster(&data).unwrap();
        let second = clusterer.cluster(&data).unwrap();
        assert_eq!(first.centers, second.centers);
        assert_eq!(first.assignment, second.assignment);
    }

    /// Four separated groups plus a mid-grey group, clustered into three
    fn five_groups() -> Dataset {
        let mut rows = Vec::new();
        for i in 0..15 {
            rows.push((10 + i % 4, 10 + i % 3, 10 + i % 5));
            rows.push((240 - i % 4, 15 + i % 3, 20 + i % 5));
            rows.push((20 + i % 5, 230 - i % 3, 30 + i % 4));
            rows.push((25 + i % 3, 35 + i % 4, 235 - i % 5));
            rows.push((120 + i % 6, 125 + i % 5, 130 + i % 4));
        }
        dataset(&rows)
    }

    #[test]
    fn test_multiple_runs_keep_lowest_inertia() {
        let data = five_groups();

        for base in 0..8u64 {
            let kept = ColorClusterer::new(3).with_seed(base).cluster(&data).unwrap();

            let single_runs: Vec<ClusterOutcome> = (0..kmeans::RUNS as u64)
                .map(|i| {
                    ColorClusterer::new(3)
                        .with_runs(1)
                        .with_seed(base + i)
                        .cluster(&data)
                        .unwrap()
                })
                .collect();

            for single in &single_runs {
                assert!(
                    kept.score <= single.score,
                    "base {}: kept inertia {} above single run {} (seed {})",
                    base,
                    kept.score,
                    single.score,
                    single.seed
                );
            }
            assert!(single_runs.iter().any(|s| s.seed == kept.seed));
        }
    }

    #[test]
    fn test_score_is_inertia_not_movement() {
        let outcome = ColorClusterer::new(3).with_seed(3).cluster(&five_groups()).unwrap();
        // Five well separated groups cannot fit three centers without spread
        assert!(outcome.score > 0.0);
    }

    #[test]
    fn test_inertia_sums_squared_distances() {
        let converter = ColorConverter::new();
        let data = dataset(&[(0, 0, 0), (0, 0, 0), (255, 0, 0), (255, 0, 0)]);
        let buffer: Vec<Srgb> = data.iter().map(|s| converter.sample_to_srgb(s)).collect();

        let exact = Kmeans {
            score: 0.0,
            centroids: vec![Srgb::new(0.0, 0.0, 0.0), Srgb::new(1.0, 0.0, 0.0)],
            indices: vec![0, 0, 1, 1],
        };
        assert!(inertia(&buffer, &exact) < 1e-6);

        // Every sample half a unit away on the red axis
        let shared = Kmeans {
            score: 0.0,
            centroids: vec![Srgb::new(0.5, 0.0, 0.0), Srgb::new(0.5, 0.0, 0.0)],
            indices: vec![0, 0, 1, 1],
        };
        assert!((inertia(&buffer, &shared) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_member_means() {
        let data = dataset(&[(1, 2, 3), (3, 4, 5), (100, 100, 100)]);
        let means = member_means(&data, &[0, 0, 2], 3);
        assert_eq!(means[0], Some([2.0, 3.0, 4.0]));
        assert_eq!(means[1], None);
        assert_eq!(means[2], Some([100.0, 100.0, 100.0]));
    }
}

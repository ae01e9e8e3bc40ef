//! Color clustering module
//!
//! Partitions a dataset into k groups by proximity and reports one
//! representative color per group.

pub mod center;
pub mod kmeans;

pub use center::{ClusterAssignment, ClusterCenter, ClusterOutcome};
pub use kmeans::ColorClusterer;

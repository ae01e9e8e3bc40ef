//! Default parameters and limits for color clustering
//!
//! The clustering defaults follow the values the dominant-color script has
//! always run with: three clusters over `./data.csv`, a 300 iteration cap and
//! ten independent k-means runs.

/// Default input dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "./data.csv";

/// Default number of dominant colors to find
pub const DEFAULT_CLUSTER_COUNT: usize = 3;

/// Cluster indices are stored as `u8` by the clustering backend
pub const MAX_CLUSTER_COUNT: usize = u8::MAX as usize;

/// Clustering loop limits
pub mod kmeans {
    /// Maximum assignment/update iterations per run
    pub const MAX_ITERATIONS: usize = 300;

    /// Independent runs; the run with the lowest score is kept
    pub const RUNS: usize = 10;

    /// Convergence threshold for sRGB components scaled to [0, 1]
    pub const RGB_CONVERGENCE: f32 = 0.0025;

    /// Convergence threshold for CIE L*a*b* coordinates
    pub const LAB_CONVERGENCE: f32 = 5.0;
}

/// Channel bounds of 8-bit colors
pub mod channel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 255.0;
}

/// Dataset file layout
pub mod dataset {
    /// Field separator
    pub const DELIMITER: char = ',';

    /// Lines starting with this character are skipped
    pub const COMMENT_PREFIX: char = '#';

    /// Header written by the dataset writer
    pub const HEADER: &str = "r,g,b";

    /// Fields per row
    pub const FIELDS_PER_ROW: usize = 3;
}

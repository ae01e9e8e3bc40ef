//! Color dataset module
//!
//! This module holds the sample types and the CSV reader/writer used to
//! move color datasets in and out of the clusterer.

pub mod csv;
pub mod sample;

pub use csv::{load_dataset, parse_dataset, save_dataset, write_dataset};
pub use sample::{ColorSample, Dataset};

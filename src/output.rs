//! Rendering cluster centers for stdout
//!
//! The plain format prints one `r g b` line per center, each channel
//! truncated toward zero, in the order the clusterer returned them. The JSON
//! format adds the hex code and population of every center.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::clustering::ClusterOutcome;
use crate::color::ColorConverter;
use crate::error::{DataError, Result};

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `"{r} {g} {b}"` per line
    #[default]
    Plain,
    /// Pretty-printed JSON array of [`DominantColor`]
    Json,
}

/// One reported color with its share of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub r: i64,
    pub g: i64,
    pub b: i64,
    /// `#RRGGBB`, channels clamped to [0, 255]
    pub hex: String,
    /// Samples assigned to this center
    pub population: usize,
    /// Fraction of all samples (0.0-1.0)
    pub share: f64,
}

/// Build the reported colors, aligned with `outcome.centers`
pub fn dominant_colors(outcome: &ClusterOutcome) -> Vec<DominantColor> {
    let converter = ColorConverter::new();
    let populations = outcome.populations();
    let total = outcome.assignment.len();

    outcome
        .centers
        .iter()
        .zip(populations)
        .map(|(center, population)| {
            let [r, g, b] = center.truncated();
            DominantColor {
                r,
                g,
                b,
                hex: converter.channels_to_hex([r, g, b]),
                population,
                share: if total == 0 {
                    0.0
                } else {
                    population as f64 / total as f64
                },
            }
        })
        .collect()
}

/// Plain lines, one per center, each terminated by a newline
pub fn format_plain(outcome: &ClusterOutcome) -> String {
    outcome
        .centers
        .iter()
        .map(|center| {
            let [r, g, b] = center.truncated();
            format!("{} {} {}\n", r, g, b)
        })
        .collect()
}

/// Pretty-printed JSON array
pub fn format_json(outcome: &ClusterOutcome) -> Result<String> {
    serde_json::to_string_pretty(&dominant_colors(outcome))
        .map_err(|e| DataError::output("Failed to serialize colors", e))
}

/// Render `outcome` in `format` to `writer`
pub fn write_centers<W: Write>(
    outcome: &ClusterOutcome,
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Plain => format_plain(outcome),
        OutputFormat::Json => format_json(outcome)? + "\n",
    };

    writer
        .write_all(rendered.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| DataError::output("Failed to write cluster centers", e))
}

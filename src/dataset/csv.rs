//! Reading and writing comma-separated color datasets
//!
//! The layout is one header line followed by `r,g,b` integer rows:
//!
//! ```text
//! r,g,b
//! 12,40,200
//! 250,248,240
//! ```
//!
//! Blank lines and `#` comments are ignored. The header is skipped whatever
//! its content.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use super::{ColorSample, Dataset};
use crate::constants::dataset::{COMMENT_PREFIX, DELIMITER, FIELDS_PER_ROW, HEADER};
use crate::error::{DataError, Result};

/// Load a dataset from a CSV file
///
/// # Errors
///
/// Returns `DataError::DataLoad` if the file cannot be opened or read, and
/// `DataError::MalformedRow` for the first row that is not three integers.
///
/// # Example
///
/// ```rust,no_run
/// use dominant_colors::dataset::load_dataset;
/// use std::path::Path;
///
/// let dataset = load_dataset(Path::new("data.csv"))?;
/// println!("{} samples", dataset.len());
/// # Ok::<(), dominant_colors::DataError>(())
/// ```
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| {
        DataError::data_load(format!("Failed to open dataset: {}", path.display()), e)
    })?;

    let dataset = parse_dataset(BufReader::new(file))?;
    debug!(path = %path.display(), samples = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Parse a dataset from any buffered reader
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DataError::data_load("Failed to read dataset line", e))?;
        let line_number = index + 1;

        // Header
        if index == 0 {
            continue;
        }

        let content = match line.split_once(COMMENT_PREFIX) {
            Some((before, _)) => before,
            None => line.as_str(),
        };
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        samples.push(parse_row(content, line_number)?);
    }

    Ok(Dataset::new(samples))
}

fn parse_row(content: &str, line: usize) -> Result<ColorSample> {
    let fields: Vec<&str> = content.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(DataError::MalformedRow {
            line,
            reason: format!(
                "expected {} fields, found {}",
                FIELDS_PER_ROW,
                fields.len()
            ),
        });
    }

    let mut channels = [0i64; FIELDS_PER_ROW];
    for (channel, field) in channels.iter_mut().zip(&fields) {
        *channel = field.parse().map_err(|_| DataError::MalformedRow {
            line,
            reason: format!("'{}' is not an integer", field),
        })?;
    }

    Ok(ColorSample::new(channels[0], channels[1], channels[2]))
}

/// Write a dataset with a header line, readable by [`load_dataset`]
pub fn write_dataset<W: Write>(dataset: &Dataset, mut writer: W) -> Result<()> {
    let io_err = |e| DataError::output("Failed to write dataset", e);

    writeln!(writer, "{}", HEADER).map_err(io_err)?;
    for sample in dataset {
        writeln!(writer, "{},{},{}", sample.r, sample.g, sample.b).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Write a dataset to a file, creating or truncating it
pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        DataError::output(format!("Failed to create dataset: {}", path.display()), e)
    })?;
    write_dataset(dataset, std::io::BufWriter::new(file))
}

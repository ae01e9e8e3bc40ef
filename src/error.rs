//! Error types for the dominant_colors library

use thiserror::Error;

/// Result type alias for dominant_colors operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Error types for loading color data and clustering it
#[derive(Error, Debug)]
pub enum DataError {
    /// Dataset file could not be opened or read
    #[error("Failed to load dataset: {message}")]
    DataLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A data row did not hold three integer fields
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Fewer samples than requested clusters
    #[error("Insufficient samples: {samples} sample(s) for {clusters} cluster(s)")]
    InsufficientSamples { samples: usize, clusters: usize },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output could not be written
    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DataError {
    /// Create a dataset load error with context
    pub fn data_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DataLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an output error with context
    pub fn output<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Output {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            DataError::DataLoad { .. } => {
                "Could not read the dataset. Please check that the file exists and is readable."
                    .to_string()
            }
            DataError::MalformedRow { line, .. } => {
                format!(
                    "Line {} is not a valid color row. Each row must hold three integers: r,g,b.",
                    line
                )
            }
            DataError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            DataError::InsufficientSamples { samples, clusters } => {
                format!(
                    "The dataset holds {} color(s) but {} cluster(s) were requested.",
                    samples, clusters
                )
            }
            _ => "Color clustering failed.".to_string(),
        }
    }
}

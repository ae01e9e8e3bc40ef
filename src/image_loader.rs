//! Image loading into color samples
//!
//! Decodes raster images with the `image` crate and turns every pixel into a
//! [`ColorSample`], so a photo can be clustered directly or converted into a
//! CSV dataset.
//!
//! ## Supported Formats
//!
//! - JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI
//!
//! Alpha is discarded; fully transparent pixels are kept as their RGB value.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::dataset::{ColorSample, Dataset};
use crate::error::{DataError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }
}

/// Load an image and return one sample per pixel in row-major order
///
/// # Errors
///
/// Returns `DataError::InvalidParameter` for an unsupported extension and
/// `DataError::ImageLoad` if the file cannot be opened or decoded.
///
/// # Example
///
/// ```rust,no_run
/// use dominant_colors::image_loader::load_image_samples;
/// use std::path::Path;
///
/// let dataset = load_image_samples(Path::new("photo.jpg"))?;
/// println!("{} pixels", dataset.len());
/// # Ok::<(), dominant_colors::DataError>(())
/// ```
pub fn load_image_samples(path: &Path) -> Result<Dataset> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(DataError::invalid_parameter(
            "image format",
            format!(
                "{} (supported: {})",
                path.display(),
                supported_extensions().join(", ")
            ),
        ));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        DataError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        DataError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let dataset = image_to_samples(&img);
    debug!(path = %path.display(), pixels = dataset.len(), "loaded image");
    Ok(dataset)
}

/// Convert a decoded image to samples, row-major
pub fn image_to_samples(img: &DynamicImage) -> Dataset {
    img.to_rgb8()
        .pixels()
        .map(|pixel| ColorSample::from(pixel.0))
        .collect()
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}

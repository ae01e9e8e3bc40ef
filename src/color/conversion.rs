//! Color space conversion utilities
//!
//! Moves colors between the integer channel form used by datasets, the
//! unit-scaled sRGB form the clustering backend works on, and CIE L*a*b*.

use palette::{FromColor, IntoColor, Lab, Srgb};

use crate::constants::channel;
use crate::dataset::ColorSample;

/// Stateless converter between integer channels, sRGB and Lab
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a sample to sRGB with components scaled to [0, 1]
    ///
    /// Out-of-range channels are scaled, not clamped.
    pub fn sample_to_srgb(&self, sample: &ColorSample) -> Srgb {
        Srgb::new(
            (sample.r as f64 / channel::MAX) as f32,
            (sample.g as f64 / channel::MAX) as f32,
            (sample.b as f64 / channel::MAX) as f32,
        )
    }

    /// Convert a sample to Lab color space (D65)
    pub fn sample_to_lab(&self, sample: &ColorSample) -> Lab {
        Lab::from_color(self.sample_to_srgb(sample))
    }

    /// Scale a unit sRGB color back to 0-255 channels
    pub fn srgb_to_channels(&self, srgb: Srgb) -> [f64; 3] {
        [
            srgb.red as f64 * channel::MAX,
            srgb.green as f64 * channel::MAX,
            srgb.blue as f64 * channel::MAX,
        ]
    }

    /// Convert Lab to 0-255 channels, clamped to the sRGB gamut
    pub fn lab_to_channels(&self, lab: Lab) -> [f64; 3] {
        let srgb: Srgb = lab.into_color();
        self.srgb_to_channels(Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        ))
    }

    /// Format integer channels as `#RRGGBB`, clamping each to [0, 255]
    pub fn channels_to_hex(&self, channels: [i64; 3]) -> String {
        let [r, g, b] = channels.map(|c| c.clamp(0, 255) as u8);
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

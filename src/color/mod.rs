//! Color conversion module
//!
//! Conversions between dataset channels, sRGB and CIE L*a*b* used by the
//! clusterer and the output formatter.

pub mod conversion;

pub use conversion::ColorConverter;

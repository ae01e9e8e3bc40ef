//! Color samples and the in-memory dataset

use serde::{Deserialize, Serialize};

/// One input row: red, green and blue integer values
///
/// Values are conceptually 8-bit channels but are not range checked on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSample {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl ColorSample {
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in (r, g, b) order
    pub fn channels(&self) -> [i64; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether every channel lies within [0, 255]
    pub fn is_in_gamut(&self) -> bool {
        self.channels().iter().all(|c| (0..=255).contains(c))
    }
}

impl From<[u8; 3]> for ColorSample {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as i64, rgb[1] as i64, rgb[2] as i64)
    }
}

/// Ordered sequence of color samples, loaded fully into memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    samples: Vec<ColorSample>,
}

impl Dataset {
    pub fn new(samples: Vec<ColorSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }

    /// Distinct colors in first-seen order
    pub fn distinct(&self) -> Vec<ColorSample> {
        let mut seen = std::collections::HashSet::new();
        self.samples
            .iter()
            .copied()
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

impl From<Vec<ColorSample>> for Dataset {
    fn from(samples: Vec<ColorSample>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<ColorSample> for Dataset {
    fn from_iter<I: IntoIterator<Item = ColorSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamut_check() {
        assert!(ColorSample::new(0, 128, 255).is_in_gamut());
        assert!(!ColorSample::new(-1, 0, 0).is_in_gamut());
        assert!(!ColorSample::new(0, 256, 0).is_in_gamut());
    }

    #[test]
    fn test_distinct_keeps_first_seen_order() {
        let dataset: Dataset = vec![
            ColorSample::new(9, 9, 9),
            ColorSample::new(1, 2, 3),
            ColorSample::new(9, 9, 9),
            ColorSample::new(1, 2, 3),
        ]
        .into();

        assert_eq!(
            dataset.distinct(),
            vec![ColorSample::new(9, 9, 9), ColorSample::new(1, 2, 3)]
        );
    }

    #[test]
    fn test_from_u8_triplet() {
        assert_eq!(ColorSample::from([255, 0, 7]), ColorSample::new(255, 0, 7));
    }
}

//! "New segment" palette.
//!
//! The palette offers one candidate segment that can be dragged onto the
//! timeline. Once a candidate has been placed the palette is refilled with a
//! fresh candidate (new id, independently randomized length).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// Length range for generated candidates (px, inclusive, whole pixels)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub min_length: f32,
    pub max_length: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            min_length: 50.0,
            max_length: 350.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Palette {
    config: PaletteConfig,
    candidate: Segment,
}

impl Palette {
    pub fn new(config: PaletteConfig) -> Self {
        let candidate = Self::generate_with(&config, &mut rand::rng());
        Self { config, candidate }
    }

    /// Current candidate
    pub fn candidate(&self) -> &Segment {
        &self.candidate
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Replace candidate with a freshly generated one, returning the old one
    pub fn regenerate(&mut self) -> Segment {
        self.regenerate_with(&mut rand::rng())
    }

    pub fn regenerate_with<R: Rng>(&mut self, rng: &mut R) -> Segment {
        let next = Self::generate_with(&self.config, rng);
        log::debug!("Palette candidate {} -> {} (len {})", self.candidate.id, next.id, next.length);
        std::mem::replace(&mut self.candidate, next)
    }

    /// Build a candidate at start 0 with length in `[min_length, max_length]`
    pub fn generate_with<R: Rng>(config: &PaletteConfig, rng: &mut R) -> Segment {
        let min = config.min_length.max(0.0).round();
        let span = (config.max_length.round() - min).max(0.0) as u32;
        let length = min + rng.random_range(0..=span) as f32;
        Segment::new(0.0, length)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

//! # Configuration Module - Engine Settings
//!
//! This module provides configuration options for the statistics engine.
//! Configuration affects the reading-time estimate and the presentational
//! scaling caps; it never changes what counts as a word, sentence, or
//! paragraph.
//!
//! ## Usage
//!
//! ```rust
//! use lexis::EngineConfig;
//!
//! // Use default configuration
//! let config = EngineConfig::default();
//!
//! // Custom configuration
//! let config = EngineConfig {
//!     words_per_minute: 180, // Slower reader
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Runtime configuration for statistics calculation
///
/// Controls the single tunable of the engine: the reading speed assumed for
/// the reading-time estimate. All other rules (word constituents, sentence
/// terminators, paragraph boundaries) are fixed so that identical input
/// always produces identical reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Assumed reading speed, in words per minute
    ///
    /// Used for [`TextStatistics::reading_time_minutes`], which is the
    /// ceiling of `word_count / words_per_minute`. A value of `0` is treated
    /// as `1` so that the calculation stays total.
    ///
    /// **Default**: 200 (a common average for adult readers)
    ///
    /// [`TextStatistics::reading_time_minutes`]: crate::TextStatistics::reading_time_minutes
    pub words_per_minute: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// Presentation-scaling caps for each reported metric
///
/// Each cap is the value at which a progress indicator for that metric is
/// considered full. The caps carry no statistical meaning; they exist so a
/// presentation layer can turn raw counts into bounded percentages via
/// [`normalize_for_display`].
///
/// [`normalize_for_display`]: crate::normalize_for_display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayCaps {
    /// Cap for the word count gauge
    pub words: usize,
    /// Cap for the character count gauge
    pub chars: usize,
    /// Cap for the whitespace-free character count gauge
    pub chars_no_space: usize,
    /// Cap for the paragraph count gauge
    pub paragraphs: usize,
    /// Cap for the sentence count gauge
    pub sentences: usize,
    /// Cap for the reading time gauge, in minutes
    pub reading_minutes: usize,
}

impl Default for DisplayCaps {
    fn default() -> Self {
        Self {
            words: 1000,
            chars: 5000,
            chars_no_space: 4000,
            paragraphs: 50,
            sentences: 100,
            reading_minutes: 10,
        }
    }
}

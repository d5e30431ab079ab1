//! # Report Module - The Statistics Report
//!
//! This module provides [`TextStatistics`], the single product of the crate:
//! a full statistics report over a piece of text. A report is constructed
//! fresh from the text on every call and never mutated in place.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::math::{mean_rounded, reading_time_minutes};
use crate::scan::{paragraph_count, sentence_count, words};
use crate::Float;

/// A complete statistics report over a piece of text
///
/// All fields are derived deterministically from the input text and an
/// [`EngineConfig`]; there is no hidden state and no randomness.
/// Calculating a report twice over the same input yields bit-identical
/// results.
///
/// # Counting rules
///
/// - **Words** are maximal runs of letters (any script), digits, and
///   underscores, scanned over the trimmed text.
/// - **Characters** are Unicode scalar values; the whitespace-free variant
///   drops every whitespace character wherever it occurs.
/// - **Paragraphs** are newline-separated segments with non-empty trimmed
///   content.
/// - **Sentences** are runs of non-terminator characters closed by one or
///   more of `.`, `!`, `?`. Text without terminal punctuation has zero
///   sentences.
/// - **Reading time** is the ceiling of `word_count / words_per_minute`.
/// - Averages are rounded to one fractional digit and resolve to `0` when
///   their denominator is zero.
///
/// # Examples
///
/// ```rust
/// use lexis::{EngineConfig, TextStatistics};
///
/// let config = EngineConfig::default();
/// let report = TextStatistics::calculate("Hello world.", &config);
///
/// assert_eq!(report.word_count, 2);
/// assert_eq!(report.char_count, 12);
/// assert_eq!(report.char_count_no_space, 11);
/// assert_eq!(report.sentence_count, 1);
/// assert_eq!(report.reading_time_minutes, 1);
/// assert_eq!(report.avg_word_length, 5.0);
/// assert_eq!(report.avg_words_per_sentence, 2.0);
///
/// // Degenerate input resolves to zeroes instead of failing
/// let empty = TextStatistics::calculate("", &config);
/// assert_eq!(empty, TextStatistics::default());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TextStatistics {
    /// Number of words
    pub word_count: usize,
    /// Number of characters, whitespace included
    pub char_count: usize,
    /// Number of characters, whitespace excluded
    pub char_count_no_space: usize,
    /// Number of paragraphs
    pub paragraph_count: usize,
    /// Number of sentences
    pub sentence_count: usize,
    /// Estimated reading time in whole minutes
    pub reading_time_minutes: usize,
    /// Mean word length in characters, one fractional digit
    pub avg_word_length: Float,
    /// Mean words per sentence, one fractional digit
    pub avg_words_per_sentence: Float,
}

impl TextStatistics {
    /// Calculate a report over `text`
    ///
    /// Total over every possible string: empty input, whitespace-only input,
    /// punctuation-only input, and mixed-script input all produce a report,
    /// never an error. Runs in a bounded number of linear passes over the
    /// text.
    pub fn calculate(text: &str, config: &EngineConfig) -> Self {
        let mut word_count = 0;
        let mut word_chars = 0;

        for word in words(text) {
            word_count += 1;
            word_chars += word.chars().count();
        }

        let sentence_count = sentence_count(text);

        Self {
            word_count,
            char_count: text.chars().count(),
            char_count_no_space: text
                .chars()
                .filter(|character| !character.is_whitespace())
                .count(),
            paragraph_count: paragraph_count(text),
            sentence_count,
            reading_time_minutes: reading_time_minutes(word_count, config.words_per_minute),
            avg_word_length: mean_rounded(word_chars, word_count),
            avg_words_per_sentence: mean_rounded(word_count, sentence_count),
        }
    }
}

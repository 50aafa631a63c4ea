//! Segmentation parameters.
//!
//! ## The Three Knobs
//!
//! Paragraph breaks are decided by three interacting parameters:
//!
//! - `threshold`: how similar a sentence must be to its recent neighbors to
//!   stay in the paragraph. Below it, we break.
//! - `max_sentences`: a hard cap on paragraph length. Even a perfectly
//!   coherent run of sentences breaks here.
//! - `window_size`: how many preceding sentences the similarity is averaged
//!   over. Larger windows smooth out single-sentence digressions.
//!
//! ## Choosing a Threshold
//!
//! | Threshold | Effect |
//! |-----------|--------|
//! | 0.5 | Only breaks on hard topic shifts, long paragraphs |
//! | 0.65 | Balanced (default) |
//! | 0.8 | Very sensitive, many short paragraphs |
//!
//! Cosine similarity ranges over [-1, 1], so any threshold in that range is
//! accepted; values near the extremes degenerate into "never break on
//! similarity" (-1) or "always break" (1).
//!
//! ## Why a Validating Builder?
//!
//! A `window_size` or `max_sentences` of zero makes the algorithm
//! meaningless (an empty comparison window, a paragraph that can hold
//! nothing). Rather than checking on every `segment` call, the fields are
//! private and every way of constructing a config validates, so a
//! `SegmenterConfig` in hand is always usable.

/// Configuration for the paragraph segmenter.
///
/// # Examples
///
/// ```rust
/// use graf::SegmenterConfig;
///
/// // Defaults: threshold 0.65, max 4 sentences, window of 2
/// let config = SegmenterConfig::new();
/// assert_eq!(config.max_sentences(), 4);
///
/// // Tuned for longer, looser paragraphs
/// let config = SegmenterConfig::new()
///     .with_threshold(0.5)?
///     .with_max_sentences(8)?;
/// assert_eq!(config.max_sentences(), 8);
/// # Ok::<(), graf::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmenterConfig {
    threshold: f32,
    max_sentences: usize,
    window_size: usize,
}

impl SegmenterConfig {
    /// Create a config with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The similarity threshold below which a paragraph break occurs.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The maximum number of sentences per paragraph.
    #[must_use]
    pub const fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    /// The number of preceding sentence vectors compared against.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Set the similarity threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is outside [-1, 1] or is NaN.
    pub fn with_threshold(self, threshold: f32) -> Result<Self, ConfigError> {
        if (-1.0..=1.0).contains(&threshold) {
            Ok(Self { threshold, ..self })
        } else {
            Err(ConfigError::ThresholdOutOfRange(threshold))
        }
    }

    /// Set the maximum sentences per paragraph.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_sentences` is zero.
    pub fn with_max_sentences(self, max_sentences: usize) -> Result<Self, ConfigError> {
        if max_sentences == 0 {
            Err(ConfigError::ZeroMaxSentences)
        } else {
            Ok(Self {
                max_sentences,
                ..self
            })
        }
    }

    /// Set the comparison window size.
    ///
    /// # Errors
    ///
    /// Returns an error if `window_size` is zero.
    pub fn with_window_size(self, window_size: usize) -> Result<Self, ConfigError> {
        if window_size == 0 {
            Err(ConfigError::ZeroWindowSize)
        } else {
            Ok(Self {
                window_size,
                ..self
            })
        }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            threshold: 0.65,
            max_sentences: 4,
            window_size: 2,
        }
    }
}

/// Error when configuring the segmenter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Threshold must be a cosine similarity value in [-1, 1].
    #[error("threshold {0} outside [-1, 1]")]
    ThresholdOutOfRange(f32),

    /// A paragraph must be able to hold at least one sentence.
    #[error("max_sentences must be >= 1")]
    ZeroMaxSentences,

    /// The comparison window must hold at least one vector.
    #[error("window_size must be >= 1")]
    ZeroWindowSize,
}

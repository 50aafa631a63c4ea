//! The paragraph segmenter: a windowed, thresholded, length-bounded greedy
//! pass over an embedded sentence sequence.
//!
//! ## The Algorithm
//!
//! ```text
//! Sentences:   [S0] [S1] [S2] [S3] [S4] ...
//! Window:       { up to window_size most recent vectors before Si }
//!
//! For each Si (i >= 1):
//!   avg = mean cosine(Si, each vector in window)
//!
//!   break if avg < threshold            <- topic shifted
//!        or paragraph is max_sentences  <- length cap
//!
//!   on break:    emit paragraph, start fresh with Si, window = {Vi}
//!   otherwise:   append Si, push Vi (oldest evicted past window_size)
//! ```
//!
//! The window always holds vectors *prior to* the current sentence, so the
//! decision for Si never compares Si against itself.
//!
//! ## Why Greedy?
//!
//! A single forward pass is O(N × window_size) and needs only the window as
//! auxiliary state. It does not guarantee globally optimal segmentation; for
//! prose reflow that trade is the right one, since embedding generation
//! dwarfs the segmentation cost anyway.
//!
//! ## Guarantees
//!
//! - Output paragraphs partition the input: every sentence appears exactly
//!   once, in order.
//! - No paragraph exceeds `max_sentences`; none is empty.
//! - Pure and deterministic: same sentences and config, same output.

use crate::similarity::norm;
use crate::window::Window;
use crate::{Error, Paragraph, Result, SegmenterConfig, Sentence};

/// Groups embedded sentences into semantically coherent paragraphs.
///
/// Stateless across calls: the segmenter owns only its configuration, so a
/// single instance can serve concurrent callers on independent inputs.
///
/// ## Example
///
/// ```rust
/// use graf::{ParagraphSegmenter, SegmenterConfig, Sentence};
///
/// let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
///
/// let sentences = vec![
///     Sentence::new("Dogs bark.", vec![1.0, 0.0]),
///     Sentence::new("Puppies play.", vec![0.99, 0.01]),
///     Sentence::new("Stocks fell.", vec![0.0, 1.0]),
/// ];
///
/// let paragraphs = segmenter.segment(sentences)?;
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].text, "Dogs bark. Puppies play.");
/// assert_eq!(paragraphs[1].text, "Stocks fell.");
/// # Ok::<(), graf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphSegmenter {
    config: SegmenterConfig,
}

impl ParagraphSegmenter {
    /// Create a segmenter with the given configuration.
    #[must_use]
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// The segmenter's configuration.
    #[must_use]
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Group a sentence sequence into paragraphs.
    ///
    /// Accepts any finite iterable of sentences; the input is consumed in a
    /// single forward pass. An empty input yields an empty result, a single
    /// sentence yields one single-sentence paragraph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any embedding's dimension
    /// differs from the first sentence's.
    pub fn segment<I>(&self, sentences: I) -> Result<Vec<Paragraph>>
    where
        I: IntoIterator<Item = Sentence>,
    {
        let mut iter = sentences.into_iter();
        let Some(first) = iter.next() else {
            return Ok(Vec::new());
        };

        let dim = first.dim();
        let mut window = Window::new(self.config.window_size());
        let first_norm = norm(&first.embedding);
        window.reset(first.embedding, first_norm);

        let mut paragraphs = Vec::new();
        let mut current = vec![first.text];
        let mut start = 0;

        for (offset, sentence) in iter.enumerate() {
            let i = offset + 1;
            if sentence.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: sentence.dim(),
                });
            }

            let vector_norm = norm(&sentence.embedding);
            let avg_similarity = window.mean_similarity(&sentence.embedding, vector_norm);

            let topic_shift = avg_similarity < self.config.threshold();
            let length_cap = current.len() >= self.config.max_sentences();

            if topic_shift || length_cap {
                paragraphs.push(Paragraph::new(
                    current.join(" "),
                    start,
                    i,
                    paragraphs.len(),
                ));
                current = vec![sentence.text];
                start = i;
                window.reset(sentence.embedding, vector_norm);
            } else {
                current.push(sentence.text);
                window.push(sentence.embedding, vector_norm);
            }
        }

        let end = start + current.len();
        paragraphs.push(Paragraph::new(
            current.join(" "),
            start,
            end,
            paragraphs.len(),
        ));

        Ok(paragraphs)
    }

    /// Like [`segment`](Self::segment), returning just the paragraph texts.
    ///
    /// # Errors
    ///
    /// Same as [`segment`](Self::segment).
    pub fn segment_to_strings<I>(&self, sentences: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = Sentence>,
    {
        Ok(self
            .segment(sentences)?
            .into_iter()
            .map(|p| p.text)
            .collect())
    }
}

impl Default for ParagraphSegmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::new())
    }
}

//! The sentence vectorizer port and its fastembed backend.
//!
//! The segmenter consumes (sentence, embedding) pairs and doesn't care where
//! they came from. [`SentenceVectorizer`] is the seam: hosts plug in any
//! embedding backend (a local model, a service, a test stub), and the
//! optional `embed` feature provides a ready-made one backed by fastembed.
//!
//! ## Sentence Detection
//!
//! Sentence boundaries are found with Unicode Standard Annex #29 (UAX #29)
//! segmentation. It keeps decimals and abbreviations followed by a lowercase
//! word intact, but treats a period before a capitalized word as a sentence
//! end, so "Dr. Smith" does split:
//!
//! ```text
//! "Pi is 3.14, see e.g. the appendix. Dr. Smith disagrees."
//!         ^            ^             ^    ^
//!         kept         kept          end  end ("Dr." precedes "Smith")
//! ```
//!
//! The over-eager splits are cheap here: a stray fragment is just a short
//! sentence, and the similarity window groups it back with its neighbors.

use unicode_segmentation::UnicodeSegmentation;

use crate::{ProgressObserver, Result, Sentence};

/// Splits text into sentences and embeds each one.
///
/// ## Contract
///
/// - Sentence texts are trimmed of leading/trailing whitespace; whitespace-only
///   spans are dropped.
/// - Empty input text yields an empty sequence.
/// - Every sentence carries exactly one embedding, all of the same dimension.
/// - If a `progress` observer is given, it is called with monotonically
///   increasing fractions in `[0, 1)` as embedding proceeds.
pub trait SentenceVectorizer: Send + Sync {
    /// Split `text` into sentences and embed each one, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Embedding`](crate::Error::Embedding) if the backend
    /// fails to produce embeddings.
    fn split_and_embed(
        &self,
        text: &str,
        progress: Option<&dyn ProgressObserver>,
    ) -> Result<Vec<Sentence>>;
}

/// Split text into trimmed, non-empty sentences using UAX #29 boundaries.
///
/// ```rust
/// let sentences = graf::split_sentences("Hello world. How are you?");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(feature = "embed")]
mod fastembed_backend {
    use super::{split_sentences, SentenceVectorizer};
    use crate::{Error, ProgressObserver, Result, Sentence};

    /// Sentence vectorizer backed by fastembed's local embedding models.
    ///
    /// Uses fastembed's default model (BGE-small-en, 384 dimensions) and
    /// embeds sentences in batches to bound peak memory, reporting
    /// fractional progress between batches.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use graf::{FastembedVectorizer, SentenceVectorizer};
    ///
    /// let vectorizer = FastembedVectorizer::new()?;
    /// let sentences = vectorizer.split_and_embed(document, None)?;
    /// ```
    pub struct FastembedVectorizer {
        model: fastembed::TextEmbedding,
        batch_size: usize,
    }

    impl FastembedVectorizer {
        /// Create a vectorizer with fastembed's default embedding model.
        ///
        /// # Errors
        ///
        /// Returns an error if the embedding model fails to load.
        pub fn new() -> Result<Self> {
            let model = fastembed::TextEmbedding::try_new(Default::default())
                .map_err(|e| Error::Embedding(e.to_string()))?;

            Ok(Self {
                model,
                batch_size: 50,
            })
        }

        /// Set the number of sentences embedded per batch.
        ///
        /// Smaller batches lower peak memory and report progress more often.
        ///
        /// # Panics
        ///
        /// Panics if `batch_size == 0`.
        #[must_use]
        pub fn with_batch_size(mut self, batch_size: usize) -> Self {
            assert!(batch_size > 0, "batch_size must be > 0");
            self.batch_size = batch_size;
            self
        }
    }

    impl SentenceVectorizer for FastembedVectorizer {
        fn split_and_embed(
            &self,
            text: &str,
            progress: Option<&dyn ProgressObserver>,
        ) -> Result<Vec<Sentence>> {
            let texts = split_sentences(text);
            if texts.is_empty() {
                return Ok(Vec::new());
            }

            let total = texts.len();
            let mut sentences = Vec::with_capacity(total);

            for (batch_idx, batch) in texts.chunks(self.batch_size).enumerate() {
                let refs: Vec<&str> = batch.iter().map(String::as_str).collect();
                let embeddings = self
                    .model
                    .embed(refs, None)
                    .map_err(|e| Error::Embedding(e.to_string()))?;

                for (sentence_text, embedding) in batch.iter().zip(embeddings) {
                    sentences.push(Sentence::new(sentence_text.clone(), embedding));
                }

                if let Some(observer) = progress {
                    observer.on_progress((batch_idx * self.batch_size) as f32 / total as f32);
                }
            }

            Ok(sentences)
        }
    }

    impl std::fmt::Debug for FastembedVectorizer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("FastembedVectorizer")
                .field("batch_size", &self.batch_size)
                .finish()
        }
    }
}

#[cfg(feature = "embed")]
pub use fastembed_backend::FastembedVectorizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("One. Two! Three?");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_split_trims_whitespace() {
        let sentences = split_sentences("  First sentence.   Second sentence.  ");
        assert_eq!(sentences, vec!["First sentence.", "Second sentence."]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_keeps_lowercase_continuations() {
        // A period before a lowercase word or a digit is not a boundary.
        let sentences = split_sentences("See e.g. the value 3.14 for pi. Then continue.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("See e.g. the value 3.14"));
    }

    #[test]
    fn test_split_breaks_before_capitalized_words() {
        // UAX #29 treats a period before a capitalized word as a sentence
        // end, abbreviation or not, so "Dr. Smith" splits after "Dr.".
        let sentences = split_sentences("Dr. Smith arrived. He sat down.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Dr.");
        assert_eq!(sentences[1], "Smith arrived.");
        assert_eq!(sentences[2], "He sat down.");
    }
}

//! # graf
//!
//! Semantic paragraph segmentation: group a sequence of sentences into
//! coherent paragraphs using sentence-embedding similarity.
//!
//! ## The Problem
//!
//! Transcripts, OCR dumps, and scraped text arrive as walls of sentences
//! with no paragraph structure. Splitting every N sentences restores
//! *shape* but not *meaning*: a mechanical break lands mid-thought as often
//! as between thoughts.
//!
//! Sentences about the same topic have similar embeddings. Where similarity
//! drops, the topic shifted, and that's where a paragraph break belongs.
//!
//! ## The Algorithm
//!
//! A single greedy forward pass with a sliding comparison window:
//!
//! ```text
//! Sentences:   [S0] [S1] [S2] [S3] [S4]
//! Embeddings:   E0   E1   E2   E3   E4
//!
//! For S3: window = {E1, E2}        (window_size = 2, vectors before S3)
//!         avg = mean(cos(E3,E1), cos(E3,E2)) = 0.21
//!                                               ↑ below threshold!
//!
//! Break:  "S0 S1 S2" | start new paragraph at S3
//! ```
//!
//! Two independent break conditions, either suffices:
//!
//! 1. **Topic shift**: average similarity against the window drops below
//!    `threshold`.
//! 2. **Length cap**: the paragraph already holds `max_sentences` sentences.
//!
//! The pass is O(N × window_size) time and O(window_size) extra memory,
//! pure, and deterministic. It is greedy: no lookahead, no global optimum,
//! which is the right trade when embedding generation dominates the cost.
//!
//! ## Quick Start
//!
//! ```rust
//! use graf::{ParagraphSegmenter, SegmenterConfig, Sentence};
//!
//! // Embeddings normally come from a model; tiny vectors for illustration.
//! let sentences = vec![
//!     Sentence::new("Whales are mammals.", vec![0.9, 0.1]),
//!     Sentence::new("They nurse their young.", vec![0.88, 0.12]),
//!     Sentence::new("The market closed lower.", vec![0.1, 0.9]),
//! ];
//!
//! let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
//! let paragraphs = segmenter.segment(sentences)?;
//!
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(paragraphs[0].text, "Whales are mammals. They nurse their young.");
//! # Ok::<(), graf::Error>(())
//! ```
//!
//! ## End-to-End (requires the `embed` feature)
//!
//! ```rust,ignore
//! use graf::{segment_text, FastembedVectorizer, SegmenterConfig};
//!
//! let vectorizer = FastembedVectorizer::new()?;
//! let progress = |fraction: f32| eprintln!("{:.0}%", fraction * 100.0);
//!
//! let reflowed = segment_text(
//!     &raw_transcript,
//!     &vectorizer,
//!     SegmenterConfig::new(),
//!     Some(&progress),
//! )?;
//! ```
//!
//! ## Tuning
//!
//! | Parameter | Default | Effect of raising it |
//! |-----------|---------|----------------------|
//! | `threshold` | 0.65 | More breaks, shorter paragraphs |
//! | `max_sentences` | 4 | Longer paragraphs allowed |
//! | `window_size` | 2 | Smoother decisions, slower to react |
//!
//! ## Scope
//!
//! The crate decides *where paragraph breaks fall*. Sentence boundary
//! detection and embedding generation sit behind the [`SentenceVectorizer`]
//! seam (a fastembed backend ships behind the `embed` feature); rendering,
//! file I/O, and UI belong to the host.

mod config;
mod error;
mod markers;
mod progress;
mod segmenter;
mod sentence;
mod similarity;
mod vectorize;
mod window;

pub use config::{ConfigError, SegmenterConfig};
pub use error::{Error, Result};
pub use markers::{format_timestamp, isolate_time_markers};
pub use progress::ProgressObserver;
pub use segmenter::ParagraphSegmenter;
pub use sentence::{Paragraph, Sentence};
pub use similarity::cosine;
pub use vectorize::{split_sentences, SentenceVectorizer};

#[cfg(feature = "embed")]
pub use vectorize::FastembedVectorizer;

/// Split, embed, and segment `text`, returning paragraphs joined by blank
/// lines.
///
/// This is the whole pipeline in one call: the vectorizer produces the
/// embedded sentence sequence (reporting progress to `progress` if given),
/// the segmenter groups it, and the paragraphs are joined with `"\n\n"`.
/// Callers rendering transcripts typically pass the result through
/// [`isolate_time_markers`] afterwards.
///
/// # Errors
///
/// Propagates vectorizer failures ([`Error::Embedding`]) and malformed
/// embedding sequences ([`Error::DimensionMismatch`]).
pub fn segment_text(
    text: &str,
    vectorizer: &dyn SentenceVectorizer,
    config: SegmenterConfig,
    progress: Option<&dyn ProgressObserver>,
) -> Result<String> {
    let sentences = vectorizer.split_and_embed(text, progress)?;
    let paragraphs = ParagraphSegmenter::new(config).segment_to_strings(sentences)?;
    Ok(paragraphs.join("\n\n"))
}

//! The Sentence and Paragraph types.

/// A sentence paired with its embedding vector.
///
/// The embedding is a dense, fixed-dimension representation of the
/// sentence's meaning, suitable for cosine similarity comparison. All
/// sentences in one sequence must share the same dimension; the segmenter
/// rejects sequences that don't.
///
/// ```rust
/// use graf::Sentence;
///
/// let sentence = Sentence::new("The sky is blue.", vec![0.1, 0.9, 0.0]);
/// assert_eq!(sentence.dim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// The embedding vector.
    pub embedding: Vec<f32>,
}

impl Sentence {
    /// Create a new sentence.
    #[must_use]
    pub fn new(text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            text: text.into(),
            embedding,
        }
    }

    /// The dimension of this sentence's embedding.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.embedding.len()
    }
}

/// A paragraph: a run of consecutive sentences joined with single spaces.
///
/// ## Sentence Index Ranges
///
/// `start` and `end` are *sentence indices* into the input sequence, not
/// byte offsets. Paragraphs partition the input: every sentence lands in
/// exactly one paragraph, in order, with no gaps or overlaps.
///
/// ```text
/// Sentences:  [S0] [S1] [S2] [S3] [S4]
/// Paragraph 0: start=0, end=3   "S0 S1 S2"
/// Paragraph 1: start=3, end=5   "S3 S4"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// The paragraph text: member sentences joined with single spaces.
    pub text: String,
    /// Index of the first sentence in this paragraph.
    pub start: usize,
    /// Index one past the last sentence (exclusive).
    pub end: usize,
    /// Zero-based position of this paragraph in the output sequence.
    pub index: usize,
}

impl Paragraph {
    /// Create a new paragraph.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The number of sentences in this paragraph.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.end - self.start
    }

    /// The sentence index range covered by this paragraph.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The length of the paragraph text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the paragraph text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Paragraph {{ index: {}, sentences: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}

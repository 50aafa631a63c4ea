//! Integration tests for paragraph segmentation.
//!
//! These exercise the public API end to end with synthetic embeddings:
//! deterministic vectors whose similarities we control exactly.

use graf::{
    isolate_time_markers, Error, Paragraph, ParagraphSegmenter, SegmenterConfig, Sentence,
};

/// Five sentences: A, B, C mutually near-identical; D, E near-identical to
/// each other but dissimilar to the first three.
fn two_topic_document() -> Vec<Sentence> {
    vec![
        Sentence::new("A.", vec![1.0, 0.0, 0.01]),
        Sentence::new("B.", vec![0.99, 0.01, 0.0]),
        Sentence::new("C.", vec![0.98, 0.0, 0.02]),
        Sentence::new("D.", vec![0.05, 1.0, 0.0]),
        Sentence::new("E.", vec![0.06, 0.99, 0.01]),
    ]
}

#[test]
fn two_topics_split_into_two_paragraphs() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let paragraphs = segmenter.segment(two_topic_document()).unwrap();

    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].text, "A. B. C.");
    assert_eq!(paragraphs[1].text, "D. E.");
}

#[test]
fn paragraphs_partition_the_input() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let paragraphs = segmenter.segment(two_topic_document()).unwrap();

    let total: usize = paragraphs.iter().map(Paragraph::sentence_count).sum();
    assert_eq!(total, 5);

    let mut cursor = 0;
    for paragraph in &paragraphs {
        assert_eq!(paragraph.start, cursor);
        assert!(paragraph.end > paragraph.start, "empty paragraph");
        cursor = paragraph.end;
    }
    assert_eq!(cursor, 5);
}

#[test]
fn empty_input_yields_empty_output() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let paragraphs = segmenter.segment(Vec::new()).unwrap();
    assert!(paragraphs.is_empty());
}

#[test]
fn single_sentence_yields_single_paragraph() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let paragraphs = segmenter
        .segment(vec![Sentence::new("Only one.", vec![0.5, 0.5])])
        .unwrap();

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text, "Only one.");
}

#[test]
fn threshold_one_isolates_imperfect_neighbors() {
    // All pairwise similarities are below 1.0, so every step breaks.
    let sentences: Vec<Sentence> = (0..6)
        .map(|i| {
            let angle = i as f32 * 0.3;
            Sentence::new(format!("S{i}."), vec![angle.cos(), angle.sin()])
        })
        .collect();

    let config = SegmenterConfig::new().with_threshold(1.0).unwrap();
    let paragraphs = ParagraphSegmenter::new(config).segment(sentences).unwrap();

    assert_eq!(paragraphs.len(), 6);
    assert!(paragraphs.iter().all(|p| p.sentence_count() == 1));
}

#[test]
fn max_sentences_one_yields_n_paragraphs() {
    // Identical vectors: similarity alone would never break.
    let sentences = vec![Sentence::new("Same.", vec![1.0, 0.0]); 7];
    let config = SegmenterConfig::new().with_max_sentences(1).unwrap();

    let paragraphs = ParagraphSegmenter::new(config).segment(sentences).unwrap();
    assert_eq!(paragraphs.len(), 7);
}

#[test]
fn length_cap_applies_even_to_coherent_runs() {
    let sentences = vec![Sentence::new("Same.", vec![1.0, 0.0]); 10];
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());

    let paragraphs = segmenter.segment(sentences).unwrap();
    // max_sentences = 4: expect 4 + 4 + 2
    assert_eq!(
        paragraphs
            .iter()
            .map(Paragraph::sentence_count)
            .collect::<Vec<_>>(),
        vec![4, 4, 2]
    );
}

#[test]
fn dimension_mismatch_is_rejected() {
    let sentences = vec![
        Sentence::new("A.", vec![1.0, 0.0, 0.0]),
        Sentence::new("B.", vec![1.0, 0.0]),
    ];

    let err = ParagraphSegmenter::new(SegmenterConfig::new())
        .segment(sentences)
        .unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn zero_norm_embedding_degrades_gracefully() {
    // A zero vector must not panic or poison the run; it reads as
    // similarity 0.0 and forces a break around itself.
    let sentences = vec![
        Sentence::new("A.", vec![1.0, 0.0]),
        Sentence::new("B.", vec![0.0, 0.0]),
        Sentence::new("C.", vec![1.0, 0.0]),
    ];

    let paragraphs = ParagraphSegmenter::new(SegmenterConfig::new())
        .segment(sentences)
        .unwrap();
    let total: usize = paragraphs.iter().map(Paragraph::sentence_count).sum();
    assert_eq!(total, 3);
}

#[test]
fn identical_runs_are_identical() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let a = segmenter.segment(two_topic_document()).unwrap();
    let b = segmenter.segment(two_topic_document()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rendered_output_isolates_time_markers() {
    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let sentences = vec![
        Sentence::new("[00:00] Welcome back.", vec![1.0, 0.0]),
        Sentence::new("Today we cover embeddings.", vec![0.97, 0.03]),
    ];

    let texts = segmenter.segment_to_strings(sentences).unwrap();
    let rendered = isolate_time_markers(&texts.join("\n\n"));

    assert!(rendered.contains("\n\n[00:00]\n\n"));
    assert!(rendered.contains("Today we cover embeddings."));
}

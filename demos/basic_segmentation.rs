//! Basic Paragraph Segmentation
//!
//! The minimal example: group pre-embedded sentences into paragraphs.
//!
//! ```bash
//! cargo run --example basic_segmentation
//! ```
//!
//! Embeddings here are tiny hand-made vectors so the demo runs without an
//! embedding model; in real use they come from a `SentenceVectorizer`.

use graf::{ParagraphSegmenter, SegmenterConfig, Sentence};

fn main() -> Result<(), graf::Error> {
    let sentences = vec![
        // Topic one: marine biology
        Sentence::new("Whales are the largest mammals.", vec![0.95, 0.05, 0.0]),
        Sentence::new("They surface to breathe air.", vec![0.93, 0.07, 0.01]),
        Sentence::new("Calves stay with mothers for a year.", vec![0.96, 0.04, 0.02]),
        // Topic two: astronomy
        Sentence::new("Jupiter has dozens of moons.", vec![0.02, 0.97, 0.03]),
        Sentence::new("Its red spot is a centuries-old storm.", vec![0.04, 0.95, 0.05]),
    ];

    let segmenter = ParagraphSegmenter::new(SegmenterConfig::new());
    let paragraphs = segmenter.segment(sentences)?;

    println!("Paragraphs: {}\n", paragraphs.len());
    for paragraph in &paragraphs {
        println!(
            "[{}] sentences {}..{}: \"{}\"",
            paragraph.index, paragraph.start, paragraph.end, paragraph.text
        );
    }

    Ok(())
}

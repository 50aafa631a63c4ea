//! Cosine similarity with precomputed norms.
//!
//! The segmenter compares each sentence against up to `window_size`
//! predecessors, so a vector's norm is needed several times. Norms are
//! computed once when a vector enters the pipeline and carried alongside it
//! rather than recomputed per comparison.
//!
//! ## Zero-Norm Vectors
//!
//! A zero vector (an embedding model can produce one for degenerate input)
//! has no direction, so cosine similarity against it is undefined. We define
//! it as 0.0: "no evidence of similarity". This always reads as a topic
//! break under any positive threshold, which is the conservative outcome.

/// The L2 norm of a vector.
#[must_use]
pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity given both vectors and their precomputed norms.
///
/// Returns 0.0 if either norm is zero (see module docs).
#[must_use]
pub fn cosine_from_norms(a: &[f32], norm_a: f32, b: &[f32], norm_b: f32) -> f32 {
    if norm_a > 0.0 && norm_b > 0.0 {
        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// Cosine similarity between two vectors.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    cosine_from_norms(a, norm(a), b, norm(b))
}

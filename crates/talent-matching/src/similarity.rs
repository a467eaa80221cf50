//! Cosine similarity between two embeddings, rescaled from [-1, 1] to [0, 1].

use talent_core::errors::{EmbeddingError, TalentResult};

/// Check shape before any numeric work: both non-empty, equal length, and
/// equal to the deployment dimensionality when one is configured.
pub fn validate_pair(
    job_embedding: &[f32],
    candidate_embedding: &[f32],
    expected_dimensions: Option<usize>,
) -> TalentResult<()> {
    if job_embedding.is_empty() {
        return Err(EmbeddingError::Empty { side: "job".into() }.into());
    }
    if candidate_embedding.is_empty() {
        return Err(EmbeddingError::Empty {
            side: "candidate".into(),
        }
        .into());
    }
    if let Some(expected) = expected_dimensions {
        for actual in [job_embedding.len(), candidate_embedding.len()] {
            if actual != expected {
                return Err(EmbeddingError::DimensionMismatch { expected, actual }.into());
            }
        }
    }
    if job_embedding.len() != candidate_embedding.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: job_embedding.len(),
            actual: candidate_embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// Raw cosine similarity in [-1, 1]. A zero-magnitude vector has no
/// direction and scores 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Map a cosine in [-1, 1] onto [0, 1].
pub fn rescale(cosine: f64) -> f64 {
    ((cosine + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Validated similarity score in [0, 1].
pub fn similarity_score(job_embedding: &[f32], candidate_embedding: &[f32]) -> TalentResult<f64> {
    validate_pair(job_embedding, candidate_embedding, None)?;
    Ok(rescale(cosine_similarity(job_embedding, candidate_embedding)))
}

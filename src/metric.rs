//! # Similarity Metrics Module
//!
//! Distance computations between equal-length vectors. Every metric is
//! normalized to the same orientation: lower score = more similar. This keeps
//! result ordering consistent when callers switch metrics.

use crate::errors::{NearliteError, NearliteResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Similarity metric used to score a query vector against stored vectors
///
/// All metrics return a distance-like score where lower means more similar:
/// - `Cosine`: `1 - cos_similarity(a, b)`, range [0, 2]
/// - `Euclidean`: `||a - b||`, range [0, ∞)
/// - `DotProduct`: `-(a · b)`, negated so orientation matches the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    Cosine,
    Euclidean,
    #[serde(rename = "dot")]
    DotProduct,
}

impl SimilarityMetric {
    /// Compute the distance between two equal-length vectors.
    ///
    /// Callers are responsible for dimension checks; both slices must have the
    /// same length.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Vectors must have the same length");
        match self {
            SimilarityMetric::Cosine => 1.0 - cosine_similarity(a, b),
            SimilarityMetric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            SimilarityMetric::DotProduct => -a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f64>(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Euclidean => "euclidean",
            SimilarityMetric::DotProduct => "dot",
        }
    }
}

impl FromStr for SimilarityMetric {
    type Err = NearliteError;

    fn from_str(s: &str) -> NearliteResult<Self> {
        match s {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "euclidean" => Ok(SimilarityMetric::Euclidean),
            "dot" => Ok(SimilarityMetric::DotProduct),
            other => Err(NearliteError::Configuration {
                reason: format!(
                    "invalid similarity metric: {}. Must be 'cosine', 'euclidean', or 'dot'",
                    other
                ),
            }),
        }
    }
}

impl std::fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosine similarity between two equal-length vectors, in [-1, 1].
///
/// Both slices must have the same length; trailing elements of the longer
/// slice are otherwise ignored. Zero-norm vectors have no direction; they
/// score 0.0, as if orthogonal.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let (mut dot, mut norm_a_sq, mut norm_b_sq) = (0.0, 0.0, 0.0);

    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a_sq += x * x;
        norm_b_sq += y * y;
    }

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

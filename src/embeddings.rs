//! # Embeddings Module
//!
//! The embedding function is the collection's sole external collaborator: a
//! synchronous black box mapping text to a fixed-length vector, injected at
//! collection-creation time. This module defines the trait, a closure adapter
//! ([`FnEmbedder`]) so deterministic test stubs need no hand-written types,
//! and [`HashEmbedder`], a dependency-free embedder for demos and smoke
//! tests.

use crate::errors::{NearliteError, NearliteResult};

/// A synchronous text-to-vector embedding function
///
/// Implementations must be deterministic per input and return vectors of a
/// fixed length for the lifetime of the collection they are attached to; the
/// collection enforces the length on every call and fails the operation with
/// a dimension-mismatch error if it drifts.
pub trait EmbeddingFunction: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f64>;
}

/// Adapter turning a plain closure into an [`EmbeddingFunction`]
///
/// # Examples
///
/// ```rust
/// use nearlite::{EmbeddingFunction, FnEmbedder};
///
/// let stub = FnEmbedder::new(|_text: &str| vec![1.0, 0.0]);
/// assert_eq!(stub.embed("anything"), vec![1.0, 0.0]);
/// ```
pub struct FnEmbedder<F>(F);

impl<F> FnEmbedder<F>
where
    F: Fn(&str) -> Vec<f64> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EmbeddingFunction for FnEmbedder<F>
where
    F: Fn(&str) -> Vec<f64> + Send + Sync,
{
    fn embed(&self, text: &str) -> Vec<f64> {
        (self.0)(text)
    }
}

/// Deterministic feature-hashing embedder
///
/// Hashes lowercased whitespace tokens into a fixed number of signed buckets
/// and L2-normalizes the result. Two texts sharing tokens land in the same
/// buckets, so token overlap translates into cosine similarity. Not a
/// semantic model; it exists so the demo binary and integration tests run
/// without model weights.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create an embedder producing vectors of the given dimension.
    ///
    /// Fails with [`NearliteError::Configuration`] if `dimension` is zero;
    /// there is no bucket to hash a token into.
    pub fn new(dimension: usize) -> NearliteResult<Self> {
        if dimension == 0 {
            return Err(NearliteError::Configuration {
                reason: "embedding dimension must be at least 1".to_string(),
            });
        }
        Ok(Self { dimension })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl EmbeddingFunction for HashEmbedder {
    fn embed(&self, text: &str) -> Vec<f64> {
        use std::hash::{Hash, Hasher};

        let mut values = vec![0.0; self.dimension];
        for token in text.split_whitespace() {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();

            let bucket = (h % self.dimension as u64) as usize;
            // Signed buckets keep unrelated token collisions from always
            // reinforcing each other
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            values[bucket] += sign;
        }

        // L2 normalize; a zero vector (no tokens) stays zero
        let norm: f64 = values.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in values.iter_mut() {
                *v /= norm;
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::cosine_similarity;

    #[test]
    fn test_embedding_dimension() {
        let embedder = HashEmbedder::new(64).unwrap();
        assert_eq!(embedder.dimension(), 64);
        assert_eq!(embedder.embed("hello world").len(), 64);
    }

    #[test]
    fn test_embedding_consistency() {
        let embedder = HashEmbedder::new(64).unwrap();
        let a = embedder.embed("the quick brown fox");
        let b = embedder.embed("the quick brown fox");
        assert_eq!(a, b, "Embeddings should be deterministic");
    }

    #[test]
    fn test_embedding_normalization() {
        let embedder = HashEmbedder::new(64).unwrap();
        let embedding = embedder.embed("test normalization");
        let norm: f64 = embedding.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-10, "Embedding should be L2 normalized");
    }

    #[test]
    fn test_case_and_token_order_insensitive() {
        let embedder = HashEmbedder::new(64).unwrap();
        let a = embedder.embed("Fresh Red Apples");
        let b = embedder.embed("apples red fresh");
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-10, "Bag-of-words embeddings ignore case and order");
    }

    #[test]
    fn test_token_overlap_increases_similarity() {
        let embedder = HashEmbedder::new(256).unwrap();
        let query = embedder.embed("red apples");
        let overlapping = embedder.embed("red fruit");
        let disjoint = embedder.embed("frozen vegetables");

        assert!(cosine_similarity(&query, &overlapping) > cosine_similarity(&query, &disjoint));
    }

    #[test]
    fn test_empty_text_embedding() {
        let embedder = HashEmbedder::new(64).unwrap();
        let embedding = embedder.embed("");
        assert_eq!(embedding.len(), 64);
        assert!(embedding.iter().all(|&x| x == 0.0), "No tokens means a zero vector");
    }

    #[test]
    fn test_zero_dimension_rejected_at_construction() {
        // Zero buckets would make embed() divide by zero; the constructor
        // must surface a configuration error instead
        let result = HashEmbedder::new(0);
        assert!(matches!(result.unwrap_err(), NearliteError::Configuration { .. }));
    }

    #[test]
    fn test_fn_embedder_wraps_closures() {
        let boxed: Box<dyn EmbeddingFunction> = Box::new(FnEmbedder::new(|_: &str| vec![1.0, 0.0, 0.0]));
        assert_eq!(boxed.embed("anything"), vec![1.0, 0.0, 0.0]);
    }
}

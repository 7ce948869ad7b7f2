//! # Nearlite
//!
//! A minimal in-memory text similarity collection. Documents are embedded at
//! insert time by a caller-supplied [`EmbeddingFunction`] and retrieved with
//! exact top-K nearest-neighbor queries under a configurable
//! [`SimilarityMetric`].
//!
//! Everything runs synchronously in memory: no persistence, no approximate
//! indexing, no internal locking. Callers needing concurrent access wrap the
//! collection in a mutex.
//!
//! # Examples
//!
//! ```rust
//! use nearlite::{Collection, Document, HashEmbedder, SimilarityMetric};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut collection = Collection::new(
//!     "my_grocery_collection",
//!     SimilarityMetric::Cosine,
//!     Box::new(HashEmbedder::new(64)?),
//! )?;
//!
//! collection.insert(vec![
//!     Document::new("food_1", "fresh red apples"),
//!     Document::new("food_2", "organic bananas"),
//! ])?;
//!
//! for result in collection.query("apples", 3)? {
//!     println!("{}: {} ({:.4})", result.id, result.text, result.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod embeddings;
pub mod errors;
pub mod metric;

pub use collection::{Collection, CollectionInfo, Document, Metadata, QueryMatch, Record};
pub use embeddings::{EmbeddingFunction, FnEmbedder, HashEmbedder};
pub use errors::{NearliteError, NearliteResult};
pub use metric::SimilarityMetric;

//! # Collection Module
//!
//! This module provides the main entry point for Nearlite: an in-memory
//! collection of (id, text, metadata, vector) records supporting batch
//! insertion and top-K nearest-neighbor text queries.
//!
//! Embeddings are computed at insert time through the embedding function
//! injected at creation, and every query is scored against every stored
//! vector with the collection's configured metric (exact search, O(n)).
//!
//! # Duplicate IDs
//!
//! Re-inserting an existing `id` replaces the stored record atomically and
//! moves it to the insertion-order position of the last write. This is a
//! deliberate policy choice (overwrite-wins), not incidental behavior, and
//! it applies both within a batch and against previously stored records.
//!
//! # Thread Safety
//!
//! A `Collection` assumes a single caller context at a time. Callers needing
//! concurrent access must serialize it externally, e.g. with a mutex around
//! the whole collection.
//!
//! # Examples
//!
//! ```rust
//! use nearlite::{Collection, Document, HashEmbedder, SimilarityMetric};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut collection = Collection::new(
//!     "documents",
//!     SimilarityMetric::Cosine,
//!     Box::new(HashEmbedder::new(64)?),
//! )?;
//!
//! collection.insert(vec![
//!     Document::new("doc_1", "fresh red apples"),
//!     Document::new("doc_2", "organic bananas"),
//! ])?;
//!
//! let results = collection.query("apples", 5)?;
//! assert_eq!(results[0].id, "doc_1");
//! # Ok(())
//! # }
//! ```

use crate::embeddings::EmbeddingFunction;
use crate::errors::{NearliteError, NearliteResult};
use crate::metric::SimilarityMetric;
use serde::{Deserialize, Serialize};

/// String-keyed metadata attached to a record, opaque to the collection
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A document to insert: the (id, text, metadata) triple before embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A stored record: a document plus the vector embedded from its text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub text: String,
    pub metadata: Metadata,
    pub vector: Vec<f64>,
}

/// A single query result
#[derive(Debug, Clone, Serialize)]
pub struct QueryMatch {
    pub id: String,
    pub text: String,
    /// Distance under the collection's metric; lower is more similar
    pub score: f64,
}

/// Information about a collection
#[derive(Debug, Clone, Serialize)]
pub struct CollectionInfo {
    /// Name of the collection
    pub name: String,
    /// Number of records in the collection
    pub count: usize,
    /// Whether the collection is empty
    pub is_empty: bool,
    /// Vector dimension, `None` until the first record is committed
    pub dimension: Option<usize>,
}

/// In-memory store of records with insertion and top-K query semantics
///
/// Name, metric, and embedding function are fixed at creation and never
/// change. Records are kept in insertion order; an overwritten id takes the
/// position of its last write.
pub struct Collection {
    name: String,
    metric: SimilarityMetric,
    embedding_function: Box<dyn EmbeddingFunction>,
    records: Vec<Record>,
    dimension: Option<usize>,
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("metric", &self.metric)
            .field("count", &self.records.len())
            .field("dimension", &self.dimension)
            .finish()
    }
}

impl Collection {
    /// Create a new, empty collection.
    ///
    /// Fails with [`NearliteError::Configuration`] if `name` is empty. The
    /// metric and embedding function are immutable for the collection's
    /// lifetime.
    pub fn new(
        name: impl Into<String>,
        metric: SimilarityMetric,
        embedding_function: Box<dyn EmbeddingFunction>,
    ) -> NearliteResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(NearliteError::Configuration {
                reason: "collection name must not be empty".to_string(),
            });
        }

        Ok(Self {
            name,
            metric,
            embedding_function,
            records: Vec::new(),
            dimension: None,
        })
    }

    /// Insert a batch of documents, embedding each document's text.
    ///
    /// All-or-nothing: every document is validated and embedded before any is
    /// committed, so a failing batch leaves the collection completely
    /// unchanged. The vector dimension is established by the first record
    /// ever committed; later embeddings of a different length fail with
    /// [`NearliteError::DimensionMismatch`]. Duplicate ids resolve
    /// overwrite-wins (see module docs).
    pub fn insert(&mut self, documents: Vec<Document>) -> NearliteResult<()> {
        // Validate and embed everything before touching the store
        let mut staged: Vec<Record> = Vec::with_capacity(documents.len());
        let mut dimension = self.dimension;

        for document in documents {
            if document.id.is_empty() {
                return Err(NearliteError::InvalidInput {
                    reason: "record id must not be empty".to_string(),
                });
            }
            if document.text.is_empty() {
                return Err(NearliteError::InvalidInput {
                    reason: format!("record '{}' has empty text", document.id),
                });
            }

            let vector = self.embedding_function.embed(&document.text);
            match dimension {
                Some(expected) if vector.len() != expected => {
                    return Err(NearliteError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    });
                }
                None => dimension = Some(vector.len()),
                _ => {}
            }

            staged.push(Record {
                id: document.id,
                text: document.text,
                metadata: document.metadata,
                vector,
            });
        }

        // Commit: later writes win, and an overwritten id takes the
        // insertion-order position of its last write
        for record in staged {
            self.records.retain(|r| r.id != record.id);
            self.records.push(record);
        }
        self.dimension = dimension;
        Ok(())
    }

    /// Return every stored record in insertion order.
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    /// Find the `k` records most similar to `query_text`.
    ///
    /// Returns at most `min(k, len)` matches sorted by ascending score, with
    /// ties broken by insertion order. Querying an empty collection returns
    /// an empty vec regardless of `k`; a query embedding whose length differs
    /// from the collection's dimension fails with
    /// [`NearliteError::DimensionMismatch`].
    pub fn query(&self, query_text: &str, k: usize) -> NearliteResult<Vec<QueryMatch>> {
        let expected = match self.dimension {
            Some(d) => d,
            None => return Ok(Vec::new()),
        };

        let query_vector = self.embedding_function.embed(query_text);
        if query_vector.len() != expected {
            return Err(NearliteError::DimensionMismatch {
                expected,
                actual: query_vector.len(),
            });
        }

        let mut matches: Vec<QueryMatch> = self
            .records
            .iter()
            .map(|r| QueryMatch {
                id: r.id.clone(),
                text: r.text.clone(),
                score: self.metric.distance(&r.vector, &query_vector),
            })
            .collect();

        // Stable sort keeps insertion order among equal scores
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches.truncate(k);
        Ok(matches)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Vector dimension, `None` until the first record is committed
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn get_info(&self) -> CollectionInfo {
        CollectionInfo {
            name: self.name.clone(),
            count: self.records.len(),
            is_empty: self.records.is_empty(),
            dimension: self.dimension,
        }
    }
}

//! Collaborator seams: persistence and similarity search.
//!
//! Both collaborators are external to this core and are specified only at
//! their interface; implementations live with the deployment, not here.

use crate::error::{BackendError, StoreError};
use crate::types::{FeatureVector, QueryConfig};

/// Opaque keyed sink for extracted feature vectors.
///
/// Stored content is never inspected by this crate. `exists` backs the
/// read-before-write guard of extraction; that guard is a read-then-write
/// pair, so exactly-once semantics under concurrent extraction of the same
/// id are this collaborator's responsibility (conditional write or an
/// external per-id advisory lock), not the extractor's.
pub trait FeatureStore {
    /// Whether a vector is already persisted under `id`.
    fn exists(&self, id: &str) -> Result<bool, StoreError>;

    /// Persist all of a feature's vectors for `id` in one call.
    fn persist(&self, id: &str, vectors: &[FeatureVector]) -> Result<(), StoreError>;
}

/// Similarity-search collaborator.
///
/// Given a query vector and an opaque configuration, returns an unordered
/// collection of (candidate id, distance) pairs. Deduplication and scoring
/// happen downstream; this trait never ranks.
pub trait SimilarityBackend {
    fn search(
        &self,
        query: &FeatureVector,
        config: &QueryConfig,
    ) -> Result<Vec<(String, f64)>, BackendError>;
}

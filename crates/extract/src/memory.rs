//! In-memory collaborator implementations.
//!
//! These back tests and the demo binary so the extraction contract can be
//! exercised without a deployed store or search backend. `MemoryBackend` is
//! a brute-force linear scan over registered vectors, not an index.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{BackendError, StoreError};
use crate::store::{FeatureStore, SimilarityBackend};
use crate::types::{FeatureVector, QueryConfig};

/// Keyed in-memory feature store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<FeatureVector>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vectors persisted under `id`, if any.
    pub fn get(&self, id: &str) -> Option<Vec<FeatureVector>> {
        self.entries.read().ok()?.get(id).cloned()
    }
}

impl FeatureStore for MemoryStore {
    fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;
        Ok(entries.contains_key(id))
    }

    fn persist(&self, id: &str, vectors: &[FeatureVector]) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;
        entries.insert(id.to_string(), vectors.to_vec());
        Ok(())
    }
}

/// Linear-scan similarity backend over explicitly registered vectors.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<Vec<(String, FeatureVector)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate vector under `id`.
    ///
    /// Repeated ids are kept as separate entries; collapsing them is the
    /// downstream dedup stage's job.
    pub fn insert(&self, id: impl Into<String>, vector: FeatureVector) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push((id.into(), vector));
        }
    }
}

impl SimilarityBackend for MemoryBackend {
    fn search(
        &self,
        query: &FeatureVector,
        _config: &QueryConfig,
    ) -> Result<Vec<(String, f64)>, BackendError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| BackendError::Unavailable("backend lock poisoned".into()))?;
        Ok(entries
            .iter()
            .filter(|(_, vector)| vector.len() == query.len())
            .map(|(id, vector)| (id.clone(), l2_distance(query, vector)))
            .collect())
    }
}

fn l2_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_reports_existence_after_persist() {
        let store = MemoryStore::new();
        assert!(!store.exists("s1").unwrap());
        store.persist("s1", &[vec![1.0, 2.0]]).unwrap();
        assert!(store.exists("s1").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("s1").unwrap(), vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn backend_returns_one_pair_per_registered_entry() {
        let backend = MemoryBackend::new();
        backend.insert("a", vec![0.0, 0.0]);
        backend.insert("b", vec![3.0, 4.0]);
        backend.insert("a", vec![1.0, 0.0]);

        let results = backend
            .search(&vec![0.0, 0.0], &QueryConfig::default())
            .unwrap();
        assert_eq!(results.len(), 3);
        let b = results.iter().find(|(id, _)| id == "b").unwrap();
        assert!((b.1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn backend_skips_vectors_of_a_different_length() {
        let backend = MemoryBackend::new();
        backend.insert("short", vec![1.0]);
        backend.insert("match", vec![1.0, 1.0]);
        let results = backend
            .search(&vec![0.0, 0.0], &QueryConfig::default())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "match");
    }
}

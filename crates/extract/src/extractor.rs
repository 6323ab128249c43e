//! The feature-extraction contract and its motion-histogram instance.

use std::time::Instant;

use tracing::info;

use score::{
    filter_minimum_distances, rank, to_scores, Correspondence, DistanceElement, ElementKind,
    ScoreElement,
};

use crate::error::ExtractError;
use crate::histogram::{subdiv_hist, DIRECTION_BINS};
use crate::store::{FeatureStore, SimilarityBackend};
use crate::types::{QueryConfig, Shot};

/// Contract shared by every feature extractor.
pub trait FeatureExtractor {
    /// Stable feature identifier, used for diagnostics.
    fn name(&self) -> &str;

    /// Derive and persist this feature's vectors for `shot`.
    ///
    /// Idempotent with respect to persisted state: when the store already
    /// holds a vector for the shot id, nothing is computed or written.
    fn extract(&self, shot: &Shot, store: &dyn FeatureStore) -> Result<(), ExtractError>;

    /// Derive the same class of vector from `shot` without persisting it,
    /// delegate to the similarity backend with that vector plus `config`,
    /// and return ranked matches: one score per distinct candidate id,
    /// descending.
    fn query_similar(
        &self,
        shot: &Shot,
        config: &QueryConfig,
        backend: &dyn SimilarityBackend,
    ) -> Result<Vec<ScoreElement>, ExtractError>;
}

/// Spatial-subdivision motion-direction histogram feature.
///
/// The grid-5 variant flattens a 5×5 grid of 8-bin direction histograms
/// into a 200-element vector and also derives an 8-bin aggregate over all
/// paths; both are persisted under the shot id, aggregate first.
#[derive(Debug, Clone)]
pub struct SubdivMotionHistogram {
    name: String,
    grid: usize,
    correspondence: Correspondence,
}

impl SubdivMotionHistogram {
    /// The grid-5 variant used for shot indexing.
    pub fn subdiv5() -> Self {
        Self::with_grid(5)
    }

    /// A variant with an arbitrary grid size (at least 1).
    ///
    /// The linear correspondence is parameterized with the maximum possible
    /// distance between two flattened vectors (√2 per L1-normalized cell
    /// times `grid²` cells), so backend distances map onto [0, 1] scores
    /// with one metric parameterization at index and query time.
    pub fn with_grid(grid: usize) -> Self {
        let grid = grid.max(1);
        let max_distance = std::f64::consts::SQRT_2 * (grid * grid) as f64;
        Self {
            name: format!("subdiv_motion_histogram_{grid}"),
            grid,
            correspondence: Correspondence::Linear { max_distance },
        }
    }

    pub fn grid(&self) -> usize {
        self.grid
    }

    /// Length of the flattened per-cell vector.
    pub fn cell_vector_len(&self) -> usize {
        self.grid * self.grid * DIRECTION_BINS
    }

    pub fn correspondence(&self) -> &Correspondence {
        &self.correspondence
    }
}

impl FeatureExtractor for SubdivMotionHistogram {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, shot: &Shot, store: &dyn FeatureStore) -> Result<(), ExtractError> {
        let start = Instant::now();
        if store.exists(&shot.id)? {
            info!(feature = %self.name, shot_id = %shot.id, "extract_skipped_existing");
            return Ok(());
        }

        let hist = subdiv_hist(self.grid, &shot.paths);
        store.persist(&shot.id, &[hist.aggregate, hist.cells])?;

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            feature = %self.name,
            shot_id = %shot.id,
            paths = shot.paths.len(),
            elapsed_micros,
            "extract_persisted"
        );
        Ok(())
    }

    fn query_similar(
        &self,
        shot: &Shot,
        config: &QueryConfig,
        backend: &dyn SimilarityBackend,
    ) -> Result<Vec<ScoreElement>, ExtractError> {
        let start = Instant::now();
        let hist = subdiv_hist(self.grid, &shot.paths);
        let raw = backend.search(&hist.cells, config)?;
        let candidates = raw.len();

        let elements: Vec<DistanceElement> = raw
            .into_iter()
            .map(|(id, distance)| DistanceElement::new(ElementKind::Segment, id, distance))
            .collect();
        let deduped = filter_minimum_distances(elements);
        let mut scores = to_scores(&deduped, &self.correspondence);
        rank(&mut scores);

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            feature = %self.name,
            shot_id = %shot.id,
            candidates,
            returned = scores.len(),
            elapsed_micros,
            "query_similar"
        );
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BackendError, StoreError};
    use crate::memory::{MemoryBackend, MemoryStore};
    use crate::types::MotionPath;

    fn shot_with_motion(id: &str) -> Shot {
        Shot::new(
            id,
            vec![MotionPath::new(vec![(0.1, 0.1), (0.3, 0.1), (0.3, 0.4)])],
        )
    }

    #[test]
    fn extract_persists_aggregate_and_cell_vectors() {
        let extractor = SubdivMotionHistogram::subdiv5();
        let store = MemoryStore::new();
        extractor.extract(&shot_with_motion("s1"), &store).unwrap();

        let vectors = store.get("s1").expect("persisted");
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].len(), DIRECTION_BINS);
        assert_eq!(vectors[1].len(), 200);
    }

    #[test]
    fn shot_without_motion_still_persists_fixed_length_zero_vectors() {
        let extractor = SubdivMotionHistogram::subdiv5();
        let store = MemoryStore::new();
        extractor
            .extract(&Shot::new("still", Vec::new()), &store)
            .unwrap();

        let vectors = store.get("still").expect("persisted");
        assert_eq!(vectors[1].len(), 200);
        assert!(vectors[0].iter().all(|&v| v == 0.0));
        assert!(vectors[1].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn extract_skips_ids_the_store_already_holds() {
        let extractor = SubdivMotionHistogram::subdiv5();
        let store = MemoryStore::new();
        let shot = shot_with_motion("s1");
        extractor.extract(&shot, &store).unwrap();
        let first = store.get("s1").unwrap();

        // Same id with different content: the guard must skip recomputation.
        let changed = Shot::new("s1", Vec::new());
        extractor.extract(&changed, &store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("s1").unwrap(), first);
    }

    #[test]
    fn query_similar_ranks_and_deduplicates_candidates() {
        let extractor = SubdivMotionHistogram::subdiv5();
        let store = MemoryStore::new();
        let backend = MemoryBackend::new();

        for shot in [shot_with_motion("near"), Shot::new("far", Vec::new())] {
            extractor.extract(&shot, &store).unwrap();
            let vectors = store.get(&shot.id).unwrap();
            backend.insert(shot.id.clone(), vectors[1].clone());
        }
        // A duplicate entry for "near": dedup must collapse it.
        backend.insert("near", store.get("near").unwrap()[1].clone());

        let scores = extractor
            .query_similar(&shot_with_motion("query"), &QueryConfig::default(), &backend)
            .unwrap();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].id, "near");
        assert_eq!(scores[0].score, 1.0);
        assert!(scores[0].score >= scores[1].score);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    }

    #[test]
    fn query_similar_never_writes_to_a_store() {
        let extractor = SubdivMotionHistogram::subdiv5();
        let backend = MemoryBackend::new();
        let scores = extractor
            .query_similar(&shot_with_motion("q"), &QueryConfig::default(), &backend)
            .unwrap();
        assert!(scores.is_empty());
    }

    struct FailingStore;

    impl FeatureStore for FailingStore {
        fn exists(&self, _id: &str) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }

        fn persist(&self, id: &str, _vectors: &[Vec<f32>]) -> Result<(), StoreError> {
            Err(StoreError::WriteRejected {
                id: id.to_string(),
                reason: "offline".into(),
            })
        }
    }

    struct FailingBackend;

    impl SimilarityBackend for FailingBackend {
        fn search(
            &self,
            _query: &Vec<f32>,
            _config: &QueryConfig,
        ) -> Result<Vec<(String, f64)>, BackendError> {
            Err(BackendError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn collaborator_failures_propagate_unmodified() {
        let extractor = SubdivMotionHistogram::subdiv5();

        let err = extractor
            .extract(&shot_with_motion("s1"), &FailingStore)
            .expect_err("store failure must surface");
        assert!(matches!(err, ExtractError::Store(StoreError::Unavailable(_))));

        let err = extractor
            .query_similar(&shot_with_motion("q"), &QueryConfig::default(), &FailingBackend)
            .expect_err("backend failure must surface");
        assert!(matches!(
            err,
            ExtractError::Backend(BackendError::Unavailable(_))
        ));
    }
}

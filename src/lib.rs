//! Workspace umbrella crate for the shotmatch retrieval core.
//!
//! This crate stitches the retrieval stages together so callers can index
//! shots, run similarity queries, and ingest untrusted geometry with a
//! single API entry point:
//!
//! - feature extraction: [`SubdivMotionHistogram`] and the
//!   [`FeatureExtractor`] contract with its persistence/search collaborator
//!   seams;
//! - distance→score aggregation: [`filter_minimum_distances`],
//!   [`to_scores`], and [`Correspondence`] functions;
//! - geometry ingestion: [`parse_geometry`] with its empty-mesh degradation
//!   policy.
//!
//! Pipeline configuration is a YAML document loaded through
//! [`ShotmatchConfig`].

mod config;

pub use crate::config::{ConfigLoadError, ExtractSection, QuerySection, ShotmatchConfig};

pub use extract::{
    subdiv_hist, BackendError, ExtractError, FeatureExtractor, FeatureStore, FeatureVector,
    MemoryBackend, MemoryStore, MotionPath, QueryConfig, Shot, SimilarityBackend, StoreError,
    SubdivHist, SubdivMotionHistogram, DIRECTION_BINS,
};
pub use mesh::{data_url_to_bytes, parse_geometry, GeometryError, Mesh, GEOMETRY_MIME_TYPE};
pub use score::{
    filter_minimum_distances, filter_minimum_distances_parallel, fold_minimums,
    merge_minimum_maps, rank, to_scores, Correspondence, DistanceElement, ElementKind,
    ScoreElement, ScoreError,
};

use thiserror::Error;

/// Errors that can occur while driving a full index/query round.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("extraction failure: {0}")]
    Extract(#[from] ExtractError),

    #[error("scoring failure: {0}")]
    Score(#[from] ScoreError),

    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Derive and persist features for one shot (index time).
pub fn index_shot(
    extractor: &dyn FeatureExtractor,
    shot: &Shot,
    store: &dyn FeatureStore,
) -> Result<(), PipelineError> {
    Ok(extractor.extract(shot, store)?)
}

/// Run a similarity query for one shot and return ranked scores.
pub fn search_similar(
    extractor: &dyn FeatureExtractor,
    shot: &Shot,
    config: &QueryConfig,
    backend: &dyn SimilarityBackend,
) -> Result<Vec<ScoreElement>, PipelineError> {
    Ok(extractor.query_similar(shot, config, backend)?)
}

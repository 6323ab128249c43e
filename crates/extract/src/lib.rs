//! # shotmatch feature extraction
//!
//! Feature extractors reduce a shot, a bounded temporal subdivision of a
//! media object, to fixed-dimensionality vectors the similarity backend
//! can index and compare. This crate defines the extraction contract, the
//! collaborator seams it depends on, and one concrete extractor: the
//! spatial-subdivision motion histogram.
//!
//! ## Contract
//!
//! - `extract` is idempotent with respect to persisted state: it checks the
//!   store before computing and writes nothing when the shot id is already
//!   indexed. The check/write pair is racy under concurrent extraction of
//!   one id; exactly-once is the persistence collaborator's concern.
//! - `query_similar` derives the same class of vector without persisting
//!   it, delegates to the similarity backend, and post-processes the raw
//!   distances (per-id minimum dedup, correspondence scoring, ranking).
//! - Output dimensionality is fixed per extractor type regardless of input
//!   content; shots without signal produce zero-filled vectors.
//!
//! ## Example
//!
//! ```
//! use extract::{
//!     FeatureExtractor, MemoryBackend, MemoryStore, MotionPath, QueryConfig,
//!     Shot, SubdivMotionHistogram,
//! };
//!
//! let extractor = SubdivMotionHistogram::subdiv5();
//! let store = MemoryStore::new();
//! let backend = MemoryBackend::new();
//!
//! let shot = Shot::new("shot-1", vec![MotionPath::new(vec![(0.2, 0.2), (0.4, 0.2)])]);
//! extractor.extract(&shot, &store).unwrap();
//! backend.insert("shot-1", store.get("shot-1").unwrap()[1].clone());
//!
//! let scores = extractor
//!     .query_similar(&shot, &QueryConfig::default(), &backend)
//!     .unwrap();
//! assert_eq!(scores[0].id, "shot-1");
//! assert_eq!(scores[0].score, 1.0);
//! ```

mod error;
mod extractor;
mod histogram;
mod memory;
mod store;
mod types;

pub use crate::error::{BackendError, ExtractError, StoreError};
pub use crate::extractor::{FeatureExtractor, SubdivMotionHistogram};
pub use crate::histogram::{subdiv_hist, SubdivHist, DIRECTION_BINS};
pub use crate::memory::{MemoryBackend, MemoryStore};
pub use crate::store::{FeatureStore, SimilarityBackend};
pub use crate::types::{FeatureVector, MotionPath, QueryConfig, Shot};

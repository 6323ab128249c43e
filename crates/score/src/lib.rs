//! # shotmatch distance→score aggregation
//!
//! Similarity backends answer a query with raw (candidate id, distance)
//! pairs. This crate turns that stream into ranked scores: a closed variant
//! model for the results, per-id minimum-distance deduplication, and
//! monotonic distance→score correspondence functions.
//!
//! ## Contract
//!
//! - Consumes results exactly as the backend produced them; never persists.
//! - Every operation is a pure function of its inputs: no I/O, no clocks,
//!   no global process state.
//! - Deduplication keeps one element per distinct id (the minimum distance
//!   seen); on exactly equal minima the first-seen element wins.
//!
//! ## Example
//!
//! ```
//! use score::{
//!     filter_minimum_distances, rank, to_scores, Correspondence,
//!     DistanceElement, ElementKind,
//! };
//!
//! let results = vec![
//!     DistanceElement::new(ElementKind::Segment, "seg1", 0.5),
//!     DistanceElement::new(ElementKind::Segment, "seg2", 2.0),
//!     DistanceElement::new(ElementKind::Segment, "seg1", 1.5),
//! ];
//!
//! let deduped = filter_minimum_distances(results);
//! assert_eq!(deduped.len(), 2);
//!
//! let f = Correspondence::linear(4.0).unwrap();
//! let mut scores = to_scores(&deduped, &f);
//! rank(&mut scores);
//!
//! assert_eq!(scores[0].id, "seg1");
//! assert_eq!(scores[0].score, f.apply(0.5));
//! ```

mod correspondence;
mod dedup;
mod types;

pub use crate::correspondence::Correspondence;
pub use crate::dedup::{
    filter_minimum_distances, filter_minimum_distances_parallel, fold_minimums,
    merge_minimum_maps, rank, to_scores,
};
pub use crate::types::{DistanceElement, ElementKind, ScoreElement, ScoreError};

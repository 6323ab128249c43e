//! Per-id minimum-distance deduplication and batch scoring.
//!
//! A candidate can reach the result stream more than once, e.g. when it is
//! matched through several paths or metrics. Before scoring, the stream is
//! reduced to one element per distinct id, keeping the minimum distance seen
//! for that id.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::correspondence::Correspondence;
use crate::types::{DistanceElement, ScoreElement};

/// Chunk size for the parallel fold; below this the sequential fold wins.
const PARALLEL_CHUNK: usize = 1024;

/// Reduce a result stream to one element per distinct id, keeping the
/// minimum-distance element for each id.
///
/// Replacement requires a strictly smaller distance, so on exactly equal
/// minima the first-seen element wins. Output order is unspecified. Runs in
/// O(n) with O(k) auxiliary space for k distinct ids.
pub fn filter_minimum_distances<I>(elements: I) -> Vec<DistanceElement>
where
    I: IntoIterator<Item = DistanceElement>,
{
    fold_minimums(elements).into_values().collect()
}

/// Fold a result stream into an id → best-so-far map.
pub fn fold_minimums<I>(elements: I) -> HashMap<String, DistanceElement>
where
    I: IntoIterator<Item = DistanceElement>,
{
    let mut best = HashMap::new();
    for element in elements {
        accumulate(&mut best, element);
    }
    best
}

/// Merge two partial minimum maps, keeping the smaller distance per id.
///
/// This is the merge step of the partitioned formulation: per-worker maps
/// folded independently combine into the same minima the sequential fold
/// produces. On exactly equal distances the left-hand entry wins.
pub fn merge_minimum_maps(
    mut left: HashMap<String, DistanceElement>,
    right: HashMap<String, DistanceElement>,
) -> HashMap<String, DistanceElement> {
    for (id, candidate) in right {
        match left.entry(id) {
            Entry::Occupied(mut slot) => {
                if candidate.distance() < slot.get().distance() {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }
    left
}

/// Parallel variant of [`filter_minimum_distances`] for large result sets.
///
/// Retained distances are identical to the sequential fold; which of several
/// exactly-equal-distance duplicates survives is unspecified here because
/// first-seen is only meaningful within one partition.
pub fn filter_minimum_distances_parallel(
    elements: Vec<DistanceElement>,
) -> Vec<DistanceElement> {
    if elements.len() <= PARALLEL_CHUNK {
        return filter_minimum_distances(elements);
    }
    elements
        .into_par_iter()
        .fold(HashMap::new, |mut best, element| {
            accumulate(&mut best, element);
            best
        })
        .reduce(HashMap::new, merge_minimum_maps)
        .into_values()
        .collect()
}

fn accumulate(best: &mut HashMap<String, DistanceElement>, element: DistanceElement) {
    match best.entry(element.id().to_string()) {
        Entry::Occupied(mut slot) => {
            if element.distance() < slot.get().distance() {
                slot.insert(element);
            }
        }
        Entry::Vacant(slot) => {
            slot.insert(element);
        }
    }
}

/// Apply a correspondence function to each element independently.
///
/// The output preserves input length and order; each score depends only on
/// the corresponding input distance, never on sibling elements.
pub fn to_scores(elements: &[DistanceElement], f: &Correspondence) -> Vec<ScoreElement> {
    elements.iter().map(|e| e.to_score(f)).collect()
}

/// Order scores for presentation: descending score, ascending id on ties.
pub fn rank(scores: &mut [ScoreElement]) {
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

//! Shot, path, and query-configuration types consumed by feature extractors.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Fixed-dimensionality numeric representation of a shot, the unit the
/// similarity backend indexes and compares. Length is fixed per extractor
/// type regardless of input content.
pub type FeatureVector = Vec<f32>;

/// An ordered motion path through normalized [0, 1]² shot coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MotionPath {
    pub points: Vec<(f32, f32)>,
}

impl MotionPath {
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        Self { points }
    }
}

/// A bounded temporal subdivision of a media object, the unit feature
/// extraction operates on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shot {
    /// Stable identifier; doubles as the persistence key for extracted
    /// vectors.
    pub id: String,
    /// Motion paths observed in this shot. May be empty.
    #[serde(default)]
    pub paths: Vec<MotionPath>,
}

impl Shot {
    pub fn new(id: impl Into<String>, paths: Vec<MotionPath>) -> Self {
        Self { id: id.into(), paths }
    }
}

/// Opaque per-query configuration.
///
/// Passed through unmodified to the similarity backend; the recognized
/// options are backend-specific and never interpreted by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    #[serde(default)]
    pub options: JsonValue,
}

impl QueryConfig {
    pub fn with_options(options: JsonValue) -> Self {
        Self { options }
    }
}

//! Result types exchanged between the similarity backend and the scoring
//! stage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::correspondence::Correspondence;

/// Closed set of things a candidate id can address.
///
/// A distance returned by the similarity backend refers either to a temporal
/// segment of a media object or to the object as a whole. The set is closed
/// on purpose: element construction is an exhaustive match and no
/// unknown-kind branch exists at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Segment,
    Object,
}

impl ElementKind {
    /// Parse a kind tag that arrives as data (wire formats, stored configs).
    ///
    /// An unrecognized tag is a programming error in the calling adapter and
    /// fails loudly with [`ScoreError::UnknownKind`]; it never degrades to a
    /// usable-looking default.
    pub fn from_tag(tag: &str) -> Result<Self, ScoreError> {
        match tag {
            "segment" => Ok(ElementKind::Segment),
            "object" => Ok(ElementKind::Object),
            other => Err(ScoreError::UnknownKind(other.to_string())),
        }
    }

    /// Stable tag string, the inverse of [`ElementKind::from_tag`].
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementKind::Segment => "segment",
            ElementKind::Object => "object",
        }
    }
}

/// A single (candidate id, distance) result produced by the similarity
/// backend for one query.
///
/// Elements are immutable once constructed and are consumed synchronously by
/// the dedup/scoring stage; they are never persisted. Distances are expected
/// to be non-negative; producing adapters own that contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DistanceElement {
    /// The id addresses a temporal segment.
    Segment { id: String, distance: f64 },
    /// The id addresses a whole media object.
    Object { id: String, distance: f64 },
}

impl DistanceElement {
    /// Construct an element of the requested kind.
    pub fn new(kind: ElementKind, id: impl Into<String>, distance: f64) -> Self {
        let id = id.into();
        match kind {
            ElementKind::Segment => DistanceElement::Segment { id, distance },
            ElementKind::Object => DistanceElement::Object { id, distance },
        }
    }

    /// Construct an element from a kind tag that arrives as data.
    pub fn from_tag(
        tag: &str,
        id: impl Into<String>,
        distance: f64,
    ) -> Result<Self, ScoreError> {
        Ok(Self::new(ElementKind::from_tag(tag)?, id, distance))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            DistanceElement::Segment { .. } => ElementKind::Segment,
            DistanceElement::Object { .. } => ElementKind::Object,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DistanceElement::Segment { id, .. } | DistanceElement::Object { id, .. } => id,
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            DistanceElement::Segment { distance, .. }
            | DistanceElement::Object { distance, .. } => *distance,
        }
    }

    /// Map this element's distance to a score through `f`.
    pub fn to_score(&self, f: &Correspondence) -> ScoreElement {
        ScoreElement {
            id: self.id().to_string(),
            score: f.apply(self.distance()),
        }
    }
}

/// A (candidate id, score) pair, the ranking-only output of applying a
/// correspondence function to a distance element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreElement {
    pub id: String,
    pub score: f64,
}

/// Errors produced by the scoring stage.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    /// Unrecognized element kind tag requested at construction.
    #[error("unknown distance element kind: {0}")]
    UnknownKind(String),
    /// Correspondence parameter outside its valid range.
    #[error("invalid correspondence parameter: {0}")]
    InvalidCorrespondence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_element_reports_id_and_distance() {
        let element = DistanceElement::new(ElementKind::Segment, "seg1", 0.5);
        assert_eq!(element.id(), "seg1");
        assert_eq!(element.distance(), 0.5);
        assert_eq!(element.kind(), ElementKind::Segment);
    }

    #[test]
    fn scoring_a_segment_element_keeps_its_id() {
        let element = DistanceElement::new(ElementKind::Segment, "seg1", 0.5);
        let f = Correspondence::linear(10.0).expect("valid parameter");
        let scored = element.to_score(&f);
        assert_eq!(scored.id, "seg1");
        assert_eq!(scored.score, f.apply(0.5));
    }

    #[test]
    fn known_tags_round_trip() {
        for kind in [ElementKind::Segment, ElementKind::Object] {
            assert_eq!(ElementKind::from_tag(kind.as_tag()).unwrap(), kind);
        }
        let element = DistanceElement::from_tag("object", "obj7", 1.25).unwrap();
        assert_eq!(element.kind(), ElementKind::Object);
        assert_eq!(element.id(), "obj7");
    }

    #[test]
    fn unknown_tag_fails_instead_of_yielding_a_value() {
        let err = DistanceElement::from_tag("frame", "x", 0.0)
            .expect_err("unrecognized kind must not construct");
        match err {
            ScoreError::UnknownKind(tag) => assert_eq!(tag, "frame"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn elements_serialize_with_a_kind_tag() {
        let element = DistanceElement::new(ElementKind::Object, "obj1", 2.0);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["kind"], "object");
        assert_eq!(json["id"], "obj1");
    }
}

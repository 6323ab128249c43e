//! Distance→score correspondence functions.
//!
//! A correspondence maps a non-negative backend distance to a score and is
//! non-increasing: a larger distance never yields a larger score. Instances
//! carry no mutable state; the mapping is fixed at construction.

use serde::{Deserialize, Serialize};

use crate::types::ScoreError;

/// Parameterized distance→score mapping.
///
/// Variants can be built directly, but the [`Correspondence::linear`] and
/// [`Correspondence::exponential`] constructors are preferred because they
/// validate the parameter range; [`Correspondence::validate`] re-checks a
/// deserialized instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Correspondence {
    /// `1 − d / max_distance`, clamped into [0, 1]. `max_distance` is the
    /// largest distance that still maps to a positive score.
    Linear { max_distance: f64 },
    /// `exp(−decay · d)`. A decay of zero maps every distance to 1.
    Exponential { decay: f64 },
}

impl Correspondence {
    /// Linear decay over `[0, max_distance]`.
    pub fn linear(max_distance: f64) -> Result<Self, ScoreError> {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(ScoreError::InvalidCorrespondence(format!(
                "max_distance must be finite and positive, got {max_distance}"
            )));
        }
        Ok(Correspondence::Linear { max_distance })
    }

    /// Exponential decay with rate `decay`.
    pub fn exponential(decay: f64) -> Result<Self, ScoreError> {
        if !decay.is_finite() || decay < 0.0 {
            return Err(ScoreError::InvalidCorrespondence(format!(
                "decay must be finite and non-negative, got {decay}"
            )));
        }
        Ok(Correspondence::Exponential { decay })
    }

    /// Check the parameter range, e.g. after deserializing a config.
    pub fn validate(&self) -> Result<(), ScoreError> {
        match *self {
            Correspondence::Linear { max_distance } => Self::linear(max_distance).map(|_| ()),
            Correspondence::Exponential { decay } => Self::exponential(decay).map(|_| ()),
        }
    }

    /// Map a distance to a score. Pure and total over validated parameters.
    pub fn apply(&self, distance: f64) -> f64 {
        match *self {
            Correspondence::Linear { max_distance } => {
                (1.0 - distance / max_distance).clamp(0.0, 1.0)
            }
            Correspondence::Exponential { decay } => (-decay * distance).exp(),
        }
    }
}

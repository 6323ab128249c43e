//! Rejection reasons for untrusted geometry payloads.

use thiserror::Error;

/// Why a geometry payload was rejected.
///
/// This never crosses the public parsing boundary as an error:
/// [`parse_geometry`](crate::parse_geometry) logs the rejection and
/// degrades to the empty mesh, because the payload arrives from an
/// untrusted network boundary and callers must stay responsive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometryError {
    /// Input is not a Base64 data URL.
    #[error("input is not a base64 data url")]
    NotADataUrl,
    /// The declared MIME type differs from the expected one.
    #[error("declared mime type {found:?} does not match {expected:?}")]
    MimeMismatch { expected: String, found: String },
    /// The Base64 payload did not decode.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    /// The decoded bytes are not a structured document.
    #[error("payload is not a json document: {0}")]
    MalformedDocument(String),
    /// A required top-level field is missing.
    #[error("required field {0:?} is missing")]
    MissingField(&'static str),
    /// A field does not hold a flat numeric array.
    #[error("field {0:?} does not hold a flat numeric array")]
    NotANumericArray(&'static str),
    /// A field's array holds no values.
    #[error("field {0:?} holds an empty array")]
    EmptyArray(&'static str),
    /// A field's array length is not a multiple of 3.
    #[error("field {0:?} has length {1}, not a multiple of 3")]
    RaggedArray(&'static str, usize),
    /// The position and normal arrays disagree in length.
    #[error("position and normal counts differ: {positions} vs {normals}")]
    CountMismatch { positions: usize, normals: usize },
}

//! Defensive parser turning an untrusted geometry payload into a [`Mesh`].
//!
//! The payload is a Base64 data URL whose decoded body is a JSON document
//! with two required top-level fields, `position` and `normal`, each
//! holding a flat numeric array under the key `array`. All other fields are
//! ignored. Parsing is a linear state machine with no backtracking; every
//! failure path short-circuits to the empty mesh.

use serde_json::Value;
use tracing::warn;

use crate::data_url::data_url_to_bytes;
use crate::error::GeometryError;
use crate::types::Mesh;

/// Declared MIME type of an inline geometry payload.
pub const GEOMETRY_MIME_TYPE: &str = "application/3d-json";

const POSITION_FIELD: &str = "position";
const NORMAL_FIELD: &str = "normal";
const ARRAY_KEY: &str = "array";

/// Parse a Base64 geometry data URL into a mesh.
///
/// The input arrives from an untrusted network boundary: a malformed
/// payload yields the empty mesh plus a logged diagnostic, never an error
/// or a partially-built mesh.
pub fn parse_geometry(data_url: &str) -> Mesh {
    match try_parse_geometry(data_url) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!(error = %err, "geometry payload rejected");
            Mesh::empty()
        }
    }
}

fn try_parse_geometry(data_url: &str) -> Result<Mesh, GeometryError> {
    let bytes = data_url_to_bytes(data_url, GEOMETRY_MIME_TYPE)?;
    let document: Value = serde_json::from_slice(&bytes)
        .map_err(|err| GeometryError::MalformedDocument(err.to_string()))?;

    let positions = flat_array(&document, POSITION_FIELD)?;
    let normals = flat_array(&document, NORMAL_FIELD)?;
    if positions.len() != normals.len() {
        return Err(GeometryError::CountMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let vertices = triples(&positions);
    let normals = triples(&normals);

    // Triangle-soup assumption: every consecutive vertex triple is one
    // face, referenced with 1-based indices. No deduplication, no topology
    // inference.
    let faces = (0..vertices.len() / 3)
        .map(|i| {
            let base = (3 * i) as u32;
            [base + 1, base + 2, base + 3]
        })
        .collect();

    Ok(Mesh {
        vertices,
        normals,
        faces,
    })
}

/// Resolve `<field>.array` to a flat numeric array whose length is a
/// positive multiple of 3.
fn flat_array(document: &Value, field: &'static str) -> Result<Vec<f32>, GeometryError> {
    let node = document
        .get(field)
        .ok_or(GeometryError::MissingField(field))?;
    let array = node
        .get(ARRAY_KEY)
        .and_then(Value::as_array)
        .ok_or(GeometryError::NotANumericArray(field))?;
    if array.is_empty() {
        return Err(GeometryError::EmptyArray(field));
    }
    if array.len() % 3 != 0 {
        return Err(GeometryError::RaggedArray(field, array.len()));
    }
    array
        .iter()
        .map(|value| {
            value
                .as_f64()
                .map(|v| v as f32)
                .ok_or(GeometryError::NotANumericArray(field))
        })
        .collect()
}

fn triples(flat: &[f32]) -> Vec<[f32; 3]> {
    flat.chunks_exact(3)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect()
}

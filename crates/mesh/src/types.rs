//! Internal triangle-mesh representation.

use serde::{Deserialize, Serialize};

/// A triangle mesh assembled from an ingested geometry payload.
///
/// Invariant: the value is either internally consistent (normals aligned
/// one-to-one with vertices, faces referencing valid 1-based indices) or
/// exactly empty. It is never partially populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<[f32; 3]>,
    /// Per-vertex normals; always the same count as `vertices`.
    pub normals: Vec<[f32; 3]>,
    /// Triangular faces as 1-based index triples into `vertices`/`normals`.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// The "no mesh" sentinel: zero vertices, zero normals, zero faces.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.normals.is_empty() && self.faces.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_empty_sentinel_has_no_content() {
        let mesh = Mesh::empty();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.normal_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn a_populated_mesh_is_not_empty() {
        let mesh = Mesh {
            vertices: vec![[0.0, 0.0, 0.0]],
            normals: vec![[0.0, 1.0, 0.0]],
            faces: Vec::new(),
        };
        assert!(!mesh.is_empty());
    }
}

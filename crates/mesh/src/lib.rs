//! # shotmatch geometry ingestion
//!
//! Query clients can submit 3D geometry inline as a Base64 data URL. The
//! payload crosses an untrusted network boundary, so ingestion is strictly
//! defensive: a well-formed payload becomes a triangle [`Mesh`], anything
//! else becomes the empty mesh with a logged diagnostic. The parser never
//! raises to its caller and never yields a partially-built mesh.
//!
//! ```
//! use mesh::parse_geometry;
//!
//! // Not a data URL: degrades to the empty sentinel instead of failing.
//! let mesh = parse_geometry("garbage");
//! assert!(mesh.is_empty());
//! ```

mod data_url;
mod error;
mod parser;
mod types;

pub use crate::data_url::data_url_to_bytes;
pub use crate::error::GeometryError;
pub use crate::parser::{parse_geometry, GEOMETRY_MIME_TYPE};
pub use crate::types::Mesh;

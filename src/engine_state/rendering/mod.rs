//! Rendering-facing output of the voxel engine.
//!
//! Nothing in here draws pixels. This module produces region meshes in a GPU
//! friendly vertex format and defines how they are handed to a renderer.

pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use meshing::{Mesh, MeshCommand, MeshSink, RegionMesher, SceneMeshes};
pub use vertex::Vertex;

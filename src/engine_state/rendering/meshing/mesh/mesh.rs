//! Mesh data structures for region rendering.
//!
//! A [`Mesh`] is an immutable, indexed triangle buffer describing the visible
//! surface of one region. It is rebuilt from scratch on every change and owned
//! by whoever it is handed to.

use crate::engine_state::{rendering::Vertex, voxels::block::block_side::BlockSide};

use super::face::Face;

/// The triangle geometry of one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    faces_per_side: [u32; 6],
}

impl Mesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Appends one quad face, as four vertices and six indices.
    pub fn push_face(&mut self, face: &Face) {
        let num_faces_generated = self.face_count() as u32;
        self.vertices.extend(face.vertices());
        self.indices.extend(Face::indices(num_faces_generated));
        self.faces_per_side[face.block_side as usize] += 1;
    }

    /// The vertex buffer.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The index buffer, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether the mesh contains no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of quad faces in the mesh.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of faces facing the given side.
    pub fn faces_facing(&self, side: BlockSide) -> u32 {
        self.faces_per_side[side as usize]
    }

    /// Iterates over the triangles as resolved vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|triangle| {
            [
                self.vertices[triangle[0] as usize],
                self.vertices[triangle[1] as usize],
                self.vertices[triangle[2] as usize],
            ]
        })
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

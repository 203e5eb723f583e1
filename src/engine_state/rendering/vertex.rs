//! Vertex data structures for region meshes.
//!
//! This module defines the vertex format handed to the rendering collaborator.

use cgmath::{Point3, Vector3};

/// A vertex of a region mesh.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
/// - Color: [f32; 3] (12 bytes)
///
/// Total size: 44 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Outward unit normal of the face this vertex belongs to
    pub normal: [f32; 3],
    /// Unit-square texture coordinates of the face corner
    pub tex_coords: [f32; 2],
    /// Flat RGB color of the face
    pub color: [f32; 3],
}

impl Vertex {
    /// Creates a new vertex with the given parameters.
    ///
    /// # Arguments
    /// * `position` - The corner position in world space
    /// * `normal` - The outward normal of the face
    /// * `u`, `v` - Texture coordinates (0 or 1)
    /// * `color` - The face color
    pub fn new(
        position: Point3<f32>,
        normal: Vector3<i32>,
        u: u8,
        v: u8,
        color: [f32; 3],
    ) -> Self {
        Vertex {
            position: position.into(),
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
            tex_coords: [u as f32, v as f32],
            color,
        }
    }

    /// The position as a point.
    pub fn point(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// The normal as a vector.
    pub fn normal_vector(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_no_padding() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
        let vertex = Vertex::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0, 1, 0),
            1,
            0,
            [0.5; 3],
        );
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), 44);
        assert_eq!(vertex.point(), Point3::new(1.0, 2.0, 3.0));
    }
}

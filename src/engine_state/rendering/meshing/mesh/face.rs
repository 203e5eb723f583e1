use cgmath::Point3;

use crate::engine_state::{
    rendering::Vertex,
    voxels::block::{block_side::BlockSide, material::Rgb},
};

/// Texture coordinates of the four face corners, in corner order.
const CORNER_UVS: [(u8, u8); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// A single visible unit face of a block.
///
/// A face is defined by the block it belongs to, which side of the block it
/// covers and the flat color it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// World position of the block the face belongs to
    pub block: Point3<i32>,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
    /// Color selected for this side from the block's material set
    pub color: Rgb,
}

impl Face {
    /// Creates a new face for a block at the given position.
    pub fn new(block: Point3<i32>, block_side: BlockSide, color: Rgb) -> Self {
        Face {
            block,
            block_side,
            color,
        }
    }

    /// The four corner vertices of the face, counter-clockwise seen from outside.
    pub fn vertices(&self) -> [Vertex; 4] {
        let normal = self.block_side.normal();
        let color = self.color.to_array();
        let corners = self.block_side.corners();
        std::array::from_fn(|i| {
            let [cx, cy, cz] = corners[i];
            let (u, v) = CORNER_UVS[i];
            Vertex::new(
                Point3::new(
                    self.block.x as f32 + cx as f32,
                    self.block.y as f32 + cy as f32,
                    self.block.z as f32 + cz as f32,
                ),
                normal,
                u,
                v,
                color,
            )
        })
    }

    /// Indices splitting the face into two triangles along the 0-2 diagonal,
    /// offset by the number of faces already written.
    pub fn indices(num_faces_generated: u32) -> [u32; 6] {
        let base = num_faces_generated * 4;
        [base, base + 1, base + 2, base, base + 2, base + 3]
    }
}

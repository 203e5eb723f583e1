//! # Block Side Module
//!
//! This module defines the six axis-aligned faces of a voxel block and the
//! geometry attached to each of them.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants double as indices into per-side tables.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The right face (facing positive X)
    RIGHT = 2,

    /// The left face (facing negative X)
    LEFT = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

/// Unit-cube corners of each face, counter-clockwise when seen from outside.
///
/// Indexed by `BlockSide as usize`. The corner order matches the texture
/// coordinates `(0,0) (1,0) (1,1) (0,1)`.
const FACE_CORNERS: [[[i32; 3]; 4]; 6] = [
    [[0, 1, 0], [0, 1, 1], [1, 1, 1], [1, 1, 0]],
    [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
    [[1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 1]],
    [[0, 0, 0], [0, 0, 1], [0, 1, 1], [0, 1, 0]],
    [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]],
    [[1, 0, 0], [0, 0, 0], [0, 1, 0], [1, 1, 0]],
];

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [TOP, BOTTOM, RIGHT, LEFT, FRONT, BACK]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// The outward unit normal of this face, which is also the offset to the
    /// neighbouring cell the face borders.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// Maps a unit axis vector back to the face it points out of.
    ///
    /// # Returns
    /// `None` for anything that isn't exactly one of the six unit normals.
    pub fn from_normal(normal: Vector3<i32>) -> Option<Self> {
        Self::all().into_iter().find(|side| side.normal() == normal)
    }

    /// Whether the face points straight up or down.
    pub fn is_vertical(self) -> bool {
        matches!(self, BlockSide::TOP | BlockSide::BOTTOM)
    }

    /// The four unit-cube corners of this face relative to the block origin.
    pub fn corners(self) -> [[i32; 3]; 4] {
        FACE_CORNERS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn corner_winding_faces_outward() {
        for side in BlockSide::all() {
            let [c0, c1, c2, _] = side.corners();
            let a = Vector3::new(c1[0] - c0[0], c1[1] - c0[1], c1[2] - c0[2]);
            let b = Vector3::new(c2[0] - c0[0], c2[1] - c0[1], c2[2] - c0[2]);
            assert_eq!(a.cross(b), side.normal(), "{:?}", side);
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let n = side.normal();
            // A face on the positive side sits at coordinate 1 along its axis.
            let plane = if n.x + n.y + n.z > 0 { 1 } else { 0 };
            for c in side.corners() {
                let along = c[0] * n.x.abs() + c[1] * n.y.abs() + c[2] * n.z.abs();
                assert_eq!(along, plane);
            }
        }
    }

    #[test]
    fn normals_map_back_to_sides() {
        for side in BlockSide::all() {
            assert_eq!(BlockSide::from_normal(side.normal()), Some(side));
            assert_eq!(side.normal().cast::<f32>().map(|n| n.magnitude()), Some(1.0));
        }
        assert_eq!(BlockSide::from_normal(Vector3::new(1, 1, 0)), None);
    }
}

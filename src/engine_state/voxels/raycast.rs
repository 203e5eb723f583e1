//! # Raycast Module
//!
//! Block picking by fixed-step ray marching.
//!
//! The ray is sampled every [`RAY_STEP`] world units rather than traversed cell by
//! cell. A step well below one block keeps consecutive samples in the same or an
//! adjacent cell almost always, which is what the reported face relies on; at
//! grazing angles a sample can skip diagonally past an edge, in which case the
//! reported normal spans two axes and no single face can be named.

use cgmath::{InnerSpace, Point3, Vector3};

use super::{
    block::{block_side::BlockSide, block_type::BlockKind},
    region::block_position,
    world::World,
};

/// Distance between two samples along the ray.
pub const RAY_STEP: f32 = 0.1;
/// Reach used by [`World::raycast`].
pub const DEFAULT_MAX_DISTANCE: f32 = 10.0;
/// Longest reach a single pick will march. Larger requests are clamped.
pub const MAX_REACH: f32 = 256.0;

/// The first non-empty block found along a ray.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// The block that was struck
    pub position: Point3<i32>,
    /// The cell of the sample one step before the hit
    pub previous: Point3<i32>,
    /// `previous - position`: the outward normal of the struck face
    pub normal: Vector3<i32>,
    /// Kind of the struck block
    pub block: BlockKind,
}

impl RayHit {
    /// The cell a new block is placed into when building against the hit face.
    pub fn place_position(&self) -> Point3<i32> {
        self.position + self.normal
    }

    /// The face that was struck, if the normal is a single axis.
    pub fn side(&self) -> Option<BlockSide> {
        BlockSide::from_normal(self.normal)
    }
}

impl World {
    /// Picks the first non-empty block within [`DEFAULT_MAX_DISTANCE`].
    pub fn raycast(&self, origin: Point3<f32>, direction: Vector3<f32>) -> Option<RayHit> {
        self.raycast_with_distance(origin, direction, DEFAULT_MAX_DISTANCE)
    }

    /// Picks the first non-empty block along a ray.
    ///
    /// Samples `origin + direction * RAY_STEP * i` for `i = 1..=ceil(max_distance / RAY_STEP)`,
    /// with `direction` normalized first. The origin cell itself is never tested.
    /// `max_distance` is clamped to [`MAX_REACH`].
    ///
    /// # Returns
    /// `None` when nothing is hit within the step budget, when `direction` has
    /// no length, or when `max_distance` is not a positive finite number.
    pub fn raycast_with_distance(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RayHit> {
        let length2 = direction.magnitude2();
        let reach_valid = max_distance.is_finite() && max_distance > 0.0;
        if !reach_valid || length2 == 0.0 || !length2.is_finite() {
            return None;
        }

        let step = direction.normalize() * RAY_STEP;
        let steps = (max_distance.min(MAX_REACH) / RAY_STEP).ceil() as u32;

        let mut previous = block_position(origin);
        for i in 1..=steps {
            let sample = block_position(origin + step * i as f32);
            let block = self.get_block(sample.x, sample.y, sample.z);
            if !block.is_empty() {
                return Some(RayHit {
                    position: sample,
                    previous,
                    normal: previous - sample,
                    block,
                });
            }
            previous = sample;
        }

        None
    }

    /// Clears the block that was hit.
    pub fn break_block(&mut self, hit: &RayHit) {
        let target = hit.position;
        self.set_block(target.x, target.y, target.z, BlockKind::EMPTY);
    }

    /// Places `kind` against the face that was hit.
    pub fn place_block(&mut self, hit: &RayHit, kind: BlockKind) {
        let target = hit.place_position();
        self.set_block(target.x, target.y, target.z, kind);
    }
}

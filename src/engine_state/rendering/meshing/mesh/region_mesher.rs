//! Visible-face extraction for one region.
//!
//! The mesher first copies the region, plus a one block border on every side,
//! out of the world into a padded snapshot. Face culling then only touches the
//! snapshot, so a block's six neighbours are plain index offsets.
//!
//! A face is emitted when the neighbouring cell is empty, or when exactly one of
//! the two cells is water. Solid faces against solid blocks and water faces
//! against water are culled.

use bitvec::vec::BitVec;
use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockKind},
    region::{RegionCoord, REGION_SIZE, WORLD_HEIGHT},
    world::BlockAccess,
};

use super::{face::Face, mesh::Mesh};

/// Horizontal dimension of the snapshot including the border.
const DIMENSION_WRAPPED: usize = (REGION_SIZE + 2) as usize;
/// Vertical dimension of the snapshot including the border.
const HEIGHT_WRAPPED: usize = (WORLD_HEIGHT + 2) as usize;
/// Number of cells in one horizontal layer of the snapshot.
const PLANE_SIZE_WRAPPED: usize = DIMENSION_WRAPPED * DIMENSION_WRAPPED;
/// Total number of cells in the snapshot.
const SIZE_WRAPPED: usize = PLANE_SIZE_WRAPPED * HEIGHT_WRAPPED;
/// Number of cells inside the region proper.
const REGION_CELLS: usize = (REGION_SIZE * REGION_SIZE * WORLD_HEIGHT) as usize;

/// Builds region meshes, reusing its snapshot buffers between rebuilds.
#[derive(Debug)]
pub struct RegionMesher {
    /// Bit per padded cell: non-empty and not water
    occluders: BitVec,
    /// Bit per padded cell: water
    water: BitVec,
    /// Kinds of the unpadded region cells
    kinds: Vec<BlockKind>,
}

impl Default for RegionMesher {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionMesher {
    /// Creates a mesher with pre-sized snapshot buffers.
    pub fn new() -> Self {
        RegionMesher {
            occluders: BitVec::repeat(false, SIZE_WRAPPED),
            water: BitVec::repeat(false, SIZE_WRAPPED),
            kinds: vec![BlockKind::EMPTY; REGION_CELLS],
        }
    }

    #[inline]
    fn wrapped_index(i: usize, j: usize, k: usize) -> usize {
        i + DIMENSION_WRAPPED * k + PLANE_SIZE_WRAPPED * j
    }

    #[inline]
    fn region_index(x: usize, y: usize, z: usize) -> usize {
        x + REGION_SIZE as usize * z + (REGION_SIZE * REGION_SIZE) as usize * y
    }

    /// Copies the region and its border out of the world.
    fn snapshot<W: BlockAccess + ?Sized>(&mut self, world: &W, region: RegionCoord) -> usize {
        let origin = region.origin();
        let mut non_empty = 0;

        for j in 0..HEIGHT_WRAPPED {
            for k in 0..DIMENSION_WRAPPED {
                for i in 0..DIMENSION_WRAPPED {
                    // Border cells past the end of the i32 range read as empty.
                    let kind = match (
                        origin.x.checked_add(i as i32 - 1),
                        origin.z.checked_add(k as i32 - 1),
                    ) {
                        (Some(x), Some(z)) => world.block(Point3::new(x, j as i32 - 1, z)),
                        _ => BlockKind::EMPTY,
                    };
                    let index = Self::wrapped_index(i, j, k);
                    self.occluders.set(index, !kind.is_empty() && !kind.is_water());
                    self.water.set(index, kind.is_water());

                    let interior = (1..=REGION_SIZE as usize).contains(&i)
                        && (1..=WORLD_HEIGHT as usize).contains(&j)
                        && (1..=REGION_SIZE as usize).contains(&k);
                    if interior {
                        self.kinds[Self::region_index(i - 1, j - 1, k - 1)] = kind;
                        if !kind.is_empty() {
                            non_empty += 1;
                        }
                    }
                }
            }
        }

        non_empty
    }

    /// Whether the face of a cell towards `neighbor_index` is hidden.
    #[inline]
    fn is_culled(&self, kind: BlockKind, neighbor_index: usize) -> bool {
        if kind.is_water() {
            self.water[neighbor_index]
        } else {
            self.occluders[neighbor_index]
        }
    }

    /// Builds the mesh of the externally visible faces of `region`.
    ///
    /// Cells are visited column by column (x, then z, then y upward), so the
    /// output is fully determined by the world state.
    pub fn build<W: BlockAccess + ?Sized>(&mut self, world: &W, region: RegionCoord) -> Mesh {
        let start = Instant::now();
        let mut mesh = Mesh::new();

        if self.snapshot(world, region) == 0 {
            return mesh;
        }

        let origin = region.origin();
        for x in 0..REGION_SIZE as usize {
            for z in 0..REGION_SIZE as usize {
                for y in 0..WORLD_HEIGHT as usize {
                    let kind = self.kinds[Self::region_index(x, y, z)];
                    let Some(material) = kind.material() else {
                        continue;
                    };

                    for side in BlockSide::all() {
                        let offset = side.normal();
                        let neighbor_index = Self::wrapped_index(
                            (x as i32 + 1 + offset.x) as usize,
                            (y as i32 + 1 + offset.y) as usize,
                            (z as i32 + 1 + offset.z) as usize,
                        );
                        if self.is_culled(kind, neighbor_index) {
                            continue;
                        }

                        let block = Point3::new(origin.x + x as i32, y as i32, origin.z + z as i32);
                        mesh.push_face(&Face::new(block, side, material.color_for(side)));
                    }
                }
            }
        }

        debug!(
            "Meshed region ({}, {}): {} faces in {:?}",
            region.x,
            region.z,
            mesh.face_count(),
            start.elapsed()
        );

        mesh
    }
}

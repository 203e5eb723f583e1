//! # World Module
//!
//! This module provides the `World` struct, which owns the sparse block storage
//! of the voxel world, keeps every region mesh in sync with it and answers the
//! read queries of the player controller.
//!
//! ## Storage
//!
//! Only non-empty cells are stored, keyed by their integer position. An absent
//! key reads as `EMPTY`, and clearing a block removes its entry. Reads and writes
//! are O(1) hash lookups.
//!
//! ## Mesh Synchronisation
//!
//! Every edit that changes storage rebuilds the mesh of the region containing
//! the edited cell, synchronously, before the call returns. Adjacent regions are
//! left alone unless `rebuild_seam_neighbors` is enabled, so a neighbour's face
//! on the far side of a region border can stay stale until that region is
//! rebuilt for another reason.
//!
//! Rebuilds don't touch a scene directly. They queue [`MeshCommand`]s, which
//! the owner forwards to a renderer through [`World::flush_meshes`].

use std::collections::{BTreeSet, HashMap, HashSet};

use cgmath::Point3;
use log::{info, trace};
use web_time::Instant;

use crate::{
    config::WorldConfig,
    engine_state::rendering::meshing::{MeshCommand, MeshSink, RegionMesher},
};

use super::{
    block::block_type::BlockKind,
    region::{block_position, RegionCoord},
    terrain::{extent_in_blocks, TerrainGenerator},
};

/// Read access to block kinds by integer position.
///
/// Implementations must return `EMPTY` for every position they don't store.
pub trait BlockAccess {
    /// The kind of the block at `position`.
    fn block(&self, position: Point3<i32>) -> BlockKind;
}

/// The sparse mapping from block position to non-empty kind.
#[derive(Debug, Default, Clone)]
pub struct BlockStore {
    blocks: HashMap<Point3<i32>, BlockKind>,
    /// Highest `y` ever written with a non-empty kind
    top: Option<i32>,
}

impl BlockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BlockStore::default()
    }

    /// Writes a kind, removing the entry for `EMPTY`.
    ///
    /// # Returns
    /// `true` if the stored state changed.
    pub fn set(&mut self, position: Point3<i32>, kind: BlockKind) -> bool {
        if kind.is_empty() {
            self.blocks.remove(&position).is_some()
        } else {
            self.raise_top(position.y);
            self.blocks.insert(position, kind) != Some(kind)
        }
    }

    fn raise_top(&mut self, y: i32) {
        self.top = Some(self.top.map_or(y, |top| top.max(y)));
    }

    /// An upper bound on the `y` of every stored block, `None` if nothing was
    /// ever stored.
    pub fn top(&self) -> Option<i32> {
        self.top
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over every populated cell.
    pub fn iter(&self) -> impl Iterator<Item = (Point3<i32>, BlockKind)> + '_ {
        self.blocks.iter().map(|(position, kind)| (*position, *kind))
    }

    fn raw_mut(&mut self) -> &mut HashMap<Point3<i32>, BlockKind> {
        &mut self.blocks
    }

    /// Re-derives the height bound after writes through `raw_mut`.
    fn recompute_top(&mut self) {
        self.top = self.blocks.keys().map(|position| position.y).max();
    }

    fn clear(&mut self) {
        self.blocks.clear();
        self.top = None;
    }
}

impl BlockAccess for BlockStore {
    #[inline]
    fn block(&self, position: Point3<i32>) -> BlockKind {
        self.blocks.get(&position).copied().unwrap_or_default()
    }
}

/// The voxel world: block storage, terrain and region mesh bookkeeping.
pub struct World {
    store: BlockStore,
    generator: TerrainGenerator,
    mesher: RegionMesher,
    /// Regions whose mesh is currently owned by the renderer
    installed: HashSet<RegionCoord>,
    /// Commands not yet handed to a sink, in emission order
    pending: Vec<MeshCommand>,
    rebuild_seam_neighbors: bool,
}

impl World {
    /// Generates a world and meshes every region of the generated extent.
    ///
    /// The resulting `Install` commands are queued for the first
    /// [`World::flush_meshes`].
    ///
    /// Canopies of trees near the edge of the extent can reach into regions
    /// outside it. Those leaves are stored but stay unmeshed until an edit
    /// rebuilds their region.
    pub fn new(config: WorldConfig) -> Self {
        let start = Instant::now();
        let mut world = World::empty(&config);

        let half_width = extent_in_blocks(config.render_distance);
        let trees = world.generator.populate(world.store.raw_mut(), half_width);
        world.store.recompute_top();

        for region in RegionCoord::extent(config.render_distance) {
            world.rebuild_region(region);
        }

        info!(
            "Generated {} blocks, {} trees and {} region meshes in {:?}",
            world.store.len(),
            trees,
            world.installed.len(),
            start.elapsed()
        );

        world
    }

    /// Creates a world with no blocks and no terrain.
    ///
    /// The terrain generator is still configured, so height queries work.
    pub fn empty(config: &WorldConfig) -> Self {
        World {
            store: BlockStore::new(),
            generator: TerrainGenerator::new(config),
            mesher: RegionMesher::new(),
            installed: HashSet::new(),
            pending: Vec::new(),
            rebuild_seam_neighbors: config.rebuild_seam_neighbors,
        }
    }

    /// The kind of the block at integer coordinates. Never fails.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockKind {
        self.store.block(Point3::new(x, y, z))
    }

    /// The kind of the block containing a continuous position.
    pub fn get_block_at(&self, position: Point3<f32>) -> BlockKind {
        self.store.block(block_position(position))
    }

    /// Writes a block and rebuilds the mesh of the region containing it.
    ///
    /// `EMPTY` clears the cell. Writing the kind a cell already holds changes
    /// nothing and skips the rebuild. Any integer coordinate is accepted; cells
    /// outside `0..WORLD_HEIGHT` are stored but never meshed.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, kind: BlockKind) {
        let position = Point3::new(x, y, z);
        if !self.store.set(position, kind) {
            return;
        }
        trace!("Set ({}, {}, {}) to {:?}", x, y, z, kind);

        for region in self.affected_regions(position) {
            self.rebuild_region(region);
        }
    }

    /// Writes a block at the cell containing a continuous position.
    pub fn set_block_at(&mut self, position: Point3<f32>, kind: BlockKind) {
        let block = block_position(position);
        self.set_block(block.x, block.y, block.z, kind);
    }

    /// Applies many edits, then rebuilds each affected region once.
    ///
    /// # Returns
    /// The number of edits that changed storage.
    pub fn set_blocks<I>(&mut self, edits: I) -> usize
    where
        I: IntoIterator<Item = (Point3<i32>, BlockKind)>,
    {
        let mut dirty = BTreeSet::new();
        let mut changed = 0;
        for (position, kind) in edits {
            if self.store.set(position, kind) {
                changed += 1;
                dirty.extend(self.affected_regions(position));
            }
        }
        for region in dirty {
            self.rebuild_region(region);
        }
        changed
    }

    fn affected_regions(&self, position: Point3<i32>) -> Vec<RegionCoord> {
        let mut regions = vec![RegionCoord::of_block(position)];
        if self.rebuild_seam_neighbors {
            regions.extend(RegionCoord::seam_neighbors(position));
        }
        regions
    }

    /// Rebuilds the mesh of one region from current storage.
    ///
    /// Queues a `Dispose` for the region's installed mesh, if it has one, then
    /// an `Install` for the new mesh unless the region has no visible faces.
    pub fn rebuild_region(&mut self, region: RegionCoord) {
        if self.installed.remove(&region) {
            self.pending.push(MeshCommand::Dispose { region });
        }

        let mesh = self.mesher.build(&self.store, region);
        if !mesh.is_empty() {
            self.installed.insert(region);
            self.pending.push(MeshCommand::Install { region, mesh });
        }
    }

    /// Hands every queued mesh command to `sink`, in order.
    ///
    /// # Returns
    /// The number of commands delivered.
    pub fn flush_meshes<S: MeshSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let count = self.pending.len();
        for command in self.pending.drain(..) {
            sink.apply(command);
        }
        count
    }

    /// Takes the queued mesh commands without delivering them.
    pub fn take_mesh_commands(&mut self) -> Vec<MeshCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Whether the renderer currently owns a mesh for `region`.
    pub fn has_mesh(&self, region: RegionCoord) -> bool {
        self.installed.contains(&region)
    }

    /// The deterministic height-field value of the column at `(x, z)`.
    pub fn terrain_height(&self, x: i32, z: i32) -> i32 {
        self.generator.terrain_height(x, z)
    }

    /// The height a body standing in column `(x, z)` rests on.
    ///
    /// Scans downward from the cell containing `from_y` and returns the top of
    /// the first non-empty block, or `0` when the column is empty down to `y = 0`.
    /// The scan starts no higher than the highest stored block.
    pub fn ground_height(&self, x: f32, from_y: f32, z: f32) -> i32 {
        let Some(top) = self.store.top() else {
            return 0;
        };
        let (bx, bz) = (x.floor() as i32, z.floor() as i32);
        (0..=(from_y.floor() as i32).min(top))
            .rev()
            .find(|y| !self.get_block(bx, *y, bz).is_empty())
            .map_or(0, |y| y + 1)
    }

    /// Number of non-empty cells in the world.
    pub fn block_count(&self) -> usize {
        self.store.len()
    }

    /// Read-only access to the underlying storage.
    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    /// Tears the world down: clears storage and queues a `Dispose` for every
    /// installed region mesh.
    pub fn dispose(&mut self) {
        let mut regions: Vec<_> = self.installed.drain().collect();
        regions.sort();
        self.pending
            .extend(regions.into_iter().map(|region| MeshCommand::Dispose { region }));
        self.store.clear();
        info!("World disposed");
    }
}

impl BlockAccess for World {
    fn block(&self, position: Point3<i32>) -> BlockKind {
        self.store.block(position)
    }
}

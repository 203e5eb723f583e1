//! Region mesh generation and the handoff of meshes to a renderer.
//!
//! The world never talks to a scene graph. Every region rebuild queues
//! [`MeshCommand`]s that a rendering collaborator drains through the
//! [`MeshSink`] trait:
//! 1. `Dispose` for the mesh the region currently has installed, if any
//! 2. `Install` for the freshly built mesh, if it has any geometry
//!
//! Ownership of an installed [`Mesh`] moves to the sink. The sink releases it
//! when the matching `Dispose` arrives.
//!
//! # Architecture
//! - `mesh/`: The mesh data structures and the face culling mesher
//! - [`SceneMeshes`]: A plain in-memory sink, keeping the live mesh per region

use std::collections::HashMap;

use log::warn;

use crate::engine_state::voxels::region::RegionCoord;

mod mesh;

pub use mesh::*;

/// One step of the mesh lifecycle of a region.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshCommand {
    /// Release the geometry currently installed for `region`.
    Dispose {
        /// Region whose mesh is released
        region: RegionCoord,
    },
    /// Take ownership of `mesh` and display it for `region`.
    Install {
        /// Region the mesh belongs to
        region: RegionCoord,
        /// The new geometry
        mesh: Mesh,
    },
}

impl MeshCommand {
    /// The region this command addresses.
    pub fn region(&self) -> RegionCoord {
        match self {
            MeshCommand::Dispose { region } | MeshCommand::Install { region, .. } => *region,
        }
    }
}

/// The receiving end of mesh commands, implemented by a renderer.
pub trait MeshSink {
    /// Takes ownership of a new region mesh.
    fn install(&mut self, region: RegionCoord, mesh: Mesh);

    /// Releases the mesh of a region.
    fn dispose(&mut self, region: RegionCoord);

    /// Routes a command to `install` or `dispose`.
    fn apply(&mut self, command: MeshCommand) {
        match command {
            MeshCommand::Dispose { region } => self.dispose(region),
            MeshCommand::Install { region, mesh } => self.install(region, mesh),
        }
    }
}

/// An in-memory scene holding the live mesh of every region.
#[derive(Debug, Default)]
pub struct SceneMeshes {
    meshes: HashMap<RegionCoord, Mesh>,
    installed: usize,
    disposed: usize,
}

impl SceneMeshes {
    /// Creates an empty scene.
    pub fn new() -> Self {
        SceneMeshes::default()
    }

    /// The live mesh of a region, if it has one.
    pub fn get(&self, region: RegionCoord) -> Option<&Mesh> {
        self.meshes.get(&region)
    }

    /// Number of regions currently displaying a mesh.
    pub fn live(&self) -> usize {
        self.meshes.len()
    }

    /// Total installs received so far.
    pub fn installed(&self) -> usize {
        self.installed
    }

    /// Total disposals received so far.
    pub fn disposed(&self) -> usize {
        self.disposed
    }

    /// Total triangles across all live meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.values().map(Mesh::triangle_count).sum()
    }
}

impl MeshSink for SceneMeshes {
    fn install(&mut self, region: RegionCoord, mesh: Mesh) {
        self.installed += 1;
        if self.meshes.insert(region, mesh).is_some() {
            warn!(
                "Region ({}, {}) received a mesh without disposing the previous one",
                region.x, region.z
            );
        }
    }

    fn dispose(&mut self, region: RegionCoord) {
        if self.meshes.remove(&region).is_some() {
            self.disposed += 1;
        } else {
            warn!("Region ({}, {}) has no mesh to dispose", region.x, region.z);
        }
    }
}

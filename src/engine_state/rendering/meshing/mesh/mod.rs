//! Mesh generation for voxel regions.
//!
//! This module converts the block kinds of one region into a flat-colored,
//! indexed triangle mesh of its visible surface.
//!
//! # Architecture
//! - [`Mesh`]: The immutable vertex and index buffers of a region
//! - [`Face`]: A single visible unit face of a block
//! - [`RegionMesher`]: Culls hidden faces and assembles the mesh
//!
//! # Usage
//! ```no_run
//! use voxel_sandbox::{RegionCoord, RegionMesher, World, WorldConfig};
//!
//! let world = World::new(WorldConfig::default());
//! let mesh = RegionMesher::new().build(&world, RegionCoord::new(0, 0));
//! println!("{} triangles", mesh.triangle_count());
//! ```

mod face;
mod mesh;
mod region_mesher;

pub use face::Face;
pub use mesh::Mesh;
pub use region_mesher::RegionMesher;

#[cfg(test)]
mod tests;

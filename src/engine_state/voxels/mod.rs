//! # Voxel Engine Core
//!
//! This module contains the voxel world itself: what a block is, where blocks
//! are stored, how the initial terrain is generated and how blocks are picked.
//!
//! ## Architecture
//!
//! * **Block**: Block kinds, block faces and the material catalog
//! * **Noise**: The deterministic value noise behind the height field
//! * **Region**: Fixed-size world columns, the unit a mesh is built for
//! * **Terrain**: Height field, column layering, water and trees
//! * **World**: Sparse storage, edits and mesh bookkeeping
//! * **Raycast**: Fixed-step block picking
//!
//! ## Data Flow
//!
//! 1. The world is generated once and every region is meshed
//! 2. An edit updates storage and rebuilds the owning region's mesh
//! 3. The rebuilt mesh is queued for the renderer
//! 4. The player controller only reads: block lookups, ground height, picking
//!
//! ## Threading
//!
//! Everything runs synchronously on the caller's thread. An edit and its
//! rebuild complete before `set_block` returns, so reads always observe a
//! settled world.

pub mod block;
pub mod noise_source;
pub mod raycast;
pub mod region;
pub mod terrain;
pub mod world;

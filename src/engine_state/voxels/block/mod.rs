//! # Block Module
//!
//! This module provides the block-related functionality for the voxel engine:
//! block kind definitions, block face handling and the material catalog that
//! maps each kind to its face colors and display name.

pub mod block_side;
pub mod block_type;
pub mod material;

pub use block_side::BlockSide;
pub use block_type::BlockKind;
pub use material::{MaterialSet, Rgb};

/// The underlying integer type used to represent block kinds compactly.
pub type BlockTypeSize = u8;

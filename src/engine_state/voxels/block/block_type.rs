//! # Block Type Module
//!
//! This module defines the closed set of block kinds that can occupy a cell of the
//! voxel world, together with their display names, the name lookup table and the
//! palette of kinds a player is allowed to place.

use num_derive::FromPrimitive;
use phf::phf_map;

use super::BlockTypeSize;

/// Enumerates all possible block kinds in the voxel world.
///
/// `EMPTY` is the absent state. It is never stored in the world: clearing a
/// cell removes its entry instead. The `FromPrimitive` derive allows conversion
/// from the compact `BlockTypeSize` id.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum BlockKind {
    /// No block. Reads of unpopulated coordinates return this.
    #[default]
    EMPTY = 0,

    /// Grass with a green top, dirt bottom and grassy sides.
    GRASS = 1,

    /// Plain dirt, the bulk of every column below the surface.
    DIRT = 2,

    /// Stone, the two bottom layers of the terrain.
    STONE = 3,

    /// Tree trunk.
    WOOD = 4,

    /// Tree canopy.
    LEAVES = 5,

    /// Beach surface for low lying columns.
    SAND = 6,

    /// Translucent water. Never occludes its neighbours.
    WATER = 7,
}

/// Case-insensitive name lookup, keyed by the lowercase display name.
static BLOCK_KINDS_BY_NAME: phf::Map<&'static str, BlockKind> = phf_map! {
    "air" => BlockKind::EMPTY,
    "empty" => BlockKind::EMPTY,
    "grass" => BlockKind::GRASS,
    "dirt" => BlockKind::DIRT,
    "stone" => BlockKind::STONE,
    "wood" => BlockKind::WOOD,
    "leaves" => BlockKind::LEAVES,
    "sand" => BlockKind::SAND,
    "water" => BlockKind::WATER,
};

impl BlockKind {
    /// Every kind in id order, `EMPTY` included.
    pub const ALL: [BlockKind; 8] = [
        BlockKind::EMPTY,
        BlockKind::GRASS,
        BlockKind::DIRT,
        BlockKind::STONE,
        BlockKind::WOOD,
        BlockKind::LEAVES,
        BlockKind::SAND,
        BlockKind::WATER,
    ];

    /// The kinds a player can select for placement, in scroll order.
    pub const PLACEABLE: [BlockKind; 6] = [
        BlockKind::GRASS,
        BlockKind::DIRT,
        BlockKind::STONE,
        BlockKind::WOOD,
        BlockKind::LEAVES,
        BlockKind::SAND,
    ];

    /// Converts a compact id back into a kind.
    ///
    /// # Returns
    /// `None` if `id` doesn't correspond to any kind.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(id)
    }

    /// The compact id of this kind.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Looks a kind up by its display name, ignoring case.
    ///
    /// `"Air"` and `"Empty"` both resolve to `EMPTY`.
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_KINDS_BY_NAME
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// The human readable name shown by a UI.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::EMPTY => "Air",
            BlockKind::GRASS => "Grass",
            BlockKind::DIRT => "Dirt",
            BlockKind::STONE => "Stone",
            BlockKind::WOOD => "Wood",
            BlockKind::LEAVES => "Leaves",
            BlockKind::SAND => "Sand",
            BlockKind::WATER => "Water",
        }
    }

    /// Returns `true` for `EMPTY`.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == BlockKind::EMPTY
    }

    /// Returns `true` for `WATER`.
    #[inline]
    pub fn is_water(self) -> bool {
        self == BlockKind::WATER
    }

    /// Steps through [`BlockKind::PLACEABLE`] by `delta`, wrapping at both ends.
    ///
    /// A kind outside the palette (`EMPTY`, `WATER`) starts from the first entry,
    /// so scrolling forward by one from it selects the second palette entry.
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::PLACEABLE.len() as i32;
        let current = Self::PLACEABLE
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(0) as i32;
        Self::PLACEABLE[(current + delta).rem_euclid(len) as usize]
    }
}

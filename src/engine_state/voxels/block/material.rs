//! # Block Material Module
//!
//! The static catalog of flat face colors for every visible block kind.

use super::{block_side::BlockSide, block_type::BlockKind};

/// A flat RGB color, stored as a `0xRRGGBB` value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb(hex & 0x00ff_ffff)
    }

    /// The color with channels in `0.0..=1.0`, ready to be written into a vertex.
    pub fn to_array(self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }
}

/// The face appearances of one block kind.
///
/// `top` and `bottom` are optional; `side` is used wherever they are missing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialSet {
    /// Color of the +Y face, if it differs from the sides
    pub top: Option<Rgb>,
    /// Color of the -Y face, if it differs from the sides
    pub bottom: Option<Rgb>,
    /// Color of the four horizontal faces and the fallback for top/bottom
    pub side: Rgb,
    /// Opacity the renderer should draw this kind with
    pub opacity: f32,
}

impl MaterialSet {
    const fn uniform(hex: u32) -> Self {
        MaterialSet {
            top: None,
            bottom: None,
            side: Rgb::from_hex(hex),
            opacity: 1.0,
        }
    }

    /// Selects the color for a face orientation.
    pub fn color_for(&self, side: BlockSide) -> Rgb {
        match side {
            BlockSide::TOP => self.top.unwrap_or(self.side),
            BlockSide::BOTTOM => self.bottom.unwrap_or(self.side),
            _ => self.side,
        }
    }

    /// Whether the renderer has to blend this kind.
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

static GRASS: MaterialSet = MaterialSet {
    top: Some(Rgb::from_hex(0x5a8c3f)),
    bottom: Some(Rgb::from_hex(0x8b6f47)),
    side: Rgb::from_hex(0x6b7f3f),
    opacity: 1.0,
};
static DIRT: MaterialSet = MaterialSet::uniform(0x8b6f47);
static STONE: MaterialSet = MaterialSet::uniform(0x888888);
static WOOD: MaterialSet = MaterialSet {
    top: Some(Rgb::from_hex(0x6d4c30)),
    bottom: Some(Rgb::from_hex(0x6d4c30)),
    side: Rgb::from_hex(0x8b6f47),
    opacity: 1.0,
};
static LEAVES: MaterialSet = MaterialSet::uniform(0x2d5016);
static SAND: MaterialSet = MaterialSet::uniform(0xe0c896);
static WATER: MaterialSet = MaterialSet {
    top: None,
    bottom: None,
    side: Rgb::from_hex(0x4a90e2),
    opacity: 0.7,
};

impl BlockKind {
    /// The material set of this kind, or `None` for kinds with no visual (`EMPTY`).
    pub fn material(self) -> Option<&'static MaterialSet> {
        match self {
            BlockKind::EMPTY => None,
            BlockKind::GRASS => Some(&GRASS),
            BlockKind::DIRT => Some(&DIRT),
            BlockKind::STONE => Some(&STONE),
            BlockKind::WOOD => Some(&WOOD),
            BlockKind::LEAVES => Some(&LEAVES),
            BlockKind::SAND => Some(&SAND),
            BlockKind::WATER => Some(&WATER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hex_channels_are_normalised() {
        let [r, g, b] = Rgb::from_hex(0xff8000).to_array();
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 128.0 / 255.0);
        assert_relative_eq!(b, 0.0);
    }

    #[test]
    fn only_empty_lacks_a_material() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.material().is_none(), kind.is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn grass_uses_distinct_top_and_bottom() {
        let grass = BlockKind::GRASS.material().unwrap();
        assert_eq!(grass.color_for(BlockSide::TOP), Rgb::from_hex(0x5a8c3f));
        assert_eq!(grass.color_for(BlockSide::BOTTOM), Rgb::from_hex(0x8b6f47));
        assert_eq!(grass.color_for(BlockSide::FRONT), Rgb::from_hex(0x6b7f3f));
    }

    #[test]
    fn missing_top_falls_back_to_side() {
        let stone = BlockKind::STONE.material().unwrap();
        for side in BlockSide::all() {
            assert_eq!(stone.color_for(side), stone.side);
        }
    }

    #[test]
    fn water_is_the_only_translucent_kind() {
        for kind in BlockKind::ALL {
            if let Some(material) = kind.material() {
                assert_eq!(material.is_translucent(), kind.is_water());
            }
        }
    }
}

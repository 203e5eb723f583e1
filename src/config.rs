//! # World Configuration
//!
//! Startup parameters for world generation. Every field has a default, so an
//! empty JSON object (or no file at all) yields the standard world.

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine_state::voxels::region::RENDER_DISTANCE;

/// Probability that an eligible column grows a tree.
pub const TREE_CHANCE: f64 = 0.02;
/// Probability that an eligible canopy cell receives leaves.
pub const LEAF_FILL: f64 = 0.8;
/// Largest accepted `render_distance`, in regions.
pub const MAX_RENDER_DISTANCE: i32 = 64;

/// Errors raised while loading a [`WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path:?}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The contents were not valid configuration JSON.
    #[error("invalid world config")]
    Parse(#[from] serde_json::Error),

    /// `render_distance` is outside `1..=MAX_RENDER_DISTANCE`.
    #[error("render distance {0} is outside 1..={max}", max = MAX_RENDER_DISTANCE)]
    RenderDistance(i32),

    /// A probability field is outside `0.0..=1.0`.
    #[error("{field} must lie in 0..=1, got {value}")]
    Probability {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Tunables for terrain generation and edit handling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Seed of the height-field noise
    pub noise_seed: u32,
    /// Seed of the decoration RNG; `None` draws from entropy
    pub decoration_seed: Option<u64>,
    /// Half-width of the generated square extent, in regions
    pub render_distance: i32,
    /// Per-column probability of a tree on high ground
    pub tree_chance: f64,
    /// Per-cell probability of leaves inside a canopy
    pub leaf_fill: f64,
    /// Also rebuild adjacent regions when an edit lands on a region border
    pub rebuild_seam_neighbors: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            noise_seed: 0,
            decoration_seed: None,
            render_distance: RENDER_DISTANCE,
            tree_chance: TREE_CHANCE,
            leaf_fill: LEAF_FILL,
            rebuild_seam_neighbors: false,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the ranges serde can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RENDER_DISTANCE).contains(&self.render_distance) {
            return Err(ConfigError::RenderDistance(self.render_distance));
        }
        for (field, value) in [("tree_chance", self.tree_chance), ("leaf_fill", self.leaf_fill)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { field, value });
            }
        }
        Ok(())
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// A configuration without trees and with pinned decoration, so generated
    /// blocks depend on the height field alone.
    pub fn bare_terrain(render_distance: i32) -> Self {
        WorldConfig {
            decoration_seed: Some(0),
            render_distance,
            tree_chance: 0.0,
            ..Default::default()
        }
    }
}

pub const GRID_WIDTH: usize = 64;
pub const GRID_HEIGHT: usize = 64;

/// World units per grid cell. Tile meshes and connection points are authored
/// for a cell of this size.
pub const CELL_SIZE: f32 = 1.0;
pub const HALF_CELL: f32 = CELL_SIZE * 0.5;

/// Lateral distance of a connection point from the midpoint of its tile edge.
/// Traffic keeps right, so the outgoing lane sits on the right of the edge normal.
pub const LANE_OFFSET: f32 = 0.2;

/// Maximum squared distance between two connection points for them to link.
pub const DEFAULT_MAX_SQR_DIST: f32 = 0.25;

pub const WORLD_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;
pub const WORLD_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;

use bevy::prelude::*;

use crate::layers::{Layer, LayerMask};

/// Startup configuration for the road engine.
///
/// Insert before adding `RoadSimPlugin` to override the defaults; the plugin
/// only initializes it when absent.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RoadConfig {
    /// Layers counted as "connected" when choosing a tile variant.
    pub tile_layers: LayerMask,
    /// Layers whose occupants get refreshed when a road next to them changes.
    pub refresh_layers: LayerMask,
    /// Squared-distance threshold for linking connection points.
    pub max_link_sqr_dist: f32,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            tile_layers: LayerMask::only(Layer::Roads),
            refresh_layers: LayerMask::only(Layer::Roads).with(Layer::Buildings),
            max_link_sqr_dist: DEFAULT_MAX_SQR_DIST,
        }
    }
}

use bevy::prelude::*;

use crate::simulation_sets::RoadUpdateSet;

use super::network::RoadTileNetwork;
use super::systems::{
    handle_road_commands, validate_road_links, LinkInvariantViolations, RoadCommand,
};
use super::visuals::{apply_tile_visuals, TileVisualQueue};

pub struct RoadTilesPlugin;

impl Plugin for RoadTilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoadTileNetwork>()
            .init_resource::<TileVisualQueue>()
            .init_resource::<LinkInvariantViolations>()
            .add_event::<RoadCommand>()
            .add_systems(
                Update,
                handle_road_commands.in_set(RoadUpdateSet::Topology),
            )
            .add_systems(
                Update,
                validate_road_links.in_set(RoadUpdateSet::Validate),
            )
            .add_systems(Update, apply_tile_visuals.in_set(RoadUpdateSet::Visual));
    }
}

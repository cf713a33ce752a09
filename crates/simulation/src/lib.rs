use bevy::prelude::*;

pub mod buildings;
pub mod config;
pub mod grid;
pub mod layers;
pub mod occupancy;
pub mod road_tiles;
pub mod simulation_sets;
pub mod snapshot;

#[cfg(test)]
pub mod test_harness;

use buildings::BuildingStore;
use config::RoadConfig;
use occupancy::OccupancyGrid;
use simulation_sets::RoadUpdateSet;

pub struct RoadSimPlugin;

impl Plugin for RoadSimPlugin {
    fn build(&self, app: &mut App) {
        // Keep a RoadConfig inserted by the host before this plugin.
        app.init_resource::<RoadConfig>()
            .init_resource::<OccupancyGrid>()
            .init_resource::<BuildingStore>()
            .configure_sets(
                Update,
                (
                    RoadUpdateSet::Topology,
                    RoadUpdateSet::Validate,
                    RoadUpdateSet::Visual,
                )
                    .chain(),
            );

        app.add_plugins(road_tiles::RoadTilesPlugin);
    }
}

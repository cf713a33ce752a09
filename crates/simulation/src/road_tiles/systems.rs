use bevy::prelude::*;

use crate::buildings::{Building, BuildingStore};
use crate::config::RoadConfig;
use crate::grid::GridPos;
use crate::occupancy::{OccupancyGrid, StructureKind};

use super::network::{RoadEnv, RoadTileNetwork};
use super::visuals::{RoadSegmentTag, RoadTileVisuals, TileVisualQueue};

/// A placement, removal or refresh request. Requests sent in the same frame
/// are applied one at a time, in the order they were sent.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadCommand {
    /// Place a road tile on a cell.
    BuildRoad { pos: GridPos },
    /// Remove the road tile on a cell.
    EraseRoad { pos: GridPos },
    /// Place a generic building on a cell.
    PlaceBuilding { pos: GridPos },
    /// Remove the building on a cell.
    RemoveBuilding { pos: GridPos },
    /// Something outside the road engine invalidated the topology around a road.
    RefreshRoad { pos: GridPos },
}

/// Number of link invariant violations found by the last validation pass.
#[derive(Resource, Default, Debug)]
pub struct LinkInvariantViolations {
    pub count: u32,
}

/// Apply road commands to the world and the road engine, each one running to
/// completion before the next is read.
#[allow(clippy::too_many_arguments)]
pub fn handle_road_commands(
    mut commands: Commands,
    mut requests: EventReader<RoadCommand>,
    mut occupancy: ResMut<OccupancyGrid>,
    mut network: ResMut<RoadTileNetwork>,
    mut buildings: ResMut<BuildingStore>,
    mut visuals: ResMut<TileVisualQueue>,
    config: Res<RoadConfig>,
) {
    for request in requests.read() {
        match *request {
            RoadCommand::BuildRoad { pos } => {
                if !pos.in_bounds() || occupancy.get(pos).is_some() {
                    warn!("Cannot build road at ({}, {}): cell unavailable", pos.x, pos.y);
                    continue;
                }
                let entity = commands
                    .spawn((
                        RoadSegmentTag { pos },
                        Transform::from_translation(pos.to_world()),
                        Visibility::default(),
                    ))
                    .id();
                let tiles = RoadTileVisuals::spawn_children(&mut commands, entity);
                commands.entity(entity).insert(tiles);

                occupancy.occupy(pos, entity, StructureKind::Road);
                let mut env = RoadEnv {
                    occupancy: &*occupancy,
                    buildings: &mut *buildings,
                    visuals: &mut *visuals,
                    config: &*config,
                };
                network.on_build(pos, entity, &mut env);
            }
            RoadCommand::PlaceBuilding { pos } => {
                if !pos.in_bounds() || occupancy.get(pos).is_some() {
                    warn!("Cannot place building at ({}, {}): cell unavailable", pos.x, pos.y);
                    continue;
                }
                let entity = commands
                    .spawn((
                        Building { pos },
                        Transform::from_translation(pos.to_world()),
                        Visibility::default(),
                    ))
                    .id();
                occupancy.occupy(pos, entity, StructureKind::Building);
                buildings.place(pos, entity);

                let mut env = RoadEnv {
                    occupancy: &*occupancy,
                    buildings: &mut *buildings,
                    visuals: &mut *visuals,
                    config: &*config,
                };
                env.buildings.refresh(pos, env.occupancy, &mut *env.visuals);
                network.refresh_neighbors(pos, &mut env);
            }
            RoadCommand::EraseRoad { pos } => {
                let Some(occupant) = occupancy
                    .get(pos)
                    .filter(|o| o.kind == StructureKind::Road)
                else {
                    warn!("No road to erase at ({}, {})", pos.x, pos.y);
                    continue;
                };
                occupancy.vacate(pos);
                let mut env = RoadEnv {
                    occupancy: &*occupancy,
                    buildings: &mut *buildings,
                    visuals: &mut *visuals,
                    config: &*config,
                };
                network.on_erase(pos, &mut env);
                commands.entity(occupant.entity).despawn_recursive();
            }
            RoadCommand::RemoveBuilding { pos } => {
                let Some(occupant) = occupancy
                    .get(pos)
                    .filter(|o| o.kind == StructureKind::Building)
                else {
                    warn!("No building to remove at ({}, {})", pos.x, pos.y);
                    continue;
                };
                occupancy.vacate(pos);
                buildings.remove(pos);
                let mut env = RoadEnv {
                    occupancy: &*occupancy,
                    buildings: &mut *buildings,
                    visuals: &mut *visuals,
                    config: &*config,
                };
                network.refresh_neighbors(pos, &mut env);
                commands.entity(occupant.entity).despawn_recursive();
            }
            RoadCommand::RefreshRoad { pos } => {
                let mut env = RoadEnv {
                    occupancy: &*occupancy,
                    buildings: &mut *buildings,
                    visuals: &mut *visuals,
                    config: &*config,
                };
                network.refresh_visuals_and_chain_once(pos, &mut env);
            }
        }
    }
}

/// Log and count links that break the Out/In pairing or symmetry rules.
pub fn validate_road_links(
    network: Res<RoadTileNetwork>,
    mut violations: ResMut<LinkInvariantViolations>,
) {
    if !network.is_changed() {
        return;
    }
    let found = network.link_violations();
    for violation in &found {
        warn!("Road link invariant violation: {:?}", violation);
    }
    violations.count = found.len() as u32;
}

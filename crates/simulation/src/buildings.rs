use std::collections::HashMap;

use bevy::prelude::*;

use crate::grid::{GridPos, Heading, Side};
use crate::layers::{Layer, LayerMask};
use crate::occupancy::NeighborQuery;
use crate::road_tiles::TileVisuals;

/// Marker on a generic (non-road) building entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Building {
    pub pos: GridPos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBuilding {
    pub entity: Entity,
    pub facing: Heading,
    /// Number of visual refreshes triggered by nearby road changes.
    pub refreshes: u32,
}

/// All generic buildings, keyed by cell.
#[derive(Resource, Default, Debug)]
pub struct BuildingStore {
    buildings: HashMap<GridPos, PlacedBuilding>,
}

impl BuildingStore {
    pub fn place(&mut self, pos: GridPos, entity: Entity) -> bool {
        if self.buildings.contains_key(&pos) {
            return false;
        }
        self.buildings.insert(
            pos,
            PlacedBuilding {
                entity,
                facing: Heading::default(),
                refreshes: 0,
            },
        );
        true
    }

    pub fn remove(&mut self, pos: GridPos) -> Option<PlacedBuilding> {
        self.buildings.remove(&pos)
    }

    pub fn get(&self, pos: GridPos) -> Option<&PlacedBuilding> {
        self.buildings.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Turn the building toward its first adjacent road (clockwise from Front).
    /// With no road next to it the building keeps its current facing.
    pub fn refresh(
        &mut self,
        pos: GridPos,
        occupancy: &dyn NeighborQuery,
        visuals: &mut dyn TileVisuals,
    ) {
        let Some(building) = self.buildings.get_mut(&pos) else {
            return;
        };
        let roads = occupancy.occupied_sides(pos, LayerMask::only(Layer::Roads));
        if let Some(side) = Side::ALL.into_iter().find(|&s| roads.contains(s)) {
            building.facing = Heading::from_side(side);
        }
        building.refreshes += 1;
        visuals.refresh_building(building.entity, building.facing);
    }
}

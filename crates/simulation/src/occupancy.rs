//! Cell occupancy and the four-sided neighbor query the road engine reads.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::grid::{GridPos, Side, SideSet};
use crate::layers::{Layer, LayerMask};

/// What kind of structure sits on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Road,
    Building,
}

impl StructureKind {
    pub fn layer(self) -> Layer {
        match self {
            StructureKind::Road => Layer::Roads,
            StructureKind::Building => Layer::Buildings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub entity: Entity,
    pub kind: StructureKind,
}

impl Occupant {
    #[inline]
    pub fn layer(&self) -> Layer {
        self.kind.layer()
    }
}

/// Side-indexed result of a neighbor query.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neighbors([Option<Occupant>; 4]);

impl Neighbors {
    pub fn get(&self, side: Side) -> Option<Occupant> {
        self.0[side.index()]
    }

    pub fn sides(&self) -> SideSet {
        let mut set = SideSet::EMPTY;
        for (side, _) in self.iter() {
            set.insert(side);
        }
        set
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|o| o.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, Occupant)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.get(side).map(|o| (side, o)))
    }
}

/// Read access to per-cell occupants, with layer-filtered side projections.
pub trait NeighborQuery {
    fn occupant(&self, pos: GridPos) -> Option<Occupant>;

    fn query_neighbors(&self, pos: GridPos, mask: LayerMask) -> Neighbors {
        let mut result = [None; 4];
        for side in Side::ALL {
            result[side.index()] = self
                .occupant(pos.neighbor(side))
                .filter(|o| mask.contains(o.layer()));
        }
        Neighbors(result)
    }

    fn occupied_sides(&self, pos: GridPos, mask: LayerMask) -> SideSet {
        self.query_neighbors(pos, mask).sides()
    }

    fn count_occupied_sides(&self, pos: GridPos, mask: LayerMask) -> usize {
        self.query_neighbors(pos, mask).count()
    }

    fn is_occupied(&self, pos: GridPos, mask: LayerMask, side: Side) -> bool {
        self.occupant(pos.neighbor(side))
            .is_some_and(|o| mask.contains(o.layer()))
    }
}

/// Which structure occupies each grid cell.
#[derive(Resource, Default, Debug)]
pub struct OccupancyGrid {
    cells: HashMap<GridPos, Occupant>,
}

impl OccupancyGrid {
    /// Claim a cell. Returns `false` (and changes nothing) if it is already taken.
    pub fn occupy(&mut self, pos: GridPos, entity: Entity, kind: StructureKind) -> bool {
        if self.cells.contains_key(&pos) {
            return false;
        }
        self.cells.insert(pos, Occupant { entity, kind });
        true
    }

    pub fn vacate(&mut self, pos: GridPos) -> Option<Occupant> {
        self.cells.remove(&pos)
    }

    pub fn get(&self, pos: GridPos) -> Option<Occupant> {
        self.cells.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl NeighborQuery for OccupancyGrid {
    fn occupant(&self, pos: GridPos) -> Option<Occupant> {
        self.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roads() -> LayerMask {
        LayerMask::only(Layer::Roads)
    }

    #[test]
    fn test_occupy_rejects_taken_cell() {
        let mut grid = OccupancyGrid::default();
        let pos = GridPos::new(3, 3);
        assert!(grid.occupy(pos, Entity::from_raw(1), StructureKind::Road));
        assert!(!grid.occupy(pos, Entity::from_raw(2), StructureKind::Building));
        assert_eq!(grid.get(pos).map(|o| o.entity), Some(Entity::from_raw(1)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_query_filters_by_layer() {
        let mut grid = OccupancyGrid::default();
        let center = GridPos::new(5, 5);
        grid.occupy(center.neighbor(Side::Front), Entity::from_raw(1), StructureKind::Road);
        grid.occupy(center.neighbor(Side::Left), Entity::from_raw(2), StructureKind::Building);

        assert_eq!(grid.count_occupied_sides(center, roads()), 1);
        assert!(grid.is_occupied(center, roads(), Side::Front));
        assert!(!grid.is_occupied(center, roads(), Side::Left));

        let all = roads().with(Layer::Buildings);
        assert_eq!(grid.count_occupied_sides(center, all), 2);
        assert_eq!(
            grid.occupied_sides(center, all),
            SideSet::from_sides(&[Side::Front, Side::Left])
        );
        let neighbors = grid.query_neighbors(center, all);
        assert_eq!(neighbors.get(Side::Left).map(|o| o.kind), Some(StructureKind::Building));
        assert!(neighbors.get(Side::Back).is_none());
    }

    #[test]
    fn test_vacate_frees_cell() {
        let mut grid = OccupancyGrid::default();
        let pos = GridPos::new(0, 0);
        grid.occupy(pos, Entity::from_raw(7), StructureKind::Road);
        assert!(grid.vacate(pos).is_some());
        assert!(grid.is_empty());
        assert!(grid.vacate(pos).is_none());
    }
}

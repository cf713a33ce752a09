use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::{GridPos, Heading};

/// Shape category of a road tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileVariant {
    #[default]
    Straight,
    Turn,
    ThreeWay,
    FourWay,
}

impl TileVariant {
    pub const ALL: [TileVariant; 4] = [
        TileVariant::Straight,
        TileVariant::Turn,
        TileVariant::ThreeWay,
        TileVariant::FourWay,
    ];
}

/// Result of tile selection for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSelection {
    pub variant: TileVariant,
    pub heading: Heading,
}

/// Whether traffic leaves (`Out`) or enters (`In`) the segment at a point.
/// Fixed by the tile layout; never changes after activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointRole {
    In,
    Out,
}

impl PointRole {
    /// Only an `Out` and an `In` may be linked.
    #[inline]
    pub fn pairs_with(self, other: PointRole) -> bool {
        self != other
    }
}

/// Addresses a connection point by owning segment and slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointRef {
    pub segment: GridPos,
    pub index: u8,
}

impl PointRef {
    pub const fn new(segment: GridPos, index: u8) -> Self {
        Self { segment, index }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPoint {
    /// Offset from the segment centre in the tile's unrotated frame.
    pub local: Vec3,
    /// World position with the segment's heading applied.
    pub position: Vec3,
    pub role: PointRole,
    /// Points on other segments this one is joined to. Rewritten wholesale.
    pub links: Vec<PointRef>,
}

/// One placed road tile.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    pub entity: Entity,
    pub pos: GridPos,
    pub variant: TileVariant,
    pub heading: Heading,
    /// Connection points of the active variant. Empty until the first tile refresh.
    pub points: Vec<ConnectionPoint>,
    /// Number of tile selections run for this segment.
    pub tile_refreshes: u32,
}

impl RoadSegment {
    pub fn new(entity: Entity, pos: GridPos) -> Self {
        Self {
            entity,
            pos,
            variant: TileVariant::default(),
            heading: Heading::default(),
            points: Vec::new(),
            tile_refreshes: 0,
        }
    }

    pub fn selection(&self) -> TileSelection {
        TileSelection {
            variant: self.variant,
            heading: self.heading,
        }
    }

    pub fn point(&self, index: u8) -> Option<&ConnectionPoint> {
        self.points.get(index as usize)
    }

    pub fn point_refs(&self) -> impl Iterator<Item = (PointRef, &ConnectionPoint)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (PointRef::new(self.pos, i as u8), p))
    }
}

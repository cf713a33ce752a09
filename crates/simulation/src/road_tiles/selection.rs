//! Tile variant and heading selection from road-occupied sides.

use bevy::prelude::*;

use crate::config::{HALF_CELL, LANE_OFFSET};
use crate::grid::{Heading, Side, SideSet};

use super::types::{ConnectionPoint, PointRole, TileSelection, TileVariant};

impl TileVariant {
    /// Open sides of the tile in its own frame (heading `Forward`).
    pub fn open_sides(self) -> SideSet {
        match self {
            TileVariant::Straight => SideSet::from_sides(&[Side::Front, Side::Back]),
            TileVariant::Turn => SideSet::from_sides(&[Side::Front, Side::Left]),
            TileVariant::ThreeWay => SideSet::from_sides(&[Side::Left, Side::Front, Side::Right]),
            TileVariant::FourWay => SideSet::ALL,
        }
    }

    /// Authored connection points in the tile's own frame: an `Out` then an
    /// `In` for every open side, in clockwise side order.
    pub fn point_layout(self) -> Vec<(Vec3, PointRole)> {
        let mut layout = Vec::with_capacity(8);
        for side in self.open_sides().iter() {
            let normal = side.direction();
            // Right of the outward normal, seen from above.
            let right = Vec3::new(normal.z, 0.0, -normal.x);
            let edge = normal * HALF_CELL;
            layout.push((edge + right * LANE_OFFSET, PointRole::Out));
            layout.push((edge - right * LANE_OFFSET, PointRole::In));
        }
        layout
    }

    /// Fresh, unlinked connection points for a tile centred at `center`.
    pub fn instantiate_points(self, center: Vec3, heading: Heading) -> Vec<ConnectionPoint> {
        let rotation = heading.rotation();
        self.point_layout()
            .into_iter()
            .map(|(local, role)| ConnectionPoint {
                local,
                position: center + rotation * local,
                role,
                links: Vec::new(),
            })
            .collect()
    }
}

/// First heading (clockwise from `Forward`) whose rotated open sides equal `occupied`.
fn heading_matching(variant: TileVariant, occupied: SideSet) -> Heading {
    Side::ALL
        .into_iter()
        .map(Heading::from_side)
        .find(|heading| variant.open_sides().rotated(heading.quarter_turns()) == occupied)
        .unwrap_or_default()
}

/// Pick the tile variant and heading for a segment with the given road-occupied sides.
///
/// - 0 sides: straight, default heading.
/// - 1 side: straight, open end toward the neighbor.
/// - 2 opposite sides: straight along that axis (front/back wins `Forward`).
/// - 2 adjacent sides: turn.
/// - 3 sides: three-way, the missing side decides the heading.
/// - 4 sides: four-way, default heading.
pub fn select_tile_variant(occupied: SideSet) -> TileSelection {
    let (variant, heading) = match occupied.len() {
        0 => (TileVariant::Straight, Heading::Forward),
        1 => {
            let side = occupied.iter().next().unwrap_or(Side::Front);
            (TileVariant::Straight, Heading::from_side(side))
        }
        2 => {
            let straight = (occupied.contains(Side::Front) && occupied.contains(Side::Back))
                || (occupied.contains(Side::Left) && occupied.contains(Side::Right));
            let variant = if straight {
                TileVariant::Straight
            } else {
                TileVariant::Turn
            };
            (variant, heading_matching(variant, occupied))
        }
        3 => (
            TileVariant::ThreeWay,
            heading_matching(TileVariant::ThreeWay, occupied),
        ),
        _ => (TileVariant::FourWay, Heading::Forward),
    };
    TileSelection { variant, heading }
}

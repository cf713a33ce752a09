use std::collections::HashMap;

use bevy::prelude::*;

use crate::buildings::BuildingStore;
use crate::config::RoadConfig;
use crate::grid::GridPos;
use crate::layers::{Layer, LayerMask};
use crate::occupancy::{NeighborQuery, StructureKind};

use super::points::{closest_point, plan_links, PointCandidate};
use super::selection::select_tile_variant;
use super::types::{ConnectionPoint, PointRef, PointRole, RoadSegment, TileSelection};
use super::visuals::TileVisuals;

/// Collaborators a refresh pass reads from and writes to.
pub struct RoadEnv<'a> {
    pub occupancy: &'a dyn NeighborQuery,
    pub buildings: &'a mut BuildingStore,
    pub visuals: &'a mut dyn TileVisuals,
    pub config: &'a RoadConfig,
}

/// A broken link found by [`RoadTileNetwork::link_violations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkViolation {
    /// The link names a point that does not exist.
    Dangling { from: PointRef, to: PointRef },
    /// Both ends have the same role.
    SameRole { from: PointRef, to: PointRef },
    /// The target does not link back.
    OneSided { from: PointRef, to: PointRef },
}

/// Every placed road segment and the point-to-point links between them.
///
/// Links are stored on both endpoints. Whenever a segment's points are
/// replaced or removed they are first detached from their partners, so no
/// link ever outlives the point it names.
#[derive(Resource, Default, Debug)]
pub struct RoadTileNetwork {
    segments: HashMap<GridPos, RoadSegment>,
}

impl RoadTileNetwork {
    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn segment(&self, pos: GridPos) -> Option<&RoadSegment> {
        self.segments.get(&pos)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.segments.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoadSegment> {
        self.segments.values()
    }

    pub fn point(&self, point: PointRef) -> Option<&ConnectionPoint> {
        self.segments.get(&point.segment)?.point(point.index)
    }

    pub fn links_of(&self, point: PointRef) -> &[PointRef] {
        self.point(point).map(|p| p.links.as_slice()).unwrap_or(&[])
    }

    /// All links as `(out, in)` pairs, sorted.
    pub fn links(&self) -> Vec<(PointRef, PointRef)> {
        let mut pairs: Vec<(PointRef, PointRef)> = self
            .segments
            .values()
            .flat_map(|s| s.point_refs())
            .filter(|(_, p)| p.role == PointRole::Out)
            .flat_map(|(r, p)| p.links.iter().map(move |&l| (r, l)))
            .collect();
        pairs.sort();
        pairs
    }

    /// Connection point on the segment at `segment` closest to `position`,
    /// within `max_sqr_dist` squared distance.
    pub fn get_closest_point(
        &self,
        segment: GridPos,
        position: Vec3,
        max_sqr_dist: f32,
    ) -> Option<PointRef> {
        self.closest_on_segment(segment, position, None, max_sqr_dist)
    }

    /// Like [`Self::get_closest_point`], never returning `excluded`.
    pub fn get_closest_point_excluding(
        &self,
        segment: GridPos,
        position: Vec3,
        excluded: PointRef,
        max_sqr_dist: f32,
    ) -> Option<PointRef> {
        self.closest_on_segment(segment, position, Some(excluded), max_sqr_dist)
    }

    fn closest_on_segment(
        &self,
        segment: GridPos,
        position: Vec3,
        excluded: Option<PointRef>,
        max_sqr_dist: f32,
    ) -> Option<PointRef> {
        let candidates = candidates_of(self.segments.get(&segment)?);
        closest_point(&candidates, position, excluded, max_sqr_dist).map(|c| c.point)
    }

    /// Check that every link points at an existing point of opposite role
    /// that links back.
    pub fn link_violations(&self) -> Vec<LinkViolation> {
        let mut violations = Vec::new();
        for segment in self.segments.values() {
            for (from, point) in segment.point_refs() {
                for &to in &point.links {
                    let Some(target) = self.point(to) else {
                        violations.push(LinkViolation::Dangling { from, to });
                        continue;
                    };
                    if !point.role.pairs_with(target.role) {
                        violations.push(LinkViolation::SameRole { from, to });
                    }
                    if !target.links.contains(&from) {
                        violations.push(LinkViolation::OneSided { from, to });
                    }
                }
            }
        }
        violations
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Register a newly placed segment and run the build refresh.
    /// The cell must already be marked occupied. Returns `false` if the cell
    /// is outside the grid or a segment already exists there.
    pub fn on_build(&mut self, pos: GridPos, entity: Entity, env: &mut RoadEnv<'_>) -> bool {
        if !pos.in_bounds() {
            warn!("Road at ({}, {}) is outside the grid", pos.x, pos.y);
            return false;
        }
        if self.segments.contains_key(&pos) {
            warn!("Road already present at ({}, {})", pos.x, pos.y);
            return false;
        }
        info!("Building road at ({}, {})", pos.x, pos.y);
        self.segments.insert(pos, RoadSegment::new(entity, pos));
        self.refresh_visuals_and_chain_once(pos, env);
        true
    }

    /// Remove a segment, detach its links and refresh its direct neighbors.
    /// The cell must already be vacated so neighbors no longer see it.
    pub fn on_erase(&mut self, pos: GridPos, env: &mut RoadEnv<'_>) -> Option<RoadSegment> {
        if !self.segments.contains_key(&pos) {
            return None;
        }
        info!("Erasing road at ({}, {})", pos.x, pos.y);
        self.detach_segment(pos);
        let removed = self.segments.remove(&pos);
        self.refresh_neighbors(pos, env);
        removed
    }

    // -----------------------------------------------------------------------
    // Refresh passes
    // -----------------------------------------------------------------------

    /// Full recompute for one segment: tile, heading and links. Does not chain.
    pub fn refresh_visuals(&mut self, pos: GridPos, env: &mut RoadEnv<'_>) {
        self.refresh_tile_visual(pos, env);
        self.refresh_road_points(pos, env);
    }

    /// Recompute this segment, refresh its direct neighbors once, then relink.
    ///
    /// Neighbors are refreshed without chaining further: a change here can
    /// only alter the occupancy of cells one step away.
    pub fn refresh_visuals_and_chain_once(&mut self, pos: GridPos, env: &mut RoadEnv<'_>) {
        if !self.segments.contains_key(&pos) {
            return;
        }
        self.refresh_tile_visual(pos, env);
        self.refresh_neighbors(pos, env);
        self.refresh_road_points(pos, env);
    }

    /// Re-run the visual refresh of every occupant next to `pos`: full refresh
    /// for road segments, the simple one for buildings.
    pub fn refresh_neighbors(&mut self, pos: GridPos, env: &mut RoadEnv<'_>) {
        let neighbors = env.occupancy.query_neighbors(pos, env.config.refresh_layers);
        for (side, occupant) in neighbors.iter() {
            let neighbor = pos.neighbor(side);
            match occupant.kind {
                StructureKind::Road => {
                    if self.segments.contains_key(&neighbor) {
                        self.refresh_visuals(neighbor, env);
                    }
                }
                StructureKind::Building => {
                    env.buildings
                        .refresh(neighbor, env.occupancy, &mut *env.visuals);
                }
            }
        }
    }

    /// Select the tile variant and heading from road occupancy, show it, and
    /// replace the segment's connection points with the variant's fresh ones.
    pub fn refresh_tile_visual(
        &mut self,
        pos: GridPos,
        env: &mut RoadEnv<'_>,
    ) -> Option<TileSelection> {
        if !self.segments.contains_key(&pos) {
            return None;
        }
        let occupied = env.occupancy.occupied_sides(pos, env.config.tile_layers);
        let selection = select_tile_variant(occupied);

        self.detach_segment(pos);
        let segment = self.segments.get_mut(&pos)?;
        segment.variant = selection.variant;
        segment.heading = selection.heading;
        segment.points = selection
            .variant
            .instantiate_points(pos.to_world(), selection.heading);
        segment.tile_refreshes += 1;

        env.visuals.activate_variant(segment.entity, selection.variant);
        env.visuals.set_orientation(segment.entity, selection.heading);

        debug!(
            "Road ({}, {}): sides {:04b} -> {:?} {:?}",
            pos.x,
            pos.y,
            occupied.bits(),
            selection.variant,
            selection.heading
        );
        Some(selection)
    }

    /// Link each of this segment's points to the nearest compatible point on
    /// the neighboring road segments.
    pub fn refresh_road_points(&mut self, pos: GridPos, env: &mut RoadEnv<'_>) {
        let Some(segment) = self.segments.get(&pos) else {
            return;
        };
        if segment.points.is_empty() {
            return;
        }
        let local = candidates_of(segment);

        let roads = env
            .occupancy
            .query_neighbors(pos, LayerMask::only(Layer::Roads));
        let nearby: Vec<PointCandidate> = roads
            .iter()
            .filter_map(|(side, _)| self.segments.get(&pos.neighbor(side)))
            .flat_map(candidates_of)
            .collect();
        if nearby.is_empty() {
            return;
        }

        let planned = plan_links(&local, &nearby, env.config.max_link_sqr_dist);
        for link in &planned {
            self.link(link.out, link.inbound);
        }
        debug!("Road ({}, {}): {} links", pos.x, pos.y, planned.len());
    }

    // -----------------------------------------------------------------------
    // Link bookkeeping
    // -----------------------------------------------------------------------

    fn point_mut(&mut self, point: PointRef) -> Option<&mut ConnectionPoint> {
        self.segments
            .get_mut(&point.segment)?
            .points
            .get_mut(point.index as usize)
    }

    /// Join `out` and `inbound`, overwriting both link sets.
    fn link(&mut self, out: PointRef, inbound: PointRef) {
        for (this, other) in [(out, inbound), (inbound, out)] {
            let stale: Vec<PointRef> = self
                .links_of(this)
                .iter()
                .copied()
                .filter(|&r| r != other)
                .collect();
            for partner in stale {
                if let Some(p) = self.point_mut(partner) {
                    p.links.retain(|&r| r != this);
                }
            }
            if let Some(p) = self.point_mut(this) {
                p.links = vec![other];
            }
        }
    }

    /// Clear every link touching the points of the segment at `pos`.
    fn detach_segment(&mut self, pos: GridPos) {
        let Some(segment) = self.segments.get_mut(&pos) else {
            return;
        };
        let mut cut = Vec::new();
        for (i, point) in segment.points.iter_mut().enumerate() {
            let this = PointRef::new(pos, i as u8);
            for partner in point.links.drain(..) {
                cut.push((partner, this));
            }
        }
        for (partner, this) in cut {
            if let Some(p) = self.point_mut(partner) {
                p.links.retain(|&r| r != this);
            }
        }
    }
}

fn candidates_of(segment: &RoadSegment) -> Vec<PointCandidate> {
    segment
        .point_refs()
        .map(|(point, p)| PointCandidate {
            point,
            position: p.position,
            role: p.role,
        })
        .collect()
}

//! Nearest-point search and Out/In link planning between neighboring tiles.

use bevy::prelude::*;

use super::types::{PointRef, PointRole};

/// A point as seen by the search: its address, world position and role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCandidate {
    pub point: PointRef,
    pub position: Vec3,
    pub role: PointRole,
}

/// The candidate nearest to `target` with squared distance `<= max_sqr_dist`,
/// skipping `excluded`. Ties keep the earliest candidate.
pub fn closest_point<'a, I>(
    candidates: I,
    target: Vec3,
    excluded: Option<PointRef>,
    max_sqr_dist: f32,
) -> Option<&'a PointCandidate>
where
    I: IntoIterator<Item = &'a PointCandidate>,
{
    let mut min_sqr_dist = f32::MAX;
    let mut closest = None;

    for candidate in candidates {
        if Some(candidate.point) == excluded {
            continue;
        }
        let sqr_dist = target.distance_squared(candidate.position);
        if sqr_dist <= max_sqr_dist && sqr_dist < min_sqr_dist {
            min_sqr_dist = sqr_dist;
            closest = Some(candidate);
        }
    }

    closest
}

/// A link to record, always oriented from the `Out` point to the `In` point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlannedLink {
    pub out: PointRef,
    pub inbound: PointRef,
}

/// For every local point, find its nearest neighbor point within range and
/// keep the pair when the roles are complementary. Out-Out and In-In pairs,
/// and points with nothing in range, produce no link.
pub fn plan_links(
    local: &[PointCandidate],
    neighbors: &[PointCandidate],
    max_sqr_dist: f32,
) -> Vec<PlannedLink> {
    let mut links = Vec::new();
    for p in local {
        let Some(q) = closest_point(neighbors, p.position, None, max_sqr_dist) else {
            continue;
        };
        match (p.role, q.role) {
            (PointRole::Out, PointRole::In) => links.push(PlannedLink {
                out: p.point,
                inbound: q.point,
            }),
            (PointRole::In, PointRole::Out) => links.push(PlannedLink {
                out: q.point,
                inbound: p.point,
            }),
            _ => {}
        }
    }
    links
}

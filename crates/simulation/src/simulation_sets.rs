//! Ordering of the road systems within the `Update` schedule.
//!
//! ```text
//! Topology  →  Validate  →  Visual
//! ```
//!
//! * **Topology** – placement/removal requests, tile selection, link rebuilds.
//!   Every topology change and its one-hop refresh complete inside this set.
//! * **Validate** – read-only link invariant checks on the finished graph.
//! * **Visual** – applies queued variant toggles and rotations to entities.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoadUpdateSet {
    Topology,
    Validate,
    Visual,
}

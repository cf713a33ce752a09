//! Road tile auto-connection: variant/heading selection, connection-point
//! links between adjacent tiles, and one-hop refresh propagation.

mod network;
mod plugin;
mod points;
mod selection;
mod systems;
#[cfg(test)]
mod tests;
mod types;
mod visuals;

pub use network::{LinkViolation, RoadEnv, RoadTileNetwork};
pub use plugin::RoadTilesPlugin;
pub use points::{closest_point, plan_links, PlannedLink, PointCandidate};
pub use selection::select_tile_variant;
pub use systems::{
    handle_road_commands, validate_road_links, LinkInvariantViolations, RoadCommand,
};
pub use types::{
    ConnectionPoint, PointRef, PointRole, RoadSegment, TileSelection, TileVariant,
};
pub use visuals::{
    apply_tile_visuals, RoadSegmentTag, RoadTileVisuals, TileVariantVisual, TileVisualQueue,
    TileVisuals, VisualCommand,
};

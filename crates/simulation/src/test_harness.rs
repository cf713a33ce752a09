//! # TestRoads: headless harness for road engine integration tests
//!
//! Wraps `bevy::app::App` + `RoadSimPlugin` so tests can place and erase
//! structures through the same events the game uses, then inspect resources
//! and entity state.

use bevy::prelude::*;

use crate::buildings::{BuildingStore, PlacedBuilding};
use crate::grid::GridPos;
use crate::road_tiles::{
    LinkInvariantViolations, RoadCommand, RoadSegment, RoadTileNetwork, RoadTileVisuals,
    TileVariant,
};
use crate::snapshot::RoadNetworkSnapshot;
use crate::RoadSimPlugin;

pub struct TestRoads {
    app: App,
}

impl Default for TestRoads {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoads {
    /// An empty grid with the road plugin and no window or renderer.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RoadSimPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builders (consume and return Self)
    // -----------------------------------------------------------------------

    pub fn with_road(mut self, x: i32, y: i32) -> Self {
        self.build_road(x, y);
        self
    }

    /// Place roads on every cell of a horizontal or vertical run, one frame
    /// per tile, starting at `(x0, y0)`.
    pub fn with_road_line(mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (dx, dy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let (mut x, mut y) = (x0, y0);
        loop {
            self.build_road(x, y);
            if x == x1 && y == y1 {
                break;
            }
            x += dx;
            y += dy;
        }
        self
    }

    pub fn with_building(mut self, x: i32, y: i32) -> Self {
        self.place_building(x, y);
        self
    }

    // -----------------------------------------------------------------------
    // Actions (each runs one frame)
    // -----------------------------------------------------------------------

    pub fn build_road(&mut self, x: i32, y: i32) {
        self.send(RoadCommand::BuildRoad {
            pos: GridPos::new(x, y),
        });
    }

    pub fn erase_road(&mut self, x: i32, y: i32) {
        self.send(RoadCommand::EraseRoad {
            pos: GridPos::new(x, y),
        });
    }

    pub fn place_building(&mut self, x: i32, y: i32) {
        self.send(RoadCommand::PlaceBuilding {
            pos: GridPos::new(x, y),
        });
    }

    pub fn remove_building(&mut self, x: i32, y: i32) {
        self.send(RoadCommand::RemoveBuilding {
            pos: GridPos::new(x, y),
        });
    }

    pub fn refresh_road(&mut self, x: i32, y: i32) {
        self.send(RoadCommand::RefreshRoad {
            pos: GridPos::new(x, y),
        });
    }

    fn send(&mut self, command: RoadCommand) {
        self.send_batch(&[command]);
    }

    /// Send several commands and run a single frame, so they are handled
    /// together in one pass of the command system.
    pub fn send_batch(&mut self, batch: &[RoadCommand]) {
        for &command in batch {
            self.app.world_mut().send_event(command);
        }
        self.app.update();
    }

    pub fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn network(&self) -> &RoadTileNetwork {
        self.app.world().resource::<RoadTileNetwork>()
    }

    pub fn segment(&self, x: i32, y: i32) -> Option<&RoadSegment> {
        self.network().segment(GridPos::new(x, y))
    }

    pub fn building(&self, x: i32, y: i32) -> Option<PlacedBuilding> {
        self.app
            .world()
            .resource::<BuildingStore>()
            .get(GridPos::new(x, y))
            .copied()
    }

    pub fn snapshot(&self) -> RoadNetworkSnapshot {
        RoadNetworkSnapshot::capture(self.network())
    }

    pub fn link_violations(&self) -> u32 {
        self.app.world().resource::<LinkInvariantViolations>().count
    }

    /// Variants whose child entity is currently not hidden.
    pub fn visible_variants(&self, x: i32, y: i32) -> Vec<TileVariant> {
        let Some(segment) = self.segment(x, y) else {
            return Vec::new();
        };
        let world = self.app.world();
        let Some(tiles) = world.get::<RoadTileVisuals>(segment.entity) else {
            return Vec::new();
        };
        TileVariant::ALL
            .into_iter()
            .filter(|&v| {
                world
                    .get::<Visibility>(tiles.get(v))
                    .is_some_and(|vis| *vis != Visibility::Hidden)
            })
            .collect()
    }

    pub fn rotation_of(&self, entity: Entity) -> Option<Quat> {
        self.app.world().get::<Transform>(entity).map(|t| t.rotation)
    }

    pub fn entity_exists(&self, entity: Entity) -> bool {
        self.app.world().entities().contains(entity)
    }
}

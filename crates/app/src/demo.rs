//! Starter layout placed through the same events the mouse tools send.

use bevy::prelude::*;

use road_sim::grid::GridPos;
use road_sim::road_tiles::RoadCommand;

/// A main street with a cross street, a small loop and a few houses.
pub fn demo_layout() -> (Vec<GridPos>, Vec<GridPos>) {
    let mut roads = Vec::new();
    for x in 24..=40 {
        roads.push(GridPos::new(x, 32));
    }
    for y in 26..=38 {
        if y != 32 {
            roads.push(GridPos::new(32, y));
        }
    }
    for (x, y) in [(36, 33), (36, 34), (37, 34), (38, 34), (38, 33)] {
        roads.push(GridPos::new(x, y));
    }

    let buildings = [(28, 33), (29, 31), (31, 35), (33, 28), (37, 33)]
        .into_iter()
        .map(|(x, y)| GridPos::new(x, y))
        .collect();
    (roads, buildings)
}

pub fn place_demo_layout(mut requests: EventWriter<RoadCommand>) {
    let (roads, buildings) = demo_layout();
    info!(
        "Placing demo layout: {} roads, {} buildings",
        roads.len(),
        buildings.len()
    );
    for pos in roads {
        requests.send(RoadCommand::BuildRoad { pos });
    }
    for pos in buildings {
        requests.send(RoadCommand::PlaceBuilding { pos });
    }
}

use bevy::prelude::*;

use road_sim::grid::GridPos;

/// What a left click on the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Resource)]
pub enum ActiveTool {
    #[default]
    Road,
    Building,
    Erase,
}

impl ActiveTool {
    pub const ALL: [ActiveTool; 3] = [ActiveTool::Road, ActiveTool::Building, ActiveTool::Erase];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTool::Road => "Road",
            ActiveTool::Building => "Building",
            ActiveTool::Erase => "Erase",
        }
    }
}

/// Grid cell under the mouse cursor, if the cursor is over the playable area.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorGridPos {
    pub cell: Option<GridPos>,
    /// Ground-plane hit point, valid only when `cell` is `Some`.
    pub world_pos: Vec3,
}

/// A placement request resolved from the active tool and the clicked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    BuildRoad,
    PlaceBuilding,
    EraseRoad,
    RemoveBuilding,
}

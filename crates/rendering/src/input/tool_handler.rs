//! Mouse clicks on the grid, dispatched as road engine events.

use bevy::prelude::*;

use road_sim::occupancy::{OccupancyGrid, StructureKind};
use road_sim::road_tiles::RoadCommand;

use crate::egui_input_guard::PointerOverGui;

use super::types::{ActiveTool, CursorGridPos, ToolAction};

/// Resolve a click. Right clicks always erase; left clicks follow the tool.
/// Returns `None` when the click would be rejected anyway.
pub fn tool_action(
    tool: ActiveTool,
    occupant: Option<StructureKind>,
    erase: bool,
) -> Option<ToolAction> {
    let tool = if erase { ActiveTool::Erase } else { tool };
    match (tool, occupant) {
        (ActiveTool::Road, None) => Some(ToolAction::BuildRoad),
        (ActiveTool::Building, None) => Some(ToolAction::PlaceBuilding),
        (ActiveTool::Erase, Some(StructureKind::Road)) => Some(ToolAction::EraseRoad),
        (ActiveTool::Erase, Some(StructureKind::Building)) => Some(ToolAction::RemoveBuilding),
        _ => None,
    }
}

pub fn handle_tool_input(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorGridPos>,
    tool: Res<ActiveTool>,
    pointer: Res<PointerOverGui>,
    occupancy: Res<OccupancyGrid>,
    mut requests: EventWriter<RoadCommand>,
) {
    if pointer.0 {
        return;
    }
    let Some(pos) = cursor.cell else {
        return;
    };
    let left = buttons.just_pressed(MouseButton::Left);
    let right = buttons.just_pressed(MouseButton::Right);
    if !left && !right {
        return;
    }

    let occupant = occupancy.get(pos).map(|o| o.kind);
    let command = match tool_action(*tool, occupant, right) {
        Some(ToolAction::BuildRoad) => RoadCommand::BuildRoad { pos },
        Some(ToolAction::PlaceBuilding) => RoadCommand::PlaceBuilding { pos },
        Some(ToolAction::EraseRoad) => RoadCommand::EraseRoad { pos },
        Some(ToolAction::RemoveBuilding) => RoadCommand::RemoveBuilding { pos },
        None => return,
    };
    requests.send(command);
}

use bevy::prelude::*;

use super::types::ActiveTool;

/// Number keys 1-3 pick a tool, Escape returns to the road tool.
pub fn keyboard_tool_switch(keys: Res<ButtonInput<KeyCode>>, mut tool: ResMut<ActiveTool>) {
    let picked = if keys.just_pressed(KeyCode::Digit1) || keys.just_pressed(KeyCode::Escape) {
        Some(ActiveTool::Road)
    } else if keys.just_pressed(KeyCode::Digit2) {
        Some(ActiveTool::Building)
    } else if keys.just_pressed(KeyCode::Digit3) {
        Some(ActiveTool::Erase)
    } else {
        None
    };
    if let Some(picked) = picked {
        if *tool != picked {
            info!("Tool: {}", picked.label());
            *tool = picked;
        }
    }
}

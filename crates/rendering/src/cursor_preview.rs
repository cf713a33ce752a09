use bevy::prelude::*;

use road_sim::config::CELL_SIZE;
use road_sim::occupancy::OccupancyGrid;

use crate::input::{tool_action, ActiveTool, CursorGridPos};

const PREVIEW_HEIGHT: f32 = 0.1;

/// Marker for the cursor ghost preview entity
#[derive(Component)]
pub struct CursorPreview;

pub fn spawn_cursor_preview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(CELL_SIZE, PREVIEW_HEIGHT, CELL_SIZE));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.4),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        CursorPreview,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, PREVIEW_HEIGHT * 0.5, 0.0),
        Visibility::Hidden,
    ));
}

/// Move the ghost to the hovered cell, tinted by whether a click would do anything.
pub fn update_cursor_preview(
    cursor: Res<CursorGridPos>,
    tool: Res<ActiveTool>,
    occupancy: Res<OccupancyGrid>,
    mut query: Query<
        (
            &mut Transform,
            &mut Visibility,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<CursorPreview>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut vis, mat_handle)) = query.get_single_mut() else {
        return;
    };

    let Some(pos) = cursor.cell else {
        *vis = Visibility::Hidden;
        return;
    };

    let center = pos.to_world();
    transform.translation.x = center.x;
    transform.translation.z = center.z;

    let valid = tool_action(*tool, occupancy.get(pos).map(|o| o.kind), false).is_some();
    let color = match (*tool, valid) {
        (_, false) => Color::srgba(0.9, 0.15, 0.1, 0.4),
        (ActiveTool::Road, true) => Color::srgba(0.4, 0.4, 0.4, 0.5),
        (ActiveTool::Building, true) => Color::srgba(0.2, 0.3, 0.8, 0.5),
        (ActiveTool::Erase, true) => Color::srgba(0.8, 0.2, 0.1, 0.5),
    };
    if let Some(mat) = materials.get_mut(mat_handle.id()) {
        mat.base_color = color;
    }

    *vis = Visibility::Visible;
}

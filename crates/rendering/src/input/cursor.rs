use bevy::prelude::*;

use road_sim::grid::GridPos;

use super::types::CursorGridPos;

/// Intersection of `ray` with the `y = 0` ground plane, in front of the origin.
pub fn ground_hit(ray: Ray3d) -> Option<Vec3> {
    if ray.direction.y.abs() <= 0.001 {
        return None;
    }
    let t = -ray.origin.y / ray.direction.y;
    (t > 0.0).then(|| ray.origin + ray.direction * t)
}

pub fn update_cursor_grid_pos(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut cursor: ResMut<CursorGridPos>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let hit = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world(cam_transform, screen_pos).ok())
        .and_then(ground_hit);

    match hit {
        Some(hit) => {
            // 3D: hit.x -> grid x, hit.z -> grid y
            let pos = GridPos::from_world(hit);
            cursor.cell = pos.in_bounds().then_some(pos);
            cursor.world_pos = hit;
        }
        None => cursor.cell = None,
    }
}

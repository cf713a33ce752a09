use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use road_sim::config::{WORLD_HEIGHT, WORLD_WIDTH};

use crate::egui_input_guard::PointerOverGui;

const PAN_SPEED: f32 = 0.6;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 6.0;
const MAX_DISTANCE: f32 = 120.0;
/// Fixed elevation angle of the view.
const PITCH: f32 = 55.0 * std::f32::consts::PI / 180.0;

/// Fixed-angle camera looking down at a ground point from the +Z side, so
/// grid x runs left to right on screen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRig {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            focus: Vec3::new(WORLD_WIDTH / 2.0, 0.0, WORLD_HEIGHT / 2.0),
            distance: 40.0,
        }
    }
}

impl CameraRig {
    pub fn transform(&self) -> Transform {
        let offset = Vec3::new(0.0, PITCH.sin(), PITCH.cos()) * self.distance;
        Transform::from_translation(self.focus + offset).looking_at(self.focus, Vec3::Y)
    }
}

pub fn setup_camera(mut commands: Commands) {
    let rig = CameraRig::default();
    commands.spawn((Camera3d::default(), rig.transform()));
    commands.insert_resource(rig);
}

fn clamp_focus(focus: &mut Vec3) {
    let margin = 8.0;
    focus.x = focus.x.clamp(-margin, WORLD_WIDTH + margin);
    focus.z = focus.z.clamp(-margin, WORLD_HEIGHT + margin);
}

/// WASD / arrow keys: pan the focus in screen directions projected on the ground.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    camera_q: Query<&Transform, With<Camera3d>>,
    mut rig: ResMut<CameraRig>,
) {
    let Ok(transform) = camera_q.get_single() else {
        return;
    };

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if dir == Vec2::ZERO {
        return;
    }

    let right = transform.right().with_y(0.0).normalize_or_zero();
    let forward = transform.forward().with_y(0.0).normalize_or_zero();
    let dir = dir.normalize();
    let delta = PAN_SPEED * rig.distance * time.delta_secs();
    let focus = &mut rig.focus;
    *focus += (right * dir.x + forward * dir.y) * delta;
    clamp_focus(focus);
}

/// Scroll wheel: zoom, unless the wheel is over a panel.
pub fn camera_zoom(
    mut scroll: EventReader<MouseWheel>,
    pointer: Res<PointerOverGui>,
    mut rig: ResMut<CameraRig>,
) {
    if pointer.0 {
        scroll.clear();
        return;
    }
    for ev in scroll.read() {
        let amount = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 100.0,
        };
        rig.distance = (rig.distance * (1.0 - amount * ZOOM_SPEED)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

pub fn apply_camera_rig(rig: Res<CameraRig>, mut camera_q: Query<&mut Transform, With<Camera3d>>) {
    if !rig.is_changed() {
        return;
    }
    for mut transform in &mut camera_q {
        *transform = rig.transform();
    }
}

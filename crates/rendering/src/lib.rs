use bevy::prelude::*;

use road_sim::simulation_sets::RoadUpdateSet;

pub mod camera;
pub mod cursor_preview;
pub mod egui_input_guard;
pub mod input;
pub mod tile_meshes;

use camera::CameraRig;
use egui_input_guard::PointerOverGui;
use input::{ActiveTool, CursorGridPos};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .init_resource::<CursorGridPos>()
            .init_resource::<ActiveTool>()
            .init_resource::<PointerOverGui>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    tile_meshes::setup_tile_meshes,
                    tile_meshes::spawn_ground,
                    cursor_preview::spawn_cursor_preview,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_zoom,
                    camera::apply_camera_rig,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    egui_input_guard::update_pointer_over_gui,
                    input::update_cursor_grid_pos,
                    input::keyboard_tool_switch,
                    input::handle_tool_input,
                    cursor_preview::update_cursor_preview,
                )
                    .chain()
                    .after(camera::apply_camera_rig)
                    .before(RoadUpdateSet::Topology),
            )
            .add_systems(
                Update,
                (
                    tile_meshes::attach_variant_meshes,
                    tile_meshes::attach_building_meshes,
                )
                    .after(RoadUpdateSet::Visual),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}

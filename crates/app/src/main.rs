use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use road_sim::road_tiles::RoadTileNetwork;
use road_sim::snapshot::RoadNetworkSnapshot;

mod demo;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Road Builder".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        road_sim::RoadSimPlugin,
        road_rendering::RenderingPlugin,
        road_ui::UiPlugin,
    ))
    .add_systems(Update, dump_snapshot);

    if std::env::var("ROAD_BUILDER_EMPTY").is_err() {
        app.add_systems(Startup, demo::place_demo_layout);
    }

    // Screenshot mode: capture one frame and exit
    if let Ok(path) = std::env::var("ROAD_BUILDER_SCREENSHOT") {
        app.insert_resource(ScreenshotRequest { frame: 0, path });
        app.add_systems(Update, drive_screenshot);
    }

    app.run();
}

/// F12 logs the road network as JSON.
fn dump_snapshot(keys: Res<ButtonInput<KeyCode>>, network: Res<RoadTileNetwork>) {
    if !keys.just_pressed(KeyCode::F12) {
        return;
    }
    match RoadNetworkSnapshot::capture(&network).to_json() {
        Ok(json) => info!("Road network snapshot:\n{}", json),
        Err(e) => warn!("Failed to serialize road network: {}", e),
    }
}

#[derive(Resource)]
struct ScreenshotRequest {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;

    // Wait for initial render and the demo layout to settle
    if request.frame == 60 {
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame > 90 {
        exit.send(AppExit::Success);
    }
}

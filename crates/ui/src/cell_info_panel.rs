//! Hover inspector: what the engine knows about the cell under the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use road_rendering::input::CursorGridPos;
use road_sim::buildings::BuildingStore;
use road_sim::road_tiles::{PointRole, RoadTileNetwork};

pub fn cell_info_panel_ui(
    mut contexts: EguiContexts,
    cursor: Res<CursorGridPos>,
    network: Res<RoadTileNetwork>,
    buildings: Res<BuildingStore>,
) {
    let Some(pos) = cursor.cell else {
        return;
    };

    egui::Window::new("Cell Info")
        .default_width(220.0)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(format!("Cell ({}, {})", pos.x, pos.y));
            ui.separator();

            if let Some(segment) = network.segment(pos) {
                let linked = segment.points.iter().filter(|p| !p.links.is_empty()).count();
                let outs = segment
                    .points
                    .iter()
                    .filter(|p| p.role == PointRole::Out)
                    .count();
                egui::Grid::new("cell_info_grid")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Tile:");
                        ui.label(format!("{:?}", segment.variant));
                        ui.end_row();

                        ui.label("Heading:");
                        ui.label(format!("{:?}", segment.heading));
                        ui.end_row();

                        ui.label("Points:");
                        ui.label(format!(
                            "{} ({} out, {} in)",
                            segment.points.len(),
                            outs,
                            segment.points.len() - outs
                        ));
                        ui.end_row();

                        ui.label("Linked:");
                        ui.label(format!("{}", linked));
                        ui.end_row();

                        ui.label("Refreshes:");
                        ui.label(format!("{}", segment.tile_refreshes));
                        ui.end_row();
                    });
            } else if let Some(building) = buildings.get(pos) {
                ui.label("Building");
                ui.label(format!("Facing: {:?}", building.facing));
            } else {
                ui.label(egui::RichText::new("Empty").weak());
            }
        });
}

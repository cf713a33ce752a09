use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod cell_info_panel;
pub mod theme;
pub mod toolbox;

pub use road_rendering::egui_input_guard::PointerOverGui;
pub use toolbox::{ActiveToolboxPanel, ToolboxPanel};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<ActiveToolboxPanel>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (toolbox::toolbox_ui, cell_info_panel::cell_info_panel_ui)
                    .before(road_rendering::egui_input_guard::update_pointer_over_gui),
            );
    }
}

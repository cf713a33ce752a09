//! Toolbox panel switcher.
//!
//! One panel is shown at a time. The root panel lists the categories, each
//! category panel has a way back to the root, and the construction panel
//! picks the grid tool.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use road_rendering::input::ActiveTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolboxPanel {
    Root,
    #[default]
    Construction,
    Electricity,
    Aqueduct,
}

impl ToolboxPanel {
    /// Panels reachable from the root panel.
    pub const CATEGORIES: [ToolboxPanel; 3] = [
        ToolboxPanel::Construction,
        ToolboxPanel::Electricity,
        ToolboxPanel::Aqueduct,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ToolboxPanel::Root => "Toolbox",
            ToolboxPanel::Construction => "Construction",
            ToolboxPanel::Electricity => "Electricity",
            ToolboxPanel::Aqueduct => "Aqueduct",
        }
    }
}

/// The panel currently shown in the toolbox.
#[derive(Resource, Debug, Default)]
pub struct ActiveToolboxPanel {
    active: ToolboxPanel,
}

impl ActiveToolboxPanel {
    pub fn get(&self) -> ToolboxPanel {
        self.active
    }

    pub fn set(&mut self, panel: ToolboxPanel) {
        info!("Switching to panel: {:?}", panel);
        self.active = panel;
    }
}

pub fn toolbox_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<ActiveToolboxPanel>,
    mut tool: ResMut<ActiveTool>,
) {
    let shown = panel.get();
    let mut next = None;

    egui::Window::new(shown.title())
        .id(egui::Id::new("toolbox"))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(8.0, -8.0))
        .show(contexts.ctx_mut(), |ui| match shown {
            ToolboxPanel::Root => {
                ui.horizontal(|ui| {
                    for category in ToolboxPanel::CATEGORIES {
                        if ui.button(category.title()).clicked() {
                            next = Some(category);
                        }
                    }
                });
            }
            ToolboxPanel::Construction => {
                ui.horizontal(|ui| {
                    for (i, item) in ActiveTool::ALL.into_iter().enumerate() {
                        let label = format!("{} [{}]", item.label(), i + 1);
                        if ui.selectable_label(*tool == item, label).clicked() && *tool != item {
                            info!("Tool: {}", item.label());
                            *tool = item;
                        }
                    }
                });
                ui.separator();
                if ui.button("Back").clicked() {
                    next = Some(ToolboxPanel::Root);
                }
            }
            ToolboxPanel::Electricity | ToolboxPanel::Aqueduct => {
                ui.label(egui::RichText::new("Nothing to build here yet.").weak());
                ui.separator();
                if ui.button("Back").clicked() {
                    next = Some(ToolboxPanel::Root);
                }
            }
        });

    if let Some(next) = next {
        panel.set(next);
    }
}

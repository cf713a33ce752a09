use bevy_egui::{egui, EguiContexts};

pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Asphalt greys with a road-sign amber accent
    let panel = egui::Color32::from_rgb(32, 34, 38);
    let inactive = egui::Color32::from_rgb(52, 55, 60);
    let hover = egui::Color32::from_rgb(74, 78, 86);
    let accent = egui::Color32::from_rgb(232, 170, 40);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.active.weak_bg_fill = accent;

    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    let rounding = egui::CornerRadius::same(4);
    style.visuals.window_corner_radius = rounding;
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}

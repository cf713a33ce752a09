//! Egui input guard: prevents click-through from panels to the grid.
//!
//! When egui (toolbox panels) is handling pointer input, world-level input
//! systems skip processing so no road is built or erased underneath the UI.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Whether the pointer is over a GUI element this frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOverGui(pub bool);

/// Returns `true` when egui wants the pointer, i.e. the cursor is over an
/// egui panel or egui is actively handling a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

pub fn update_pointer_over_gui(mut contexts: EguiContexts, mut over: ResMut<PointerOverGui>) {
    let wants = egui_wants_pointer(&mut contexts);
    if over.0 != wants {
        over.0 = wants;
    }
}

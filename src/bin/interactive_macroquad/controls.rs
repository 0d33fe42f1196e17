use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_RANGE, GRAVITY_RANGE, HEIGHT_RANGE, ROCK_SIZE_RANGE, SPEED_RANGE,
    TARGET_DISTANCE_RANGE, TARGET_HEIGHT_RANGE, TARGET_WIDTH_RANGE,
};
use crate::model::detection_text;
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) throw_rock: bool,
    pub(crate) toggle_animation: bool,
    pub(crate) cycle_detection: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            throw_rock: self.throw_rock || other.throw_rock,
            toggle_animation: self.toggle_animation || other.toggle_animation,
            cycle_detection: self.cycle_detection || other.cycle_detection,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        throw_rock: is_key_pressed(KeyCode::Enter),
        toggle_animation: is_key_pressed(KeyCode::Space),
        cycle_detection: is_key_pressed(KeyCode::D),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let animating = state.playback.is_running();
    let detection = state.detection;
    let config = &mut state.config;

    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(420.0, 470.0))
        .label("Throwing Parameters")
        .ui(&mut *root_ui(), |ui| {
            // Each slider carries its own editable number box.
            ui.slider(
                hash!(),
                "Speed (m/s)",
                SPEED_RANGE,
                &mut config.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_RANGE,
                &mut config.angle_deg,
            );
            ui.slider(
                hash!(),
                "Height (m)",
                HEIGHT_RANGE,
                &mut config.height_m,
            );
            ui.slider(
                hash!(),
                "Rock Size (m)",
                ROCK_SIZE_RANGE,
                &mut config.rock_size_m,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE,
                &mut config.gravity_mps2,
            );
            ui.separator();
            ui.checkbox(hash!(), "Enable Target", &mut config.target_enabled);
            ui.slider(
                hash!(),
                "Target Distance (m)",
                TARGET_DISTANCE_RANGE,
                &mut config.target_distance_m,
            );
            ui.slider(
                hash!(),
                "Target Height (m)",
                TARGET_HEIGHT_RANGE,
                &mut config.target_height_m,
            );
            ui.slider(
                hash!(),
                "Target Width (m)",
                TARGET_WIDTH_RANGE,
                &mut config.target_width_m,
            );
            ui.separator();
            if ui.button(None, "Throw Rock! (Enter)") {
                actions.throw_rock = true;
            }
            let animate_label = if animating {
                "Stop Animation (Space)"
            } else {
                "Animate Throw (Space)"
            };
            if ui.button(None, animate_label) {
                actions.toggle_animation = true;
            }
            if ui.button(None, "Hit Detection (D)") {
                actions.cycle_detection = true;
            }
            ui.label(
                None,
                &format!("Hit detection: {}", detection_text(detection)),
            );
        });

    actions
}

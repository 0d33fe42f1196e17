use macroquad::prelude::*;

use parabolic_throw::core::report::summary_lines;

use crate::constants::{CONTROLS_Y, TEXT_COLOR, TITLE_Y};
use crate::model::detection_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    draw_header_block(left, font);
    draw_results_block(state, left, font);
    draw_status_block(state, left, screen_h, font);
}

fn draw_header_block(left: f32, font: Option<&Font>) {
    draw_ui_text("Rock Trajectory", left, TITLE_Y, 30, TEXT_COLOR, font);
    draw_ui_text(
        "Controls: sliders set the throw | Enter throw | Space animate/stop | D hit detection",
        left,
        CONTROLS_Y,
        20,
        LIGHTGRAY,
        font,
    );
}

fn draw_results_block(state: &AppRuntime, left: f32, font: Option<&Font>) {
    let Some(result) = state.result.as_ref() else {
        draw_ui_text(
            "Flight results: --",
            left,
            CONTROLS_Y + 28.0,
            20,
            LIGHTGRAY,
            font,
        );
        return;
    };

    draw_ui_text(
        &summary_lines(result).join(" | "),
        left,
        CONTROLS_Y + 28.0,
        20,
        SKYBLUE,
        font,
    );
}

fn draw_status_block(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = TEXT_COLOR;
    let c = state.config;
    draw_ui_text(
        &format!(
            "Speed: {:.1} m/s | Angle: {:.0} deg | Height: {:.1} m | g: {:.1} m/s^2 | Rock: {:.1} m",
            c.speed_mps, c.angle_deg, c.height_m, c.gravity_mps2, c.rock_size_m
        ),
        left,
        screen_h - 76.0,
        20,
        header_color,
        font,
    );

    let frame_text = match state.frame {
        Some(frame) => format!(
            "Frame {} / {}",
            frame.index + 1,
            state.playback.sample_count()
        ),
        None => "Frame --".to_string(),
    };
    let playback_text = if state.playback.is_running() {
        "Animating"
    } else {
        "Idle"
    };
    draw_ui_text(
        &format!(
            "{frame_text} | {playback_text} | Hit detection: {}",
            detection_text(state.detection)
        ),
        left,
        screen_h - 45.0,
        18,
        LIGHTGRAY,
        font,
    );

    let status_color = if state.hit_banner_s > 0.0 { YELLOW } else { SKYBLUE };
    draw_ui_text(
        &state.status_line,
        left,
        screen_h - 14.0,
        24,
        status_color,
        font,
    );
}

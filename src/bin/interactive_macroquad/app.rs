use macroquad::prelude::*;

use parabolic_throw::core::window::scene_window;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, ROCK_COLOR, SKY_BG, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_animation};
use crate::hud::draw_hud;
use crate::model::AppScene;
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_ground, draw_path, draw_rock, draw_target,
    draw_throw_markers, draw_title_screen,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Rock Throwing Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            println!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        if state.scene == AppScene::Title {
            if draw_title_screen(screen_w, screen_h, ui_font.as_ref()) {
                state.scene = AppScene::Game;
            }
            next_frame().await;
            continue;
        }

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_animation(&mut state, frame_dt);

        let target = state.config.target();
        let (world_max_x, world_max_y) = scene_window(state.result.as_ref(), &target);
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
            world_max_x: world_max_x as f32,
            world_max_y: world_max_y as f32,
        };

        clear_background(SKY_BG);
        draw_grid(&area, Color::from_rgba(52, 73, 94, 255));
        draw_ground(&area);
        draw_line(
            area.left,
            area.top,
            area.left,
            area.bottom,
            2.0,
            GRAY,
        );
        draw_axis_tick_labels(&area, ui_font.as_ref());
        draw_target(&area, &target);

        if let Some(result) = state.result.as_ref() {
            draw_path(&area, result, 1.5);
            draw_throw_markers(&area, result, ui_font.as_ref());
        }

        if let (Some(frame), Some(result)) = (state.frame, state.playback.result()) {
            draw_rock(
                &area,
                frame.sample.x,
                frame.sample.y,
                result.params().projectile_radius_m,
                ROCK_COLOR,
            );
        }

        draw_hud(&state, area.left, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}

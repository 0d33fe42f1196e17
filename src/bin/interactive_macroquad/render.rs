use macroquad::prelude::*;

use parabolic_throw::{TargetSpec, TrajectoryResult};

use crate::constants::{
    GROUND_COLOR, PATH_COLOR, ROCK_COLOR, ROCK_MIN_RADIUS_PX, START_BUTTON_COLOR,
    START_BUTTON_TEXT, TARGET_COLOR, TEXT_COLOR, TITLE_SCREEN_BG, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle the scene is drawn into plus the world extents it shows.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, x: f64, y: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let sx = self.left + (x as f32 / self.world_max_x.max(1.0)) * plot_w;
        let sy = self.bottom - (y as f32 / self.world_max_y.max(1.0)) * plot_h;
        vec2(sx, sy)
    }

    fn px_per_meter(&self) -> f32 {
        let px_x = (self.right - self.left) / self.world_max_x.max(1.0);
        let px_y = (self.bottom - self.top) / self.world_max_y.max(1.0);
        px_x.min(px_y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: &PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(area: &PlotArea, font: Option<&Font>) {
    let label_color = Color::from_rgba(189, 195, 199, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value(t * area.world_max_x, area.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let label = format_axis_value(t * area.world_max_y, area.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_ground(area: &PlotArea) {
    draw_rectangle(
        area.left,
        area.bottom,
        area.right - area.left,
        10.0,
        GROUND_COLOR,
    );
}

/// Target rectangle with a bullseye in its middle.
pub(crate) fn draw_target(area: &PlotArea, target: &TargetSpec) {
    if !target.enabled {
        return;
    }
    let top_left = area.world_to_screen(target.distance_m, target.height_m);
    let bottom_right = area.world_to_screen(target.right_edge_m(), 0.0);
    let w = (bottom_right.x - top_left.x).max(2.0);
    let h = (bottom_right.y - top_left.y).max(2.0);
    draw_rectangle(top_left.x, top_left.y, w, h, TARGET_COLOR);

    let center = vec2(top_left.x + w * 0.5, top_left.y + h * 0.5);
    let ring = w.min(h) * 0.3;
    draw_circle(center.x, center.y, ring, WHITE);
    draw_circle(center.x, center.y, ring * 0.6, TARGET_COLOR);
    draw_circle(center.x, center.y, ring * 0.2, WHITE);
}

pub(crate) fn draw_path(area: &PlotArea, result: &TrajectoryResult, thickness: f32) {
    let samples = result.samples();
    if samples.len() < 2 {
        return;
    }
    let mut prev = area.world_to_screen(samples[0].x, samples[0].y);
    for sample in samples.iter().skip(1) {
        let cur = area.world_to_screen(sample.x, sample.y);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, PATH_COLOR);
        prev = cur;
    }
}

pub(crate) fn draw_rock(area: &PlotArea, x: f64, y: f64, radius_m: f64, color: Color) {
    let p = area.world_to_screen(x, y);
    let radius_px = (radius_m as f32 * area.px_per_meter()).max(ROCK_MIN_RADIUS_PX);
    draw_circle(p.x, p.y, radius_px, color);
    draw_circle_lines(p.x, p.y, radius_px, 1.5, DARKGRAY);
}

/// Landing rock, faded apex rock and the initial velocity arrow.
pub(crate) fn draw_throw_markers(area: &PlotArea, result: &TrajectoryResult, font: Option<&Font>) {
    let summary = result.summary();
    let radius = result.params().projectile_radius_m;
    draw_rock(area, summary.range_m, 0.0, radius, ROCK_COLOR);

    if let Some((apex_x, apex_y)) = result.apex_point() {
        let faded = Color::new(ROCK_COLOR.r, ROCK_COLOR.g, ROCK_COLOR.b, 0.5);
        draw_rock(area, apex_x, apex_y, radius, faded);
        let p = area.world_to_screen(apex_x, apex_y);
        draw_ui_text(
            &format!("Max Height: {:.2} m", summary.max_height_m),
            p.x + 12.0,
            p.y - 12.0,
            18,
            TEXT_COLOR,
            font,
        );
    }

    let release_y = result.params().release_height_m;
    let start = area.world_to_screen(0.0, release_y);
    let tip = area.world_to_screen(summary.vx0 * 0.5, release_y + summary.vy0 * 0.5);
    draw_line(start.x, start.y, tip.x, tip.y, 3.0, RED);
    draw_circle(tip.x, tip.y, 4.0, RED);
    draw_ui_text(
        &format!("{:.1} m/s", result.params().speed_mps),
        tip.x + 6.0,
        tip.y - 6.0,
        18,
        RED,
        font,
    );
}

pub(crate) fn draw_title_screen(screen_w: f32, screen_h: f32, font: Option<&Font>) -> bool {
    clear_background(TITLE_SCREEN_BG);

    let title = "Rock Throwing Simulator";
    let title_size: u16 = 90;
    let title_measure = measure_text(title, font, title_size, 1.0);
    let title_x = (screen_w - title_measure.width) * 0.5;
    let title_y = (screen_h * 0.40).max(180.0);
    draw_ui_text(title, title_x, title_y, title_size, TEXT_COLOR, font);

    let button_w = 360.0;
    let button_h = 90.0;
    let button_x = (screen_w - button_w) * 0.5;
    let button_y = title_y + 70.0;
    let button_rect = Rect::new(button_x, button_y, button_w, button_h);
    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        START_BUTTON_COLOR,
    );
    draw_rectangle_lines(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        3.0,
        WHITE,
    );

    let button_text_size: u16 = 42;
    let button_text_measure = measure_text(START_BUTTON_TEXT, font, button_text_size, 1.0);
    draw_ui_text(
        START_BUTTON_TEXT,
        button_rect.x + (button_rect.w - button_text_measure.width) * 0.5,
        button_rect.y + (button_rect.h + button_text_measure.height) * 0.5 - 8.0,
        button_text_size,
        WHITE,
        font,
    );

    let hint = "Click button or press Enter";
    let hint_size: u16 = 22;
    let hint_measure = measure_text(hint, font, hint_size, 1.0);
    draw_ui_text(
        hint,
        (screen_w - hint_measure.width) * 0.5,
        button_rect.y + button_rect.h + 38.0,
        hint_size,
        LIGHTGRAY,
        font,
    );

    let mouse = mouse_position();
    let mouse_vec = vec2(mouse.0, mouse.1);
    let clicked_start =
        is_mouse_button_pressed(MouseButton::Left) && button_rect.contains(mouse_vec);

    clicked_start || is_key_pressed(KeyCode::Enter)
}

use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 470.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 150.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const TRAJECTORY_SAMPLES: usize = 200;
pub const HIT_BANNER_HOLD_S: f32 = 0.8;
pub const MAX_FRAMES_PER_TICK: usize = 8;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const ROCK_MIN_RADIUS_PX: f32 = 4.0;

pub const SKY_BG: Color = Color::new(0.12, 0.15, 0.18, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.50, 0.55, 0.55, 1.0);
pub const TARGET_COLOR: Color = Color::new(0.91, 0.30, 0.24, 0.85);
pub const ROCK_COLOR: Color = Color::new(0.58, 0.65, 0.65, 1.0);
pub const PATH_COLOR: Color = Color::new(0.93, 0.94, 0.95, 0.7);
pub const TEXT_COLOR: Color = Color::new(0.93, 0.94, 0.95, 1.0);
pub const TITLE_SCREEN_BG: Color = Color::new(0.17, 0.24, 0.31, 1.0);
pub const START_BUTTON_COLOR: Color = Color::new(0.91, 0.30, 0.24, 1.0);
pub const START_BUTTON_TEXT: &str = "Start Throwing";

pub const SPEED_RANGE: std::ops::Range<f32> = 1.0..50.0;
pub const ANGLE_RANGE: std::ops::Range<f32> = 0.0..90.0;
pub const HEIGHT_RANGE: std::ops::Range<f32> = 0.0..5.0;
pub const ROCK_SIZE_RANGE: std::ops::Range<f32> = 0.1..1.0;
pub const GRAVITY_RANGE: std::ops::Range<f32> = 1.0..20.0;
pub const TARGET_DISTANCE_RANGE: std::ops::Range<f32> = 5.0..100.0;
pub const TARGET_HEIGHT_RANGE: std::ops::Range<f32> = 0.5..10.0;
pub const TARGET_WIDTH_RANGE: std::ops::Range<f32> = 0.5..5.0;

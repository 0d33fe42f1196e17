use parabolic_throw::core::report::frame_status;
use parabolic_throw::{
    HitDetection, HitStatus, Playback, PlaybackFrame, SolverConfig, TrajectoryResult,
    compute_trajectory_with,
};

use crate::constants::{HIT_BANNER_HOLD_S, TRAJECTORY_SAMPLES};
use crate::model::{AppScene, ThrowConfig};

pub(crate) struct AppRuntime {
    pub(crate) config: ThrowConfig,
    pub(crate) detection: HitDetection,
    pub(crate) result: Option<TrajectoryResult>,
    pub(crate) playback: Playback,
    pub(crate) frame: Option<PlaybackFrame>,
    pub(crate) frame_clock_s: f32,
    pub(crate) hit_banner_s: f32,
    pub(crate) scene: AppScene,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            config: ThrowConfig::new(),
            detection: HitDetection::Sampled,
            result: None,
            playback: Playback::new(),
            frame: None,
            frame_clock_s: 0.0,
            hit_banner_s: 0.0,
            scene: AppScene::Title,
            status_line: "Ready to throw! Adjust parameters and press 'Throw Rock!'".to_string(),
        }
    }

    /// Recomputes the throw from the current sliders. A running animation is
    /// restarted on the new trajectory.
    pub(crate) fn throw_rock(&mut self) {
        let solver = SolverConfig {
            sample_count: TRAJECTORY_SAMPLES,
            hit_detection: self.detection,
        };
        match compute_trajectory_with(self.config.params(), self.config.target(), &solver) {
            Ok(result) => {
                self.result = Some(result);
                self.status_line = "Rock thrown! Press 'Animate Throw' to see animation.".to_string();
                if self.playback.is_running() {
                    self.start_animation();
                } else {
                    self.frame = None;
                }
            }
            Err(err) => {
                self.result = None;
                self.playback.stop();
                self.frame = None;
                self.status_line = format!("Error: {err}");
            }
        }
    }

    pub(crate) fn start_animation(&mut self) {
        self.frame_clock_s = 0.0;
        self.hit_banner_s = 0.0;
        match self.playback.start(self.result.clone()) {
            Ok(()) => self.frame = None,
            Err(err) => self.status_line = err.to_string(),
        }
    }

    pub(crate) fn stop_animation(&mut self) {
        self.playback.stop();
        self.status_line = "Animation stopped".to_string();
    }

    pub(crate) fn show_frame(&mut self, frame: PlaybackFrame) {
        if frame.status == HitStatus::Hit {
            self.hit_banner_s = HIT_BANNER_HOLD_S;
        }
        if frame.status == HitStatus::Hit || self.hit_banner_s <= 0.0 {
            self.status_line = frame_status(&frame.sample, frame.status);
        }
        self.frame = Some(frame);
    }
}

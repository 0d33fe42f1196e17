use parabolic_throw::{HitDetection, TargetSpec, ThrowParameters};

/// Slider-backed throw and target settings. Widgets edit `f32`; the engine
/// receives plain `f64` value objects built on demand.
#[derive(Clone, Copy)]
pub(crate) struct ThrowConfig {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) height_m: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) rock_size_m: f32,
    pub(crate) target_enabled: bool,
    pub(crate) target_distance_m: f32,
    pub(crate) target_height_m: f32,
    pub(crate) target_width_m: f32,
}

impl ThrowConfig {
    pub(crate) fn new() -> Self {
        let params = ThrowParameters::default();
        let target = TargetSpec::default();
        Self {
            speed_mps: params.speed_mps as f32,
            angle_deg: params.angle_deg as f32,
            height_m: params.release_height_m as f32,
            gravity_mps2: params.gravity_mps2 as f32,
            rock_size_m: params.projectile_radius_m as f32,
            target_enabled: target.enabled,
            target_distance_m: target.distance_m as f32,
            target_height_m: target.height_m as f32,
            target_width_m: target.width_m as f32,
        }
    }

    pub(crate) fn params(&self) -> ThrowParameters {
        ThrowParameters {
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg),
            release_height_m: f64::from(self.height_m),
            gravity_mps2: f64::from(self.gravity_mps2),
            projectile_radius_m: f64::from(self.rock_size_m),
        }
    }

    pub(crate) fn target(&self) -> TargetSpec {
        TargetSpec {
            enabled: self.target_enabled,
            distance_m: f64::from(self.target_distance_m),
            width_m: f64::from(self.target_width_m),
            height_m: f64::from(self.target_height_m),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppScene {
    Title,
    Game,
}

pub(crate) fn next_detection(mode: HitDetection) -> HitDetection {
    match mode {
        HitDetection::Sampled => HitDetection::SampledWithLanding,
        HitDetection::SampledWithLanding => HitDetection::Swept,
        HitDetection::Swept => HitDetection::Sampled,
    }
}

pub(crate) fn detection_text(mode: HitDetection) -> &'static str {
    match mode {
        HitDetection::Sampled => "Sampled",
        HitDetection::SampledWithLanding => "Sampled + landing",
        HitDetection::Swept => "Swept",
    }
}


use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::error::EngineError;
use crate::core::target::{MIN_SAMPLE_COUNT, SolverConfig, TargetSpec, first_contact};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Inputs for one throw. Immutable per computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowParameters {
    pub speed_mps: f64,
    /// Launch angle above the horizontal. 0-90 by convention, not enforced.
    pub angle_deg: f64,
    pub release_height_m: f64,
    pub gravity_mps2: f64,
    /// Only used by renderers; the hit test treats the projectile as a point.
    pub projectile_radius_m: f64,
}

impl Default for ThrowParameters {
    fn default() -> Self {
        Self {
            speed_mps: 20.0,
            angle_deg: 45.0,
            release_height_m: 1.5,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            projectile_radius_m: 0.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
    pub time_to_max_height_s: f64,
    pub vx0: f64,
    pub vy0: f64,
}

/// A computed throw. Built once per compute request and never mutated;
/// recomputing produces a new value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResult {
    params: ThrowParameters,
    target: TargetSpec,
    samples: Vec<TrajectorySample>,
    summary: TrajectorySummary,
    hit: bool,
    hit_time: Option<f64>,
}

impl TrajectoryResult {
    pub fn params(&self) -> &ThrowParameters {
        &self.params
    }

    pub fn target(&self) -> &TargetSpec {
        &self.target
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn summary(&self) -> &TrajectorySummary {
        &self.summary
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    pub fn hit_time(&self) -> Option<f64> {
        self.hit_time
    }

    /// Position of the apex, or `None` when the throw never rises.
    pub fn apex_point(&self) -> Option<(f64, f64)> {
        let s = &self.summary;
        (s.time_to_max_height_s > 0.0)
            .then(|| (s.vx0 * s.time_to_max_height_s, s.max_height_m))
    }

    /// Velocity components at time `t` after release.
    pub fn velocity_at(&self, time_s: f64) -> (f64, f64) {
        let s = &self.summary;
        (s.vx0, s.vy0 - self.params.gravity_mps2 * time_s)
    }
}

pub fn velocity_components(params: &ThrowParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(params: &ThrowParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = params.release_height_m + (vy * time_s)
        - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

fn validate(params: &ThrowParameters) -> Result<(), EngineError> {
    if !params.speed_mps.is_finite()
        || !params.angle_deg.is_finite()
        || !params.release_height_m.is_finite()
        || !params.gravity_mps2.is_finite()
        || !params.projectile_radius_m.is_finite()
    {
        return Err(EngineError::invalid_parameters(
            "Inputs must be finite numbers.",
        ));
    }
    if params.speed_mps <= 0.0 {
        return Err(EngineError::invalid_parameters(format!(
            "Velocity must be positive ({}).",
            params.speed_mps
        )));
    }
    if params.gravity_mps2 <= 0.0 {
        return Err(EngineError::invalid_parameters(format!(
            "Gravity must be positive ({}).",
            params.gravity_mps2
        )));
    }
    Ok(())
}

/// Forward-time ground impact: the additive root of
/// `h + vy*t - g*t^2/2 = 0`.
pub fn flight_time(params: &ThrowParameters) -> Result<f64, EngineError> {
    validate(params)?;

    let (_, vy) = velocity_components(params);
    let g = params.gravity_mps2;
    let disc = vy * vy + 2.0 * g * params.release_height_m;
    if disc < 0.0 {
        return Err(EngineError::invalid_trajectory(format!(
            "No real landing time: vy^2 + 2*g*h is negative ({disc})."
        )));
    }

    if !disc.is_finite() {
        return Err(EngineError::invalid_trajectory(
            "vy^2 + 2*g*h overflows. Check your inputs.",
        ));
    }

    let t_land = (vy + disc.sqrt()) / g;
    if !t_land.is_finite() {
        return Err(EngineError::invalid_trajectory(format!(
            "Landing time overflows ({t_land}). Check your inputs."
        )));
    }
    if t_land <= 0.0 {
        return Err(EngineError::invalid_trajectory(format!(
            "Landing time is not positive ({t_land}). Check your inputs."
        )));
    }

    Ok(t_land)
}

/// `sample_count` evenly spaced points over `[0, time_of_flight_s]`, both ends
/// included. The last point is the landing and sits exactly on the ground.
pub fn sample_trajectory(
    params: &ThrowParameters,
    time_of_flight_s: f64,
    sample_count: usize,
) -> Vec<TrajectorySample> {
    let sample_count = sample_count.max(MIN_SAMPLE_COUNT);
    let last = sample_count - 1;
    (0..sample_count)
        .map(|i| {
            if i == last {
                let (x, _) = position_at_time(params, time_of_flight_s);
                return TrajectorySample {
                    t: time_of_flight_s,
                    x,
                    y: 0.0,
                };
            }
            let t = time_of_flight_s * (i as f64 / last as f64);
            let (x, y) = position_at_time(params, t);
            TrajectorySample { t, x, y }
        })
        .collect()
}

pub fn compute_trajectory(
    params: ThrowParameters,
    target: TargetSpec,
) -> Result<TrajectoryResult, EngineError> {
    compute_trajectory_with(params, target, &SolverConfig::default())
}

pub fn compute_trajectory_with(
    params: ThrowParameters,
    target: TargetSpec,
    config: &SolverConfig,
) -> Result<TrajectoryResult, EngineError> {
    let t_flight = flight_time(&params)?;
    let (vx0, vy0) = velocity_components(&params);
    let g = params.gravity_mps2;

    let (time_to_max_height_s, max_height_m) = if vy0 > 0.0 {
        (vy0 / g, params.release_height_m + (vy0 * vy0) / (2.0 * g))
    } else {
        (0.0, params.release_height_m)
    };

    let summary = TrajectorySummary {
        flight_time_s: t_flight,
        range_m: vx0 * t_flight,
        max_height_m,
        time_to_max_height_s,
        vx0,
        vy0,
    };

    if config.sample_count < MIN_SAMPLE_COUNT {
        warn!(
            requested = config.sample_count,
            used = MIN_SAMPLE_COUNT,
            "sample count raised to the minimum"
        );
    }
    let samples = sample_trajectory(&params, t_flight, config.sample_count);
    if !summary.range_m.is_finite()
        || !summary.max_height_m.is_finite()
        || samples.iter().any(|s| !s.x.is_finite() || !s.y.is_finite())
    {
        return Err(EngineError::invalid_trajectory(
            "The path does not fit in floating point range. Check your inputs.",
        ));
    }
    let hit_time = first_contact(&samples, &target, config.hit_detection);

    debug!(
        flight_time_s = summary.flight_time_s,
        range_m = summary.range_m,
        max_height_m = summary.max_height_m,
        samples = samples.len(),
        hit = hit_time.is_some(),
        "trajectory computed"
    );

    Ok(TrajectoryResult {
        params,
        target,
        samples,
        summary,
        hit: hit_time.is_some(),
        hit_time,
    })
}

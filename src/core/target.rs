use serde::{Deserialize, Serialize};

use crate::core::ballistics::TrajectorySample;

pub const DEFAULT_SAMPLE_COUNT: usize = 200;
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Ground-anchored rectangle `[distance, distance + width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub enabled: bool,
    pub distance_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            enabled: false,
            distance_m: 30.0,
            width_m: 1.0,
            height_m: 2.0,
        }
    }
}

impl TargetSpec {
    pub fn at(distance_m: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            enabled: true,
            distance_m,
            width_m,
            height_m,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn right_edge_m(&self) -> f64 {
        self.distance_m + self.width_m
    }

    /// Closed containment test; edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.distance_m..=self.right_edge_m()).contains(&x) && (0.0..=self.height_m).contains(&y)
    }
}

/// How the sampled path is tested against the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitDetection {
    /// First contained sample, scanning every sample except the landing one.
    #[default]
    Sampled,
    /// Like `Sampled` but the landing sample is tested too.
    SampledWithLanding,
    /// Clip each segment between consecutive samples against the rectangle
    /// and report the interpolated entry time. Catches fast crossings that
    /// fall between two samples, so hit times differ from `Sampled`.
    Swept,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub sample_count: usize,
    pub hit_detection: HitDetection,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            hit_detection: HitDetection::Sampled,
        }
    }
}

/// Time of first contact with the target, if any.
///
/// Point sampling is an approximation: under `Sampled` a flight that jumps
/// over the rectangle between two samples is not reported.
pub fn first_contact(
    samples: &[TrajectorySample],
    target: &TargetSpec,
    mode: HitDetection,
) -> Option<f64> {
    if !target.enabled || samples.is_empty() {
        return None;
    }

    match mode {
        HitDetection::Sampled => {
            let scanned = &samples[..samples.len() - 1];
            first_contained(scanned, target)
        }
        HitDetection::SampledWithLanding => first_contained(samples, target),
        HitDetection::Swept => {
            if samples.len() == 1 {
                return first_contained(samples, target);
            }
            samples.windows(2).find_map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                segment_entry((a.x, a.y), (b.x, b.y), target)
                    .map(|u| (a.t + u * (b.t - a.t)).min(b.t))
            })
        }
    }
}

fn first_contained(samples: &[TrajectorySample], target: &TargetSpec) -> Option<f64> {
    samples
        .iter()
        .find(|s| target.contains(s.x, s.y))
        .map(|s| s.t)
}

/// Liang-Barsky clip of the segment `a -> b` against the target rectangle.
/// Returns the segment parameter in `[0, 1]` where it first enters.
pub(crate) fn segment_entry(a: (f64, f64), b: (f64, f64), target: &TargetSpec) -> Option<f64> {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let edges = [
        (-dx, a.0 - target.distance_m),
        (dx, target.right_edge_m() - a.0),
        (-dy, a.1),
        (dy, target.height_m - a.1),
    ];

    let mut enter = 0.0f64;
    let mut exit = 1.0f64;
    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: either always outside or never constrained.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > exit {
                return None;
            }
            enter = enter.max(r);
        } else {
            if r < enter {
                return None;
            }
            exit = exit.min(r);
        }
    }

    Some(enter)
}

use crate::core::ballistics::TrajectoryResult;
use crate::core::target::TargetSpec;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw extents and stretches one axis so the window keeps a fixed
/// x:y ratio. Returns `(x_span, y_span)`, both at least 1.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Window covering the throw, its apex, the release point and the target
/// (when enabled). Without a trajectory only the target is framed.
pub fn scene_window(result: Option<&TrajectoryResult>, target: &TargetSpec) -> (f64, f64) {
    let mut raw_max_x = 0.0f64;
    let mut raw_max_y = 0.0f64;

    if let Some(result) = result {
        let summary = result.summary();
        let radius = result.params().projectile_radius_m.max(0.0);
        raw_max_x = raw_max_x.max(summary.range_m + radius);
        raw_max_y = raw_max_y
            .max(summary.max_height_m + radius)
            .max(result.params().release_height_m);
    }

    if target.enabled {
        raw_max_x = raw_max_x.max(target.right_edge_m());
        raw_max_y = raw_max_y.max(target.height_m);
    }

    fixed_ratio_axis_window(raw_max_x, raw_max_y)
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TO_HEIGHT_RATIO, fixed_ratio_axis_window, scene_window};
    use crate::core::ballistics::{ThrowParameters, compute_trajectory};
    use crate::core::target::TargetSpec;

    #[test]
    fn window_keeps_the_fixed_ratio() {
        for (x, y) in [(100.0, 5.0), (5.0, 100.0), (0.0, 0.0), (40.0, 20.0)] {
            let (x_span, y_span) = fixed_ratio_axis_window(x, y);
            assert!((x_span / y_span - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-12);
            assert!(x_span >= x && y_span >= y);
        }
    }

    #[test]
    fn scene_window_frames_throw_and_target() {
        let result = compute_trajectory(ThrowParameters::default(), TargetSpec::disabled())
            .expect("default throw is valid");
        let far_target = TargetSpec::at(90.0, 5.0, 4.0);

        let (x_span, y_span) = scene_window(Some(&result), &far_target);
        assert!(x_span >= 95.0);
        assert!(y_span >= result.summary().max_height_m);

        let (bare_x, _) = scene_window(Some(&result), &TargetSpec::disabled());
        assert!(bare_x >= result.summary().range_m);
        assert!(bare_x < 95.0);
    }
}

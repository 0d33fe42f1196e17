//! Human-readable result lines shared by the CLI and the interactive window.

use crate::core::ballistics::{TrajectoryResult, TrajectorySample};
use crate::core::playback::HitStatus;

pub const HIT_BANNER: &str = "TARGET HIT!";

pub fn max_height_line(result: &TrajectoryResult) -> String {
    format!("Maximum Height: {:.2} m", result.summary().max_height_m)
}

pub fn range_line(result: &TrajectoryResult) -> String {
    format!("Range: {:.2} m", result.summary().range_m)
}

pub fn flight_time_line(result: &TrajectoryResult) -> String {
    format!("Flight Time: {:.2} s", result.summary().flight_time_s)
}

pub fn target_line(result: &TrajectoryResult) -> String {
    if !result.target().enabled {
        return "Target Hit: No target set".to_string();
    }
    match result.hit_time() {
        Some(t) => format!("Target Hit: Yes! At {t:.2} s"),
        None => "Target Hit: No".to_string(),
    }
}

pub fn summary_lines(result: &TrajectoryResult) -> [String; 4] {
    [
        max_height_line(result),
        range_line(result),
        flight_time_line(result),
        target_line(result),
    ]
}

/// Status line for one replayed frame.
pub fn frame_status(sample: &TrajectorySample, status: HitStatus) -> String {
    match status {
        HitStatus::Hit => HIT_BANNER.to_string(),
        HitStatus::None => format!(
            "Time: {:.2}s | Position: ({:.2}m, {:.2}m)",
            sample.t, sample.x, sample.y
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{HIT_BANNER, frame_status, summary_lines, target_line};
    use crate::core::ballistics::{ThrowParameters, TrajectorySample, compute_trajectory};
    use crate::core::playback::HitStatus;
    use crate::core::target::TargetSpec;

    fn flat_throw() -> ThrowParameters {
        ThrowParameters {
            speed_mps: 20.0,
            angle_deg: 45.0,
            release_height_m: 0.0,
            ..ThrowParameters::default()
        }
    }

    #[test]
    fn summary_lines_use_two_decimals() {
        let result =
            compute_trajectory(flat_throw(), TargetSpec::disabled()).expect("valid throw");
        let lines = summary_lines(&result);
        assert_eq!(lines[0], "Maximum Height: 10.20 m");
        assert_eq!(lines[1], "Range: 40.82 m");
        assert_eq!(lines[2], "Flight Time: 2.89 s");
        assert_eq!(lines[3], "Target Hit: No target set");
    }

    #[test]
    fn target_line_reports_hit_or_miss() {
        let hit = compute_trajectory(flat_throw(), TargetSpec::at(38.0, 4.0, 3.0))
            .expect("valid throw");
        assert!(target_line(&hit).starts_with("Target Hit: Yes! At "));

        let miss = compute_trajectory(flat_throw(), TargetSpec::at(60.0, 1.0, 1.0))
            .expect("valid throw");
        assert_eq!(target_line(&miss), "Target Hit: No");
    }

    #[test]
    fn frame_status_switches_to_banner_on_hit() {
        let sample = TrajectorySample {
            t: 1.234,
            x: 5.0,
            y: 0.5,
        };
        assert_eq!(
            frame_status(&sample, HitStatus::None),
            "Time: 1.23s | Position: (5.00m, 0.50m)"
        );
        assert_eq!(frame_status(&sample, HitStatus::Hit), HIT_BANNER);
    }
}

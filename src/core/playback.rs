use std::time::Duration;

use tracing::trace;

use crate::core::ballistics::{TrajectoryResult, TrajectorySample};
use crate::core::error::EngineError;

pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitStatus {
    Hit,
    None,
}

/// One replayed frame: the sample plus whether the hit lands on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackFrame {
    pub index: usize,
    pub sample: TrajectorySample,
    pub status: HitStatus,
}

/// Steppable replay of a computed trajectory.
///
/// The controller never keeps time itself. Whoever drives it decides how
/// often `advance` is called; the controller only guarantees the order of
/// frames and that the replay loops back to the first sample forever.
#[derive(Debug, Default)]
pub struct Playback {
    result: Option<TrajectoryResult>,
    cursor: usize,
    previous_time: Option<f64>,
    running: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `result` and rewinds to the first sample. Any earlier replay is
    /// discarded, also when `result` is missing.
    pub fn start(&mut self, result: Option<TrajectoryResult>) -> Result<(), EngineError> {
        let result = match result {
            Some(result) if !result.samples().is_empty() => result,
            _ => {
                *self = Self::default();
                return Err(EngineError::NoTrajectory);
            }
        };

        self.result = Some(result);
        self.cursor = 0;
        self.previous_time = None;
        self.running = true;
        Ok(())
    }

    /// Returns the sample under the cursor and moves the cursor forward.
    /// After the last sample the next call starts over at index 0.
    ///
    /// `None` when nothing is loaded or the replay is stopped.
    pub fn advance(&mut self) -> Option<TrajectorySample> {
        self.step().map(|(_, sample)| sample)
    }

    pub fn advance_frame(&mut self) -> Option<PlaybackFrame> {
        let (index, sample) = self.step()?;
        Some(PlaybackFrame {
            index,
            sample,
            status: self.current_hit_status(sample.t),
        })
    }

    fn step(&mut self) -> Option<(usize, TrajectorySample)> {
        if !self.running {
            return None;
        }
        let samples = self.result.as_ref()?.samples();

        if self.cursor >= samples.len() {
            trace!(frames = samples.len(), "playback looped");
            self.cursor = 0;
        }

        let index = self.cursor;
        self.previous_time = index.checked_sub(1).map(|prev| samples[prev].t);
        self.cursor += 1;
        Some((index, samples[index]))
    }

    /// `Hit` when the loaded trajectory hits and its hit time falls in
    /// `(previous frame time, t]`. On the first frame of a loop there is no
    /// previous frame and only `hit_time == t` counts.
    pub fn current_hit_status(&self, at_time: f64) -> HitStatus {
        let Some(hit_time) = self
            .result
            .as_ref()
            .filter(|result| result.hit())
            .and_then(TrajectoryResult::hit_time)
        else {
            return HitStatus::None;
        };

        let crossed = match self.previous_time {
            Some(previous) => previous < hit_time && hit_time <= at_time,
            None => hit_time == at_time,
        };
        if crossed {
            HitStatus::Hit
        } else {
            HitStatus::None
        }
    }

    /// Halts the replay. The cursor and the loaded trajectory are kept so the
    /// last frame can still be inspected.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Continues a stopped replay from where it halted.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.result.is_none() {
            return Err(EngineError::NoTrajectory);
        }
        self.running = true;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn result(&self) -> Option<&TrajectoryResult> {
        self.result.as_ref()
    }

    /// Index of the next sample `advance` will return, before wrapping.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The most recently returned sample, if any.
    pub fn last_sample(&self) -> Option<TrajectorySample> {
        let samples = self.result.as_ref()?.samples();
        self.cursor.checked_sub(1).map(|idx| samples[idx])
    }

    pub fn sample_count(&self) -> usize {
        self.result.as_ref().map_or(0, |result| result.samples().len())
    }

    /// Real-time pacing hint: spread the frames over the flight time, but
    /// never tick faster than `MIN_FRAME_INTERVAL`.
    ///
    /// `None` when nothing is loaded or the per-frame time is too long for a
    /// `Duration`.
    pub fn frame_interval(&self) -> Option<Duration> {
        let result = self.result.as_ref()?;
        let per_frame_s = result.summary().flight_time_s / result.samples().len() as f64;
        let interval = Duration::try_from_secs_f64(per_frame_s).ok()?;
        Some(interval.max(MIN_FRAME_INTERVAL))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{HitStatus, MIN_FRAME_INTERVAL, Playback};
    use crate::core::ballistics::{ThrowParameters, TrajectoryResult, compute_trajectory};
    use crate::core::error::EngineError;
    use crate::core::target::TargetSpec;

    fn flat_throw(target: TargetSpec) -> TrajectoryResult {
        compute_trajectory(
            ThrowParameters {
                speed_mps: 12.0,
                angle_deg: 15.0,
                release_height_m: 1.5,
                ..ThrowParameters::default()
            },
            target,
        )
        .expect("calculation should succeed")
    }

    #[test]
    fn start_without_trajectory_fails() {
        let mut playback = Playback::new();
        assert_eq!(playback.start(None), Err(EngineError::NoTrajectory));
        assert!(!playback.is_running());
        assert_eq!(playback.advance(), None);
        assert_eq!(playback.resume(), Err(EngineError::NoTrajectory));
    }

    #[test]
    fn failed_start_drops_the_previous_trajectory() {
        let mut playback = Playback::new();
        playback
            .start(Some(flat_throw(TargetSpec::disabled())))
            .expect("trajectory is loaded");
        playback.advance();

        assert_eq!(playback.start(None), Err(EngineError::NoTrajectory));
        assert!(playback.result().is_none());
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.resume(), Err(EngineError::NoTrajectory));
        assert_eq!(playback.advance(), None);
    }

    #[test]
    fn advance_walks_samples_in_order_then_wraps() {
        let result = flat_throw(TargetSpec::disabled());
        let expected = result.samples().to_vec();
        let mut playback = Playback::new();
        playback.start(Some(result)).expect("trajectory is loaded");

        for (idx, sample) in expected.iter().enumerate() {
            let frame = playback.advance_frame().expect("playback is running");
            assert_eq!(frame.index, idx);
            assert_eq!(frame.sample, *sample);
        }
        assert_eq!(playback.cursor(), expected.len());

        let wrapped = playback.advance_frame().expect("playback loops");
        assert_eq!(wrapped.index, 0);
        assert_eq!(wrapped.sample, expected[0]);
    }

    #[test]
    fn stop_retains_the_cursor() {
        let mut playback = Playback::new();
        playback
            .start(Some(flat_throw(TargetSpec::disabled())))
            .expect("trajectory is loaded");
        playback.advance();
        let second = playback.advance().expect("playback is running");
        playback.stop();

        assert_eq!(playback.advance(), None);
        assert_eq!(playback.cursor(), 2);
        assert_eq!(playback.last_sample(), Some(second));

        playback.resume().expect("trajectory still loaded");
        let third = playback.advance().expect("playback resumed");
        assert!(third.t > second.t);
    }

    #[test]
    fn hit_is_announced_once_per_loop() {
        let result = flat_throw(TargetSpec::at(10.0, 2.0, 3.0));
        assert!(result.hit());
        let frames = result.samples().len();
        let mut playback = Playback::new();
        playback.start(Some(result)).expect("trajectory is loaded");

        for _ in 0..3 {
            let hits = (0..frames)
                .filter_map(|_| playback.advance_frame())
                .filter(|frame| frame.status == HitStatus::Hit)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn release_inside_target_hits_on_the_first_frame_of_every_loop() {
        let result = flat_throw(TargetSpec::at(0.0, 2.0, 3.0));
        assert_eq!(result.hit_time(), Some(0.0));
        let frames = result.samples().len();
        let mut playback = Playback::new();
        playback.start(Some(result)).expect("trajectory is loaded");

        for _ in 0..3 {
            let hit_frames: Vec<usize> = (0..frames)
                .filter_map(|_| playback.advance_frame())
                .filter(|frame| frame.status == HitStatus::Hit)
                .map(|frame| frame.index)
                .collect();
            assert_eq!(hit_frames, vec![0]);
        }
    }

    #[test]
    fn hit_on_a_sample_is_not_repeated_on_the_next_frame() {
        let result = flat_throw(TargetSpec::at(10.0, 2.0, 3.0));
        let hit_time = result.hit_time().expect("throw hits");
        let hit_index = result
            .samples()
            .iter()
            .position(|s| s.t == hit_time)
            .expect("sampled hits land on a sample");
        let mut playback = Playback::new();
        playback.start(Some(result)).expect("trajectory is loaded");

        for _ in 0..hit_index {
            playback.advance_frame();
        }
        let on_hit = playback.advance_frame().expect("playback is running");
        assert_eq!(on_hit.status, HitStatus::Hit);

        let after = playback.advance_frame().expect("playback is running");
        assert_eq!(after.index, hit_index + 1);
        assert_eq!(after.status, HitStatus::None);
        assert_eq!(playback.current_hit_status(hit_time), HitStatus::None);
    }

    #[test]
    fn miss_never_reports_a_hit() {
        let result = flat_throw(TargetSpec::at(80.0, 2.0, 3.0));
        assert!(!result.hit());
        let mut playback = Playback::new();
        let frames = result.samples().len();
        playback.start(Some(result)).expect("trajectory is loaded");
        assert!(
            (0..frames)
                .filter_map(|_| playback.advance_frame())
                .all(|frame| frame.status == HitStatus::None)
        );
    }

    #[test]
    fn frame_interval_is_floored() {
        let mut playback = Playback::new();
        assert_eq!(playback.frame_interval(), None);
        playback
            .start(Some(flat_throw(TargetSpec::disabled())))
            .expect("trajectory is loaded");
        let interval = playback.frame_interval().expect("trajectory is loaded");
        assert!(interval >= MIN_FRAME_INTERVAL);
        assert!(interval < Duration::from_secs(1));
    }

    #[test]
    fn frame_interval_beyond_duration_range_is_none() {
        let result = compute_trajectory(
            ThrowParameters {
                speed_mps: 1.0,
                gravity_mps2: 1e-30,
                release_height_m: 0.0,
                ..ThrowParameters::default()
            },
            TargetSpec::disabled(),
        )
        .expect("calculation should succeed");
        assert!(result.summary().flight_time_s > 1e29);

        let mut playback = Playback::new();
        playback.start(Some(result)).expect("trajectory is loaded");
        assert_eq!(playback.frame_interval(), None);
        assert!(playback.advance_frame().is_some());
    }
}

pub mod core;

pub use crate::core::ballistics::{
    ThrowParameters, TrajectoryResult, TrajectorySample, TrajectorySummary, compute_trajectory,
    compute_trajectory_with,
};
pub use crate::core::error::EngineError;
pub use crate::core::playback::{HitStatus, Playback, PlaybackFrame};
pub use crate::core::target::{HitDetection, SolverConfig, TargetSpec};

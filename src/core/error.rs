use std::error::Error;
use std::fmt;

/// Failures reported by the solver and the playback controller.
///
/// Every variant is recoverable: the caller is expected to let the user
/// adjust the throw and try again.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Speed or gravity is not a positive finite number, or another throw
    /// parameter is NaN/infinite. Nothing was computed.
    InvalidParameters { reason: String },
    /// The inputs are well formed but the parabola has no forward-time
    /// ground impact.
    InvalidTrajectory { reason: String },
    /// Playback was started without a successfully computed trajectory.
    NoTrajectory,
}

impl EngineError {
    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_trajectory(reason: impl Into<String>) -> Self {
        Self::InvalidTrajectory {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { reason } => write!(f, "Invalid parameters: {reason}"),
            Self::InvalidTrajectory { reason } => write!(f, "Invalid trajectory: {reason}"),
            Self::NoTrajectory => write!(f, "No trajectory: calculate the trajectory first."),
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn messages_name_the_failure_kind() {
        let err = EngineError::invalid_parameters("Velocity must be positive.");
        assert_eq!(
            err.to_string(),
            "Invalid parameters: Velocity must be positive."
        );

        let err = EngineError::invalid_trajectory("no ground impact");
        assert!(err.to_string().starts_with("Invalid trajectory"));

        assert!(EngineError::NoTrajectory.to_string().contains("first"));
    }
}

pub mod ballistics;
pub mod error;
pub mod playback;
pub mod report;
pub mod target;
pub mod window;

mod check_closed;
mod enclosed_volume;
mod rotation_cuts;

pub use check_closed::CheckClosed;
pub use enclosed_volume::EnclosedVolume;
pub use rotation_cuts::RotationCuts;

use crate::error::Result;
use crate::topology::Volume;

use super::{Dilate, Erode};

/// Erodes a piece and dilates it back by the same distance.
///
/// The outline barely moves, but every edge and corner turns into a bevel
/// face, which leaves visible gaps between neighboring pieces.
pub struct Bevel {
    distance: f64,
}

impl Bevel {
    /// Creates a new `Bevel` operation.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the bevel, returning the reshaped piece.
    ///
    /// # Errors
    ///
    /// Returns an error if either offset step fails.
    pub fn execute(&self, volume: Volume) -> Result<Volume> {
        let eroded = Erode::new(self.distance).execute(volume)?;
        Dilate::new(self.distance).execute(&eroded)
    }
}

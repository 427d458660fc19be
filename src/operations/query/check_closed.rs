use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::topology::Volume;

/// Verifies that a volume is a closed, consistently wound 2-manifold.
///
/// Every directed edge must appear in exactly one face and its reverse in
/// exactly one face. An empty volume passes trivially.
pub struct CheckClosed<'a> {
    volume: &'a Volume,
}

impl<'a> CheckClosed<'a> {
    /// Creates a new `CheckClosed` query.
    #[must_use]
    pub fn new(volume: &'a Volume) -> Self {
        Self { volume }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// Returns the first offending edge, in face order, or an out-of-range
    /// vertex index.
    pub fn execute(&self) -> Result<()> {
        let len = self.volume.vertices().len();
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for face in self.volume.faces() {
            if let Some(&index) = face.indices.iter().find(|&&ix| ix >= len) {
                return Err(TopologyError::IndexOutOfRange { index, len }.into());
            }
            for edge in face.edges() {
                *counts.entry(edge).or_default() += 1;
            }
        }

        for face in self.volume.faces() {
            for (from, to) in face.edges() {
                let count = counts.get(&(from, to)).copied().unwrap_or(0);
                if count != 1 {
                    return Err(TopologyError::NotClosed { from, to, count }.into());
                }
                let twin = counts.get(&(to, from)).copied().unwrap_or(0);
                if twin != 1 {
                    return Err(TopologyError::NotClosed {
                        from: to,
                        to: from,
                        count: twin,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

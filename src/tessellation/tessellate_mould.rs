use crate::error::Result;
use crate::topology::Mould;

use super::{TessellateVolume, TriangleMesh};

/// Tessellates every piece of a mould, one mesh per piece in piece order.
pub struct TessellateMould<'a> {
    mould: &'a Mould,
    include_bevels: bool,
}

impl<'a> TessellateMould<'a> {
    /// Creates a new `TessellateMould` operation that keeps bevel faces.
    #[must_use]
    pub fn new(mould: &'a Mould) -> Self {
        Self {
            mould,
            include_bevels: true,
        }
    }

    /// Sets whether bevel faces are emitted.
    #[must_use]
    pub fn include_bevels(mut self, include: bool) -> Self {
        self.include_bevels = include;
        self
    }

    /// Executes the tessellation, returning one mesh per piece.
    ///
    /// # Errors
    ///
    /// Returns an error if any piece cannot be tessellated.
    pub fn execute(&self) -> Result<Vec<TriangleMesh>> {
        self.mould
            .volumes()
            .map(|piece| {
                TessellateVolume::new(piece)
                    .include_bevels(self.include_bevels)
                    .execute()
            })
            .collect()
    }

    /// Executes the tessellation, returning all pieces in a single mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if any piece cannot be tessellated or the combined
    /// mesh overflows `u32` indices.
    pub fn execute_combined(&self) -> Result<TriangleMesh> {
        let mut combined = TriangleMesh::default();
        for mesh in self.execute()? {
            combined.merge(&mesh)?;
        }
        Ok(combined)
    }
}

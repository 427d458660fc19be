use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Cut, Plane};
use crate::operations::cut::CutVolume;
use crate::topology::Volume;

/// Shrinks a volume by moving every face inward along its own normal.
///
/// All cutting planes are taken from the volume as given, then applied one
/// after another, keeping the inside each time. A plane may also trim faces
/// created by earlier planes of the same pass, which is what carves the
/// dents of non-convex solids. Each face's tag and kind carry over to the
/// face that replaces it.
pub struct Erode {
    distance: f64,
}

impl Erode {
    /// Creates a new `Erode` operation.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the erosion, returning the shrunken volume.
    ///
    /// The result is empty when `distance` eats through the whole solid.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` is not finite, a face has a zero
    /// normal, or one of the cuts fails.
    #[tracing::instrument(skip_all, fields(distance = self.distance, faces = volume.faces().len()))]
    pub fn execute(&self, volume: Volume) -> Result<Volume> {
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "erosion distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        let cuts = self.face_cuts(&volume)?;
        let mut volume = volume;
        for cut in &cuts {
            volume = CutVolume::from_cut(cut).execute(volume)?.inside;
        }
        Ok(volume)
    }

    /// One cut per face: the face's own plane pulled inward by the distance.
    fn face_cuts(&self, volume: &Volume) -> Result<Vec<Cut>> {
        volume
            .faces()
            .iter()
            .map(|face| {
                let &anchor = face.indices.first().ok_or_else(|| {
                    GeometryError::Degenerate("face without vertices".into())
                })?;
                let plane = Plane::through_point(face.normal, &volume.vertices()[anchor])?
                    .shifted(-self.distance);
                Ok(Cut::new(plane, face.tag).with_kind(face.kind))
            })
            .collect()
    }
}

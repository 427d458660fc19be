use crate::error::Result;
use crate::geometry::{Cut, Plane};
use crate::math::EPSILON;
use crate::topology::{FaceKind, Volume};

/// Picks the face planes of a piece that make sensible twist planes.
///
/// A face qualifies when its plane passes at or behind the origin
/// (offset below `EPSILON`), the piece's center lies behind it, and its
/// normal is not parallel to the direction of the center. Bevel faces never
/// qualify. The returned cuts carry the face's tag and kind.
pub struct RotationCuts<'a> {
    volume: &'a Volume,
}

impl<'a> RotationCuts<'a> {
    /// Creates a new `RotationCuts` query.
    #[must_use]
    pub fn new(volume: &'a Volume) -> Self {
        Self { volume }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a qualifying face has a zero normal.
    pub fn execute(&self) -> Result<Vec<Cut>> {
        let center = self.volume.center();
        let mut cuts = Vec::new();
        for face in self.volume.faces() {
            if face.kind == FaceKind::Bevel {
                continue;
            }
            let Some(&anchor) = face.indices.first() else {
                continue;
            };
            let face_offset = face.normal.dot(&self.volume.vertices()[anchor].coords);
            let center_offset = face.normal.dot(&center.coords);
            if face_offset < EPSILON
                && center_offset < face_offset
                && face.normal.cross(&center.coords).norm() > EPSILON
            {
                let plane = Plane::new(face.normal, face_offset)?;
                cuts.push(Cut::new(plane, face.tag).with_kind(face.kind));
            }
        }
        Ok(cuts)
    }
}

use crate::error::Result;
use crate::geometry::Plane;
use crate::operations::cut::CutVolume;
use crate::topology::{FaceKind, Volume};

use super::MakeCube;

/// Carves a solid out of a cube by keeping the inside of every plane.
///
/// The face left by the `i`-th plane is tagged `i + 1` and marked
/// [`FaceKind::Outer`], so it reads as part of the shape's surface.
pub struct MakeShape {
    half_extent: f64,
    planes: Vec<Plane>,
}

impl MakeShape {
    /// Creates a new `MakeShape` operation.
    #[must_use]
    pub fn new(half_extent: f64, planes: Vec<Plane>) -> Self {
        Self {
            half_extent,
            planes,
        }
    }

    /// Executes the operation, returning the carved solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the cube cannot be built or a cut fails.
    #[tracing::instrument(skip_all, fields(half_extent = self.half_extent, planes = self.planes.len()))]
    pub fn execute(&self) -> Result<Volume> {
        let mut shape = MakeCube::new(self.half_extent).execute()?;
        for (tag, plane) in (1..).zip(&self.planes) {
            shape = CutVolume::new(*plane, tag)
                .with_kind(FaceKind::Outer)
                .execute(shape)?
                .inside;
        }
        Ok(shape)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::query::{CheckClosed, EnclosedVolume};
    use approx::assert_relative_eq;

    /// Octahedron |x| + |y| + |z| <= 1 inside a larger cube.
    fn octahedron_planes() -> Vec<Plane> {
        let mut planes = Vec::new();
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    planes.push(Plane::new(Vector3::new(sx, sy, sz), 1.0).unwrap());
                }
            }
        }
        planes
    }

    #[test]
    fn carves_octahedron() {
        let shape = MakeShape::new(2.0, octahedron_planes()).execute().unwrap();
        CheckClosed::new(&shape).execute().unwrap();
        assert_eq!(shape.faces().len(), 8);
        assert_eq!(shape.vertices().len(), 6);
        assert_relative_eq!(EnclosedVolume::new(&shape).execute(), 4.0 / 3.0, epsilon = 1e-9);

        let mut tags: Vec<crate::topology::Tag> = shape.faces().iter().map(|f| f.tag).collect();
        tags.sort_unstable();
        assert_eq!(tags, (1..=8).collect::<Vec<_>>());
        assert!(shape.faces().iter().all(|f| f.kind == FaceKind::Outer));
    }

    #[test]
    fn no_planes_gives_cube() {
        let shape = MakeShape::new(1.0, Vec::new()).execute().unwrap();
        assert_eq!(shape, MakeCube::new(1.0).execute().unwrap());
    }
}

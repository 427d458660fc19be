use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::winding_normal;
use crate::math::Point3;
use crate::topology::{Face, FaceKind, Volume};

/// Creates an axis-aligned cube centered on the origin.
///
/// Vertex `4·xi + 2·yi + zi` sits at `(±h, ±h, ±h)`, with index bit 0 for
/// `-h` and 1 for `+h`. The six faces carry tag 0 and [`FaceKind::Outer`].
pub struct MakeCube {
    half_extent: f64,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation.
    #[must_use]
    pub fn new(half_extent: f64) -> Self {
        Self { half_extent }
    }

    /// Executes the operation, returning the cube.
    ///
    /// # Errors
    ///
    /// Returns an error if the half extent is not a positive finite number.
    pub fn execute(&self) -> Result<Volume> {
        let h = self.half_extent;
        if !(h.is_finite() && h > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "half_extent",
                value: h,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let mut vertices = Vec::with_capacity(8);
        for x in [-h, h] {
            for y in [-h, h] {
                for z in [-h, h] {
                    vertices.push(Point3::new(x, y, z));
                }
            }
        }

        let face = |indices: [usize; 4]| {
            let points = indices.map(|ix| vertices[ix]);
            // Newell length is twice the face area (2h)².
            let normal = winding_normal(&points) / (8.0 * h * h);
            Face::new(indices.to_vec(), normal, 0, FaceKind::Outer)
        };
        let faces = vec![
            face([0, 1, 3, 2]),
            face([4, 6, 7, 5]),
            face([0, 4, 5, 1]),
            face([2, 3, 7, 6]),
            face([0, 2, 6, 4]),
            face([1, 5, 7, 3]),
        ];

        Ok(Volume::from_parts_unchecked(vertices, faces))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::query::{CheckClosed, EnclosedVolume};
    use approx::assert_relative_eq;

    #[test]
    fn cube_has_eight_vertices_and_six_quads() {
        let cube = MakeCube::new(1.5).execute().unwrap();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 6);
        assert!(cube.faces().iter().all(|f| f.len() == 4));
        assert_eq!(cube.vertices()[5], Point3::new(1.5, -1.5, 1.5));
        CheckClosed::new(&cube).execute().unwrap();
    }

    #[test]
    fn faces_wind_counter_clockwise_about_normals() {
        let cube = MakeCube::new(1.0).execute().unwrap();
        for face in cube.faces() {
            let points: Vec<Point3> = face.indices.iter().map(|&i| cube.vertices()[i]).collect();
            let n = winding_normal(&points).normalize();
            assert_relative_eq!(n, face.normal);
            assert_relative_eq!(face.normal.norm(), 1.0);
            for p in &points {
                assert_relative_eq!(face.normal.dot(&p.coords), 1.0);
            }
        }
    }

    #[test]
    fn normals_are_axis_aligned() {
        let cube = MakeCube::new(2.5).execute().unwrap();
        let normals: Vec<Vector3> = cube.faces().iter().map(|f| f.normal).collect();
        let expected = [
            -Vector3::x(),
            Vector3::x(),
            -Vector3::y(),
            Vector3::y(),
            -Vector3::z(),
            Vector3::z(),
        ];
        for (n, e) in normals.iter().zip(expected) {
            assert_relative_eq!(*n, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn cube_volume() {
        let cube = MakeCube::new(0.5).execute().unwrap();
        assert_relative_eq!(EnclosedVolume::new(&cube).execute(), 1.0);
    }

    #[test]
    fn non_positive_size_fails() {
        assert!(MakeCube::new(0.0).execute().is_err());
        assert!(MakeCube::new(-1.0).execute().is_err());
        assert!(MakeCube::new(f64::NAN).execute().is_err());
    }
}

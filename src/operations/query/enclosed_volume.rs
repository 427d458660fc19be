use crate::topology::Volume;

/// Computes the volume enclosed by a closed polyhedron.
///
/// Each face is fanned into triangles and the signed tetrahedra they form
/// with the origin, `(1/6) * v0 . (v1 x v2)`, are summed. The result is
/// positive when faces wind counter-clockwise about outward normals.
pub struct EnclosedVolume<'a> {
    volume: &'a Volume,
}

impl<'a> EnclosedVolume<'a> {
    /// Creates a new `EnclosedVolume` query.
    #[must_use]
    pub fn new(volume: &'a Volume) -> Self {
        Self { volume }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let vertices = self.volume.vertices();
        let mut signed_volume = 0.0;
        for face in self.volume.faces() {
            let Some((&apex, rest)) = face.indices.split_first() else {
                continue;
            };
            let v0 = vertices[apex].coords;
            for pair in rest.windows(2) {
                let v1 = vertices[pair[0]].coords;
                let v2 = vertices[pair[1]].coords;
                signed_volume += v0.dot(&v1.cross(&v2));
            }
        }
        signed_volume / 6.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;
    use approx::assert_relative_eq;

    #[test]
    fn box_volume() {
        let cube = MakeCube::new(1.0).execute().unwrap();
        assert_relative_eq!(EnclosedVolume::new(&cube).execute(), 8.0);
    }

    #[test]
    fn inverted_box_is_negative() {
        let (vertices, mut faces) = MakeCube::new(1.0).execute().unwrap().into_parts();
        for face in &mut faces {
            face.indices.reverse();
        }
        let inverted = Volume::from_parts(vertices, faces).unwrap();
        assert_relative_eq!(EnclosedVolume::new(&inverted).execute(), -8.0);
    }

    #[test]
    fn empty_volume_is_zero() {
        assert_relative_eq!(EnclosedVolume::new(&Volume::new()).execute(), 0.0);
    }
}

use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::{Cut, Plane};
use crate::math::polygon_3d::vertex_centroid;
use crate::math::Point3;
use crate::operations::cut::{CutOutput, CutVolume};
use crate::operations::offset::{Dilate, Erode};

use super::face::{face_with_edge, Face, Tag};

/// A closed polyhedral solid: a shared vertex buffer plus the faces bounding it.
///
/// Faces refer to vertices by position. On a valid volume every directed
/// edge `a -> b` appears in exactly one face and `b -> a` in exactly one
/// other face. A volume with no faces is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Volume {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Volume {
    /// Creates an empty volume.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a volume from raw buffers.
    ///
    /// Only index ranges and face sizes are checked here; use
    /// [`CheckClosed`](crate::operations::query::CheckClosed) for the
    /// manifold property.
    ///
    /// # Errors
    ///
    /// Returns an error if a face has fewer than three vertices or refers
    /// to a vertex outside the buffer.
    pub fn from_parts(vertices: Vec<Point3>, faces: Vec<Face>) -> Result<Self> {
        let len = vertices.len();
        for face in &faces {
            if face.len() < 3 {
                return Err(GeometryError::Degenerate(format!(
                    "face with {} vertices",
                    face.len()
                ))
                .into());
            }
            if let Some(&index) = face.indices.iter().find(|&&ix| ix >= len) {
                return Err(TopologyError::IndexOutOfRange { index, len }.into());
            }
        }
        Ok(Self::from_parts_unchecked(vertices, faces))
    }

    pub(crate) fn from_parts_unchecked(vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    pub(crate) fn into_parts(self) -> (Vec<Point3>, Vec<Face>) {
        (self.vertices, self.faces)
    }

    /// Vertex positions, in buffer order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Boundary faces, in order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns `true` if the volume has been cut away entirely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Average of all vertex positions.
    #[must_use]
    pub fn center(&self) -> Point3 {
        vertex_centroid(&self.vertices)
    }

    /// Position of the face holding the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns an error if no face holds that edge.
    pub fn find_face(&self, from: usize, to: usize) -> Result<usize> {
        Ok(face_with_edge(&self.faces, from, to)?)
    }

    /// Splits the volume by `plane`, stamping `tag` on the two section faces.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is not a closed manifold. The volume
    /// is consumed either way.
    pub fn cut(self, plane: Plane, tag: Tag) -> Result<CutOutput> {
        CutVolume::new(plane, tag).execute(self)
    }

    /// Splits the volume by a prepared [`Cut`].
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is not a closed manifold.
    pub fn apply(self, cut: &Cut) -> Result<CutOutput> {
        CutVolume::from_cut(cut).execute(self)
    }

    /// Shrinks every face inward by `dist` along its own normal.
    ///
    /// # Errors
    ///
    /// Returns an error if `dist` is not finite or a cut fails. The volume
    /// is left empty on error.
    pub fn erode(&mut self, dist: f64) -> Result<()> {
        *self = Erode::new(dist).execute(std::mem::take(self))?;
        Ok(())
    }

    /// Pushes every face outward by `dist`, bridging the gaps with bevel faces.
    ///
    /// # Errors
    ///
    /// Returns an error if `dist` is not finite or the volume is not a
    /// closed manifold. The volume is unchanged on error.
    pub fn dilate(&mut self, dist: f64) -> Result<()> {
        *self = Dilate::new(dist).execute(self)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeCube;
    use crate::topology::FaceKind;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tetrahedron_faces() -> Vec<Face> {
        let n = Vector3::z();
        vec![
            Face::new(vec![0, 2, 1], n, 0, FaceKind::Unset),
            Face::new(vec![0, 1, 3], n, 0, FaceKind::Unset),
            Face::new(vec![1, 2, 3], n, 0, FaceKind::Unset),
            Face::new(vec![2, 0, 3], n, 0, FaceKind::Unset),
        ]
    }

    fn tetrahedron_vertices() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn new_volume_is_empty() {
        let volume = Volume::new();
        assert!(volume.is_empty());
        assert!(volume.vertices().is_empty());
        assert_eq!(volume.center(), Point3::origin());
    }

    #[test]
    fn from_parts_accepts_valid_buffers() {
        let volume = Volume::from_parts(tetrahedron_vertices(), tetrahedron_faces()).unwrap();
        assert_eq!(volume.vertices().len(), 4);
        assert_eq!(volume.faces().len(), 4);
    }

    #[test]
    fn from_parts_rejects_out_of_range_index() {
        let mut faces = tetrahedron_faces();
        faces[0].indices[1] = 9;
        let result = Volume::from_parts(tetrahedron_vertices(), faces);
        assert!(matches!(
            result,
            Err(crate::MouldError::Topology(TopologyError::IndexOutOfRange {
                index: 9,
                len: 4
            }))
        ));
    }

    #[test]
    fn from_parts_rejects_degenerate_face() {
        let mut faces = tetrahedron_faces();
        faces[2].indices.truncate(2);
        assert!(Volume::from_parts(tetrahedron_vertices(), faces).is_err());
    }

    #[test]
    fn center_of_cube_is_origin() {
        let cube = MakeCube::new(1.0).execute().unwrap();
        assert_eq!(cube.center(), Point3::origin());
    }

    #[test]
    fn find_face_locates_directed_edges() {
        let volume = Volume::from_parts(tetrahedron_vertices(), tetrahedron_faces()).unwrap();
        assert_eq!(volume.find_face(2, 1).unwrap(), 0);
        assert_eq!(volume.find_face(1, 2).unwrap(), 2);
        assert!(volume.find_face(0, 0).is_err());
    }
}

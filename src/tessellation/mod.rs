mod tessellate_mould;
mod tessellate_volume;

pub use tessellate_mould::TessellateMould;
pub use tessellate_volume::TessellateVolume;

use crate::math::{Point3, Vector3};

/// A flat-shaded triangle mesh.
///
/// Every face contributes its own copies of its vertices, so each vertex
/// carries the normal of exactly one face.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// Index of the source face for each triangle.
    pub face_of_triangle: Vec<usize>,
}

impl TriangleMesh {
    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends `other`, rebasing its indices past the current vertices.
    ///
    /// Source face indices are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::IndexOverflow`](crate::error::TessellationError::IndexOverflow)
    /// if the merged mesh has more vertices than a `u32` can index.
    pub fn merge(&mut self, other: &TriangleMesh) -> crate::error::Result<()> {
        let base = index_u32(self.vertices.len())?;
        index_u32(self.vertices.len() + other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|tri| [tri[0] + base, tri[1] + base, tri[2] + base]),
        );
        self.face_of_triangle
            .extend_from_slice(&other.face_of_triangle);
        Ok(())
    }
}

pub(crate) fn index_u32(index: usize) -> Result<u32, crate::error::TessellationError> {
    u32::try_from(index).map_err(|_| crate::error::TessellationError::IndexOverflow(index))
}

use crate::error::Result;
use crate::topology::{FaceKind, Volume};

use super::{index_u32, TriangleMesh};

/// Fans every face of a volume into triangles.
///
/// Faces are convex, so a fan from the first vertex is exact. Bevel faces
/// can be left out, which yields the bare piece with gaps along its edges.
pub struct TessellateVolume<'a> {
    volume: &'a Volume,
    include_bevels: bool,
}

impl<'a> TessellateVolume<'a> {
    /// Creates a new `TessellateVolume` operation that keeps bevel faces.
    #[must_use]
    pub fn new(volume: &'a Volume) -> Self {
        Self {
            volume,
            include_bevels: true,
        }
    }

    /// Sets whether bevel faces are emitted.
    #[must_use]
    pub fn include_bevels(mut self, include: bool) -> Self {
        self.include_bevels = include;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh needs more vertices than a `u32` can
    /// index.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut mesh = TriangleMesh::default();
        for (fi, face) in self.volume.faces().iter().enumerate() {
            if !self.include_bevels && face.kind == FaceKind::Bevel {
                continue;
            }
            let base = mesh.vertices.len();
            mesh.vertices
                .extend(face.indices.iter().map(|&ix| self.volume.vertices()[ix]));
            mesh.normals
                .extend(std::iter::repeat_n(face.normal, face.len()));
            for k in 1..face.len().saturating_sub(1) {
                mesh.indices.push([
                    index_u32(base)?,
                    index_u32(base + k)?,
                    index_u32(base + k + 1)?,
                ]);
                mesh.face_of_triangle.push(fi);
            }
        }
        Ok(mesh)
    }
}

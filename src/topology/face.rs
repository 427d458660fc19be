use crate::error::TopologyError;
use crate::math::Vector3;

/// Caller-defined face label, copied through every operation untouched.
pub type Tag = u32;

/// Tag reserved for the skirt faces created by dilation.
pub const BEVEL_TAG: Tag = Tag::MAX;

/// Where a face came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// No particular origin.
    #[default]
    Unset,
    /// Part of the outer surface of the carved shape.
    Outer,
    /// Created by a cut that split pieces apart.
    Inner,
    /// Skirt face bridging displaced faces after dilation.
    Bevel,
}

/// A planar polygon on the boundary of a [`Volume`](super::Volume).
///
/// `indices` is cyclic: the last index connects back to the first. Read in
/// order it winds counter-clockwise around `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices into the owning volume, in winding order.
    pub indices: Vec<usize>,
    /// Outward unit normal.
    pub normal: Vector3,
    /// Caller-defined label.
    pub tag: Tag,
    /// Origin of the face.
    pub kind: FaceKind,
}

impl Face {
    /// Creates a new face.
    #[must_use]
    pub fn new(indices: Vec<usize>, normal: Vector3, tag: Tag, kind: FaceKind) -> Self {
        Self {
            indices,
            normal,
            tag,
            kind,
        }
    }

    /// Number of vertices on the face.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the face has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of `vertex` within the face, if present.
    #[must_use]
    pub fn position(&self, vertex: usize) -> Option<usize> {
        self.indices.iter().position(|&ix| ix == vertex)
    }

    /// Index at position `i`, wrapping around the end. `None` if the face is
    /// empty.
    #[must_use]
    pub fn at(&self, i: usize) -> Option<usize> {
        let n = self.indices.len();
        i.checked_rem(n).map(|k| self.indices[k])
    }

    /// Index just before position `i`, wrapping around the start. `None` if
    /// the face is empty.
    #[must_use]
    pub fn before(&self, i: usize) -> Option<usize> {
        let n = self.indices.len();
        i.checked_rem(n).map(|k| self.indices[(k + n - 1) % n])
    }

    /// The vertex following `vertex` along the winding.
    #[must_use]
    pub fn next(&self, vertex: usize) -> Option<usize> {
        self.position(vertex).and_then(|i| self.at(i + 1))
    }

    /// The vertex preceding `vertex` along the winding.
    #[must_use]
    pub fn prev(&self, vertex: usize) -> Option<usize> {
        self.position(vertex).and_then(|i| self.before(i))
    }

    /// Directed boundary edges `(from, to)`, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// Returns `true` if the face contains the directed edge `from -> to`.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges().any(|edge| edge == (from, to))
    }
}

/// Finds the face holding the directed edge `from -> to`.
///
/// On a closed manifold exactly one face does.
pub(crate) fn face_with_edge(faces: &[Face], from: usize, to: usize) -> Result<usize, TopologyError> {
    faces
        .iter()
        .position(|face| face.has_edge(from, to))
        .ok_or(TopologyError::EdgeNotFound { from, to })
}

/// Position of `vertex` in `faces[face]`, as a topology error if absent.
pub(crate) fn vertex_position(faces: &[Face], face: usize, vertex: usize) -> Result<usize, TopologyError> {
    faces[face]
        .position(vertex)
        .ok_or(TopologyError::VertexNotInFace { vertex, face })
}

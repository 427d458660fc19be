use crate::error::{OperationError, Result, TopologyError};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::face::{face_with_edge, vertex_position};
use crate::topology::{Face, FaceKind, Volume, BEVEL_TAG};

/// Inflates a volume by pushing every face outward along its normal.
///
/// Each face gets private copies of its vertices, which are displaced with
/// it. The gaps this opens are closed with bevel faces: one quad per edge
/// and one fan per vertex, built from the displaced copies only. Bevel
/// faces carry [`BEVEL_TAG`] and [`FaceKind::Bevel`] and are never
/// displaced themselves.
///
/// The result has `Σ face.len()` vertices and stays a closed manifold.
pub struct Dilate {
    distance: f64,
}

impl Dilate {
    /// Creates a new `Dilate` operation.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Executes the dilation, returning the inflated volume.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` is not finite, or if the volume is not
    /// a closed manifold (an edge without twin, or a vertex whose ring of
    /// faces does not close).
    #[tracing::instrument(skip_all, fields(distance = self.distance, faces = volume.faces().len()))]
    pub fn execute(&self, volume: &Volume) -> Result<Volume> {
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "dilation distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        let faces = volume.faces();
        let (mut vertices, mut new_faces) = duplicate_vertices(volume);

        let mut bevels = edge_skirts(faces, &new_faces)?;
        bevels.extend(vertex_skirts(faces, &new_faces, volume.vertices().len())?);
        tracing::debug!(bevels = bevels.len(), "built skirts");

        for face in &new_faces {
            if face.kind == FaceKind::Bevel {
                continue;
            }
            let displacement = face.normal * self.distance;
            for &ix in &face.indices {
                vertices[ix] += displacement;
            }
        }

        new_faces.extend(bevels);
        Ok(Volume::from_parts_unchecked(vertices, new_faces))
    }
}

/// Gives every face its own copy of each of its vertices.
///
/// `copies[i].indices[j]` is face `i`'s copy of `faces[i].indices[j]`.
fn duplicate_vertices(volume: &Volume) -> (Vec<Point3>, Vec<Face>) {
    let total = volume.faces().iter().map(Face::len).sum();
    let mut vertices = Vec::with_capacity(total);
    let copies = volume
        .faces()
        .iter()
        .map(|face| {
            let indices = face
                .indices
                .iter()
                .map(|&ix| {
                    vertices.push(volume.vertices()[ix]);
                    vertices.len() - 1
                })
                .collect();
            Face::new(indices, face.normal, face.tag, face.kind)
        })
        .collect();
    (vertices, copies)
}

/// One quad per undirected edge, joining the two faces' copies of its ends.
fn edge_skirts(
    faces: &[Face],
    copies: &[Face],
) -> std::result::Result<Vec<Face>, TopologyError> {
    let mut skirts = Vec::new();
    for (fi, face) in faces.iter().enumerate() {
        let n = face.len();
        for j in 0..n {
            let (a, b) = (face.indices[j], face.indices[(j + 1) % n]);
            // The twin edge b -> a is handled from this side only.
            if a >= b {
                continue;
            }
            let twin = face_with_edge(faces, b, a)?;
            let jt = vertex_position(faces, twin, b)?;
            let (mine, theirs) = (&copies[fi].indices, &copies[twin].indices);
            let nt = theirs.len();
            let quad = vec![mine[(j + 1) % n], mine[j], theirs[(jt + 1) % nt], theirs[jt]];
            let normal = blend(face.normal + faces[twin].normal);
            skirts.push(Face::new(quad, normal, BEVEL_TAG, FaceKind::Bevel));
        }
    }
    Ok(skirts)
}

/// One fan per original vertex, through every face's copy of it.
fn vertex_skirts(
    faces: &[Face],
    copies: &[Face],
    vertex_count: usize,
) -> std::result::Result<Vec<Face>, TopologyError> {
    let mut seen = vec![false; vertex_count];
    let mut skirts = Vec::new();
    for (fi, face) in faces.iter().enumerate() {
        let n = face.len();
        for j in 0..n {
            let pivot = face.indices[j];
            if seen[pivot] {
                continue;
            }
            seen[pivot] = true;

            let first = copies[fi].indices[j];
            let mut ring = vec![first];
            let mut normal = face.normal;
            let mut spoke = face.indices[(j + 1) % n];
            loop {
                let next = face_with_edge(faces, spoke, pivot)?;
                let at = vertex_position(faces, next, pivot)?;
                let copy = copies[next].indices[at];
                if copy == first {
                    break;
                }
                if ring.len() > faces.len() {
                    return Err(TopologyError::RingNotClosed { vertex: pivot });
                }
                ring.push(copy);
                normal += faces[next].normal;
                spoke = faces[next].indices[(at + 1) % faces[next].len()];
            }
            ring.reverse();
            skirts.push(Face::new(ring, blend(normal), BEVEL_TAG, FaceKind::Bevel));
        }
    }
    Ok(skirts)
}

/// Normalizes a sum of face normals, or zero if they cancel out.
fn blend(sum: Vector3) -> Vector3 {
    sum.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}

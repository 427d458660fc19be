use crate::error::TopologyError;
use crate::geometry::Side;
use crate::math::Point3;
use crate::topology::face::{face_with_edge, vertex_position};
use crate::topology::Face;

/// Inserts a vertex on the plane into every edge whose ends lie strictly on
/// opposite sides.
///
/// `values[i]` is the signed plane value of `vertices[i]`; both buffers grow
/// together. Each new vertex is spliced into the face being walked and into
/// its twin across the edge, so an edge is split exactly once and the twin
/// no longer reports a crossing when its turn comes.
pub(super) fn add_intersections(
    vertices: &mut Vec<Point3>,
    values: &mut Vec<f64>,
    faces: &mut [Face],
) -> Result<(), TopologyError> {
    for fi in 0..faces.len() {
        let Some(&closing) = faces[fi].indices.last() else {
            continue;
        };
        let mut last = closing;
        let mut i = 0;
        while i < faces[fi].indices.len() {
            let cur = faces[fi].indices[i];
            if crosses(values[last], values[cur]) {
                let (d_last, d_cur) = (values[last], values[cur]);
                let point = Point3::from(
                    (vertices[last].coords * d_cur - vertices[cur].coords * d_last)
                        / (d_cur - d_last),
                );
                let new_ix = vertices.len();
                vertices.push(point);
                // On the plane by construction.
                values.push(0.0);

                let twin = face_with_edge(faces, cur, last)?;
                let at = vertex_position(faces, twin, last)?;
                faces[fi].indices.insert(i, new_ix);
                faces[twin].indices.insert(at, new_ix);
                tracing::trace!(last, cur, new_ix, face = fi, twin, ?point, "split edge");

                // Skip over the vertex just inserted.
                i += 1;
            }
            last = cur;
            i += 1;
        }
    }
    Ok(())
}

fn crosses(a: f64, b: f64) -> bool {
    matches!(
        (Side::of_value(a), Side::of_value(b)),
        (Side::Inside, Side::Outside) | (Side::Outside, Side::Inside)
    )
}

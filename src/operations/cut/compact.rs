use crate::math::Point3;
use crate::topology::{Face, Volume};

/// Builds a volume from `faces`, copying only the vertices they reference.
///
/// Indices are renumbered densely in order of first use through a remap
/// table; no spatial merging takes place.
pub(super) fn take_vertices(source: &[Point3], mut faces: Vec<Face>) -> Volume {
    let mut remap: Vec<Option<usize>> = vec![None; source.len()];
    let mut vertices = Vec::new();
    for face in &mut faces {
        for ix in &mut face.indices {
            let old = *ix;
            *ix = if let Some(new) = remap[old] {
                new
            } else {
                let new = vertices.len();
                vertices.push(source[old]);
                remap[old] = Some(new);
                new
            };
        }
    }
    tracing::trace!(
        kept = vertices.len(),
        of = source.len(),
        "compacted vertices"
    );
    Volume::from_parts_unchecked(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::topology::FaceKind;

    #[test]
    fn renumbers_in_order_of_first_use() {
        let source: Vec<Point3> = (0..6)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();
        let faces = vec![
            Face::new(vec![5, 2, 4], Vector3::z(), 0, FaceKind::Unset),
            Face::new(vec![4, 2, 1], Vector3::z(), 0, FaceKind::Unset),
        ];
        let volume = take_vertices(&source, faces);

        assert_eq!(volume.faces()[0].indices, vec![0, 1, 2]);
        assert_eq!(volume.faces()[1].indices, vec![2, 1, 3]);
        let xs: Vec<f64> = volume.vertices().iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![5.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn no_faces_means_no_vertices() {
        let source = vec![Point3::origin(); 3];
        let volume = take_vertices(&source, Vec::new());
        assert!(volume.is_empty());
        assert!(volume.vertices().is_empty());
    }
}

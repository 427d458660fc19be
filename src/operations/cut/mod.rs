//! Splitting a volume by a plane.
//!
//! The cut runs in four passes over a working copy of the volume:
//!
//! 1. every edge crossing the plane gets a new vertex on the plane, spliced
//!    into both faces sharing the edge ([`intersect`]);
//! 2. each face is filtered into an inside and an outside candidate;
//! 3. the open boundary of the inside candidates is chained into the
//!    section loop(s) closing both halves ([`section`]);
//! 4. each half copies only the vertices it references ([`compact`]).

mod compact;
mod intersect;
mod section;

use crate::error::Result;
use crate::geometry::{Cut, Plane, Side};
use crate::topology::{Face, FaceKind, Tag, Volume};

/// The two halves produced by [`CutVolume`]. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutOutput {
    /// The part with plane value `<= EPSILON`.
    pub inside: Volume,
    /// The part with plane value `>= -EPSILON`.
    pub outside: Volume,
}

/// Cuts a volume into the parts on either side of a plane.
///
/// Both halves receive a new face lying in the plane: the inside one facing
/// along the plane normal, the outside one facing against it. Both carry
/// the cut's tag and kind.
pub struct CutVolume {
    plane: Plane,
    tag: Tag,
    kind: FaceKind,
}

impl CutVolume {
    /// Creates a new `CutVolume` operation producing [`FaceKind::Inner`] faces.
    #[must_use]
    pub fn new(plane: Plane, tag: Tag) -> Self {
        Self {
            plane,
            tag,
            kind: FaceKind::Inner,
        }
    }

    /// Creates the operation described by a [`Cut`].
    #[must_use]
    pub fn from_cut(cut: &Cut) -> Self {
        Self {
            plane: cut.plane,
            tag: cut.tag,
            kind: cut.kind,
        }
    }

    /// Sets the kind given to the section faces.
    #[must_use]
    pub fn with_kind(mut self, kind: FaceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Executes the cut.
    ///
    /// A volume entirely on one side is returned untouched in that half.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is not a closed manifold: a crossing
    /// edge has no twin, or the section cannot be closed.
    #[tracing::instrument(skip_all, fields(tag = self.tag, normal = ?self.plane.normal(), offset = self.plane.offset()))]
    pub fn execute(&self, volume: Volume) -> Result<CutOutput> {
        let plane = &self.plane;
        if volume
            .vertices()
            .iter()
            .all(|v| plane.side(v) != Side::Outside)
        {
            tracing::debug!("keep all");
            return Ok(CutOutput {
                inside: volume,
                outside: Volume::new(),
            });
        }
        if volume
            .vertices()
            .iter()
            .all(|v| plane.side(v) != Side::Inside)
        {
            tracing::debug!("drop all");
            return Ok(CutOutput {
                inside: Volume::new(),
                outside: volume,
            });
        }

        let (mut vertices, mut faces) = volume.into_parts();
        let mut values: Vec<f64> = vertices.iter().map(|v| plane.value(v)).collect();
        intersect::add_intersections(&mut vertices, &mut values, &mut faces)?;

        let (inside_faces, outside_faces) = split_faces(&faces, &values);
        let sections = section::find_sections(&inside_faces, &values)?;
        tracing::debug!(?sections, "section");

        let normal = *plane.normal();
        let mut inside = Vec::with_capacity(sections.len() + inside_faces.len());
        let mut outside = Vec::with_capacity(sections.len() + outside_faces.len());
        for section in sections {
            let reversed = section.iter().rev().copied().collect();
            outside.push(Face::new(reversed, -normal, self.tag, self.kind));
            inside.push(Face::new(section, normal, self.tag, self.kind));
        }
        inside.extend(inside_faces);
        outside.extend(outside_faces);

        Ok(CutOutput {
            inside: compact::take_vertices(&vertices, inside),
            outside: compact::take_vertices(&vertices, outside),
        })
    }
}

/// Filters every face into its inside and outside candidates.
///
/// On-plane vertices go to both. Candidates left with two or fewer vertices
/// only touch the plane and are dropped.
fn split_faces(faces: &[Face], values: &[f64]) -> (Vec<Face>, Vec<Face>) {
    let mut inside = Vec::with_capacity(faces.len());
    let mut outside = Vec::with_capacity(faces.len());
    for face in faces {
        let keep = |excluded: Side| -> Vec<usize> {
            face.indices
                .iter()
                .copied()
                .filter(|&ix| Side::of_value(values[ix]) != excluded)
                .collect()
        };
        let kept_in = keep(Side::Outside);
        let kept_out = keep(Side::Inside);
        if kept_in.len() > 2 {
            inside.push(Face::new(kept_in, face.normal, face.tag, face.kind));
        }
        if kept_out.len() > 2 {
            outside.push(Face::new(kept_out, face.normal, face.tag, face.kind));
        }
    }
    (inside, outside)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3, EPSILON};
    use crate::operations::creation::MakeCube;
    use crate::operations::query::{CheckClosed, EnclosedVolume};
    use approx::assert_relative_eq;

    fn plane(x: f64, y: f64, z: f64, offset: f64) -> Plane {
        Plane::new(Vector3::new(x, y, z), offset).unwrap()
    }

    fn cube() -> Volume {
        MakeCube::new(1.0).execute().unwrap()
    }

    fn section_faces(volume: &Volume, tag: Tag) -> Vec<&Face> {
        volume.faces().iter().filter(|f| f.tag == tag).collect()
    }

    #[test]
    fn symmetric_split_of_cube() {
        let out = cube().cut(plane(1.0, 0.0, 0.0, 0.0), 5).unwrap();

        for (half, sign) in [(&out.inside, -1.0), (&out.outside, 1.0)] {
            assert_eq!(half.vertices().len(), 8);
            assert_eq!(half.faces().len(), 6);
            CheckClosed::new(half).execute().unwrap();

            let sections = section_faces(half, 5);
            assert_eq!(sections.len(), 1);
            let section = sections[0];
            assert_eq!(section.len(), 4);
            assert_relative_eq!(section.normal, Vector3::new(-sign, 0.0, 0.0));
            for &ix in &section.indices {
                let v = half.vertices()[ix];
                assert!(v.x.abs() < EPSILON);
                assert_relative_eq!(v.y.abs(), 1.0);
                assert_relative_eq!(v.z.abs(), 1.0);
            }
            assert_relative_eq!(EnclosedVolume::new(half).execute(), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn section_faces_mirror_each_other() {
        let out = cube().cut(plane(1.0, 2.0, 3.0, 0.2), 1).unwrap();
        let a = section_faces(&out.inside, 1)[0];
        let b = section_faces(&out.outside, 1)[0];
        let pa: Vec<Point3> = a.indices.iter().map(|&i| out.inside.vertices()[i]).collect();
        let mut pb: Vec<Point3> = b.indices.iter().map(|&i| out.outside.vertices()[i]).collect();
        pb.reverse();
        assert_eq!(pa.len(), pb.len());
        let shift = pb.iter().position(|q| *q == pa[0]).unwrap();
        pb.rotate_left(shift);
        assert_eq!(pa, pb);
    }

    #[test]
    fn plane_missing_solid_leaves_it_untouched() {
        let original = cube();
        let out = original.clone().cut(plane(1.0, 0.0, 0.0, 5.0), 1).unwrap();
        assert!(out.outside.is_empty());
        assert_eq!(out.inside, original);
    }

    #[test]
    fn plane_behind_solid_moves_it_outside() {
        let original = cube();
        let out = original.clone().cut(plane(1.0, 0.0, 0.0, -5.0), 1).unwrap();
        assert!(out.inside.is_empty());
        assert_eq!(out.outside, original);
    }

    #[test]
    fn plane_touching_face_is_a_miss() {
        let out = cube().cut(plane(0.0, 0.0, 1.0, 1.0), 1).unwrap();
        assert!(out.outside.is_empty());
        assert_eq!(out.inside.faces().len(), 6);
    }

    #[test]
    fn cut_through_edges_makes_prisms() {
        let out = cube().cut(plane(1.0, 1.0, 0.0, 0.0), 2).unwrap();
        for half in [&out.inside, &out.outside] {
            assert_eq!(half.vertices().len(), 6);
            assert_eq!(half.faces().len(), 5);
            CheckClosed::new(half).execute().unwrap();
            assert_relative_eq!(EnclosedVolume::new(half).execute(), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn corner_cut_makes_triangle_section() {
        let out = cube().cut(plane(1.0, 1.0, 1.0, 2.0), 3).unwrap();
        let corner = &out.outside;
        CheckClosed::new(corner).execute().unwrap();
        CheckClosed::new(&out.inside).execute().unwrap();
        assert_eq!(corner.vertices().len(), 4);
        assert_eq!(corner.faces().len(), 4);
        assert_eq!(section_faces(corner, 3)[0].len(), 3);
        assert_eq!(out.inside.faces().len(), 7);
        assert_relative_eq!(EnclosedVolume::new(corner).execute(), 1.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn only_section_faces_receive_tag() {
        let out = cube().cut(plane(0.3, -1.0, 0.5, 0.1), 9).unwrap();
        for half in [&out.inside, &out.outside] {
            let tagged = section_faces(half, 9);
            assert_eq!(tagged.len(), 1);
            assert_eq!(tagged[0].kind, FaceKind::Inner);
            assert!(half
                .faces()
                .iter()
                .filter(|f| f.tag != 9)
                .all(|f| f.tag == 0 && f.kind == FaceKind::Outer));
        }
    }

    #[test]
    fn with_kind_sets_section_kind() {
        let out = CutVolume::new(plane(0.0, 1.0, 0.0, 0.0), 4)
            .with_kind(FaceKind::Outer)
            .execute(cube())
            .unwrap();
        assert_eq!(section_faces(&out.inside, 4)[0].kind, FaceKind::Outer);
    }

    #[test]
    fn volumes_add_up_after_oblique_cut() {
        let out = cube().cut(plane(0.2, 0.7, -0.4, 0.3), 1).unwrap();
        let total = EnclosedVolume::new(&out.inside).execute()
            + EnclosedVolume::new(&out.outside).execute();
        assert_relative_eq!(total, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn repeated_cuts_stay_closed() {
        let mut volume = cube();
        for (i, n) in [
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(-1.0, 1.0, 1.0),
        ]
        .into_iter()
        .enumerate()
        {
            let tag = Tag::try_from(i).unwrap() + 1;
            volume = volume.cut(Plane::new(n, 0.8).unwrap(), tag).unwrap().inside;
            CheckClosed::new(&volume).execute().unwrap();
        }
        assert!(EnclosedVolume::new(&volume).execute() < 8.0);
    }

    #[test]
    fn open_surface_is_rejected() {
        let cube = cube();
        let (vertices, mut faces) = cube.into_parts();
        faces.pop();
        let open = Volume::from_parts(vertices, faces).unwrap();
        assert!(open.cut(plane(1.0, 0.0, 0.0, 0.0), 1).is_err());
    }

    #[test]
    fn empty_volume_stays_empty() {
        let out = Volume::new().cut(plane(1.0, 0.0, 0.0, 0.0), 1).unwrap();
        assert!(out.inside.is_empty());
        assert!(out.outside.is_empty());
    }
}

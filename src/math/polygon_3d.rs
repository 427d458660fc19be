use super::{Point3, Vector3};

/// Computes the centroid (vertex average) of a set of points.
///
/// Returns the origin for an empty slice.
#[must_use]
pub fn vertex_centroid(points: &[Point3]) -> Point3 {
    let n = points.len();
    if n == 0 {
        return Point3::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / n as f64;
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum * inv_n)
}

/// Newell normal of a polygon, pointing along its winding by the right-hand rule.
///
/// Not normalized; the length is twice the polygon area, so a square of
/// side `s` gives length `2 s²`.
#[must_use]
pub fn winding_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

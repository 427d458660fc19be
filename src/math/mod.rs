pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Band around a cutting plane inside which a point counts as lying on it.
///
/// Absorbs the rounding of intersection points produced by earlier cuts.
/// Every cut applied to the same solid must see the same value.
pub const EPSILON: f64 = 1e-3;

/// Threshold below which a vector length is treated as zero.
pub const TOLERANCE: f64 = 1e-10;

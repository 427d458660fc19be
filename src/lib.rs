//! Plane-cutting kernel for convex polyhedra.
//!
//! A [`Mould`] starts as a single closed [`Volume`] and is carved into pieces
//! by repeated plane cuts. Pieces can be shrunk with [`Volume::erode`],
//! inflated with bevel skirts by [`Volume::dilate`], and turned into triangle
//! meshes for rendering.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{MouldError, Result};
pub use geometry::{Cut, Plane, Side};
pub use topology::{Face, FaceKind, Mould, PieceId, Tag, Volume, BEVEL_TAG};

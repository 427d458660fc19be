mod make_cube;
mod make_shape;

pub use make_cube::MakeCube;
pub use make_shape::MakeShape;

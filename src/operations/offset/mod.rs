mod bevel;
mod dilate;
mod erode;

pub use bevel::Bevel;
pub use dilate::Dilate;
pub use erode::Erode;

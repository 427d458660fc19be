pub mod face;
pub mod mould;
pub mod volume;

pub use face::{Face, FaceKind, Tag, BEVEL_TAG};
pub use mould::{Mould, PieceId};
pub use volume::Volume;

pub mod cut;
pub mod plane;

pub use cut::Cut;
pub use plane::{Plane, Side};

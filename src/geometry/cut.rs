use crate::topology::{FaceKind, Tag};

use super::Plane;

/// A reusable cut descriptor: a plane plus the tag stamped on the faces it creates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    /// The cutting plane.
    pub plane: Plane,
    /// Tag given to the section faces.
    pub tag: Tag,
    /// Kind given to the section faces.
    pub kind: FaceKind,
}

impl Cut {
    /// Creates a cut whose section faces are [`FaceKind::Inner`].
    #[must_use]
    pub fn new(plane: Plane, tag: Tag) -> Self {
        Self {
            plane,
            tag,
            kind: FaceKind::Inner,
        }
    }

    /// Sets the kind given to the section faces.
    #[must_use]
    pub fn with_kind(mut self, kind: FaceKind) -> Self {
        self.kind = kind;
        self
    }
}

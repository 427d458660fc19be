use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::{Cut, Plane};
use crate::operations::cut::{CutOutput, CutVolume};

use super::face::Tag;
use super::volume::Volume;

slotmap::new_key_type! {
    /// Stable handle for a piece held by a [`Mould`].
    pub struct PieceId;
}

/// A solid partitioned into disjoint pieces by a sequence of cuts.
///
/// Pieces are never removed, so iteration follows insertion order. A piece
/// that a cut leaves on one side keeps its id; a piece that a cut splits
/// keeps its id for the inside half and the outside half gets a new one.
#[derive(Debug, Clone, Default)]
pub struct Mould {
    pieces: SlotMap<PieceId, Volume>,
}

impl Mould {
    /// Creates a mould holding a single seed volume.
    #[must_use]
    pub fn new(seed: Volume) -> Self {
        let mut pieces = SlotMap::with_key();
        pieces.insert(seed);
        Self { pieces }
    }

    /// Cuts every piece by `plane`, tagging new section faces with `tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if any piece is not a closed manifold. The mould is
    /// left in an unspecified state.
    pub fn cut(&mut self, plane: Plane, tag: Tag) -> Result<()> {
        self.apply(&Cut::new(plane, tag))
    }

    /// Cuts every piece by a prepared [`Cut`].
    ///
    /// # Errors
    ///
    /// Returns an error if any piece is not a closed manifold.
    #[tracing::instrument(skip_all, fields(tag = cut.tag, pieces = self.pieces.len()))]
    pub fn apply(&mut self, cut: &Cut) -> Result<()> {
        let op = CutVolume::from_cut(cut);
        let ids: Vec<PieceId> = self.pieces.keys().collect();
        let mut split_off = Vec::new();

        for id in ids {
            let Some(slot) = self.pieces.get_mut(id) else {
                continue;
            };
            let CutOutput { inside, outside } = op.execute(std::mem::take(slot))?;
            if inside.is_empty() {
                *slot = outside;
            } else {
                *slot = inside;
                if !outside.is_empty() {
                    split_off.push(outside);
                }
            }
        }

        for volume in split_off {
            self.pieces.insert(volume);
        }
        tracing::debug!(pieces = self.pieces.len(), "mould cut done");
        Ok(())
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if the mould holds no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Looks up a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Volume> {
        self.pieces.get(id)
    }

    /// Pieces in order.
    pub fn volumes(&self) -> impl Iterator<Item = &Volume> {
        self.pieces.values()
    }

    /// Mutable access to the pieces in order, e.g. to bevel them for rendering.
    pub fn volumes_mut(&mut self) -> impl Iterator<Item = &mut Volume> {
        self.pieces.values_mut()
    }

    /// Pieces in order, with their ids.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Volume)> {
        self.pieces.iter()
    }

    /// Consumes the mould, returning the pieces in order.
    #[must_use]
    pub fn into_volumes(self) -> Vec<Volume> {
        self.pieces.into_iter().map(|(_, volume)| volume).collect()
    }
}

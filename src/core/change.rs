//! Heap identifiers and the moves that reference them.

use crate::core::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a heap on the board.
///
/// Ids are 1-based, matching how players talk about the board: the first
/// heap is `HeapId(1)`. Conversion to a storage index happens in exactly
/// one place, [`HeapId::to_index`], so off-by-one arithmetic never leaks
/// into the rest of the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeapId(pub u8);

impl HeapId {
    /// Create a new heap id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw 1-based id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Convert to a 0-based storage index, if this id is on the board.
    ///
    /// ```
    /// use nim_engine::core::HeapId;
    ///
    /// assert_eq!(HeapId::new(1).to_index(3), Some(0));
    /// assert_eq!(HeapId::new(3).to_index(3), Some(2));
    /// assert_eq!(HeapId::new(0).to_index(3), None);
    /// assert_eq!(HeapId::new(4).to_index(3), None);
    /// ```
    #[must_use]
    pub const fn to_index(self, heap_count: usize) -> Option<usize> {
        let id = self.0 as usize;
        if id >= 1 && id <= heap_count {
            Some(id - 1)
        } else {
            None
        }
    }

    /// Iterate over every id on a board of the given size, in order.
    pub fn all(heap_count: usize) -> impl Iterator<Item = HeapId> {
        (1..=heap_count as u8).map(HeapId)
    }
}

impl fmt::Display for HeapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heap {}", self.0)
    }
}

/// A requested move: remove `decrease` stones from the heap `heap_id`.
///
/// A change is plain data. It carries no proof of legality; the board
/// validates it on application and rejects it without side effects when
/// it does not fit the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateChange {
    /// Which heap to take from.
    pub heap_id: HeapId,
    /// How many stones to remove. Must be at least 1.
    pub decrease: u32,
}

impl StateChange {
    /// Create a new change.
    #[must_use]
    pub const fn new(heap_id: HeapId, decrease: u32) -> Self {
        Self { heap_id, decrease }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from {}", self.decrease, self.heap_id)
    }
}

/// One accepted move, as remembered by a session's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Who made the move.
    pub player: Player,
    /// The move itself.
    pub change: StateChange,
    /// Turn number the move was played on, starting at 1.
    pub turn: u32,
}

impl ChangeRecord {
    /// Create a new record.
    #[must_use]
    pub const fn new(player: Player, change: StateChange, turn: u32) -> Self {
        Self {
            player,
            change,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_index_bounds() {
        assert_eq!(HeapId::new(1).to_index(5), Some(0));
        assert_eq!(HeapId::new(5).to_index(5), Some(4));
        assert_eq!(HeapId::new(6).to_index(5), None);
        assert_eq!(HeapId::new(0).to_index(5), None);
    }

    #[test]
    fn test_all_ids_in_order() {
        let ids: Vec<_> = HeapId::all(3).collect();
        assert_eq!(ids, vec![HeapId::new(1), HeapId::new(2), HeapId::new(3)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(HeapId::new(2).to_string(), "Heap 2");
        let change = StateChange::new(HeapId::new(2), 3);
        assert_eq!(change.to_string(), "take 3 from Heap 2");
    }

    #[test]
    fn test_change_serialization() {
        let change = StateChange::new(HeapId::new(4), 7);
        let json = serde_json::to_string(&change).unwrap();
        let back: StateChange = serde_json::from_str(&json).unwrap();
        assert_eq!(change, back);
    }

    #[test]
    fn test_record_serialization() {
        let record = ChangeRecord::new(Player::Two, StateChange::new(HeapId::new(1), 2), 6);
        let json = serde_json::to_string(&record).unwrap();
        let back: ChangeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

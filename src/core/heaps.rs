//! The board itself: a row of heaps and the one mutation path through it.

use crate::core::{GameRng, HeapId, NimError, StateChange};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Smallest board the rules allow.
pub const MIN_HEAPS: usize = 2;
/// Largest board the rules allow.
pub const MAX_HEAPS: usize = 10;
/// Fewest stones a heap may start with.
pub const MIN_STONES: u32 = 1;
/// Most stones a heap may start with.
pub const MAX_STONES: u32 = 10;

/// The heaps of a Nim position.
///
/// ## Key Features
///
/// - **Validated construction**: Boards only exist with 2 to 10 heaps,
///   every heap starting with 1 to 10 stones
/// - **Snapshot access**: Readers get owned copies, never references into
///   the internal storage
/// - **Atomic mutation**: [`HeapState::apply_change`] either fully applies
///   a legal move or rejects it leaving the position untouched
///
/// The board does not referee. It knows nothing about turns, players, or
/// winning; it only guards its own shape. Game flow lives in
/// [`GameSession`](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapState {
    heaps: SmallVec<[u32; MAX_HEAPS]>,
}

impl HeapState {
    /// Create a board of `heap_count` heaps, each seeded from OS entropy.
    ///
    /// Every heap starts with a uniform random stone count in 1 to 10.
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::HeapCountOutOfRange`] unless `2 <= heap_count <= 10`.
    pub fn new(heap_count: usize) -> Result<Self, NimError> {
        Self::with_rng(heap_count, &mut GameRng::from_entropy())
    }

    /// Create a board of `heap_count` heaps drawn from the given RNG.
    ///
    /// ```
    /// use nim_engine::core::{GameRng, HeapState};
    ///
    /// let mut rng = GameRng::new(42);
    /// let state = HeapState::with_rng(4, &mut rng).unwrap();
    ///
    /// assert_eq!(state.heap_count(), 4);
    /// assert!(state.snapshot().iter().all(|&stones| (1..=10).contains(&stones)));
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::HeapCountOutOfRange`] unless `2 <= heap_count <= 10`.
    pub fn with_rng(heap_count: usize, rng: &mut GameRng) -> Result<Self, NimError> {
        if !(MIN_HEAPS..=MAX_HEAPS).contains(&heap_count) {
            return Err(NimError::HeapCountOutOfRange { heap_count });
        }

        let heaps = (0..heap_count)
            .map(|_| rng.gen_range(MIN_STONES..=MAX_STONES))
            .collect();

        Ok(Self { heaps })
    }

    /// Create a board from an explicit starting position.
    ///
    /// The position must satisfy the same rules as a generated one: 2 to 10
    /// heaps, each holding 1 to 10 stones. Mid-game positions with empty
    /// heaps cannot be constructed directly; they are only reached by
    /// applying moves.
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::HeapCountOutOfRange`] or
    /// [`NimError::StartingStonesOutOfRange`] when the position is invalid.
    pub fn from_heaps(heaps: &[u32]) -> Result<Self, NimError> {
        if !(MIN_HEAPS..=MAX_HEAPS).contains(&heaps.len()) {
            return Err(NimError::HeapCountOutOfRange {
                heap_count: heaps.len(),
            });
        }

        for (heap_id, &stones) in HeapId::all(heaps.len()).zip(heaps) {
            if !(MIN_STONES..=MAX_STONES).contains(&stones) {
                return Err(NimError::StartingStonesOutOfRange { heap_id, stones });
            }
        }

        Ok(Self {
            heaps: SmallVec::from_slice(heaps),
        })
    }

    /// Number of heaps on the board. Fixed for the board's lifetime.
    #[must_use]
    pub fn heap_count(&self) -> usize {
        self.heaps.len()
    }

    /// An owned copy of the current stone counts, in heap id order.
    ///
    /// Mutating the returned vector has no effect on the board, and later
    /// moves have no effect on the returned vector.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u32> {
        self.heaps.to_vec()
    }

    /// Apply a move to the board.
    ///
    /// On success the named heap shrinks by exactly `change.decrease` and
    /// every other heap is untouched. On failure nothing changes at all.
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::UnknownHeap`] when `change.heap_id` is not on the
    /// board, and [`NimError::InvalidDecrease`] when the decrease is zero or
    /// exceeds the stones the heap holds.
    pub fn apply_change(&mut self, change: StateChange) -> Result<(), NimError> {
        let index = change
            .heap_id
            .to_index(self.heaps.len())
            .ok_or(NimError::UnknownHeap {
                heap_id: change.heap_id,
                heap_count: self.heaps.len(),
            })?;

        let available = self.heaps[index];
        if change.decrease == 0 || change.decrease > available {
            return Err(NimError::InvalidDecrease {
                heap_id: change.heap_id,
                decrease: change.decrease,
                available,
            });
        }

        self.heaps[index] -= change.decrease;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_respects_bounds() {
        let state = HeapState::new(5).unwrap();
        assert_eq!(state.heap_count(), 5);
        for stones in state.snapshot() {
            assert!((MIN_STONES..=MAX_STONES).contains(&stones));
        }
    }

    #[test]
    fn test_rejects_bad_heap_counts() {
        for heap_count in [0, 1, 11, 100] {
            assert_eq!(
                HeapState::new(heap_count),
                Err(NimError::HeapCountOutOfRange { heap_count })
            );
        }
    }

    #[test]
    fn test_seeded_boards_are_reproducible() {
        let board1 = HeapState::with_rng(10, &mut GameRng::new(42)).unwrap();
        let board2 = HeapState::with_rng(10, &mut GameRng::new(42)).unwrap();
        assert_eq!(board1.snapshot(), board2.snapshot());

        let board3 = HeapState::with_rng(10, &mut GameRng::new(43)).unwrap();
        assert_ne!(board1.snapshot(), board3.snapshot());
    }

    #[test]
    fn test_from_heaps_accepts_valid_positions() {
        let state = HeapState::from_heaps(&[5, 3]).unwrap();
        assert_eq!(state.snapshot(), vec![5, 3]);
        assert_eq!(state.heap_count(), 2);
    }

    #[test]
    fn test_from_heaps_rejects_bad_positions() {
        assert_eq!(
            HeapState::from_heaps(&[5]),
            Err(NimError::HeapCountOutOfRange { heap_count: 1 })
        );
        assert_eq!(
            HeapState::from_heaps(&[5, 0]),
            Err(NimError::StartingStonesOutOfRange {
                heap_id: HeapId::new(2),
                stones: 0,
            })
        );
        assert_eq!(
            HeapState::from_heaps(&[5, 11, 3]),
            Err(NimError::StartingStonesOutOfRange {
                heap_id: HeapId::new(2),
                stones: 11,
            })
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let state = HeapState::from_heaps(&[5, 3]).unwrap();

        let mut copy = state.snapshot();
        copy[0] = 999;
        assert_eq!(state.snapshot(), vec![5, 3]);
    }

    #[test]
    fn test_snapshot_survives_later_moves() {
        let mut state = HeapState::from_heaps(&[5, 3]).unwrap();

        let before = state.snapshot();
        state
            .apply_change(StateChange::new(HeapId::new(1), 2))
            .unwrap();

        assert_eq!(before, vec![5, 3]);
        assert_eq!(state.snapshot(), vec![3, 3]);
    }

    #[test]
    fn test_apply_change_shrinks_one_heap() {
        let mut state = HeapState::from_heaps(&[5, 3, 7]).unwrap();

        state
            .apply_change(StateChange::new(HeapId::new(2), 3))
            .unwrap();
        assert_eq!(state.snapshot(), vec![5, 0, 7]);
    }

    #[test]
    fn test_heap_can_be_emptied_exactly() {
        let mut state = HeapState::from_heaps(&[1, 1]).unwrap();

        state
            .apply_change(StateChange::new(HeapId::new(1), 1))
            .unwrap();
        state
            .apply_change(StateChange::new(HeapId::new(2), 1))
            .unwrap();
        assert_eq!(state.snapshot(), vec![0, 0]);
    }

    #[test]
    fn test_rejects_unknown_heap() {
        let mut state = HeapState::from_heaps(&[4, 1]).unwrap();

        for bad_id in [0, 3, 200] {
            assert_eq!(
                state.apply_change(StateChange::new(HeapId::new(bad_id), 1)),
                Err(NimError::UnknownHeap {
                    heap_id: HeapId::new(bad_id),
                    heap_count: 2,
                })
            );
        }
        assert_eq!(state.snapshot(), vec![4, 1]);
    }

    #[test]
    fn test_rejects_bad_decrease() {
        let mut state = HeapState::from_heaps(&[5, 3]).unwrap();

        assert_eq!(
            state.apply_change(StateChange::new(HeapId::new(2), 0)),
            Err(NimError::InvalidDecrease {
                heap_id: HeapId::new(2),
                decrease: 0,
                available: 3,
            })
        );
        assert_eq!(
            state.apply_change(StateChange::new(HeapId::new(2), 4)),
            Err(NimError::InvalidDecrease {
                heap_id: HeapId::new(2),
                decrease: 4,
                available: 3,
            })
        );
        assert_eq!(state.snapshot(), vec![5, 3]);
    }

    #[test]
    fn test_rejects_decrease_from_empty_heap() {
        let mut state = HeapState::from_heaps(&[1, 2]).unwrap();
        state
            .apply_change(StateChange::new(HeapId::new(1), 1))
            .unwrap();

        assert_eq!(
            state.apply_change(StateChange::new(HeapId::new(1), 1)),
            Err(NimError::InvalidDecrease {
                heap_id: HeapId::new(1),
                decrease: 1,
                available: 0,
            })
        );
        assert_eq!(state.snapshot(), vec![0, 2]);
    }

    #[test]
    fn test_rejected_change_leaves_board_untouched() {
        let mut state = HeapState::from_heaps(&[5, 3]).unwrap();
        let before = state.snapshot();

        let _ = state.apply_change(StateChange::new(HeapId::new(2), 4));
        assert_eq!(state.snapshot(), before);

        // A failed call must not poison later valid ones.
        state
            .apply_change(StateChange::new(HeapId::new(2), 3))
            .unwrap();
        assert_eq!(state.snapshot(), vec![5, 0]);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let state = HeapState::from_heaps(&[5, 3, 7]).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: HeapState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}

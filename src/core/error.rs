//! Error type shared across the crate.

use crate::core::HeapId;
use thiserror::Error;

/// The single error type returned by every fallible operation.
///
/// All variants describe an invalid argument or an out-of-order request.
/// None of them is fatal: the state that rejected the request is left
/// untouched, so the caller can correct the input and retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NimError {
    /// Requested heap count falls outside the supported board sizes.
    #[error("heap count {heap_count} is out of range, expected 2 to 10 heaps")]
    HeapCountOutOfRange {
        /// The rejected count.
        heap_count: usize,
    },

    /// A supplied starting position contains a heap outside 1 to 10 stones.
    #[error("{heap_id} cannot start with {stones} stones, expected 1 to 10")]
    StartingStonesOutOfRange {
        /// Which heap carried the bad value.
        heap_id: HeapId,
        /// The rejected stone count.
        stones: u32,
    },

    /// A change named a heap id outside the board.
    #[error("{heap_id} does not exist, heap ids range from 1 to {heap_count}")]
    UnknownHeap {
        /// The rejected id.
        heap_id: HeapId,
        /// How many heaps the board actually has.
        heap_count: usize,
    },

    /// A change asked for zero stones or more stones than the heap holds.
    #[error("cannot remove {decrease} stones from {heap_id} holding {available}")]
    InvalidDecrease {
        /// The targeted heap.
        heap_id: HeapId,
        /// The rejected amount.
        decrease: u32,
        /// How many stones that heap currently holds.
        available: u32,
    },

    /// A move arrived after the session already produced a winner.
    #[error("the game is over, no further moves are accepted")]
    GameOver,
}

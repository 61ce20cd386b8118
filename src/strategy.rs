//! Move selection for automated players.
//!
//! Strategies are stateless: they look at a position snapshot and pick a
//! move, drawing any randomness from a [`GameRng`] handed in by the caller.
//! That keeps play reproducible end to end when the session is seeded.

use crate::core::{GameRng, HeapId, StateChange, MAX_HEAPS};
use smallvec::SmallVec;

// =============================================================================
// Strategy Trait
// =============================================================================

/// A way of choosing the next move from a position.
pub trait Strategy {
    /// Pick a move for the given position.
    ///
    /// `heaps` is a snapshot in heap id order and may contain emptied heaps.
    /// Returns `None` when no legal move exists, which only happens on an
    /// all-empty board.
    fn choose_change(&self, heaps: &[u32], rng: &mut GameRng) -> Option<StateChange>;
}

// =============================================================================
// Random Play
// =============================================================================

/// Picks a uniform random legal move.
///
/// A uniform random heap among the non-empty ones, then a uniform random
/// decrease from that heap. Useful as a baseline opponent and as the
/// fallback when no winning move exists.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_change(&self, heaps: &[u32], rng: &mut GameRng) -> Option<StateChange> {
        let candidates: SmallVec<[(HeapId, u32); MAX_HEAPS]> = HeapId::all(heaps.len())
            .zip(heaps.iter().copied())
            .filter(|&(_, stones)| stones > 0)
            .collect();

        let &(heap_id, stones) = rng.choose(&candidates)?;
        Some(StateChange::new(heap_id, rng.gen_range(1..=stones)))
    }
}

// =============================================================================
// Perfect Play
// =============================================================================

/// Plays perfectly using the nim-sum rule.
///
/// From a position with nonzero nim-sum there is always a move that leaves
/// the opponent on a zero nim-sum, and the player holding the zero positions
/// wins with correct play. When the position is already lost the strategy
/// falls back to a random move and waits for a mistake.
#[derive(Clone, Debug, Default)]
pub struct OptimalStrategy;

impl Strategy for OptimalStrategy {
    fn choose_change(&self, heaps: &[u32], rng: &mut GameRng) -> Option<StateChange> {
        let nim_sum = nim_sum(heaps);

        if nim_sum != 0 {
            // At least one heap satisfies stones ^ nim_sum < stones whenever
            // the nim-sum is nonzero: the one carrying its highest set bit.
            for (heap_id, stones) in HeapId::all(heaps.len()).zip(heaps.iter().copied()) {
                let target = stones ^ nim_sum;
                if target < stones {
                    return Some(StateChange::new(heap_id, stones - target));
                }
            }
        }

        RandomStrategy.choose_change(heaps, rng)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// The xor of all stone counts.
///
/// A position is losing for the player to move exactly when this is zero.
///
/// ```
/// use nim_engine::strategy::nim_sum;
///
/// assert_eq!(nim_sum(&[3, 4, 5]), 2);
/// assert_eq!(nim_sum(&[1, 2, 3]), 0);
/// ```
#[must_use]
pub fn nim_sum(heaps: &[u32]) -> u32 {
    heaps.iter().fold(0, |acc, &stones| acc ^ stones)
}

//! # nim-engine
//!
//! An engine for the game of Nim: heaps of stones are set up at random and
//! players alternate removing stones from a single heap until the board is
//! empty.
//!
//! ## Design Principles
//!
//! 1. **One guarded mutation path**: every change to the board flows through
//!    `HeapState::apply_change`, which validates the full move before touching
//!    anything. A rejected move leaves the board bit-for-bit unchanged.
//!
//! 2. **No hidden randomness**: the board is initialized through an explicit
//!    [`GameRng`]. Production code can default to OS entropy; tests inject a
//!    seed and get identical boards every run.
//!
//! 3. **Snapshots, not views**: reads return owned copies of the heap vector.
//!    Nothing a caller receives aliases the internal storage.
//!
//! 4. **The board does not referee**: `HeapState` never decides whose turn it
//!    is or who won. Turn order and win detection live in [`GameSession`],
//!    which drives the board purely through its public API.
//!
//! ## Modules
//!
//! - `core`: heap state, moves, RNG, errors, player identifiers
//! - `session`: two-player turn orchestration and win detection
//! - `strategy`: move selection (uniform random and perfect play)

pub mod core;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ChangeRecord, GameRng, HeapId, HeapState, NimError, Player, StateChange,
    MAX_HEAPS, MAX_STONES, MIN_HEAPS, MIN_STONES,
};

pub use crate::session::{GameSession, SessionBuilder};

pub use crate::strategy::{nim_sum, OptimalStrategy, RandomStrategy, Strategy};

//! Core types: heap state, moves, RNG, errors, players.
//!
//! Everything in this module is a plain synchronous value type. The heap
//! container validates its own inputs and signals every violation through
//! [`NimError`]; it never clamps, defaults, or panics on bad arguments.

pub mod change;
pub mod error;
pub mod heaps;
pub mod player;
pub mod rng;

pub use change::{ChangeRecord, HeapId, StateChange};
pub use error::NimError;
pub use heaps::{HeapState, MAX_HEAPS, MAX_STONES, MIN_HEAPS, MIN_STONES};
pub use player::Player;
pub use rng::GameRng;

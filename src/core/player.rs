//! The two seats at the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players in a game of Nim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves first by default.
    One,
    /// The other player.
    Two,
}

impl Player {
    /// The player sitting across the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "Player 1"),
            Self::Two => write!(f, "Player 2"),
        }
    }
}

//! Turn orchestration on top of the board.
//!
//! A [`GameSession`] owns a [`HeapState`] plus everything the board itself
//! refuses to know: whose turn it is, how many turns have passed, which
//! moves were accepted, and who won. Sessions are built through
//! [`SessionBuilder`].
//!
//! ## Usage
//!
//! ```
//! use nim_engine::{GameSession, HeapId, Player, StateChange};
//!
//! let mut session = GameSession::builder()
//!     .heaps(&[2, 1])
//!     .build()
//!     .unwrap();
//!
//! // Player 1 empties the first heap, Player 2 takes the last stone.
//! session.play(StateChange::new(HeapId::new(1), 2)).unwrap();
//! session.play(StateChange::new(HeapId::new(2), 1)).unwrap();
//!
//! assert!(session.is_over());
//! assert_eq!(session.winner(), Some(Player::Two));
//! ```

use crate::core::{
    ChangeRecord, GameRng, HeapState, NimError, Player, StateChange, MIN_HEAPS,
};

/// Builder for [`GameSession`].
///
/// The starting position comes from exactly one of three sources, in
/// precedence order: an explicit position set with [`SessionBuilder::heaps`],
/// a seeded random board from [`SessionBuilder::seed`], or an entropy-seeded
/// random board when neither is given.
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    heap_count: usize,
    seed: Option<u64>,
    heaps: Option<Vec<u32>>,
    first_to_move: Player,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            heap_count: MIN_HEAPS,
            seed: None,
            heaps: None,
            first_to_move: Player::One,
        }
    }
}

impl SessionBuilder {
    /// Create a builder with the defaults: two heaps, entropy seeding,
    /// Player 1 to move first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many heaps the generated board has.
    ///
    /// Ignored when an explicit position is set with [`SessionBuilder::heaps`].
    #[must_use]
    pub fn heap_count(mut self, heap_count: usize) -> Self {
        self.heap_count = heap_count;
        self
    }

    /// Seed the board generation, making the starting position reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an explicit starting position instead of a generated one.
    #[must_use]
    pub fn heaps(mut self, heaps: &[u32]) -> Self {
        self.heaps = Some(heaps.to_vec());
        self
    }

    /// Choose who moves first.
    #[must_use]
    pub fn first_to_move(mut self, player: Player) -> Self {
        self.first_to_move = player;
        self
    }

    /// Build the session.
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::HeapCountOutOfRange`] or
    /// [`NimError::StartingStonesOutOfRange`] when the requested board is
    /// invalid.
    pub fn build(self) -> Result<GameSession, NimError> {
        let state = match (self.heaps, self.seed) {
            (Some(heaps), _) => HeapState::from_heaps(&heaps)?,
            (None, Some(seed)) => HeapState::with_rng(self.heap_count, &mut GameRng::new(seed))?,
            (None, None) => HeapState::new(self.heap_count)?,
        };

        Ok(GameSession {
            state,
            to_move: self.first_to_move,
            winner: None,
            turn_number: 1,
            history: Vec::new(),
        })
    }
}

/// A running game of Nim between two players.
///
/// ## Key Features
///
/// - **Turn tracking**: Accepted moves alternate between the players;
///   rejected moves do not pass the turn
/// - **Win detection**: The player who takes the last stone wins, and the
///   session refuses moves afterwards
/// - **History**: Every accepted move is recorded with its player and turn
#[derive(Clone, Debug)]
pub struct GameSession {
    state: HeapState,
    to_move: Player,
    winner: Option<Player>,
    turn_number: u32,
    history: Vec<ChangeRecord>,
}

impl GameSession {
    /// Start building a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The board as it currently stands.
    #[must_use]
    pub fn state(&self) -> &HeapState {
        &self.state
    }

    /// Whose turn it is. Stops advancing once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The turn about to be played, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every accepted move so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChangeRecord] {
        &self.history
    }

    /// Play a move for the player whose turn it is.
    ///
    /// On success the move is recorded and the turn passes to the opponent,
    /// unless the move emptied the board, in which case the mover is declared
    /// the winner. A rejected move changes nothing: no stones, no turn, no
    /// history entry.
    ///
    /// ## Errors
    ///
    /// Returns [`NimError::GameOver`] once a winner exists, and otherwise
    /// forwards the board's verdict on the move itself.
    pub fn play(&mut self, change: StateChange) -> Result<(), NimError> {
        if self.winner.is_some() {
            return Err(NimError::GameOver);
        }

        self.state.apply_change(change)?;
        self.history
            .push(ChangeRecord::new(self.to_move, change, self.turn_number));

        if self.state.snapshot().iter().all(|&stones| stones == 0) {
            self.winner = Some(self.to_move);
        } else {
            self.to_move = self.to_move.opponent();
            self.turn_number += 1;
        }

        Ok(())
    }
}

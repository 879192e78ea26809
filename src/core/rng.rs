//! Random hand generation.
//!
//! ## Key Features
//!
//! - **Uniform**: Every hand is equally likely
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Replaceable**: The engine only needs a `HandSource`, so tests can
//!   script the computer's hands exactly
//!
//! ```
//! use hand_game::core::{GameRng, HandSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.next_hand(), rng2.next_hand());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::hand::Hand;

/// Supplier of the computer's hands.
///
/// Implementations never fail.
pub trait HandSource {
    /// Draw the next hand.
    fn next_hand(&mut self) -> Hand;
}

/// Seedable RNG drawing hands uniformly at random.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl<F: FnMut() -> Hand> HandSource for F {
    fn next_hand(&mut self) -> Hand {
        self()
    }
}

impl HandSource for GameRng {
    fn next_hand(&mut self) -> Hand {
        Hand::ALL[self.inner.gen_range(0..Hand::ALL.len())]
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// hands have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fixed sequence of hands, repeated once exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedHands {
    hands: Vec<Hand>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedHands {
    /// Create a script from a non-empty list of hands.
    ///
    /// # Panics
    ///
    /// Panics if `hands` is empty.
    #[must_use]
    pub fn new(hands: impl IntoIterator<Item = Hand>) -> Self {
        let hands: Vec<Hand> = hands.into_iter().collect();
        assert!(!hands.is_empty(), "Script needs at least one hand");
        Self {
            hands,
            cursor: 0,
            drawn: 0,
        }
    }

    /// How many hands have been drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl HandSource for ScriptedHands {
    fn next_hand(&mut self) -> Hand {
        let hand = self.hands[self.cursor];
        self.cursor = (self.cursor + 1) % self.hands.len();
        self.drawn += 1;
        hand
    }
}

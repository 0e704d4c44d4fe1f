//! Game controller and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, Participant};
use crate::options::GameOptions;

mod actions;
mod dealer;
mod play;
pub mod state;

pub use state::GameState;

/// A single game of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands. It can be driven step by step
/// ([`deal`](Self::deal), [`hit`](Self::hit), [`stand`](Self::stand),
/// [`dealer_play`](Self::dealer_play), [`outcome`](Self::outcome)) or run
/// end to end against a [`Table`](crate::Table) with [`play`](Self::play).
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    options: GameOptions,
    state: GameState,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        log::debug!("shuffled deck with seed {seed}");

        Self::from_deck(options, deck)
    }

    /// Creates a new game over the given deck, dealt as is.
    #[must_use]
    pub const fn from_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(Participant::Player),
            dealer: Hand::new(Participant::Dealer),
            options,
            state: GameState::Dealing,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score(self.options.scoring)
    }

    /// Returns the dealer's score.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score(self.options.scoring)
    }

    /// Returns the dealer card shown to the player, if dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.dealer.cards().get(self.options.up_card.index())
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("{:?} -> {state:?}", self.state);
        self.state = state;
    }
}

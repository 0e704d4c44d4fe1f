extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    /// Dealer draws one card if below the stand threshold.
    ///
    /// Returns `None` once the dealer stands, which also resolves the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_state(GameState::DealerTurn)?;

        if self.dealer_score() >= self.options.dealer_stands_on {
            self.set_state(GameState::Resolved);
            return Ok(None);
        }

        let card = self.deck.deal()?;
        self.dealer.draw_card(card);
        Ok(Some(card))
    }

    /// Dealer plays their hand, drawing until reaching the stand threshold
    /// (17 by default).
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_hit()? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Returns the outcome of a finished game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not resolved.
    pub fn outcome(&self) -> Result<Outcome, ActionError> {
        self.ensure_state(GameState::Resolved)?;
        Ok(Outcome::resolve(self.player_score(), self.dealer_score()))
    }
}

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

/// Cards dealt to each participant before play starts.
const INITIAL_CARDS: usize = 2;

impl Game {
    pub(super) fn ensure_state(&self, state: GameState) -> Result<(), ActionError> {
        if self.state == state {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the deck runs
    /// out.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::Dealing)?;

        for _ in 0..INITIAL_CARDS {
            self.player.draw_card(self.deck.deal()?);
            self.dealer.draw_card(self.deck.deal()?);
        }

        log::debug!(
            "dealt player {} ({}), dealer {}",
            self.player,
            self.player_score(),
            self.dealer
        );
        self.set_state(GameState::PlayerTurn);
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the game immediately; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;

        let card = self.deck.deal()?;
        self.player.draw_card(card);

        if self.player.is_bust(self.options.scoring) {
            self.set_state(GameState::Resolved);
        }

        Ok(card)
    }

    /// Player action: Stay (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;
        self.set_state(GameState::DealerTurn);
        Ok(())
    }
}

use crate::error::PlayError;
use crate::event::Event;
use crate::result::Outcome;
use crate::table::{MOVE_PROMPT, Move, Table};

use super::{Game, GameState};

impl Game {
    /// Plays the whole game against a table.
    ///
    /// Deals, shows the dealer's up card and the player's hand, asks for
    /// moves until the player stays or busts, plays the dealer's hand if the
    /// player is still in, and announces the outcome. Answers other than `h`
    /// and `s` are ignored and the player is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already started, the deck runs out,
    /// or the table fails to read or write.
    pub fn play<T: Table>(&mut self, table: &mut T) -> Result<Outcome, PlayError<T::Error>> {
        self.deal()?;

        if let Some(card) = self.up_card() {
            table
                .announce(&Event::DealerShows(card))
                .map_err(PlayError::Input)?;
        }
        table
            .announce(&Event::Cards {
                hand: &self.player,
                score: self.player_score(),
            })
            .map_err(PlayError::Input)?;

        while self.state == GameState::PlayerTurn {
            let answer = table.ask(MOVE_PROMPT).map_err(PlayError::Input)?;
            match Move::parse(&answer) {
                Some(Move::Hit) => {
                    self.hit()?;
                    table
                        .announce(&Event::Hit {
                            hand: &self.player,
                            score: self.player_score(),
                        })
                        .map_err(PlayError::Input)?;
                    if self.player.is_bust(self.options.scoring) {
                        table
                            .announce(&Event::Bust(self.player.owner()))
                            .map_err(PlayError::Input)?;
                    }
                }
                Some(Move::Stay) => self.stand()?,
                None => log::debug!("ignoring move {answer:?}"),
            }
        }

        if self.state == GameState::DealerTurn {
            table
                .announce(&Event::Cards {
                    hand: &self.dealer,
                    score: self.dealer_score(),
                })
                .map_err(PlayError::Input)?;

            while self.dealer_hit()?.is_some() {
                table
                    .announce(&Event::Hit {
                        hand: &self.dealer,
                        score: self.dealer_score(),
                    })
                    .map_err(PlayError::Input)?;
            }

            if self.dealer.is_bust(self.options.scoring) {
                table
                    .announce(&Event::Bust(self.dealer.owner()))
                    .map_err(PlayError::Input)?;
            }
        }

        let outcome = self.outcome()?;
        log::debug!(
            "player {} vs dealer {}: {outcome}",
            self.player_score(),
            self.dealer_score()
        );
        table
            .announce(&Event::Resolved(outcome))
            .map_err(PlayError::Input)?;

        Ok(outcome)
    }
}

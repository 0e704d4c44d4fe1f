//! Game outcome.

use core::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Decides the outcome from the final scores.
    ///
    /// A player bust loses before anything else is considered, so a dealer
    /// bust only counts when the player stood at 21 or under.
    ///
    /// ```
    /// use blackjack::Outcome;
    ///
    /// assert_eq!(Outcome::resolve(20, 18), Outcome::PlayerWins);
    /// assert_eq!(Outcome::resolve(22, 23), Outcome::DealerWins);
    /// assert_eq!(Outcome::resolve(19, 19), Outcome::Push);
    /// ```
    #[must_use]
    pub const fn resolve(player_score: u8, dealer_score: u8) -> Self {
        if player_score > 21 {
            Self::DealerWins
        } else if player_score > dealer_score || dealer_score > 21 {
            Self::PlayerWins
        } else if player_score < dealer_score {
            Self::DealerWins
        } else {
            Self::Push
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWins => f.write_str("Player wins"),
            Self::DealerWins => f.write_str("Dealer wins"),
            Self::Push => f.write_str("Player and Dealer push"),
        }
    }
}

//! Game configuration options.

/// How aces are counted when scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringRule {
    /// Aces count as 11, dropping to 1 one at a time while the hand is over 21.
    #[default]
    SoftAces,
    /// Aces count as 1. A hand over 21 still loses 10 per ace held, so a
    /// busting hand with aces can come back under 21.
    AcesAsOne,
}

impl ScoringRule {
    /// Returns the starting value of an ace under this rule.
    #[must_use]
    pub const fn ace_value(self) -> u8 {
        match self {
            Self::SoftAces => 11,
            Self::AcesAsOne => 1,
        }
    }
}

/// Which of the dealer's two initial cards is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpCard {
    /// Show the first card dealt to the dealer; the second is the hole card.
    First,
    /// Show the second card dealt to the dealer; the first is the hole card.
    #[default]
    Second,
}

impl UpCard {
    /// Returns the index of the shown card within the dealer's hand.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::{GameOptions, ScoringRule, UpCard};
///
/// let options = GameOptions::default()
///     .with_scoring(ScoringRule::AcesAsOne)
///     .with_up_card(UpCard::First)
///     .with_dealer_stands_on(18);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Ace scoring rule.
    pub scoring: ScoringRule,
    /// Dealer card revealed after the deal.
    pub up_card: UpCard,
    /// Dealer keeps drawing while below this score.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            scoring: ScoringRule::SoftAces,
            up_card: UpCard::Second,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the ace scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{GameOptions, ScoringRule};
    ///
    /// let options = GameOptions::default().with_scoring(ScoringRule::AcesAsOne);
    /// assert_eq!(options.scoring, ScoringRule::AcesAsOne);
    /// ```
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets which dealer card is revealed after the deal.
    #[must_use]
    pub const fn with_up_card(mut self, up_card: UpCard) -> Self {
        self.up_card = up_card;
        self
    }

    /// Sets the score at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }
}

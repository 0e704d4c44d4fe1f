//! Participant hands and scoring.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::options::ScoringRule;

/// Scores a run of cards.
///
/// Every ace starts at [`ScoringRule::ace_value`]; while the total is over
/// 21 and aces remain, one ace at a time gives back 10.
fn evaluate_cards(cards: &[Card], rule: ScoringRule) -> u8 {
    let mut value: u8 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
            value = value.saturating_add(rule.ace_value());
        } else {
            value = value.saturating_add(card.value());
        }
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Player,
    /// The scripted dealer.
    Dealer,
}

impl Participant {
    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cards held by one participant. Hands only grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Participant,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Participant) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn owner(&self) -> Participant {
        self.owner
    }

    /// Adds a card to the end of the hand.
    pub fn draw_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order drawn.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand under the given rule.
    ///
    /// ```
    /// use blackjack::{Card, Hand, Participant, Rank, ScoringRule, Suit};
    ///
    /// let mut hand = Hand::new(Participant::Player);
    /// hand.draw_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.draw_card(Card::new(Suit::Clubs, Rank::King));
    /// assert_eq!(hand.score(ScoringRule::SoftAces), 21);
    /// assert_eq!(hand.score(ScoringRule::AcesAsOne), 11);
    /// ```
    #[must_use]
    pub fn score(&self, rule: ScoringRule) -> u8 {
        evaluate_cards(&self.cards, rule)
    }

    /// Returns whether the hand scores over 21.
    #[must_use]
    pub fn is_bust(&self, rule: ScoringRule) -> bool {
        self.score(rule) > 21
    }

    /// Returns the cards as a comma-separated list.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

//! Game events shown to the player.

use core::fmt;

use crate::card::Card;
use crate::hand::{Hand, Participant};
use crate::result::Outcome;

/// Something the table announces while a game runs.
///
/// The [`Display`](fmt::Display) form of each event is the console line
/// printed for it, named after the hand's owner.
///
/// ```
/// use blackjack::{Card, Event, Hand, Participant, Rank, Suit};
///
/// let mut hand = Hand::new(Participant::Dealer);
/// hand.draw_card(Card::new(Suit::Hearts, Rank::Ten));
/// let event = Event::Hit { hand: &hand, score: 10 };
/// assert_eq!(event.to_string(), "Dealer hits: Ten of Hearts, Score: 10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The dealer's up card after the deal.
    DealerShows(&'a Card),
    /// A participant's whole hand is shown.
    Cards {
        /// The hand shown.
        hand: &'a Hand,
        /// Its score.
        score: u8,
    },
    /// A participant drew a card.
    Hit {
        /// The hand after the draw.
        hand: &'a Hand,
        /// Its score.
        score: u8,
    },
    /// A participant went over 21.
    Bust(Participant),
    /// The game is over.
    Resolved(Outcome),
}

const fn cards_label(owner: Participant) -> &'static str {
    match owner {
        Participant::Player => "cards",
        Participant::Dealer => "hand",
    }
}

const fn hit_verb(owner: Participant) -> &'static str {
    match owner {
        Participant::Player => "hit",
        Participant::Dealer => "hits",
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DealerShows(card) => write!(f, "{}'s card: {card}", Participant::Dealer),
            Self::Cards { hand, score } => {
                let owner = hand.owner();
                write!(f, "{owner}'s {}: {hand}, Score: {score}", cards_label(owner))
            }
            Self::Hit { hand, score } => {
                let owner = hand.owner();
                write!(f, "{owner} {}: {hand}, Score: {score}", hit_verb(owner))
            }
            Self::Bust(owner) => write!(f, "{owner} bust"),
            Self::Resolved(outcome) => write!(f, "{outcome}"),
        }
    }
}

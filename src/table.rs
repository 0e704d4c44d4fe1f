//! The seam between the game and whoever is playing it.

extern crate alloc;

use alloc::string::String;

use crate::event::Event;

/// Prompt shown before each player move.
pub const MOVE_PROMPT: &str = "Select to (h)it or (s)tay. ";

/// A player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl Move {
    /// Parses an answer to [`MOVE_PROMPT`].
    ///
    /// Only `h` and `s` are accepted, ignoring case and surrounding
    /// whitespace. Anything else yields `None`.
    ///
    /// ```
    /// use blackjack::Move;
    ///
    /// assert_eq!(Move::parse(" H "), Some(Move::Hit));
    /// assert_eq!(Move::parse("s"), Some(Move::Stay));
    /// assert_eq!(Move::parse("hit"), None);
    /// ```
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("h") {
            Some(Self::Hit)
        } else if answer.eq_ignore_ascii_case("s") {
            Some(Self::Stay)
        } else {
            None
        }
    }
}

/// Input and output for an interactive game.
///
/// The game asks the table for moves and tells it what happened; it never
/// touches a console directly.
pub trait Table {
    /// Error raised by the underlying I/O.
    type Error;

    /// Shows `prompt` and returns the answer, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read.
    fn ask(&mut self, prompt: &str) -> Result<String, Self::Error>;

    /// Shows an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be written.
    fn announce(&mut self, event: &Event<'_>) -> Result<(), Self::Error>;
}

//! Game state types.

/// Game phase.
///
/// A game moves strictly forward: `Dealing`, `PlayerTurn`, then
/// `DealerTurn` unless the player busts, then `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Game has ended and the outcome can be read.
    Resolved,
}

//! A single-player blackjack game with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one game from the deal to
//! the outcome: the player hits or stays against a dealer who draws to 17.
//! Moves come from a [`Table`], which also receives every [`Event`] to show.
//!
//! # Example
//!
//! ```no_run
//! use blackjack::{Game, GameOptions, Terminal};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let outcome = game.play(&mut Terminal::stdio())?;
//! println!("{outcome}");
//! # Ok::<(), blackjack::PlayError<std::io::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, EmptyDeckError, PlayError};
pub use event::Event;
pub use game::{Game, GameState};
pub use hand::{Hand, Participant};
pub use options::{GameOptions, ScoringRule, UpCard};
pub use result::Outcome;
pub use table::{MOVE_PROMPT, Move, Table};
#[cfg(feature = "std")]
pub use terminal::Terminal;

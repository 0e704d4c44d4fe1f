//! Blackjack CLI.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use blackjack::{Game, GameOptions, ScoringRule, Terminal, UpCard};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scoring {
    /// Aces count 11 unless that would bust the hand.
    Soft,
    /// Aces count 1.
    AcesAsOne,
}

impl From<Scoring> for ScoringRule {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::Soft => Self::SoftAces,
            Scoring::AcesAsOne => Self::AcesAsOne,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Reveal {
    /// Show the first card dealt to the dealer.
    First,
    /// Show the second card dealt to the dealer.
    Second,
}

impl From<Reveal> for UpCard {
    fn from(reveal: Reveal) -> Self {
        match reveal {
            Reveal::First => Self::First,
            Reveal::Second => Self::Second,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Play one hand of blackjack against the dealer.")]
struct Cli {
    /// Shuffle seed, defaults to the current time.
    #[clap(long, short)]
    seed: Option<u64>,
    /// How aces are scored.
    #[clap(long, value_enum, default_value_t = Scoring::Soft)]
    scoring: Scoring,
    /// Which dealer card is shown after the deal.
    #[clap(long, value_enum, default_value_t = Reveal::Second)]
    up_card: Reveal,
    /// Score at which the dealer stops drawing.
    #[clap(long, default_value_t = 17, value_parser = clap::value_parser!(u8).range(12..=21))]
    dealer_stands_on: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_scoring(cli.scoring.into())
        .with_up_card(cli.up_card.into())
        .with_dealer_stands_on(cli.dealer_stands_on);
    log::info!("starting game with seed {seed} and {options:?}");

    let mut game = Game::new(options, seed);
    game.play(&mut Terminal::stdio()).context("game aborted")?;

    Ok(())
}

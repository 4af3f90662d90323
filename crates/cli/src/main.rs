// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, compares two poker hands and prints the winner.
//!
//! ```bash
//! $ showdown --hand1 "TS JS QS KS AS" --hand2 "2D 2C 2H 2S 9C"
//! $ showdown --deal 7 --seed 42
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use showdown_eval::{Config, Deck, Hand, Resolver};

#[derive(Debug, Parser)]
struct Cli {
    /// The first hand cards, i.e. "TS JS QS KS AS".
    #[clap(long, requires = "hand2", conflicts_with = "deal")]
    hand1: Option<String>,
    /// The second hand cards.
    #[clap(long, requires = "hand1")]
    hand2: Option<String>,
    /// Deal two hands with the given number of cards from a shuffled deck.
    #[clap(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    deal: Option<u8>,
    /// The seed used to shuffle the deck.
    #[clap(long, requires = "deal")]
    seed: Option<u64>,
    /// Allow hands to share cards.
    #[clap(long)]
    shared_cards: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (hand1, hand2) = match (cli.hand1, cli.hand2, cli.deal) {
        (Some(h1), Some(h2), _) => (h1.parse::<Hand>()?, h2.parse::<Hand>()?),
        (_, _, Some(size)) => deal(size as usize, cli.seed)?,
        _ => bail!("Set both --hand1 and --hand2 or use --deal"),
    };

    let resolver = Resolver::new(Config {
        shared_cards: cli.shared_cards,
    });

    let victory = resolver.compare(&hand1, &hand2)?;
    println!("{}", describe("hand 1", &hand1));
    println!("{}", describe("hand 2", &hand2));
    println!("{victory}");

    Ok(())
}

/// Deals two hands from one shuffled deck.
fn deal(size: usize, seed: Option<u64>) -> Result<(Hand, Hand)> {
    let mut deck = match seed {
        Some(seed) => Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::new_and_shuffled(&mut rand::rng()),
    };

    info!("Dealing two {size} cards hands");
    let hand1 = Hand::new(deck.deal_many(size))?;
    let hand2 = Hand::new(deck.deal_many(size))?;
    Ok((hand1, hand2))
}

fn describe(name: &str, hand: &Hand) -> String {
    match hand.category() {
        Some(category) => format!("{name}: {hand} ({category})"),
        None => format!("{name}: empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["showdown", "--hand1", "AS KD", "--hand2", "2C 2D"]).unwrap();
        assert_eq!(cli.hand1.as_deref(), Some("AS KD"));
        assert_eq!(cli.hand2.as_deref(), Some("2C 2D"));
        assert!(!cli.shared_cards);

        let cli = Cli::try_parse_from(["showdown", "--deal", "7", "--seed", "42"]).unwrap();
        assert_eq!(cli.deal, Some(7));
        assert_eq!(cli.seed, Some(42));

        assert!(Cli::try_parse_from(["showdown", "--hand1", "AS KD"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "--deal", "8"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "--seed", "1"]).is_err());
    }

    #[test]
    fn seeded_deal() {
        let (h1, h2) = deal(7, Some(42)).unwrap();
        assert_eq!(h1.len(), 7);
        assert_eq!(h2.len(), 7);
        assert!(h1.cards().iter().all(|c| !h2.cards().contains(c)));

        let (r1, r2) = deal(7, Some(42)).unwrap();
        assert_eq!(h1, r1);
        assert_eq!(h2, r2);
    }

    #[test]
    fn describe_hand() {
        let hand = "KD KC 7H 7S 2C".parse::<Hand>().unwrap();
        assert_eq!(describe("hand 1", &hand), "hand 1: KC KD 7H 7S 2C (two pair)");
        assert_eq!(describe("hand 2", &Hand::default()), "hand 2: empty");
    }
}

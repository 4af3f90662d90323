// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! cards can also be parsed from their display form:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards, for example to deal two
//! 5-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let h1 = deck.deal_many(5);
//! let h2 = deck.deal_many(5);
//! assert_eq!(h1.len(), 5);
//! assert_eq!(h2.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Rank, Suit};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker two hands comparator.
//!
//! Compares two poker hands at showdown and returns a [Victory] that tells which
//! hand won, the [Category] that decided it, and the ranks (and suit for flushes)
//! that made the difference:
//!
//! ```
//! # use showdown_eval::*;
//! let h1 = "KD KC 7H 7S 2C".parse::<Hand>().unwrap();
//! let h2 = "KH KS 9D 9C 3H".parse::<Hand>().unwrap();
//! let victory = compare(&h1, &h2).unwrap();
//! assert_eq!(victory.winner(), Winner::Hand2);
//! assert_eq!(victory.category(), Category::TwoPair);
//! assert_eq!(victory.decider(), Decider::Ranks(Rank::King, Rank::Nine));
//! assert_eq!(victory.to_string(), "hand 2 wins with two pair K/9");
//! ```
//!
//! Hands are never changed by a comparison. Two hands dealt from one deck can
//! never share a four of a kind or three of a kind rank, such a comparison fails
//! with [Error::InvariantViolation] unless the [Resolver] is created with
//! [Config::shared_cards] set:
//!
//! ```
//! # use showdown_eval::*;
//! let h1 = "7D 7C 7H AS 2C".parse::<Hand>().unwrap();
//! let h2 = "7D 7C 7S KS 2D".parse::<Hand>().unwrap();
//! assert!(matches!(compare(&h1, &h2), Err(Error::InvariantViolation { .. })));
//!
//! let resolver = Resolver::new(Config { shared_cards: true });
//! let victory = resolver.compare(&h1, &h2).unwrap();
//! assert_eq!(victory.winner(), Winner::Hand1);
//! assert_eq!(victory.rank(), Some(Rank::Ace));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub mod error;
pub mod hand;
pub mod resolver;
pub mod victory;

pub use category::Category;
pub use error::{Error, Result};
pub use hand::{Detected, Hand};
pub use resolver::{Config, Resolver, compare, compare_on_highest_card};
pub use victory::{Decider, Victory, Winner};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};

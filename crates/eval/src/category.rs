// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category, a stronger category compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category, ranked by the highest card.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Returns all categories from the strongest to the weakest, the order in
    /// which two hands are checked at showdown.
    pub fn ranked() -> impl Iterator<Item = Category> {
        Self::categories().rev()
    }

    /// Checks if two disjoint hands dealt from one deck can never share this
    /// category rank.
    pub fn has_unique_rank(&self) -> bool {
        matches!(
            self,
            Category::FourOfAKind | Category::FullHouse | Category::ThreeOfAKind
        )
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

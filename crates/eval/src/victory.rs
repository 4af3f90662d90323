// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown verdict types.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Rank, Suit};

use crate::{Category, Detected};

/// The hand that won a showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The first hand wins.
    Hand1,
    /// The second hand wins.
    Hand2,
    /// Nobody wins.
    Tie,
}

impl Winner {
    /// The winner when the two hands are swapped.
    pub fn opponent(self) -> Winner {
        match self {
            Winner::Hand1 => Winner::Hand2,
            Winner::Hand2 => Winner::Hand1,
            Winner::Tie => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Hand1 => f.write_str("hand 1"),
            Winner::Hand2 => f.write_str("hand 2"),
            Winner::Tie => f.write_str("tie"),
        }
    }
}

/// The values that decided a showdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decider {
    /// Nothing decided, the hands tied.
    #[default]
    None,
    /// A single rank.
    Rank(Rank),
    /// A rank and the suit that made a flush or straight flush.
    Suited(Rank, Suit),
    /// The trip and pair ranks of a full house or the high and low ranks of
    /// two pair.
    Ranks(Rank, Rank),
}

impl fmt::Display for Decider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decider::None => Ok(()),
            Decider::Rank(rank) => write!(f, "{rank}"),
            Decider::Suited(rank, suit) => write!(f, "{rank}{suit}"),
            Decider::Ranks(first, second) => write!(f, "{first}/{second}"),
        }
    }
}

/// A showdown verdict.
///
/// Tells which hand won, the category that decided the showdown, and the
/// values within that category that made the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    winner: Winner,
    category: Category,
    decider: Decider,
}

impl Victory {
    /// Creates a new verdict.
    pub fn new(winner: Winner, category: Category, decider: Decider) -> Self {
        Self {
            winner,
            category,
            decider,
        }
    }

    /// A tie at the given category.
    pub fn tie(category: Category) -> Self {
        Self::new(Winner::Tie, category, Decider::None)
    }

    /// A win with the values of the winner detected category.
    pub fn with_detected(winner: Winner, detected: Detected) -> Self {
        let decider = match detected {
            Detected::StraightFlush(card) | Detected::Flush(card) => {
                Decider::Suited(card.rank(), card.suit())
            }
            Detected::FullHouse(first, second) | Detected::TwoPair(first, second) => {
                Decider::Ranks(first, second)
            }
            Detected::FourOfAKind(card)
            | Detected::Straight(card)
            | Detected::ThreeOfAKind(card)
            | Detected::OnePair(card)
            | Detected::HighCard(card) => Decider::Rank(card.rank()),
        };

        Self::new(winner, detected.category(), decider)
    }

    /// The winning hand.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Checks if the hands tied.
    pub fn is_tie(&self) -> bool {
        self.winner == Winner::Tie
    }

    /// The category that decided the showdown.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The deciding values.
    pub fn decider(&self) -> Decider {
        self.decider
    }

    /// The first deciding rank.
    pub fn rank(&self) -> Option<Rank> {
        match self.decider {
            Decider::None => None,
            Decider::Rank(rank) | Decider::Suited(rank, _) | Decider::Ranks(rank, _) => Some(rank),
        }
    }

    /// The second deciding rank for full house and two pair.
    pub fn secondary(&self) -> Option<Rank> {
        match self.decider {
            Decider::Ranks(_, rank) => Some(rank),
            _ => None,
        }
    }

    /// The deciding suit for flush and straight flush.
    pub fn suit(&self) -> Option<Suit> {
        match self.decider {
            Decider::Suited(_, suit) => Some(suit),
            _ => None,
        }
    }

    /// The same verdict with the two hands swapped.
    pub fn swapped(&self) -> Self {
        Self::new(self.winner.opponent(), self.category, self.decider)
    }
}

impl fmt::Display for Victory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Tie => write!(f, "tie on {}", self.category),
            winner => match self.decider {
                Decider::None => write!(f, "{winner} wins with {}", self.category),
                decider => write!(f, "{winner} wins with {} {decider}", self.category),
            },
        }
    }
}

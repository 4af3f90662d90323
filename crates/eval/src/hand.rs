// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand and category detection.
//!
//! A [Hand] is an immutable set of up to seven distinct cards with detectors
//! for each [Category]. Detectors never change the hand, the removal methods
//! used to break ties return a new hand.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use showdown_cards::{Card, Rank, Suit};

use crate::{Category, Error, Result};

/// Ace, five, four, trey, and deuce rank bits.
const WHEEL: u16 = 0b_1000000001111;

/// The cards and ranks that establish a category in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Detected {
    /// The highest card of the suited run.
    StraightFlush(Card),
    /// A card of the quad rank.
    FourOfAKind(Card),
    /// The trip rank and the pair rank.
    FullHouse(Rank, Rank),
    /// The highest card of the flush suit.
    Flush(Card),
    /// The highest card of the run.
    Straight(Card),
    /// A card of the trip rank.
    ThreeOfAKind(Card),
    /// The high pair rank and the low pair rank.
    TwoPair(Rank, Rank),
    /// A card of the pair rank.
    OnePair(Card),
    /// The highest card.
    HighCard(Card),
}

impl Detected {
    /// The detected category.
    pub fn category(&self) -> Category {
        match self {
            Detected::StraightFlush(_) => Category::StraightFlush,
            Detected::FourOfAKind(_) => Category::FourOfAKind,
            Detected::FullHouse(..) => Category::FullHouse,
            Detected::Flush(_) => Category::Flush,
            Detected::Straight(_) => Category::Straight,
            Detected::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Detected::TwoPair(..) => Category::TwoPair,
            Detected::OnePair(_) => Category::OnePair,
            Detected::HighCard(_) => Category::HighCard,
        }
    }

    /// The rank compared first.
    pub fn rank(&self) -> Rank {
        match self {
            Detected::FullHouse(rank, _) | Detected::TwoPair(rank, _) => *rank,
            Detected::StraightFlush(card)
            | Detected::FourOfAKind(card)
            | Detected::Flush(card)
            | Detected::Straight(card)
            | Detected::ThreeOfAKind(card)
            | Detected::OnePair(card)
            | Detected::HighCard(card) => card.rank(),
        }
    }

    /// The rank compared when the first ranks are equal, only for full house
    /// and two pair.
    pub fn secondary(&self) -> Option<Rank> {
        match self {
            Detected::FullHouse(_, rank) | Detected::TwoPair(_, rank) => Some(*rank),
            _ => None,
        }
    }

    /// The deciding card, if the category is established by a single card.
    pub fn card(&self) -> Option<Card> {
        match self {
            Detected::FullHouse(..) | Detected::TwoPair(..) => None,
            Detected::StraightFlush(card)
            | Detected::FourOfAKind(card)
            | Detected::Flush(card)
            | Detected::Straight(card)
            | Detected::ThreeOfAKind(card)
            | Detected::OnePair(card)
            | Detected::HighCard(card) => Some(*card),
        }
    }

    /// The suit that makes the category, only for straight flush and flush.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Detected::StraightFlush(card) | Detected::Flush(card) => Some(card.suit()),
            _ => None,
        }
    }
}

/// A poker hand.
///
/// The cards are kept sorted from the highest to the lowest rank. A hand
/// serializes to its list of cards and deserializes through [Hand::new].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates a hand, fails if there are duplicate cards or too many cards.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        if cards.len() > Self::MAX_CARDS {
            return Err(Error::InvalidArgument(format!(
                "a hand has at most {} cards, got {}",
                Self::MAX_CARDS,
                cards.len()
            )));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::InvalidArgument(format!("duplicate card {card}")));
        }

        cards.sort_by(|a, b| b.cmp_rank(a).then(b.suit_bits().cmp(&a.suit_bits())));
        Ok(Self { cards })
    }

    /// The hand cards from the highest to the lowest rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if no cards are left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the highest card, `None` if the hand is empty.
    pub fn highest_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the highest card of the given suit.
    pub fn highest_of_suit(&self, suit: Suit) -> Option<Card> {
        self.cards.iter().find(|c| c.suit() == suit).copied()
    }

    /// Returns the strongest category in this hand, `None` if the hand is empty.
    pub fn category(&self) -> Option<Category> {
        Category::ranked().find(|&c| self.detect(c).is_some())
    }

    /// Runs the detector for the given category.
    pub fn detect(&self, category: Category) -> Option<Detected> {
        match category {
            Category::StraightFlush => self.straight_flush().map(Detected::StraightFlush),
            Category::FourOfAKind => self.four_of_a_kind().map(Detected::FourOfAKind),
            Category::FullHouse => self
                .full_house()
                .map(|(trip, pair)| Detected::FullHouse(trip, pair)),
            Category::Flush => self.flush().map(Detected::Flush),
            Category::Straight => self.straight().map(Detected::Straight),
            Category::ThreeOfAKind => self.three_of_a_kind().map(Detected::ThreeOfAKind),
            Category::TwoPair => self
                .two_pair()
                .map(|(high, low)| Detected::TwoPair(high, low)),
            Category::OnePair => self.one_pair().map(Detected::OnePair),
            Category::HighCard => self.highest_card().map(Detected::HighCard),
        }
    }

    /// Returns the highest card of the best straight flush.
    pub fn straight_flush(&self) -> Option<Card> {
        Suit::suits()
            .filter_map(|suit| {
                let mask = self.suit_mask(suit);
                if mask.count_ones() < 5 {
                    return None;
                }

                straight_high(mask).map(|rank| Card::new(rank, suit))
            })
            .max_by(|a, b| a.cmp_rank(b))
    }

    /// Returns a card of the highest quad rank.
    pub fn four_of_a_kind(&self) -> Option<Card> {
        self.rank_of_n(4, None).and_then(|rank| self.first_of_rank(rank))
    }

    /// Returns the trip rank and the pair rank of the best full house.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let trip = self.rank_of_n(3, None)?;
        let pair = self.rank_of_n(2, Some(trip))?;
        Some((trip, pair))
    }

    /// Returns the highest card of the flush suit.
    pub fn flush(&self) -> Option<Card> {
        Suit::suits()
            .filter(|&suit| self.suit_mask(suit).count_ones() >= 5)
            .filter_map(|suit| self.highest_of_suit(suit))
            .max_by(|a, b| a.cmp_rank(b))
    }

    /// Returns the highest card of the best straight, a five for the wheel.
    pub fn straight(&self) -> Option<Card> {
        straight_high(self.rank_mask()).and_then(|rank| self.first_of_rank(rank))
    }

    /// Returns a card of the highest trip rank.
    pub fn three_of_a_kind(&self) -> Option<Card> {
        self.rank_of_n(3, None).and_then(|rank| self.first_of_rank(rank))
    }

    /// Returns the high and low rank of the best two pairs.
    pub fn two_pair(&self) -> Option<(Rank, Rank)> {
        let high = self.rank_of_n(2, None)?;
        let low = self.rank_of_n(2, Some(high))?;
        Some((high, low))
    }

    /// Returns a card of the highest pair rank.
    pub fn one_pair(&self) -> Option<Card> {
        self.rank_of_n(2, None).and_then(|rank| self.first_of_rank(rank))
    }

    /// Returns a new hand without the given card.
    pub fn without(&self, card: Card) -> Hand {
        let cards = self.cards.iter().filter(|&&c| c != card).copied().collect();
        Hand { cards }
    }

    /// Returns a new hand without the cards of the given rank.
    pub fn without_rank(&self, rank: Rank) -> Hand {
        let cards = self
            .cards
            .iter()
            .filter(|c| c.rank() != rank)
            .copied()
            .collect();
        Hand { cards }
    }

    /// Returns a new hand without the five cards of a straight with the given
    /// high rank, if `suit` is set the cards are taken from that suit.
    ///
    /// One card is removed for each rank of the run, missing ranks are skipped.
    pub fn without_run(&self, high: Rank, suit: Option<Suit>) -> Hand {
        let mut cards = self.cards.clone();
        for rank in run_ranks(high) {
            let pos = cards
                .iter()
                .position(|c| c.rank() == rank && suit.is_none_or(|s| c.suit() == s));
            if let Some(pos) = pos {
                cards.remove(pos);
            }
        }

        Hand { cards }
    }

    fn rank_mask(&self) -> u16 {
        self.cards.iter().fold(0, |mask, c| mask | c.rank_mask())
    }

    fn suit_mask(&self, suit: Suit) -> u16 {
        self.cards
            .iter()
            .filter(|c| c.suit() == suit)
            .fold(0, |mask, c| mask | c.rank_mask())
    }

    fn first_of_rank(&self, rank: Rank) -> Option<Card> {
        self.cards.iter().find(|c| c.rank() == rank).copied()
    }

    /// Highest rank with at least `n` cards, skipping the `skip` rank.
    fn rank_of_n(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::ranks()
            .rev()
            .filter(|&rank| Some(rank) != skip)
            .find(|&rank| self.cards.iter().filter(|c| c.rank() == rank).count() >= n)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses a hand from cards separated by spaces or commas, i.e. `"AS KD 9C"`.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Hand::new(cards)
    }
}

/// Returns the high rank of the highest straight in a rank mask.
fn straight_high(ranks: u16) -> Option<Rank> {
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    if bits > 0 {
        Rank::from_index(15 - bits.leading_zeros())
    } else if ranks & WHEEL == WHEEL {
        Some(Rank::Five)
    } else {
        None
    }
}

/// The five ranks of a straight with the given high rank.
fn run_ranks(high: Rank) -> Vec<Rank> {
    if high == Rank::Five {
        return vec![Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace];
    }

    let high = high as u32;
    (0..5)
        .filter_map(|n| high.checked_sub(n).and_then(Rank::from_index))
        .collect()
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card uses the rank, suit, and rank bit fields of the [Cactus Kev's][kevlink]
/// Poker hand evaluator encoding, the low byte is unused:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxxxxxxx|
///   +--------+--------+--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Two cards are equal only if both rank and suit match, use [Card::cmp_rank]
/// to order cards by rank. Cards serialize to their display form, i.e. `"AS"`.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self((rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.rank_bits() {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => unreachable!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the one-hot rank mask, deuce is bit 0 and ace bit 12.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Compares two cards by rank ignoring their suits.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a rank followed by a suit, i.e. `"AS"`, `"td"`,
    /// `"10H"`, or `"Q♦"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::Card(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::Card(s.to_string()));
        }

        Ok(Card::new(rank.parse()?, Suit::try_from(suit)?))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors returned when parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Unknown rank.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// Unknown suit.
    #[error("invalid suit '{0}'")]
    Suit(char),
    /// The text is not a card.
    #[error("invalid card '{0}'")]
    Card(String),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for the given bit index, deuce is 0 and ace is 12.
    pub fn from_index(index: u32) -> Option<Rank> {
        Rank::ranks().nth(index as usize)
    }

    /// The one-hot mask of this rank, the same as [Card::rank_mask].
    pub fn mask(&self) -> u16 {
        1 << (*self as u16)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no strength, the ordering is only used to sort cards for display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' | '♧' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' | '♢' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' | '♡' => Ok(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Ok(Suit::Spades),
            _ => Err(ParseCardError::Suit(c)),
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, or fewer if the deck runs out.
    pub fn deal_many(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

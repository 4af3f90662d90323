// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Category referees and the kicker fallback.
use log::trace;
use std::cmp::Ordering;

use super::Resolver;
use crate::{Category, Decider, Detected, Error, Hand, Result, Victory, Winner};

/// A category referee, breaks the tie of two hands that have the category
/// with the same first rank.
type Referee = fn(Hand, Hand, Detected, Detected) -> Victory;

impl Resolver {
    /// Decides a showdown on the given category, gets hand 1 detection and hand
    /// 2 detection if it has already been computed.
    pub(super) fn referee(
        &self,
        category: Category,
        hand1: Hand,
        hand2: Hand,
        first: Option<Detected>,
        second: Option<Detected>,
    ) -> Result<Victory> {
        let second = second.or_else(|| hand2.detect(category));
        let (d1, d2) = match (first, second) {
            (Some(d1), Some(d2)) => (d1, d2),
            (Some(d1), None) => return Ok(Victory::with_detected(Winner::Hand1, d1)),
            (None, Some(d2)) => return Ok(Victory::with_detected(Winner::Hand2, d2)),
            (None, None) => {
                return Ok(compare_on_highest_card(hand1, hand2, Category::HighCard));
            }
        };

        match d1.rank().cmp(&d2.rank()) {
            Ordering::Greater => return Ok(Victory::with_detected(Winner::Hand1, d1)),
            Ordering::Less => return Ok(Victory::with_detected(Winner::Hand2, d2)),
            Ordering::Equal => trace!("Tie on {category} {}", d1.rank()),
        }

        if category.has_unique_rank() && !self.config().shared_cards {
            return Err(Error::InvariantViolation {
                category,
                rank: d1.rank(),
            });
        }

        let referee: Referee = match category {
            Category::StraightFlush => on_straight_flush,
            Category::FourOfAKind => on_four_of_a_kind,
            Category::FullHouse => on_full_house,
            Category::Flush => on_flush,
            Category::Straight => on_straight,
            Category::ThreeOfAKind => on_three_of_a_kind,
            Category::TwoPair => on_two_pair,
            Category::OnePair => on_one_pair,
            Category::HighCard => on_high_card,
        };

        Ok(referee(hand1, hand2, d1, d2))
    }
}

fn on_straight_flush(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    let hand1 = hand1.without_run(d1.rank(), d1.suit());
    let hand2 = hand2.without_run(d2.rank(), d2.suit());
    compare_on_highest_card(hand1, hand2, Category::StraightFlush)
}

fn on_four_of_a_kind(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    compare_on_kickers(hand1, hand2, d1, d2)
}

fn on_full_house(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    compare_secondary(d1, d2).unwrap_or_else(|| compare_on_kickers(hand1, hand2, d1, d2))
}

/// Compares the flush cards of two hands from the highest, stops at the first
/// different rank or when a hand has no more cards of its flush suit.
fn on_flush(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    let next = |hand: &Hand, d: Detected| d.suit().and_then(|suit| hand.highest_of_suit(suit));

    let (mut hand1, mut hand2) = (hand1, hand2);
    while let (Some(card1), Some(card2)) = (next(&hand1, d1), next(&hand2, d2)) {
        match card1.cmp_rank(&card2) {
            Ordering::Greater => {
                return Victory::with_detected(Winner::Hand1, Detected::Flush(card1));
            }
            Ordering::Less => {
                return Victory::with_detected(Winner::Hand2, Detected::Flush(card2));
            }
            Ordering::Equal => {
                trace!("Flush cards tie {card1} {card2}");
                hand1 = hand1.without(card1);
                hand2 = hand2.without(card2);
            }
        }
    }

    Victory::tie(Category::Flush)
}

fn on_straight(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    let hand1 = hand1.without_run(d1.rank(), None);
    let hand2 = hand2.without_run(d2.rank(), None);
    compare_on_highest_card(hand1, hand2, Category::Straight)
}

fn on_three_of_a_kind(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    compare_on_kickers(hand1, hand2, d1, d2)
}

fn on_two_pair(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    compare_secondary(d1, d2).unwrap_or_else(|| compare_on_kickers(hand1, hand2, d1, d2))
}

fn on_one_pair(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    compare_on_kickers(hand1, hand2, d1, d2)
}

fn on_high_card(hand1: Hand, hand2: Hand, _d1: Detected, _d2: Detected) -> Victory {
    compare_on_highest_card(hand1, hand2, Category::HighCard)
}

/// Compares the second ranks of full house and two pair.
fn compare_secondary(d1: Detected, d2: Detected) -> Option<Victory> {
    match d1.secondary().cmp(&d2.secondary()) {
        Ordering::Greater => Some(Victory::with_detected(Winner::Hand1, d1)),
        Ordering::Less => Some(Victory::with_detected(Winner::Hand2, d2)),
        Ordering::Equal => None,
    }
}

/// Removes the detected ranks from both hands and compares what is left.
fn compare_on_kickers(hand1: Hand, hand2: Hand, d1: Detected, d2: Detected) -> Victory {
    let mut hand1 = hand1.without_rank(d1.rank());
    let mut hand2 = hand2.without_rank(d2.rank());
    if let Some(rank) = d1.secondary() {
        hand1 = hand1.without_rank(rank);
    }

    if let Some(rank) = d2.secondary() {
        hand2 = hand2.without_rank(rank);
    }

    compare_on_highest_card(hand1, hand2, d1.category())
}

/// Compares two hands on their highest cards.
///
/// Equal highest cards are removed from both hands until one hand has a
/// higher card, that hand wins on high card with that rank. If a hand runs out
/// of cards the result is a tie on the `tied` category, the category the two
/// hands were tied on before the kickers comparison.
///
/// Suits never break a tie and each step removes one card from each hand, so
/// the comparison ends after at most as many steps as the smaller hand cards.
pub fn compare_on_highest_card(hand1: Hand, hand2: Hand, tied: Category) -> Victory {
    let (mut hand1, mut hand2) = (hand1, hand2);
    while let (Some(card1), Some(card2)) = (hand1.highest_card(), hand2.highest_card()) {
        match card1.cmp_rank(&card2) {
            Ordering::Greater => {
                return Victory::new(Winner::Hand1, Category::HighCard, Decider::Rank(card1.rank()));
            }
            Ordering::Less => {
                return Victory::new(Winner::Hand2, Category::HighCard, Decider::Rank(card2.rank()));
            }
            Ordering::Equal => {
                trace!("Kickers tie {card1} {card2}");
                hand1 = hand1.without(card1);
                hand2 = hand2.without(card2);
            }
        }
    }

    Victory::tie(tied)
}

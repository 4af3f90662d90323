// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two hands showdown resolver.
//!
//! The [Resolver] checks both hands for each [Category] from the strongest to
//! the weakest and stops at the first category found in at least one hand, the
//! referee for that category then decides the winner. When both hands have the
//! same category and ranks the cards that made the category are removed and the
//! remaining cards are compared with [compare_on_highest_card].
//!
//! ```
//! # use showdown_eval::*;
//! let royal = "TS JS QS KS AS".parse::<Hand>().unwrap();
//! let quads = "2D 2C 2H 2S 9C".parse::<Hand>().unwrap();
//! let victory = compare(&royal, &quads).unwrap();
//! assert_eq!(victory.winner(), Winner::Hand1);
//! assert_eq!(victory.category(), Category::StraightFlush);
//! assert_eq!(victory.rank(), Some(Rank::Ace));
//! ```
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Category, Error, Hand, Result, Victory};

mod referee;
pub use referee::compare_on_highest_card;

/// Showdown rules config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hands may share cards, i.e. community cards or more than one deck.
    ///
    /// When set two hands with the same four of a kind, full house, or three of
    /// a kind rank are compared on the remaining cards, otherwise the
    /// comparison fails with [Error::InvariantViolation].
    pub shared_cards: bool,
}

/// Decides the winner of a two hands showdown.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: Config,
}

impl Resolver {
    /// Creates a resolver with the given rules.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The resolver rules.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compares two hands.
    ///
    /// Returns an [Error::InvalidArgument] if a hand has no cards, and an
    /// [Error::InvariantViolation] if both hands claim a rank they cannot share.
    /// The hands are not changed.
    pub fn compare(&self, hand1: &Hand, hand2: &Hand) -> Result<Victory> {
        if hand1.is_empty() || hand2.is_empty() {
            return Err(Error::InvalidArgument(
                "all hands must have cards".to_string(),
            ));
        }

        // High card always matches a non empty hand.
        let (category, first, second) = Category::ranked()
            .map(|category| {
                let first = hand1.detect(category);
                let second = match first {
                    Some(_) => None,
                    None => hand2.detect(category),
                };
                (category, first, second)
            })
            .find(|(_, first, second)| first.is_some() || second.is_some())
            .unwrap_or((Category::HighCard, None, None));

        debug!("Showdown [{hand1}] vs [{hand2}] on {category}");
        let victory = self.referee(category, hand1.clone(), hand2.clone(), first, second)?;
        debug!("Showdown [{hand1}] vs [{hand2}] {victory}");
        Ok(victory)
    }
}

/// Compares two hands with the default single deck rules.
pub fn compare(hand1: &Hand, hand2: &Hand) -> Result<Victory> {
    Resolver::default().compare(hand1, hand2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decider, Winner};
    use rand::{SeedableRng, rngs::StdRng};
    use showdown_cards::{Deck, Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn check(h1: &str, h2: &str) -> Victory {
        let (h1, h2) = (hand(h1), hand(h2));
        let victory = compare(&h1, &h2).unwrap();
        assert_eq!(compare(&h2, &h1).unwrap(), victory.swapped());
        victory
    }

    fn shared() -> Resolver {
        Resolver::new(Config { shared_cards: true })
    }

    #[test]
    fn straight_flush_beats_quads() {
        let v = check("TS JS QS KS AS", "2D 2C 2H 2S 9C");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::StraightFlush);
        assert_eq!(v.decider(), Decider::Suited(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn two_pair_second_pair_decides() {
        let v = check("KD KC 7H 7S 2C", "KH KS 9D 9C 3H");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::TwoPair);
        assert_eq!(v.decider(), Decider::Ranks(Rank::King, Rank::Nine));
    }

    #[test]
    fn same_ranks_high_card_tie() {
        let v = check("AS KD 9C 5H 2D", "AC KH 9D 5C 2S");
        assert_eq!(v, Victory::tie(Category::HighCard));
        assert_eq!(v.rank(), None);
    }

    #[test]
    fn straight_flushes() {
        let v = check("5H 6H 7H 8H 9H", "6C 7C 8C 9C TC");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.decider(), Decider::Suited(Rank::Ten, Suit::Clubs));

        let v = check("AH 2H 3H 4H 5H", "KS KD KC KH 2C");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.decider(), Decider::Suited(Rank::Five, Suit::Hearts));
    }

    #[test]
    fn full_houses() {
        let v = check("KD KC KH 7S 7C", "QD QC QH AS AC");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::FullHouse);
        assert_eq!(v.decider(), Decider::Ranks(Rank::King, Rank::Seven));

        let v = check("KD KC KH 7S 7C", "AS AD AC QH JH");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::FullHouse);
    }

    #[test]
    fn flushes() {
        let v = check("AH JH 9H 6H 3H", "AD JD 9D 6D 2D");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::Flush);
        assert_eq!(v.decider(), Decider::Suited(Rank::Trey, Suit::Hearts));

        let v = check("KH JH 9H 6H 3H", "AS KS QS JD TD");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.decider(), Decider::Suited(Rank::King, Suit::Hearts));

        // Once the flush cards are matched the other cards do not count.
        let v = check("AH JH 9H 6H 3H 2C 4C", "AD JD 9D 6D 3D KS QS");
        assert_eq!(v, Victory::tie(Category::Flush));

        // Hand 2 runs out of flush cards before hand 1.
        let v = check("AH JH 9H 6H 3H 2H", "AD JD 9D 6D 3D KS");
        assert_eq!(v, Victory::tie(Category::Flush));
        let v = check("AD JD 9D 6D 3D KS", "AH JH 9H 6H 3H 2H");
        assert_eq!(v, Victory::tie(Category::Flush));
    }

    #[test]
    fn straights() {
        let v = check("AC 2D 3H 4S 5C", "2C 3D 4H 5S 6C");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::Straight);
        assert_eq!(v.decider(), Decider::Rank(Rank::Six));

        let v = check("9C TD JH QS KC", "9D TH JS QC KD");
        assert_eq!(v, Victory::tie(Category::Straight));

        // Straight cards are removed before comparing kickers.
        let v = check("9C TD JH QS KC 2C 3D", "9D TH JS QC KD 2H 4S");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::HighCard);
        assert_eq!(v.decider(), Decider::Rank(Rank::Four));
    }

    #[test]
    fn three_of_a_kind() {
        let v = check("7D 7C 7H AS 2C", "8D 8C 8H 3S 2D");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::ThreeOfAKind);
        assert_eq!(v.decider(), Decider::Rank(Rank::Eight));
    }

    #[test]
    fn pairs() {
        let v = check("2D 2C 5H 7S 9C", "AS KD QC JH 9D");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::OnePair);
        assert_eq!(v.decider(), Decider::Rank(Rank::Deuce));

        // Same pair, decided by the kickers.
        let v = check("KD KC 9H 5S 2C", "KH KS 9D 4C 3H");
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.category(), Category::HighCard);
        assert_eq!(v.decider(), Decider::Rank(Rank::Five));

        // Same two pair, decided by the kicker.
        let v = check("KD KC 7H 7S 2C", "KH KS 7D 7C 3H");
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::HighCard);
        assert_eq!(v.decider(), Decider::Rank(Rank::Trey));

        let v = check("KD KC 7H 7S 2C", "KH KS 7D 7C 2H");
        assert_eq!(v, Victory::tie(Category::TwoPair));
    }

    #[test]
    fn same_hand_ties() {
        for (cards, category) in [
            ("AS KD 9C 5H 2D", Category::HighCard),
            ("AS AD 9C 5H 2D", Category::OnePair),
            ("AS AD 9C 9H 2D", Category::TwoPair),
            ("9C TD JH QS KC", Category::Straight),
            ("AH JH 9H 6H 3H", Category::Flush),
            ("9H TH JH QH KH", Category::StraightFlush),
        ] {
            let h = hand(cards);
            let v = compare(&h, &h.clone()).unwrap();
            assert_eq!(v, Victory::tie(category), "{cards}");
        }
    }

    #[test]
    fn impossible_ties() {
        let err = compare(&hand("2D 2C 2H 2S 9C"), &hand("2D 2C 2H 2S KC")).unwrap_err();
        assert_eq!(
            err,
            Error::InvariantViolation {
                category: Category::FourOfAKind,
                rank: Rank::Deuce
            }
        );

        // The trip rank is checked before the pair rank.
        let err = compare(&hand("KD KC KH 7S 7C"), &hand("KD KC KS 9S 9C")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvariantViolation {
                category: Category::FullHouse,
                ..
            }
        ));

        let err = compare(&hand("7D 7C 7H AS 2C"), &hand("7D 7C 7S KS 2D")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvariantViolation {
                category: Category::ThreeOfAKind,
                rank: Rank::Seven
            }
        ));
    }

    #[test]
    fn shared_cards_ties() {
        let resolver = shared();
        assert!(resolver.config().shared_cards);

        let v = resolver
            .compare(&hand("2D 2C 2H 2S 9C"), &hand("2D 2C 2H 2S KC"))
            .unwrap();
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::HighCard);
        assert_eq!(v.decider(), Decider::Rank(Rank::King));

        let v = resolver
            .compare(&hand("KD KC KH 7S 7C"), &hand("KD KC KS 9S 9C"))
            .unwrap();
        assert_eq!(v.winner(), Winner::Hand2);
        assert_eq!(v.category(), Category::FullHouse);
        assert_eq!(v.decider(), Decider::Ranks(Rank::King, Rank::Nine));

        let v = resolver
            .compare(&hand("7D 7C 7H AS 2C"), &hand("7D 7C 7S AH 2D"))
            .unwrap();
        assert_eq!(v, Victory::tie(Category::ThreeOfAKind));
    }

    #[test]
    fn empty_hands() {
        let h = hand("AS");
        assert!(matches!(
            compare(&Hand::default(), &h),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            compare(&h, &Hand::default()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserialized_hands() {
        let h1 = serde_json::from_str::<Hand>(r#"["2C","AS"]"#).unwrap();
        let v = compare(&h1, &hand("KD 3C")).unwrap();
        assert_eq!(v.winner(), Winner::Hand1);
        assert_eq!(v.decider(), Decider::Rank(Rank::Ace));

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<Victory>(&json).unwrap(), v);

        assert!(serde_json::from_str::<Hand>(r#"["AS","AS","AS","AS"]"#).is_err());
        assert!(serde_json::from_str::<Hand>("[0]").is_err());
    }

    #[test]
    fn hands_unchanged() {
        let h1 = hand("KD KC 9H 5S 2C");
        let h2 = hand("KH KS 9D 5C 2S");
        let (c1, c2) = (h1.clone(), h2.clone());
        assert!(compare(&h1, &h2).unwrap().is_tie());
        assert_eq!(h1, c1);
        assert_eq!(h2, c2);
    }

    #[test]
    fn random_hands_properties() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for size in [5, 7] {
            for _ in 0..2_000 {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let h1 = Hand::new(deck.deal_many(size)).unwrap();
                let h2 = Hand::new(deck.deal_many(size)).unwrap();

                let v = compare(&h1, &h2).unwrap();
                assert_eq!(compare(&h2, &h1).unwrap(), v.swapped(), "{h1} vs {h2}");

                let c1 = h1.category().unwrap();
                let c2 = h2.category().unwrap();
                if c1 > c2 {
                    assert_eq!(v.winner(), Winner::Hand1, "{h1} vs {h2}");
                    assert_eq!(v.category(), c1, "{h1} vs {h2}");
                } else if c1 < c2 {
                    assert_eq!(v.winner(), Winner::Hand2, "{h1} vs {h2}");
                    assert_eq!(v.category(), c2, "{h1} vs {h2}");
                } else if v.is_tie() {
                    assert_eq!(v.category(), c1, "{h1} vs {h2}");
                    assert_eq!(v.decider(), Decider::None, "{h1} vs {h2}");
                } else {
                    assert!(
                        v.category() == c1 || v.category() == Category::HighCard,
                        "{h1} vs {h2}"
                    );
                }
            }
        }
    }

    #[test]
    fn resolver_is_send_sync() {
        fn send_sync<T: Send + Sync>() {}
        send_sync::<Resolver>();
        send_sync::<Hand>();
        send_sync::<Victory>();
    }
}

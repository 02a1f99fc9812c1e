// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Classifies a 5 to 7 cards hand into a [HandRank] category plus a kicker
//! proxy, so that two hands compare with a plain `Ord` comparison.
use serde::{Deserialize, Serialize};
use std::fmt;

use riverodds_cards::Card;

use crate::error::{Error, Result};

/// Poker hand categories, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, the highest card plays.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in rank sequence.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The rank ordinals of the wheel straight, A-5-4-3-2.
const WHEEL: [usize; 5] = [12, 3, 2, 1, 0];

/// An evaluated hand.
///
/// Orders by [HandRank] first, then by a kicker proxy built from the five
/// highest rank ordinals in the hand, so showdown winners come straight
/// out of `max_by` over the players values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: u32,
}

impl HandValue {
    /// Scores a hand of 5 to 7 cards.
    ///
    /// The category comes from flush and straight flags and from the rank
    /// frequency profile computed over the whole card set, not from the
    /// best five card subset: with seven cards a straight and a flush made
    /// by disjoint subsets score as a straight flush, and kickers below
    /// the five highest ranks never break ties.
    ///
    /// Fails with [Error::InsufficientCards] for fewer than five cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue> {
        if cards.len() < 5 {
            return Err(Error::InsufficientCards(cards.len()));
        }

        let mut values = cards.iter().map(|c| c.rank() as usize).collect::<Vec<_>>();
        values.sort_unstable_by(|a, b| b.cmp(a));

        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let flush = suit_counts.iter().any(|&n| n >= 5);

        // Straights look only at the distinct ordinals, descending.
        let mut distinct = values.clone();
        distinct.dedup();
        let straight = distinct.windows(5).any(|w| w[0] - w[4] == 4)
            || WHEEL.iter().all(|r| distinct.contains(r));

        // Occurrence counts in descending order.
        let mut freqs = rank_counts.into_iter().filter(|&n| n > 0).collect::<Vec<_>>();
        freqs.sort_unstable_by(|a, b| b.cmp(a));
        let f0 = freqs[0];
        let f1 = freqs.get(1).copied().unwrap_or(0);

        // The five highest ordinals with multiplicity, base 13.
        let tiebreak = values
            .iter()
            .take(5)
            .fold(0u32, |acc, &v| acc * 13 + v as u32);

        let rank = if flush && straight {
            HandRank::StraightFlush
        } else if f0 == 4 {
            HandRank::FourOfAKind
        } else if f0 == 3 && f1 == 2 {
            HandRank::FullHouse
        } else if flush {
            HandRank::Flush
        } else if straight {
            HandRank::Straight
        } else if f0 == 3 {
            HandRank::ThreeOfAKind
        } else if f0 == 2 && f1 == 2 {
            HandRank::TwoPair
        } else if f0 == 2 {
            HandRank::OnePair
        } else {
            HandRank::HighCard
        };

        Ok(HandValue { rank, tiebreak })
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Returns the kicker proxy.
    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverodds_cards::{Rank, Suit};

    fn cards(codes: &str) -> Vec<Card> {
        codes
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    fn eval(codes: &str) -> HandValue {
        HandValue::eval(&cards(codes)).unwrap()
    }

    #[test]
    fn four_of_a_kind_ignores_the_fifth_card() {
        for fifth in ["2C", "7D", "KS", "AH"] {
            let hand = eval(&format!("9C 9D 9H 9S {fifth}"));
            assert_eq!(hand.rank(), HandRank::FourOfAKind);
        }
    }

    #[test]
    fn suited_straight_is_a_straight_flush() {
        let hand = eval("5H 6H 7H 8H 9H");
        assert_eq!(hand.rank(), HandRank::StraightFlush);

        // Mixed suits only make the straight.
        let hand = eval("5H 6S 7H 8H 9H");
        assert_eq!(hand.rank(), HandRank::Straight);
    }

    #[test]
    fn wheel_is_a_straight() {
        let hand = eval("AH 2C 3D 4S 5H");
        assert_eq!(hand.rank(), HandRank::Straight);

        let hand = eval("AH 2H 3H 4H 5H");
        assert_eq!(hand.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn categories() {
        assert_eq!(eval("AH KD 9C 5S 2H").rank(), HandRank::HighCard);
        assert_eq!(eval("AH AD 9C 5S 2H").rank(), HandRank::OnePair);
        assert_eq!(eval("AH AD 9C 9S 2H").rank(), HandRank::TwoPair);
        assert_eq!(eval("AH AD AC 9S 2H").rank(), HandRank::ThreeOfAKind);
        assert_eq!(eval("3H 4D 5C 6S 7H").rank(), HandRank::Straight);
        assert_eq!(eval("AH KH 9H 5H 2H").rank(), HandRank::Flush);
        assert_eq!(eval("AH AD AC 9S 9H").rank(), HandRank::FullHouse);
        assert_eq!(eval("AH AD AC AS 9H").rank(), HandRank::FourOfAKind);
        assert_eq!(eval("TH JH QH KH AH").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn seven_cards_hands() {
        let hand = eval("AH AD AC 9S 9H KD 2C");
        assert_eq!(hand.rank(), HandRank::FullHouse);

        // A flush outranks the trips hiding in the same seven cards.
        let hand = eval("AH KH 9H 5H 2H 2C 2D");
        assert_eq!(hand.rank(), HandRank::Flush);

        // A straight buried in seven cards.
        let hand = eval("3H 4D 5C 6S 7H KD AC");
        assert_eq!(hand.rank(), HandRank::Straight);

        let hand = eval("AH KD QC JS 9H 7C 2D");
        assert_eq!(hand.rank(), HandRank::HighCard);
    }

    #[test]
    fn six_cards_hands() {
        let hand = eval("AH AD 9C 9S 2H KD");
        assert_eq!(hand.rank(), HandRank::TwoPair);
    }

    #[test]
    fn too_few_cards() {
        let err = HandValue::eval(&cards("AH KD QC JS")).unwrap_err();
        assert_eq!(err, Error::InsufficientCards(4));

        let err = HandValue::eval(&[]).unwrap_err();
        assert_eq!(err, Error::InsufficientCards(0));
    }

    #[test]
    fn tiebreak_orders_same_category() {
        // Ace high beats king high.
        assert!(eval("AH KD 9C 5S 2H") > eval("KH QD 9C 5S 2D"));

        // Same top cards, better last kicker.
        assert!(eval("AH KD 9C 5S 3H") > eval("AD KC 9S 5H 2D"));

        // Pair of aces beats pair of kings.
        assert!(eval("AH AD 9C 5S 2H") > eval("KH KD 9C 5S 2D"));

        // Identical ranks in different suits tie.
        assert_eq!(eval("AH KD 9C 5S 2H"), eval("AS KC 9D 5H 2S"));

        // Within a category the order is the kicker proxy order.
        let better = eval("AH AD 9C 5S 2H");
        let worse = eval("KH KD 9C 5S 2D");
        assert_eq!(better.rank(), worse.rank());
        assert!(better.tiebreak() > worse.tiebreak());
    }

    #[test]
    fn category_beats_tiebreak() {
        // The lowest pair beats the highest no-pair hand.
        assert!(eval("2H 2D 3C 4S 5H") > eval("AH KD QC JS 9H"));

        // The lowest straight flush beats quad aces.
        assert!(eval("AH 2H 3H 4H 5H") > eval("AS AD AC KH KD"));
    }

    #[test]
    fn ordering_is_transitive() {
        let mut hands = vec![
            eval("AH KD 9C 5S 2H"),
            eval("2H 2D 3C 4S 5H"),
            eval("AH AD 9C 9S 2H"),
            eval("3H 4D 5C 6S 7H"),
            eval("AH KH 9H 5H 2H"),
            eval("AH AD AC 9S 9H"),
            eval("9C 9D 9H 9S AC"),
            eval("TH JH QH KH AH"),
        ];

        hands.sort();
        for pair in hands.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for hand in &hands {
            assert_eq!(hand.cmp(hand), std::cmp::Ordering::Equal);
        }
        assert_eq!(hands.last().unwrap().rank(), HandRank::StraightFlush);
    }

    #[test]
    fn rank_display() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::TwoPair.to_string(), "Two Pairs");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
    }

    #[test]
    fn eval_accepts_card_values() {
        let hand = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let value = HandValue::eval(&hand).unwrap();
        assert_eq!(value.rank(), HandRank::FourOfAKind);
    }
}
